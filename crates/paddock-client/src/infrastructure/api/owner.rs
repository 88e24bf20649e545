//! HTTP access service for owner records.

use async_trait::async_trait;
use tracing::debug;

use paddock_core::Owner;

use crate::application::{OwnerGateway, ServiceError};
use crate::infrastructure::api::{parse_json, transport};

/// [`OwnerGateway`] implementation against `{backend}/owners`.
pub struct HttpOwnerService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOwnerService {
    pub fn new(client: reqwest::Client, backend_url: &str) -> Self {
        Self {
            client,
            base_url: format!("{}/owners", backend_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl OwnerGateway for HttpOwnerService {
    async fn get_all(&self) -> Result<Vec<Owner>, ServiceError> {
        debug!(url = %self.base_url, "GET all owners");
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(transport)?;
        parse_json(response).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Owner, ServiceError> {
        let url = format!("{}/{id}", self.base_url);
        debug!(%url, "GET owner");
        let response = self.client.get(&url).send().await.map_err(transport)?;
        parse_json(response).await
    }

    async fn create(&self, owner: &Owner) -> Result<Owner, ServiceError> {
        debug!(url = %self.base_url, "POST owner");
        let response = self
            .client
            .post(&self.base_url)
            .json(owner)
            .send()
            .await
            .map_err(transport)?;
        parse_json(response).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
