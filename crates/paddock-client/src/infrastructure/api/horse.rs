//! HTTP access service for horse records.

use async_trait::async_trait;
use tracing::debug;

use paddock_core::{Horse, HorseSearchParams};

use crate::application::{HorseGateway, ServiceError};
use crate::infrastructure::api::{parse_json, transport};

/// [`HorseGateway`] implementation against `{backend}/horses`.
pub struct HttpHorseService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHorseService {
    /// Creates the service for the given backend base URL, reusing an
    /// existing [`reqwest::Client`] so connections are pooled across
    /// services.
    pub fn new(client: reqwest::Client, backend_url: &str) -> Self {
        Self {
            client,
            base_url: format!("{}/horses", backend_url.trim_end_matches('/')),
        }
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }
}

#[async_trait]
impl HorseGateway for HttpHorseService {
    async fn get_all(&self) -> Result<Vec<Horse>, ServiceError> {
        debug!(url = %self.base_url, "GET all horses");
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(transport)?;
        parse_json(response).await
    }

    async fn create(&self, horse: &Horse) -> Result<Horse, ServiceError> {
        debug!(url = %self.base_url, name = %horse.name, "POST horse");
        let response = self
            .client
            .post(&self.base_url)
            .json(horse)
            .send()
            .await
            .map_err(transport)?;
        parse_json(response).await
    }

    async fn edit(&self, id: i64, horse: &Horse) -> Result<Horse, ServiceError> {
        let url = self.record_url(id);
        debug!(%url, "PUT horse");
        let response = self
            .client
            .put(&url)
            .json(horse)
            .send()
            .await
            .map_err(transport)?;
        parse_json(response).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Horse, ServiceError> {
        let url = self.record_url(id);
        debug!(%url, "GET horse");
        let response = self.client.get(&url).send().await.map_err(transport)?;
        parse_json(response).await
    }

    async fn delete(&self, id: i64) -> Result<Horse, ServiceError> {
        let url = self.record_url(id);
        debug!(%url, "DELETE horse");
        let response = self.client.delete(&url).send().await.map_err(transport)?;
        parse_json(response).await
    }

    async fn search(&self, params: &HorseSearchParams) -> Result<Vec<Horse>, ServiceError> {
        let query = params.to_query();
        debug!(url = %self.base_url, ?query, "GET horses by parameters");
        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(transport)?;
        parse_json(response).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
