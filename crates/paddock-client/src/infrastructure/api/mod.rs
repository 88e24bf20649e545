//! HTTP access services for the registry API, backed by [`reqwest`].
//!
//! One service per resource type, each holding a shared `reqwest::Client`
//! and its fixed base resource path.  Every gateway call translates into
//! exactly one HTTP request; there is no retry, caching, or batching.
//!
//! Response mapping is shared here: 404 becomes
//! [`ServiceError::NotFound`], any other non-2xx status is drained for the
//! server's JSON error body (`{"message": ...}`, raw text fallback) and
//! becomes [`ServiceError::Rejected`], and everything that never produced
//! a usable response becomes [`ServiceError::Transport`].

mod horse;
mod owner;

pub use horse::HttpHorseService;
pub use owner::HttpOwnerService;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::application::ServiceError;

/// Error body shape the registry API uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Maps a request-level failure (connect, TLS, timeout) onto the gateway
/// error taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(err.to_string())
}

/// Maps a non-success response onto the gateway error taxonomy.
async fn into_service_error(response: reqwest::Response) -> ServiceError {
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return ServiceError::NotFound;
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    // Prefer the server's own message; fall back to the raw body text.
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|parsed| parsed.message)
        .unwrap_or(body);

    ServiceError::Rejected {
        status: status.as_u16(),
        message,
    }
}

/// Decodes a JSON response body, mapping non-success statuses and
/// undecodable bodies onto the gateway error taxonomy.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ServiceError> {
    if !response.status().is_success() {
        return Err(into_service_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ServiceError::Transport(err.to_string()))
}
