//! Shared request helper for provider endpoints.
//!
//! Every provider call goes through [`handle_request`], which turns a
//! non-success status or an undecodable body into a `RequestError`
//! carrying the status and the raw body.

use portico_domain::{ProviderError, ProviderResult, RequestError};
use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Content-Type for form-urlencoded data.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode parameters as an `application/x-www-form-urlencoded` body.
///
/// # Errors
/// Returns `ProviderError::Encoding` if a value is not a flat scalar.
pub fn encode_form<T: Serialize + ?Sized>(params: &T) -> ProviderResult<String> {
    serde_urlencoded::to_string(params).map_err(|e| ProviderError::Encoding {
        message: format!("Failed to encode form: {e}"),
    })
}

/// Send a request and decode its JSON response body.
///
/// # Errors
/// - `ProviderError::Network` if no response was received.
/// - `ProviderError::Request` if the status is not 2xx or the body is not
///   valid JSON for `T`.
pub async fn handle_request<T: DeserializeOwned>(request: RequestBuilder) -> ProviderResult<T> {
    let response = request
        .send()
        .await
        .map_err(|e: reqwest::Error| ProviderError::Network {
            message: e.to_string(),
        })?;

    let status = response.status();
    let path = response.url().path().to_string();
    let body = response
        .text()
        .await
        .map_err(|e: reqwest::Error| ProviderError::Network {
            message: format!("Failed to read response body: {e}"),
        })?;

    if !status.is_success() {
        tracing::warn!(%path, status = status.as_u16(), "provider request failed");
        return Err(RequestError::new(status.as_u16(), body).into());
    }

    tracing::debug!(%path, status = status.as_u16(), "provider request succeeded");

    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(%path, error = %e, "provider response is not valid JSON");
            Err(RequestError::new(status.as_u16(), body).into())
        }
    }
}
