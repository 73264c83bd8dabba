//! Domain error types

use thiserror::Error;

/// A failed call to a provider endpoint.
///
/// Carries the HTTP status and the raw response body unchanged, whether the
/// status itself was unsuccessful or the body could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("request failed with status {status}: {body}")]
pub struct RequestError {
    /// HTTP status code returned by the provider.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl RequestError {
    /// Creates a new request error.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Errors surfaced by provider operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// A provider URL could not be built, usually a malformed base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The provider answered with an error status or an unreadable body.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Request parameters could not be encoded.
    #[error("encoding error: {message}")]
    Encoding {
        /// Error description.
        message: String,
    },

    /// The request never produced a response.
    #[error("network error: {message}")]
    Network {
        /// Error description.
        message: String,
    },

    /// No provider is registered under the given id.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

impl ProviderError {
    /// Returns the HTTP status if the provider answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request(err) => Some(err.status),
            _ => None,
        }
    }
}

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
