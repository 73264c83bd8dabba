//! Provider-agnostic `OAuth2` types and helpers.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ProviderError, ProviderResult};

/// Tokens returned by an authorization code exchange.
///
/// Every field is optional: a provider that omits one yields `None`
/// rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    /// Access token for provider APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Refresh token, if offline access was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// OIDC ID token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    /// Token type, usually "bearer".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Scheme used in an `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Bearer <token>`
    Bearer,
    /// `Basic <credentials>`
    Basic,
}

impl AuthScheme {
    /// Returns the scheme as it appears in the header.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
            Self::Basic => "Basic",
        }
    }
}

/// Builds an `Authorization` header value.
#[must_use]
pub fn authorization_header(scheme: AuthScheme, token: &str) -> String {
    format!("{} {token}", scheme.as_str())
}

/// Joins default and configured scopes with spaces.
///
/// Scopes are concatenated in order; duplicates are kept.
#[must_use]
pub fn merge_scopes(defaults: &[&str], extra: &[String]) -> String {
    defaults
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses `base` and appends the query parameters in the given order.
///
/// # Errors
/// Returns `ProviderError::InvalidUrl` if `base` is not an absolute URL.
pub fn create_url<'a, I>(base: &str, params: I) -> ProviderResult<Url>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut url =
        Url::parse(base).map_err(|e| ProviderError::InvalidUrl(format!("{e}: {base}")))?;
    url.query_pairs_mut().extend_pairs(params);
    Ok(url)
}
