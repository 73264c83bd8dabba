//! Auth0 configuration and profile types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Configuration for an Auth0 tenant.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth0Config {
    /// Tenant endpoint, e.g. `https://tenant.eu.auth0.com`.
    pub base_url: String,
    /// Callback URL registered with the application.
    pub redirect_uri: String,
    /// Application client ID.
    pub client_id: String,
    /// Application client secret.
    pub client_secret: String,
    /// Scopes requested in addition to `openid profile`.
    ///
    /// Accepts a list or a single whitespace-separated string.
    #[serde(default, deserialize_with = "deserialize_scope")]
    pub scope: Vec<String>,
}

impl Auth0Config {
    /// Creates a configuration without extra scopes.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        redirect_uri: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            redirect_uri: redirect_uri.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: Vec::new(),
        }
    }

    /// Adds extra scopes to request.
    #[must_use]
    pub fn with_scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope.extend(scope.into_iter().map(Into::into));
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScopeList {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_scope<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ScopeList::deserialize(deserializer)? {
        ScopeList::List(scope) => scope,
        ScopeList::Joined(scope) => scope.split_whitespace().map(String::from).collect(),
    })
}

impl fmt::Debug for Auth0Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth0Config")
            .field("base_url", &self.base_url)
            .field("redirect_uri", &self.redirect_uri)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("scope", &self.scope)
            .finish()
    }
}

/// User profile as returned by the Auth0 `/userinfo` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Auth0Profile {
    /// Subject, prefixed with the connection name (`auth0|abc123`).
    pub sub: String,
    /// User nickname.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub picture: Option<String>,
    /// Last profile update, as sent by Auth0.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Normalized Auth0 user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth0User {
    /// Subject without its connection prefix.
    pub id: String,
    /// User nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Last profile update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Auth0Profile> for Auth0User {
    fn from(profile: Auth0Profile) -> Self {
        Self {
            id: subject_id(&profile.sub).to_string(),
            nickname: profile.nickname,
            name: profile.name,
            picture: profile.picture,
            updated_at: profile.updated_at,
        }
    }
}

/// Extracts the user id from an Auth0 subject.
///
/// Returns the segment after the first `|`. A subject without a delimiter
/// yields an empty id; it is not rejected.
#[must_use]
pub fn subject_id(sub: &str) -> &str {
    sub.split('|').nth(1).unwrap_or_default()
}
