//! Auth0 authentication provider.
//!
//! Implements the `OAuth2` Authorization Code flow against an Auth0
//! tenant: authorization URL, code exchange and `/userinfo` lookup.

use async_trait::async_trait;
use portico_application::OAuthProvider;
use portico_domain::{
    Auth0Config, Auth0Profile, Auth0User, AuthScheme, ProviderError, ProviderId, ProviderResult,
    ProviderUser, TokenSet, authorization_header, create_url, merge_scopes,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use url::Url;

use crate::http::{FORM_CONTENT_TYPE, encode_form, handle_request};

/// Scopes always requested, ahead of any configured ones.
const DEFAULT_SCOPES: [&str; 2] = ["openid", "profile"];

/// Token response from the `/oauth/token` endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
}

impl From<TokenResponse> for TokenSet {
    fn from(response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            id_token: response.id_token,
            token_type: response.token_type,
        }
    }
}

/// Auth0 authentication provider.
///
/// Holds the tenant configuration and an HTTP client; both are only read,
/// so a single instance can serve concurrent logins.
#[derive(Debug, Clone)]
pub struct Auth0Provider {
    config: Auth0Config,
    http_client: reqwest::Client,
}

impl Auth0Provider {
    /// Create a new Auth0 provider with a default HTTP client.
    #[must_use]
    pub fn new(config: Auth0Config) -> Self {
        Self {
            config,
            http_client: reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create with a caller-supplied HTTP client (timeouts, proxies, TLS).
    #[must_use]
    pub const fn with_client(config: Auth0Config, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Resolve a tenant endpoint such as `/oauth/token`.
    fn endpoint(&self, path: &str) -> ProviderResult<Url> {
        let raw = format!("{}{path}", self.config.base_url);
        Url::parse(&raw).map_err(|e| ProviderError::InvalidUrl(format!("{e}: {raw}")))
    }

    /// Fetch the `/userinfo` profile and normalize it.
    ///
    /// # Errors
    /// Returns `ProviderError::Request` on a non-success status or a body
    /// that is not an Auth0 profile.
    pub async fn fetch_user(&self, access_token: &str) -> ProviderResult<(String, Auth0User)> {
        let url = self.endpoint("/userinfo")?;

        tracing::debug!(provider = %ProviderId::Auth0, "fetching user profile");

        let request = self.http_client.get(url).header(
            AUTHORIZATION,
            authorization_header(AuthScheme::Bearer, access_token),
        );
        let profile: Auth0Profile = handle_request(request).await?;

        let user = Auth0User::from(profile);
        Ok((user.id.clone(), user))
    }
}

#[async_trait]
impl OAuthProvider for Auth0Provider {
    fn provider_id(&self) -> ProviderId {
        ProviderId::Auth0
    }

    fn authorization_url(&self, state: &str) -> ProviderResult<Url> {
        let scope = merge_scopes(&DEFAULT_SCOPES, &self.config.scope);
        create_url(
            &format!("{}/authorize", self.config.base_url),
            [
                ("client_id", self.config.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("scope", scope.as_str()),
                ("state", state),
            ],
        )
    }

    async fn tokens(&self, code: &str) -> ProviderResult<TokenSet> {
        let url = self.endpoint("/oauth/token")?;
        let body = encode_form(&[
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ])?;

        tracing::debug!(provider = %ProviderId::Auth0, "exchanging authorization code");

        let request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);
        let response: TokenResponse = handle_request(request).await?;

        Ok(response.into())
    }

    async fn provider_user(&self, access_token: &str) -> ProviderResult<(String, ProviderUser)> {
        let (id, user) = self.fetch_user(access_token).await?;
        Ok((id, user.into()))
    }
}
