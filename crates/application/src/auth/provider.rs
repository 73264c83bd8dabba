//! Authentication provider trait.
//!
//! This module defines the interface an identity provider adapter
//! exposes to the `OAuth2` orchestration layer.

use async_trait::async_trait;
use portico_domain::{ProviderId, ProviderResult, ProviderUser, TokenSet};
use url::Url;

/// Trait for `OAuth2` authorization code providers.
///
/// The orchestration layer calls the operations in order for each login:
/// `authorization_url`, then (after the browser redirect) `tokens`, then
/// `provider_user`. Implementations hold only immutable configuration, so
/// one instance serves concurrent logins.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Identifier used for dispatch and for keying stored accounts.
    fn provider_id(&self) -> ProviderId;

    /// Build the URL the user is redirected to for authorization.
    ///
    /// # Arguments
    /// * `state` - Opaque anti-forgery token generated by the caller.
    ///
    /// # Errors
    /// Returns `ProviderError::InvalidUrl` if the configured endpoint is malformed.
    fn authorization_url(&self, state: &str) -> ProviderResult<Url>;

    /// Exchange an authorization code for tokens.
    ///
    /// # Arguments
    /// * `code` - Authorization code received on the redirect callback.
    ///
    /// # Errors
    /// Returns `ProviderError::Request` on a non-success status or an
    /// unreadable body.
    async fn tokens(&self, code: &str) -> ProviderResult<TokenSet>;

    /// Fetch and normalize the authenticated user.
    ///
    /// Returns the provider-scoped user id alongside the user so the
    /// caller can key storage without re-deriving it.
    ///
    /// # Errors
    /// Returns `ProviderError::Request` on a non-success status or an
    /// unreadable body.
    async fn provider_user(&self, access_token: &str) -> ProviderResult<(String, ProviderUser)>;
}
