//! Provider identifiers and provider-agnostic user records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::auth::Auth0User;
use crate::error::ProviderError;

/// Identifier of a supported identity provider.
///
/// Used by the orchestration layer to dispatch calls and to key stored
/// provider accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Auth0 tenant.
    Auth0,
}

impl ProviderId {
    /// All known providers.
    pub const ALL: [Self; 1] = [Self::Auth0];

    /// Returns the provider id string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth0 => "auth0",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ProviderError::UnknownProvider(s.to_string()))
    }
}

/// A normalized user returned by any provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderUser {
    /// Auth0 user.
    Auth0(Auth0User),
}

impl ProviderUser {
    /// The provider this user came from.
    #[must_use]
    pub const fn provider_id(&self) -> ProviderId {
        match self {
            Self::Auth0(_) => ProviderId::Auth0,
        }
    }

    /// Provider-scoped user id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Auth0(user) => &user.id,
        }
    }
}

impl From<Auth0User> for ProviderUser {
    fn from(user: Auth0User) -> Self {
        Self::Auth0(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_provider_id_round_trip() {
        assert_eq!(ProviderId::Auth0.to_string(), "auth0");
        assert_eq!("auth0".parse::<ProviderId>().unwrap(), ProviderId::Auth0);
    }

    #[test]
    fn test_unknown_provider_id() {
        let err = "github".parse::<ProviderId>().unwrap_err();
        assert_eq!(err, ProviderError::UnknownProvider("github".to_string()));
    }

    #[test]
    fn test_provider_user_serializes_with_tag() {
        let user = ProviderUser::from(Auth0User {
            id: "12345".to_string(),
            nickname: Some("bob".to_string()),
            name: None,
            picture: None,
            updated_at: None,
        });
        assert_eq!(user.provider_id(), ProviderId::Auth0);
        assert_eq!(user.id(), "12345");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({"provider": "auth0", "id": "12345", "nickname": "bob"})
        );
    }
}
