//! Command execution.

use std::sync::Arc;

use portico_application::{OAuthProvider, ProviderRegistry};
use portico_infrastructure::{AppConfig, Auth0Provider};
use serde_json::{Value, json};

use crate::args::Commands;

/// Build the registry of every configured provider.
pub fn build_registry(config: AppConfig) -> ProviderRegistry {
    ProviderRegistry::new().with(Arc::new(Auth0Provider::new(config.auth0)))
}

/// Run one command against a provider and return its JSON output.
pub async fn execute(provider: &dyn OAuthProvider, command: Commands) -> anyhow::Result<Value> {
    let output = match command {
        Commands::AuthorizeUrl { state } => {
            let url = provider.authorization_url(&state)?;
            json!({ "url": url.as_str() })
        }
        Commands::Exchange { code } => {
            let tokens = provider.tokens(&code).await?;
            serde_json::to_value(tokens)?
        }
        Commands::Userinfo { access_token } => {
            let (id, user) = provider.provider_user(&access_token).await?;
            json!({ "id": id, "user": user })
        }
    };
    Ok(output)
}
