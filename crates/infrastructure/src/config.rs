//! Configuration loading.
//!
//! Settings come from an optional TOML file overlaid by environment
//! variables prefixed with `PORTICO`, using `__` as the nesting separator:
//!
//! ```toml
//! [auth0]
//! base_url = "https://tenant.eu.auth0.com"
//! redirect_uri = "https://app.example.com/callback"
//! client_id = "abc"
//! client_secret = "shh"
//! scope = ["email"]
//! ```
//!
//! `PORTICO_AUTH0__CLIENT_SECRET=...` overrides the file value, and
//! `PORTICO_AUTH0__SCOPE="email offline_access"` is split on whitespace.
//! Environment values are always taken as strings, so numeric-looking
//! client ids and secrets arrive unchanged.

use std::collections::HashMap;
use std::path::Path;

use ::config::{Config, Environment, File, FileFormat};
use portico_domain::Auth0Config;
use serde::Deserialize;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "PORTICO";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or the result could not be deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Auth0 tenant settings.
    pub auth0: Auth0Config,
}

/// Load configuration from `path` (if given) and the process environment.
///
/// # Errors
/// Returns `ConfigError::Load` if the file is missing or invalid, or if a
/// required setting is absent from every source.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env(path, None)
}

/// Load configuration using `env` in place of the process environment.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with_env(
    path: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "loading configuration file");
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .source(env);

    let config = builder.add_source(environment).build()?;
    Ok(config.try_deserialize()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const CONFIG_TOML: &str = r#"
[auth0]
base_url = "https://tenant.auth0.com"
redirect_uri = "https://app.example.com/callback"
client_id = "file-client"
client_secret = "file-secret"
scope = ["email"]
"#;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(CONFIG_TOML);
        let config = load_config_with_env(Some(file.path()), Some(HashMap::new())).unwrap();

        assert_eq!(
            config.auth0,
            Auth0Config::new(
                "https://tenant.auth0.com",
                "https://app.example.com/callback",
                "file-client",
                "file-secret",
            )
            .with_scope(["email"])
        );
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config(CONFIG_TOML);
        let env = HashMap::from([
            (
                "PORTICO_AUTH0__CLIENT_SECRET".to_string(),
                "env-secret".to_string(),
            ),
            (
                "PORTICO_AUTH0__SCOPE".to_string(),
                "email offline_access".to_string(),
            ),
        ]);
        let config = load_config_with_env(Some(file.path()), Some(env)).unwrap();

        assert_eq!(config.auth0.client_id, "file-client");
        assert_eq!(config.auth0.client_secret, "env-secret");
        assert_eq!(
            config.auth0.scope,
            vec!["email".to_string(), "offline_access".to_string()]
        );
    }

    #[test]
    fn test_env_only() {
        let env = HashMap::from([
            (
                "PORTICO_AUTH0__BASE_URL".to_string(),
                "https://tenant.auth0.com".to_string(),
            ),
            (
                "PORTICO_AUTH0__REDIRECT_URI".to_string(),
                "http://localhost:3000/callback".to_string(),
            ),
            ("PORTICO_AUTH0__CLIENT_ID".to_string(), "env-client".to_string()),
            (
                "PORTICO_AUTH0__CLIENT_SECRET".to_string(),
                "env-secret".to_string(),
            ),
        ]);
        let config = load_config_with_env(None, Some(env)).unwrap();

        assert_eq!(config.auth0.base_url, "https://tenant.auth0.com");
        assert_eq!(config.auth0.client_id, "env-client");
        assert!(config.auth0.scope.is_empty());
    }

    fn tenant_env() -> HashMap<String, String> {
        HashMap::from([
            (
                "PORTICO_AUTH0__BASE_URL".to_string(),
                "https://tenant.auth0.com".to_string(),
            ),
            (
                "PORTICO_AUTH0__REDIRECT_URI".to_string(),
                "http://localhost:3000/callback".to_string(),
            ),
        ])
    }

    #[test]
    fn test_env_numeric_credentials_stay_verbatim() {
        let mut env = tenant_env();
        env.insert("PORTICO_AUTH0__CLIENT_ID".to_string(), "007".to_string());
        env.insert("PORTICO_AUTH0__CLIENT_SECRET".to_string(), "1e3".to_string());
        let config = load_config_with_env(None, Some(env)).unwrap();

        assert_eq!(config.auth0.client_id, "007");
        assert_eq!(config.auth0.client_secret, "1e3");
    }

    #[test]
    fn test_env_bool_like_secret_stays_verbatim() {
        let mut env = tenant_env();
        env.insert("PORTICO_AUTH0__CLIENT_ID".to_string(), "TRUE".to_string());
        env.insert("PORTICO_AUTH0__CLIENT_SECRET".to_string(), "nan".to_string());
        let config = load_config_with_env(None, Some(env)).unwrap();

        assert_eq!(config.auth0.client_id, "TRUE");
        assert_eq!(config.auth0.client_secret, "nan");
    }

    #[test]
    fn test_env_scope_ignores_extra_whitespace() {
        let mut env = tenant_env();
        env.insert("PORTICO_AUTH0__CLIENT_ID".to_string(), "client".to_string());
        env.insert("PORTICO_AUTH0__CLIENT_SECRET".to_string(), "secret".to_string());
        env.insert("PORTICO_AUTH0__SCOPE".to_string(), "email  offline_access".to_string());
        let config = load_config_with_env(None, Some(env.clone())).unwrap();
        assert_eq!(
            config.auth0.scope,
            vec!["email".to_string(), "offline_access".to_string()]
        );

        env.insert("PORTICO_AUTH0__SCOPE".to_string(), String::new());
        let config = load_config_with_env(None, Some(env)).unwrap();
        assert!(config.auth0.scope.is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let env = HashMap::from([(
            "PORTICO_AUTH0__CLIENT_ID".to_string(),
            "env-client".to_string(),
        )]);
        let result = load_config_with_env(None, Some(env));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config_with_env(
            Some(Path::new("/nonexistent/portico.toml")),
            Some(HashMap::new()),
        );
        assert!(result.is_err());
    }
}
