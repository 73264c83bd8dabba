//! Portico Infrastructure - Adapters and implementations
//!
//! This crate provides the concrete provider adapters implementing the
//! ports defined in the application layer, the shared request helper
//! they use, and configuration loading.

pub mod auth;
pub mod config;
pub mod http;

pub use auth::Auth0Provider;
pub use crate::config::{AppConfig, ConfigError, ENV_PREFIX, load_config, load_config_with_env};
pub use http::{FORM_CONTENT_TYPE, encode_form, handle_request};
