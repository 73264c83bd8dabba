//! Portico Domain - Core types for OAuth provider adapters
//!
//! This crate contains provider configuration, token and profile types
//! and the pure helpers shared by every adapter. It has no I/O dependencies.

pub mod auth;
pub mod error;
pub mod provider;

pub use auth::{
    Auth0Config, Auth0Profile, Auth0User, AuthScheme, TokenSet, authorization_header, create_url,
    merge_scopes, subject_id,
};
pub use error::{ProviderError, ProviderResult, RequestError};
pub use provider::{ProviderId, ProviderUser};
