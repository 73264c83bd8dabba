//! Portico Application - Provider ports
//!
//! Defines the capability set every identity provider adapter exposes
//! and the registry the orchestration layer dispatches through.

pub mod auth;

pub use auth::{OAuthProvider, ProviderRegistry};
