//! Authentication ports.
//!
//! This module provides:
//! - The `OAuthProvider` trait implemented by each provider adapter
//! - A registry resolving adapters by provider id

mod provider;
mod registry;

pub use provider::OAuthProvider;
pub use registry::ProviderRegistry;
