//! Identity provider adapters.

mod auth0_provider;

pub use auth0_provider::Auth0Provider;
