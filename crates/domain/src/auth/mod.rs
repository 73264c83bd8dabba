//! Authentication domain types

mod auth0;
mod types;

pub use auth0::{Auth0Config, Auth0Profile, Auth0User, subject_id};
pub use types::{AuthScheme, TokenSet, authorization_header, create_url, merge_scopes};
