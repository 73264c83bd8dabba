//! CLI argument definitions using clap
//!
//! - portico authorize-url --state <STATE>
//! - portico exchange --code <CODE>
//! - portico userinfo --access-token <TOKEN>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "portico")]
#[command(about = "Drive the OAuth authorization code flow against an identity provider")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (environment variables override it)
    #[arg(long, short, env = "PORTICO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Provider to use
    #[arg(long, default_value = "auth0")]
    pub provider: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the URL to send the user to for authorization
    AuthorizeUrl {
        /// Anti-forgery state value to round-trip through the provider
        #[arg(long)]
        state: String,
    },

    /// Exchange an authorization code for tokens
    Exchange {
        /// Code received on the redirect callback
        #[arg(long)]
        code: String,
    },

    /// Fetch the normalized user for an access token
    Userinfo {
        /// Bearer access token
        #[arg(long)]
        access_token: String,
    },
}
