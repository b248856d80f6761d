//! Command-line interface for mail2hash

use crate::config::Overrides;
use crate::core::AccessMode;
use clap::Parser;
use std::path::PathBuf;

pub mod generate;

/// mail2hash - shareable web viewer links for mail messages
#[derive(Parser)]
#[command(
    name = "mail2hash",
    version,
    about = "Prints the mail2web viewer link for a mail file",
    long_about = "Derives a non-reversible token from the Message-ID of a mail file and prints \
                  the mail2web viewer link for it. With --mode, the link also carries the token \
                  granting that access mode."
)]
pub struct Cli {
    /// Path to the mail file
    pub mail: PathBuf,

    /// Elevated access mode to include in the link
    #[arg(short, long, value_enum)]
    pub mode: Option<AccessMode>,

    /// Host name of the web viewer
    #[arg(long, env = "MAIL2WEB_DOMAIN")]
    pub domain: Option<String>,

    /// Path prefix of the web viewer, empty or starting with '/'
    #[arg(long, env = "ROOT_URL")]
    pub root_url: Option<String>,

    /// File holding the secret pepper
    #[arg(long, env = "SECRET_KEY_PATH")]
    pub secret_key_path: Option<PathBuf>,

    /// Inline secret pepper
    #[arg(long, env = "MAIL2WEB_PEPPER", hide_env_values = true, hide = true)]
    pub pepper: Option<String>,

    /// Configuration file
    #[arg(long, env = "MAIL2HASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration values given on the command line or through the environment
    pub fn overrides(&self) -> Overrides {
        Overrides {
            domain: self.domain.clone(),
            root_url: self.root_url.clone(),
            secret_key_path: self.secret_key_path.clone(),
            pepper: self.pepper.clone(),
        }
    }
}
