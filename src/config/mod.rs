//! Configuration management for mail2hash
//!
//! Settings are read from `<config dir>/mail2web/config.toml`, overridden by
//! environment variables and command-line flags.

pub mod settings;

// Re-export commonly used items
pub use settings::{
    base_url, read_pepper, ConfigFile, Overrides, SecretsConfig, Settings, SiteConfig,
    DEFAULT_SECRET_KEY_PATH,
};
