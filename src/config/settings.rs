//! Layered configuration
//!
//! Values come from command-line flags and environment variables first, then
//! from an optional TOML file, then from built-in defaults.

use crate::core::error::{Mail2HashError, Result};
use crate::core::{Pepper, TokenGenerator};
use crate::link::LinkBuilder;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Secret key location used when nothing else is configured
pub const DEFAULT_SECRET_KEY_PATH: &str = "/var/lib/mail2web_secrets/secret_key";

/// Contents of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Where the web viewer is served
    pub site: SiteConfig,
    /// Where the pepper comes from
    pub secrets: SecretsConfig,
}

/// Web viewer location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Host name of the viewer, e.g. `mails.example.com`
    pub domain: Option<String>,
    /// Path prefix below the domain, empty or starting with `/`
    pub root_url: Option<String>,
}

/// Pepper sources
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// File holding the pepper
    pub secret_key_path: Option<PathBuf>,
    /// Inline pepper, takes precedence over `secret_key_path`
    pub pepper: Option<String>,
}

impl std::fmt::Debug for SecretsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsConfig")
            .field("secret_key_path", &self.secret_key_path)
            .field("pepper", &self.pepper.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ConfigFile {
    /// Load the configuration file.
    ///
    /// An explicitly given file must exist. Without one, the per-user default
    /// location is tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(Mail2HashError::configuration(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Mail2HashError::configuration(format!("Failed to parse config: {}", e))
        })
    }

    /// Default location of the configuration file
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "mail2web").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Values supplied on the command line or through the environment
#[derive(Clone, Default)]
pub struct Overrides {
    pub domain: Option<String>,
    pub root_url: Option<String>,
    pub secret_key_path: Option<PathBuf>,
    pub pepper: Option<String>,
}

/// Resolved settings, built once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    base_url: String,
    pepper: Pepper,
}

impl Settings {
    /// Merge overrides over the file and load the pepper
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self> {
        let domain = overrides
            .domain
            .or(file.site.domain)
            .ok_or(Mail2HashError::MissingDomain)?;
        let root_url = overrides.root_url.or(file.site.root_url).unwrap_or_default();
        let base_url = base_url(&domain, &root_url)?;

        let pepper = match overrides.pepper.or(file.secrets.pepper) {
            Some(inline) => {
                debug!("using inline pepper");
                Pepper::new(inline)?
            }
            None => {
                let path = overrides
                    .secret_key_path
                    .or(file.secrets.secret_key_path)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRET_KEY_PATH));
                read_pepper(&path)?
            }
        };

        Ok(Self { base_url, pepper })
    }

    /// Create settings from already validated parts
    pub fn new(base_url: impl Into<String>, pepper: Pepper) -> Self {
        Self {
            base_url: base_url.into(),
            pepper,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pepper(&self) -> &Pepper {
        &self.pepper
    }

    /// Link builder for these settings
    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder::new(self.base_url.clone(), TokenGenerator::new(self.pepper.clone()))
    }
}

/// Read and trim the pepper stored at `path`
pub fn read_pepper(path: &Path) -> Result<Pepper> {
    let contents = std::fs::read(path).map_err(|source| Mail2HashError::SecretKeyUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "read secret key");
    Pepper::from_file_contents(&contents)
}

/// Compose `https://<domain><root_url>/`
pub fn base_url(domain: &str, root_url: &str) -> Result<String> {
    let domain = domain.trim().trim_end_matches('/');
    if domain.is_empty() {
        return Err(Mail2HashError::MissingDomain);
    }
    if domain.contains("://") {
        return Err(Mail2HashError::configuration(format!(
            "Domain must be a host name without scheme, got: {}",
            domain
        )));
    }
    if !root_url.is_empty() && !root_url.starts_with('/') {
        return Err(Mail2HashError::InvalidRootUrl {
            root_url: root_url.to_string(),
        });
    }

    Ok(format!("https://{}{}/", domain, root_url.trim_end_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case("mails.example.com", "", "https://mails.example.com/")]
    #[case("mails.example.com", "/archive", "https://mails.example.com/archive/")]
    #[case("mails.example.com", "/archive/", "https://mails.example.com/archive/")]
    #[case("mails.example.com/", "/", "https://mails.example.com/")]
    fn test_base_url(#[case] domain: &str, #[case] root_url: &str, #[case] expected: &str) {
        assert_eq!(base_url(domain, root_url).unwrap(), expected);
    }

    #[test]
    fn test_base_url_rejections() {
        assert!(matches!(
            base_url("mails.example.com", "archive"),
            Err(Mail2HashError::InvalidRootUrl { .. })
        ));
        assert!(matches!(base_url("  ", ""), Err(Mail2HashError::MissingDomain)));
        assert!(matches!(
            base_url("https://mails.example.com", ""),
            Err(Mail2HashError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_parse_config_file() {
        let config = ConfigFile::from_toml(
            r#"
            [site]
            domain = "mails.example.com"
            root_url = "/archive"

            [secrets]
            secret_key_path = "/run/secrets/mail2web"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.domain.as_deref(), Some("mails.example.com"));
        assert_eq!(config.site.root_url.as_deref(), Some("/archive"));
        assert_eq!(
            config.secrets.secret_key_path,
            Some(PathBuf::from("/run/secrets/mail2web"))
        );
        assert!(config.secrets.pepper.is_none());
    }

    #[test]
    fn test_empty_config_file() {
        let config = ConfigFile::from_toml("").unwrap();
        assert!(config.site.domain.is_none());
        assert!(ConfigFile::from_toml("[site\n").is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert!(matches!(
            ConfigFile::load(Some(&missing)),
            Err(Mail2HashError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file = ConfigFile::from_toml(
            r#"
            [site]
            domain = "file.example.com"
            root_url = "/file"

            [secrets]
            pepper = "from-file"
            "#,
        )
        .unwrap();
        let overrides = Overrides {
            domain: Some("cli.example.com".to_string()),
            pepper: Some("from-cli".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(file, overrides).unwrap();
        assert_eq!(settings.base_url(), "https://cli.example.com/file/");
        assert_eq!(settings.pepper().as_bytes(), b"from-cli");
    }

    #[test]
    fn test_pepper_from_secret_key_file() -> anyhow::Result<()> {
        let mut key = NamedTempFile::new()?;
        writeln!(key, "s3cr3t")?;
        key.flush()?;

        let overrides = Overrides {
            domain: Some("mails.example.com".to_string()),
            secret_key_path: Some(key.path().to_path_buf()),
            ..Default::default()
        };
        let settings = Settings::resolve(ConfigFile::default(), overrides)?;
        assert_eq!(settings.pepper().as_bytes(), b"s3cr3t");
        Ok(())
    }

    #[test]
    fn test_missing_domain() {
        let overrides = Overrides {
            pepper: Some("s3cr3t".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(ConfigFile::default(), overrides),
            Err(Mail2HashError::MissingDomain)
        ));
    }

    #[test]
    fn test_unreadable_secret_key() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = Overrides {
            domain: Some("mails.example.com".to_string()),
            secret_key_path: Some(dir.path().join("secret_key")),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(ConfigFile::default(), overrides),
            Err(Mail2HashError::SecretKeyUnreadable { .. })
        ));
    }

    #[test]
    fn test_empty_inline_pepper_rejected() {
        let overrides = Overrides {
            domain: Some("mails.example.com".to_string()),
            pepper: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(ConfigFile::default(), overrides),
            Err(Mail2HashError::EmptyPepper)
        ));
    }

    #[test]
    fn test_secrets_debug_is_redacted() {
        let secrets = SecretsConfig {
            secret_key_path: None,
            pepper: Some("hunter2".to_string()),
        };
        assert!(!format!("{:?}", secrets).contains("hunter2"));
    }
}
