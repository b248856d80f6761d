//! Error types for mail2hash

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mail2hash operations
#[derive(Error, Debug)]
pub enum Mail2HashError {
    /// Input errors
    #[error("Pepper must not be empty")]
    EmptyPepper,

    #[error("Message-ID is empty after normalization")]
    EmptyMessageId,

    #[error("Invalid access mode label: {label:?} (labels must not contain '>')")]
    InvalidModeLabel { label: String },

    #[error("Unknown access mode: {label} (expected one of: {expected})")]
    UnknownAccessMode { label: String, expected: String },

    /// Resource errors
    #[error("Mail file not found: {path}")]
    MailNotFound { path: PathBuf },

    #[error("Mail file {path} could not be read: {source}")]
    MailUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Mail file {path} has no {header} header")]
    MissingHeader { path: PathBuf, header: String },

    #[error("Secret key {path} could not be read: {source}")]
    SecretKeyUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("No domain configured. Set --domain, MAIL2WEB_DOMAIN or site.domain in the config file")]
    MissingDomain,

    #[error("Root URL must be empty or start with a slash, got: {root_url}")]
    InvalidRootUrl { root_url: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Mail2HashError {
    /// Create a new invalid mode label error
    pub fn invalid_mode_label(label: impl Into<String>) -> Self {
        Self::InvalidModeLabel {
            label: label.into(),
        }
    }

    /// Create a new mail not found error
    pub fn mail_not_found(path: PathBuf) -> Self {
        Self::MailNotFound { path }
    }

    /// Create a new missing header error
    pub fn missing_header(path: PathBuf, header: impl Into<String>) -> Self {
        Self::MissingHeader {
            path,
            header: header.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Whether the caller supplied an unusable value
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPepper
                | Self::EmptyMessageId
                | Self::InvalidModeLabel { .. }
                | Self::UnknownAccessMode { .. }
        )
    }

    /// Whether a file the tool depends on was missing or unusable
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::MailNotFound { .. }
                | Self::MailUnreadable { .. }
                | Self::MissingHeader { .. }
                | Self::SecretKeyUnreadable { .. }
                | Self::Io(_)
        )
    }
}

/// Result type alias for mail2hash operations
pub type Result<T> = std::result::Result<T, Mail2HashError>;
