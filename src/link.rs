//! Web viewer link assembly

use crate::core::{AccessMode, MessageId, Token, TokenGenerator};
use serde::Serialize;
use std::fmt;

/// Link to one mail in the web viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailLink {
    /// Base URL the tokens are appended to
    pub base_url: String,
    /// Default-access token, the path component of the link
    pub token: Token,
    /// Elevated access mode and its token, carried as a query parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<ModeToken>,
}

/// Token granting a named access mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeToken {
    pub mode: AccessMode,
    pub parameter: String,
    pub token: Token,
}

impl MailLink {
    /// Render the full URL
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MailLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base_url, self.token)?;
        if let Some(access) = &self.access {
            write!(f, "?{}={}", access.parameter, access.token)?;
        }
        Ok(())
    }
}

/// Builds [`MailLink`]s for one base URL and pepper
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    generator: TokenGenerator,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>, generator: TokenGenerator) -> Self {
        Self {
            base_url: base_url.into(),
            generator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Link for `message_id`; a named mode adds its token as a query parameter
    pub fn link(&self, message_id: &MessageId, mode: Option<AccessMode>) -> MailLink {
        let token = self.generator.token(message_id, None);
        let access = mode.map(|mode| ModeToken {
            mode,
            parameter: mode.query_parameter(),
            token: self.generator.token(message_id, Some(mode)),
        });

        MailLink {
            base_url: self.base_url.clone(),
            token,
            access,
        }
    }
}
