//! Core data types for mail2hash

use crate::core::error::{Mail2HashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator fed into the hash between an access-mode label and the message ID
pub const MODE_DELIMITER: &str = ">";

/// Number of characters kept from the encoded digest
pub const TOKEN_LENGTH: usize = 10;

/// Deployment secret mixed into every token.
///
/// The bytes are never printed: `Debug` only reveals the length.
#[derive(Clone, PartialEq, Eq)]
pub struct Pepper(Vec<u8>);

impl Pepper {
    /// Create a pepper from raw bytes, rejecting an empty secret
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Mail2HashError::EmptyPepper);
        }
        Ok(Pepper(bytes))
    }

    /// Create a pepper from the contents of a secret key file.
    ///
    /// Surrounding whitespace (as left behind by editors and `echo`) is trimmed.
    pub fn from_file_contents(contents: &[u8]) -> Result<Self> {
        let start = contents
            .iter()
            .position(|b| !is_secret_whitespace(*b))
            .unwrap_or(contents.len());
        let end = contents
            .iter()
            .rposition(|b| !is_secret_whitespace(*b))
            .map_or(start, |pos| pos + 1);
        Self::new(&contents[start..end])
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

fn is_secret_whitespace(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | b' ')
}

impl fmt::Debug for Pepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pepper(<{} bytes redacted>)", self.0.len())
    }
}

/// Normalized Message-ID of a mail.
///
/// Holding a `MessageId` guarantees the value has been normalized exactly once
/// and is not empty. It deliberately has no `Display` implementation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Normalize a raw header value and wrap it.
    ///
    /// Surrounding whitespace is trimmed first, then any leading or trailing
    /// `<` and `>` characters.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().trim_matches(|c| c == '<' || c == '>');
        if normalized.is_empty() {
            return Err(Mail2HashError::EmptyMessageId);
        }
        Ok(MessageId(normalized.to_string()))
    }

    /// Get the normalized identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MessageId(<redacted>)")
    }
}

impl FromStr for MessageId {
    type Err = Mail2HashError;

    fn from_str(s: &str) -> Result<Self> {
        MessageId::parse(s)
    }
}

/// Elevated access levels understood by the web viewer.
///
/// The default access level has no variant; it is represented by `None`
/// wherever an `Option<AccessMode>` is taken.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// The whole thread the mail belongs to
    Full,
    /// The mail and its direct replies
    Direct,
    /// The mail and everything it replies to
    Older,
}

impl AccessMode {
    /// All recognized access modes
    pub const ALL: [AccessMode; 3] = [AccessMode::Full, AccessMode::Direct, AccessMode::Older];

    /// Label salted into the hash
    pub fn label(self) -> &'static str {
        match self {
            AccessMode::Full => "full",
            AccessMode::Direct => "direct",
            AccessMode::Older => "older",
        }
    }

    /// Name of the query parameter carrying this mode's token.
    ///
    /// `"token"` followed by the label with its first letter upper-cased,
    /// e.g. `tokenFull`.
    pub fn query_parameter(self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => format!("token{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => "token".to_string(),
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccessMode {
    type Err = Mail2HashError;

    fn from_str(s: &str) -> Result<Self> {
        AccessMode::ALL
            .into_iter()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| Mail2HashError::UnknownAccessMode {
                label: s.to_string(),
                expected: AccessMode::ALL
                    .iter()
                    .map(|mode| mode.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Short URL-safe token derived from a message ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub(crate) fn from_encoded(encoded: String) -> Self {
        Token(encoded)
    }

    /// Get the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
