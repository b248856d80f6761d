//! Token derivation for mail2hash
//!
//! A token is `base64url(SHA-256(pepper || [mode || ">"] || message_id))`
//! truncated to [`TOKEN_LENGTH`] characters.

use crate::core::error::{Mail2HashError, Result};
use crate::core::types::{AccessMode, MessageId, Pepper, Token, MODE_DELIMITER, TOKEN_LENGTH};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Compute the token for a raw pepper, message ID and optional mode label.
///
/// The message ID is normalized here. An empty `mode` is the same as `None`.
pub fn compute_token(pepper: &[u8], message_id: &str, mode: Option<&str>) -> Result<Token> {
    let pepper = Pepper::new(pepper)?;
    let message_id = MessageId::parse(message_id)?;
    let mode = match mode {
        Some(label) if label.contains(MODE_DELIMITER) => {
            return Err(Mail2HashError::invalid_mode_label(label));
        }
        Some(label) if !label.is_empty() => Some(label),
        _ => None,
    };
    Ok(derive_token(&pepper, &message_id, mode))
}

fn derive_token(pepper: &Pepper, message_id: &MessageId, salt: Option<&str>) -> Token {
    let mut hasher = Sha256::new();
    hasher.update(pepper.as_bytes());
    if let Some(salt) = salt {
        hasher.update(salt.as_bytes());
        hasher.update(MODE_DELIMITER.as_bytes());
    }
    hasher.update(message_id.as_str().as_bytes());
    let digest = hasher.finalize();

    let mut encoded = URL_SAFE.encode(digest);
    encoded.truncate(TOKEN_LENGTH);
    Token::from_encoded(encoded)
}

/// Token generator bound to one deployment's pepper
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    pepper: Pepper,
}

impl TokenGenerator {
    /// Create a generator for the given pepper
    pub fn new(pepper: Pepper) -> Self {
        Self { pepper }
    }

    /// Token for `message_id` under `mode` (`None` is default access)
    pub fn token(&self, message_id: &MessageId, mode: Option<AccessMode>) -> Token {
        derive_token(&self.pepper, message_id, mode.map(AccessMode::label))
    }
}
