//! Core types and token derivation for mail2hash
//!
//! This module contains the validated input types, the error taxonomy
//! and the hashing scheme that turns a Message-ID into a token.

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use error::{Mail2HashError, Result};
pub use hash::{compute_token, TokenGenerator};
pub use types::{AccessMode, MessageId, Pepper, Token, MODE_DELIMITER, TOKEN_LENGTH};
