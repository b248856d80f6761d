//! mail2hash - shareable links for mail messages
//!
//! mail2hash derives a short, non-reversible token from the `Message-ID` of a
//! mail so the mail can be linked to from the mail2web viewer without exposing
//! its identifier or where it is stored.
//!
//! # Token scheme
//!
//! - SHA-256 over the deployment's secret pepper, an optional access-mode
//!   label followed by `>`, and the normalized Message-ID
//! - URL-safe base64, truncated to 10 characters
//! - The default token forms the link path; an elevated access mode adds its
//!   own token as a `token<Mode>` query parameter
//!
//! # Example Usage
//!
//! ```rust
//! use mail2hash::{AccessMode, LinkBuilder, MessageId, Pepper, TokenGenerator};
//!
//! let generator = TokenGenerator::new(Pepper::new("s3cr3t")?);
//! let links = LinkBuilder::new("https://mails.example.com/", generator);
//!
//! let id = MessageId::parse("<20240101.AB12@example.com>")?;
//! let link = links.link(&id, Some(AccessMode::Full));
//! assert_eq!(
//!     link.url(),
//!     "https://mails.example.com/d5ZhT4qSk_?tokenFull=aHOTWD7h_i"
//! );
//! # Ok::<(), mail2hash::Mail2HashError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod link;
pub mod mail;

// Re-export commonly used types
pub use crate::core::{
    compute_token,
    error::{Mail2HashError, Result},
    types::{AccessMode, MessageId, Pepper, Token},
    TokenGenerator,
};

pub use config::Settings;

pub use link::{LinkBuilder, MailLink};

/// Current version of mail2hash
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
