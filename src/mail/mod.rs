//! Reading mail files
//!
//! Only the header block is of interest here: the `Message-ID` field is
//! located and normalized into a [`MessageId`].

pub mod header;

use crate::core::{Mail2HashError, MessageId, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub use header::{find_header, parse_headers, parse_message_id_value, HeaderField};

/// Name of the header field tokens are derived from
pub const MESSAGE_ID_HEADER: &str = "Message-ID";

/// Read the mail at `path` and return its normalized Message-ID
pub fn read_message_id(path: &Path) -> Result<MessageId> {
    let raw = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Mail2HashError::mail_not_found(path.to_path_buf()),
        _ => Mail2HashError::MailUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "read mail file");

    extract_message_id(&String::from_utf8_lossy(&raw))
        .map_err(|err| match err {
            Mail2HashError::MissingHeader { header, .. } => {
                Mail2HashError::missing_header(path.to_path_buf(), header)
            }
            other => other,
        })
}

/// Extract the normalized Message-ID from the text of a message.
///
/// A missing header is reported with an empty path; [`read_message_id`]
/// fills in the file name.
pub fn extract_message_id(message: &str) -> Result<MessageId> {
    let fields = parse_headers(message);
    let value = find_header(&fields, MESSAGE_ID_HEADER).ok_or_else(|| {
        Mail2HashError::missing_header(Default::default(), MESSAGE_ID_HEADER)
    })?;
    parse_message_id_value(value)
}
