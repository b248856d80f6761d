//! RFC 5322 header block parsing

use crate::core::{MessageId, Result};

/// One unfolded header field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

/// Parse the header block of a message.
///
/// Parsing stops at the first empty line. Continuation lines are appended to
/// the preceding field. Lines that are neither a field nor a continuation,
/// such as an mbox `From ` separator, are skipped.
pub fn parse_headers(message: &str) -> Vec<HeaderField> {
    let mut fields: Vec<HeaderField> = Vec::new();

    for line in message.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            break;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(last) = fields.last_mut() {
                last.value.push_str(line);
            }
            continue;
        }

        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim_end();
            if name.is_empty() || name.contains(' ') {
                continue;
            }
            fields.push(HeaderField {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    fields
}

/// Value of the first field called `name`, compared case-insensitively
pub fn find_header<'a>(fields: &'a [HeaderField], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|field| field.name.eq_ignore_ascii_case(name))
        .map(|field| field.value.as_str())
}

/// Turn a `Message-ID` field value into a normalized [`MessageId`].
///
/// If the value contains an angle-bracketed identifier, the text inside the
/// first pair of brackets is used and any trailing comment is ignored.
pub fn parse_message_id_value(value: &str) -> Result<MessageId> {
    match value.split_once('<') {
        Some((_, rest)) => {
            let inner = rest.split('>').next().unwrap_or_default();
            MessageId::parse(inner)
        }
        None => MessageId::parse(value),
    }
}
