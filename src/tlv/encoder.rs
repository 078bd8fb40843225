//! TLV field and template encoding.

use crate::constants::MAX_VALUE_LENGTH;
use crate::error::{KhqrError, KhqrResult};

/// Encode a single field as tag + zero-padded byte length + value.
///
/// The length is the value's UTF-8 byte length, which keeps multi-byte
/// text consistent between encoder and decoder.
pub fn encode(tag: &str, value: &str) -> KhqrResult<String> {
    if !is_valid_tag(tag) {
        return Err(KhqrError::InvalidTag {
            tag: tag.to_string(),
        });
    }

    let size = value.len();
    if size > MAX_VALUE_LENGTH {
        return Err(KhqrError::ValueTooLong {
            tag: tag.to_string(),
            size,
        });
    }

    Ok(format!("{}{:02}{}", tag, size, value))
}

/// Encode an ordered run of optional sub-fields and wrap the result under
/// `tag`.
///
/// Sub-fields that are absent or empty are skipped. When nothing remains
/// the template itself is omitted: `Ok(None)`, never an empty wrapper.
/// Every optional template in a payload goes through this single helper so
/// the omit rule cannot drift between templates.
pub fn encode_template(
    tag: &str,
    subfields: &[(&str, Option<&str>)],
) -> KhqrResult<Option<String>> {
    let mut content = String::new();
    for &(sub_tag, value) in subfields {
        match value {
            Some(v) if !v.is_empty() => content.push_str(&encode(sub_tag, v)?),
            _ => {}
        }
    }

    if content.is_empty() {
        return Ok(None);
    }
    encode(tag, &content).map(Some)
}

fn is_valid_tag(tag: &str) -> bool {
    tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit())
}
