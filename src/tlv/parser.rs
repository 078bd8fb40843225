//! Lenient top-level TLV scanning.

use std::collections::HashMap;

use tracing::debug;

/// Decode one nesting level of TLV fields into a tag-to-value map.
///
/// Scans left to right reading a two-digit tag, a two-digit length, and
/// that many bytes of value. Scanning stops at the first malformed tag or
/// length, or at a value shorter than its claimed length; fields already
/// read are returned and the remainder is discarded. This is a defined
/// truncation behavior, not an error.
///
/// Template values stay raw: apply the same function to a template's value
/// to unwrap one more level. A tag appearing twice keeps its later value.
pub fn decode_tlv(payload: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    let mut offset = 0;

    while offset < payload.len() {
        let tag = match payload.get(offset..offset + 2) {
            Some(tag) => tag,
            None => break,
        };
        let length_digits = match payload.get(offset + 2..offset + 4) {
            Some(digits) => digits,
            None => break,
        };
        if !is_two_digits(tag) || !is_two_digits(length_digits) {
            debug!(offset, "TLV scan stopped at malformed tag or length");
            break;
        }

        let digits = length_digits.as_bytes();
        let length = ((digits[0] - b'0') * 10 + (digits[1] - b'0')) as usize;

        let value_start = offset + 4;
        let value = match payload.get(value_start..value_start + length) {
            Some(value) => value,
            None => {
                debug!(offset, length, "TLV scan stopped at truncated value");
                break;
            }
        };

        fields.insert(tag.to_string(), value.to_string());
        offset = value_start + length;
    }

    fields
}

fn is_two_digits(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}
