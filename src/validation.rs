//! Read-side payload verification.
//!
//! Verification operates on externally supplied payload strings and never
//! errors: anything that does not carry a well-formed, matching checksum
//! field is simply not a valid payload.

use tracing::warn;

use crate::constants::{CRC, CRC_LENGTH};
use crate::crc;

/// Verify the checksum field of a payload.
///
/// Locates the last occurrence of the checksum tag and length prefix
/// ("6304") rather than the first, because the same four characters can
/// appear inside earlier free-text values. The converse case, the prefix
/// landing inside the genuine checksum's own hex digits, is a known
/// limitation of the format and is not special-cased.
///
/// The four characters after the prefix are the claimed checksum; the
/// recomputed CRC-16 covers everything up to and including the prefix.
/// Comparison is case-insensitive. Returns false when no prefix exists or
/// fewer than four characters follow it.
pub fn verify(payload: &str) -> bool {
    let prefix = format!("{}{}", CRC, CRC_LENGTH);
    let start = match payload.rfind(&prefix) {
        Some(start) => start,
        None => return false,
    };

    let data_end = start + prefix.len();
    let claimed = match payload.get(data_end..data_end + 4) {
        Some(claimed) => claimed,
        None => return false,
    };

    let calculated = crc::checksum_hex(&payload[..data_end]);
    let matches = claimed.eq_ignore_ascii_case(&calculated);
    if !matches {
        warn!(%claimed, %calculated, "KHQR checksum mismatch");
    }
    matches
}
