//! UTF-8 aware truncation of free-text fields to their byte budgets.
//!
//! Field lengths on the wire count UTF-8 bytes while callers supply
//! arbitrary text (merchant names and cities are routinely Khmer script),
//! so truncation must never split a multi-byte character.

/// Longest prefix of `value` whose UTF-8 byte length stays within
/// `max_bytes`, extended one whole code point at a time.
///
/// Returns `value` unchanged when it already fits. Never panics; if even
/// the first character exceeds the budget the result is empty. Idempotent
/// for any fixed budget.
pub fn truncate_to_bytes(value: &str, max_bytes: usize) -> &str {
    if value.len() <= max_bytes {
        return value;
    }

    let mut end = 0;
    for (idx, ch) in value.char_indices() {
        let next = idx + ch.len_utf8();
        if next > max_bytes {
            break;
        }
        end = next;
    }
    &value[..end]
}
