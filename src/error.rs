//! Error taxonomy for payload construction.
//!
//! Only the write side (encoding and assembly) returns errors. The read
//! side (`decode_tlv`, `verify`) reports malformed input through partial
//! results or `false` so callers can distinguish "failed to parse" from
//! "structurally impossible to build".

use thiserror::Error;

/// Errors raised while encoding fields or assembling a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KhqrError {
    /// A field the active profile variant requires was absent or empty.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// A tag was not exactly two ASCII decimal digits.
    #[error("invalid TLV tag {tag:?}: expected exactly two decimal digits")]
    InvalidTag { tag: String },

    /// A value's UTF-8 byte length exceeded the two-digit length ceiling.
    #[error("value too long for tag {tag}: {size} bytes exceeds the 99-byte ceiling")]
    ValueTooLong { tag: String, size: usize },

    /// An amount was not a non-negative base-10 numeral.
    #[error("invalid amount {amount:?}: expected a non-negative decimal numeral")]
    InvalidAmount { amount: String },

    /// A numeric currency code outside the supported set.
    #[error("invalid currency code {code}: supported codes are 116 (KHR) and 840 (USD)")]
    InvalidCurrency { code: u16 },
}

/// Result type for payload construction operations.
pub type KhqrResult<T> = std::result::Result<T, KhqrError>;
