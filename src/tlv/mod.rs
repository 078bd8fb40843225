//! TLV (Tag-Length-Value) Encoding and Decoding
//!
//! This module provides the core TLV functionality:
//! - Single-field encoding (two-digit tag + two-digit byte length + value)
//! - Template encoding for nested sub-fields with the omit-if-empty rule
//! - Lenient one-level decoding into a tag-to-value map
//!
//! The write side returns errors through `KhqrResult`; the read side never
//! errors and reports malformed input by stopping the scan.

pub mod encoder;
pub mod parser;

pub use encoder::{encode, encode_template};
pub use parser::decode_tlv;
