//! # KHQR Codec - Merchant-Presented QR Payload Protocol
//!
//! This crate implements the encoding, assembly, and verification rules
//! for KHQR payloads, the EMVCo merchant-presented QR profile used by
//! Cambodia's national payment switch. Configuration values flow through
//! byte-budget truncation into TLV fields, the fields assemble in a fixed
//! order with nested templates, and a CRC-16/CCITT-FALSE checksum field
//! terminates the payload.
//!
//! ```text
//! KhqrConfig → [truncate] → [tlv] → [message_builder] → payload string
//!                                          ↓
//!                                    [crc checksum]
//!
//! payload string → [validation::verify] → bool
//! payload string → [tlv::decode_tlv]    → tag → value map
//! ```
//!
//! The payload string itself is the external format: any EMVCo-compatible
//! scanner consumes it once rendered as a QR symbol. The crate contains no
//! transport, rendering, or account-registry concerns.
//!
//! ## Example
//!
//! ```
//! use khqr_codec::{assemble, verify, Currency, KhqrConfig};
//!
//! let config = KhqrConfig {
//!     bakong_account_id: "john_smith@devb".to_string(),
//!     merchant_name: "John Smith".to_string(),
//!     currency: Currency::Usd,
//!     amount: Some("1.00".to_string()),
//!     ..KhqrConfig::default()
//! };
//!
//! let generated = assemble(&config).unwrap();
//! assert!(verify(&generated.payload));
//! ```

pub mod config;
pub mod constants;
pub mod crc;
pub mod error;
pub mod message_builder;
pub mod tlv;
pub mod truncate;
pub mod validation;

pub use config::{
    AdditionalData, AlternateLanguage, Currency, KhqrConfig, MerchantInfo, MerchantType, QrType,
};
pub use crc::{checksum, checksum_hex};
pub use error::{KhqrError, KhqrResult};
pub use message_builder::{assemble, assemble_at, current_timestamp_ms, GeneratedQr};
pub use tlv::{decode_tlv, encode, encode_template};
pub use truncate::truncate_to_bytes;
pub use validation::verify;
