//! Immutable configuration types consumed by the payload assembler.
//!
//! A `KhqrConfig` is a snapshot: the assembler reads it, never mutates it,
//! and the same snapshot with the same instant always yields the same
//! payload. Field-presence rules that depend on the profile variant are
//! checked exhaustively at assembly time, not at construction time, so the
//! assembler can name the exact field that is missing.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MERCHANT_CITY, POI_DYNAMIC, POI_STATIC};
use crate::error::{KhqrError, KhqrResult};

/// Transaction currencies accepted by the national switch.
///
/// Discriminants are the ISO 4217 numeric codes carried in tag "53". This
/// is a closed two-member set; anything else is `InvalidCurrency`.
#[repr(u16)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum Currency {
    Khr = 116,
    Usd = 840,
}

impl Currency {
    /// Three-digit numeric code rendered into the currency field.
    pub fn numeric_code(&self) -> &'static str {
        match self {
            Currency::Khr => "116",
            Currency::Usd => "840",
        }
    }

    /// Convert a raw ISO 4217 numeric code.
    pub fn from_numeric(code: u16) -> KhqrResult<Self> {
        Self::try_from(code).map_err(|_| KhqrError::InvalidCurrency { code })
    }
}

/// Point of initiation method.
///
/// A static payload carries no expiry and may be scanned any number of
/// times; a dynamic payload is single-use and embeds its creation instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QrType {
    #[default]
    Static,
    Dynamic,
}

impl QrType {
    /// Code carried in the point of initiation field.
    pub fn poi_code(&self) -> &'static str {
        match self {
            QrType::Static => POI_STATIC,
            QrType::Dynamic => POI_DYNAMIC,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, QrType::Dynamic)
    }
}

/// Identity template variants.
///
/// The variant selects the wrapping tag ("29" individual, "30" merchant)
/// and which sub-fields assembly requires. The merchant variant's required
/// fields are still held as options so assembly can report exactly which
/// one is missing instead of failing opaquely at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MerchantInfo {
    Individual {
        account_information: Option<String>,
        acquiring_bank: Option<String>,
    },
    Merchant {
        merchant_id: Option<String>,
        acquiring_bank: Option<String>,
    },
}

impl MerchantInfo {
    /// The bare variant discriminant, carried in the assembly response.
    pub fn merchant_type(&self) -> MerchantType {
        match self {
            MerchantInfo::Individual { .. } => MerchantType::Individual,
            MerchantInfo::Merchant { .. } => MerchantType::Merchant,
        }
    }
}

impl Default for MerchantInfo {
    fn default() -> Self {
        MerchantInfo::Individual {
            account_information: None,
            acquiring_bank: None,
        }
    }
}

/// Profile variant without its payload, for response reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MerchantType {
    Individual,
    Merchant,
}

/// Optional sub-fields of the additional data template (tag "62").
///
/// The template is omitted from the payload entirely when every field here
/// is absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalData {
    pub bill_number: Option<String>,
    pub mobile_number: Option<String>,
    pub store_label: Option<String>,
    pub terminal_label: Option<String>,
    pub purpose_of_transaction: Option<String>,
}

impl AdditionalData {
    pub fn is_empty(&self) -> bool {
        [
            &self.bill_number,
            &self.mobile_number,
            &self.store_label,
            &self.terminal_label,
            &self.purpose_of_transaction,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, str::is_empty))
    }
}

/// Optional sub-fields of the alternate language template (tag "64").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateLanguage {
    pub language_preference: Option<String>,
    pub merchant_name_alternate: Option<String>,
    pub merchant_city_alternate: Option<String>,
}

impl AlternateLanguage {
    pub fn is_empty(&self) -> bool {
        [
            &self.language_preference,
            &self.merchant_name_alternate,
            &self.merchant_city_alternate,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, str::is_empty))
    }
}

/// Immutable input snapshot for one payload assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KhqrConfig {
    /// Bakong account identifier, always required.
    pub bakong_account_id: String,
    /// Merchant display name, always required.
    pub merchant_name: String,
    /// Merchant city; an empty value falls back to the default city.
    pub merchant_city: String,
    /// Profile variant with its variant-specific fields.
    pub merchant_info: MerchantInfo,
    pub currency: Currency,
    /// Transaction amount as decimal text, omitted when unpriced.
    pub amount: Option<String>,
    pub qr_type: QrType,
    /// UnionPay merchant account for interoperable payloads.
    pub upi_account_information: Option<String>,
    pub additional_data: AdditionalData,
    pub alternate_language: AlternateLanguage,
}

impl Default for KhqrConfig {
    fn default() -> Self {
        Self {
            bakong_account_id: String::new(),
            merchant_name: String::new(),
            merchant_city: DEFAULT_MERCHANT_CITY.to_string(),
            merchant_info: MerchantInfo::default(),
            currency: Currency::Khr,
            amount: None,
            qr_type: QrType::Static,
            upi_account_information: None,
            additional_data: AdditionalData::default(),
            alternate_language: AlternateLanguage::default(),
        }
    }
}
