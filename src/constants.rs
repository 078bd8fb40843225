//! # KHQR Tag Registry and Protocol Constants
//!
//! Central registry of the tags, fixed values, and per-field byte budgets
//! that define the KHQR wire format. These values must remain stable for
//! every scanner and switch that consumes a generated payload.
//!
//! Tags are two-ASCII-digit string constants. Keeping every tag hardcoded
//! here is what keeps `InvalidTag` unreachable from the assembly path: no
//! tag ever comes from caller input.

// ---------------------------------------------------------------------------
// Top-level tags, in payload order
// ---------------------------------------------------------------------------

/// Payload format indicator, always the first field of a payload.
pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";

/// Point of initiation method: static (reusable) vs dynamic (single-use).
pub const POINT_OF_INITIATION_METHOD: &str = "01";

/// UnionPay merchant account, present only when interoperability is needed.
pub const UNIONPAY_MERCHANT_ACCOUNT: &str = "15";

/// Identity template wrapping an individual Bakong account.
pub const INDIVIDUAL_ACCOUNT_INFORMATION: &str = "29";

/// Identity template wrapping a registered merchant account.
pub const MERCHANT_ACCOUNT_INFORMATION: &str = "30";

/// Merchant category code.
pub const MERCHANT_CATEGORY_CODE: &str = "52";

/// Transaction currency as an ISO 4217 numeric code.
pub const TRANSACTION_CURRENCY: &str = "53";

/// Transaction amount, present only on priced payloads.
pub const TRANSACTION_AMOUNT: &str = "54";

/// Country code.
pub const COUNTRY_CODE: &str = "58";

/// Merchant display name.
pub const MERCHANT_NAME: &str = "59";

/// Merchant city.
pub const MERCHANT_CITY: &str = "60";

/// Additional data template (bill number, mobile number, labels, purpose).
pub const ADDITIONAL_DATA: &str = "62";

/// Checksum field terminating every payload.
pub const CRC: &str = "63";

/// Alternate language template (language preference, localized name/city).
pub const MERCHANT_INFORMATION_LANGUAGE_TEMPLATE: &str = "64";

/// Creation timestamp template, dynamic payloads only.
pub const TIMESTAMP: &str = "99";

// ---------------------------------------------------------------------------
// Template sub-tags
// ---------------------------------------------------------------------------

/// Bakong account identifier inside either identity template.
pub const BAKONG_ACCOUNT_ID: &str = "00";

/// Extra account information inside the individual template.
pub const ACCOUNT_INFORMATION: &str = "01";

/// Merchant identifier inside the merchant template.
pub const MERCHANT_ID: &str = "01";

/// Acquiring bank inside either identity template.
pub const ACQUIRING_BANK: &str = "02";

/// Bill number inside the additional data template.
pub const BILL_NUMBER: &str = "01";

/// Mobile number inside the additional data template.
pub const MOBILE_NUMBER: &str = "02";

/// Store label inside the additional data template.
pub const STORE_LABEL: &str = "03";

/// Terminal label inside the additional data template.
pub const TERMINAL_LABEL: &str = "07";

/// Purpose of transaction inside the additional data template.
pub const PURPOSE_OF_TRANSACTION: &str = "08";

/// Language preference inside the alternate language template.
pub const LANGUAGE_PREFERENCE: &str = "00";

/// Localized merchant name inside the alternate language template.
pub const MERCHANT_NAME_ALTERNATE: &str = "01";

/// Localized merchant city inside the alternate language template.
pub const MERCHANT_CITY_ALTERNATE: &str = "02";

/// Creation instant in decimal milliseconds inside the timestamp template.
pub const CREATION_TIMESTAMP: &str = "00";

// ---------------------------------------------------------------------------
// Fixed values
// ---------------------------------------------------------------------------

/// Payload format version carried in tag "00".
pub const PAYLOAD_FORMAT_VALUE: &str = "01";

/// Point of initiation code for a reusable payload.
pub const POI_STATIC: &str = "11";

/// Point of initiation code for a single-use, timestamped payload.
pub const POI_DYNAMIC: &str = "12";

/// Merchant category code carried in tag "52".
pub const DEFAULT_MERCHANT_CATEGORY_CODE: &str = "5999";

/// Country code carried in tag "58".
pub const DEFAULT_COUNTRY_CODE: &str = "KH";

/// City used when the configuration leaves the merchant city blank.
pub const DEFAULT_MERCHANT_CITY: &str = "Phnom Penh";

/// Fixed length digits of the checksum field ("6304" + 4 hex digits).
pub const CRC_LENGTH: &str = "04";

// ---------------------------------------------------------------------------
// Byte budgets
//
// Free-text fields are truncated to these budgets before encoding, which is
// what keeps every field under the two-digit length ceiling.
// ---------------------------------------------------------------------------

/// Hard ceiling on any single TLV value (two-digit length encoding).
pub const MAX_VALUE_LENGTH: usize = 99;

/// Byte budget for the Bakong account identifier.
pub const MAX_BAKONG_ACCOUNT_LENGTH: usize = 32;

/// Byte budget for the merchant display name.
pub const MAX_MERCHANT_NAME_LENGTH: usize = 25;

/// Byte budget for the merchant city.
pub const MAX_MERCHANT_CITY_LENGTH: usize = 15;

/// Byte budget for the merchant identifier.
pub const MAX_MERCHANT_ID_LENGTH: usize = 32;

/// Byte budget for the acquiring bank name.
pub const MAX_ACQUIRING_BANK_LENGTH: usize = 32;

/// Byte budget for extra individual account information.
pub const MAX_ACCOUNT_INFORMATION_LENGTH: usize = 32;

/// Byte budget for the bill number.
pub const MAX_BILL_NUMBER_LENGTH: usize = 25;

/// Byte budget for the mobile number.
pub const MAX_MOBILE_NUMBER_LENGTH: usize = 25;

/// Byte budget for the store label.
pub const MAX_STORE_LABEL_LENGTH: usize = 25;

/// Byte budget for the terminal label.
pub const MAX_TERMINAL_LABEL_LENGTH: usize = 25;

/// Byte budget for the purpose of transaction.
pub const MAX_PURPOSE_LENGTH: usize = 25;

/// Byte budget for the UnionPay merchant account value.
pub const MAX_UNIONPAY_ACCOUNT_LENGTH: usize = 31;

/// Byte budget for the language preference code.
pub const MAX_LANGUAGE_PREFERENCE_LENGTH: usize = 2;

/// Byte budget for the localized merchant name.
pub const MAX_ALTERNATE_NAME_LENGTH: usize = 25;

/// Byte budget for the localized merchant city.
pub const MAX_ALTERNATE_CITY_LENGTH: usize = 15;
