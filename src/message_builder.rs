//! # KHQR Payload Assembly
//!
//! Builds the final payload string from an immutable `KhqrConfig`
//! snapshot: checks the variant-specific preconditions, orders the
//! top-level fields, wraps the nested templates, formats the amount for
//! its currency, and appends the CRC-16 checksum field.
//!
//! ```text
//! KhqrConfig → truncate → encode → ordered fields → "6304" + CRC → payload
//! ```
//!
//! Construction is pure apart from the wall-clock read in dynamic mode;
//! `assemble_at` takes the instant instead so callers can reproduce a
//! payload byte for byte.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Currency, KhqrConfig, MerchantInfo, MerchantType, QrType};
use crate::constants::*;
use crate::crc;
use crate::error::{KhqrError, KhqrResult};
use crate::tlv::{encode, encode_template};
use crate::truncate::truncate_to_bytes;

/// Result of a successful assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQr {
    /// The final payload string, ready for QR rendering.
    pub payload: String,
    /// Creation instant in decimal milliseconds; dynamic payloads only.
    pub timestamp: Option<String>,
    /// Which identity variant the payload carries.
    pub merchant_type: MerchantType,
    /// Lowercase hex MD5 digest of `payload`.
    pub fingerprint: String,
}

/// Assemble a payload, reading the system clock in dynamic mode.
pub fn assemble(config: &KhqrConfig) -> KhqrResult<GeneratedQr> {
    assemble_at(config, current_timestamp_ms())
}

/// Assemble a payload with an injected creation instant.
///
/// Static mode ignores the instant entirely, so a static config always
/// yields the same payload; dynamic mode embeds it in the timestamp
/// template and echoes it in the response.
pub fn assemble_at(config: &KhqrConfig, timestamp_ms: u64) -> KhqrResult<GeneratedQr> {
    require(&config.bakong_account_id, "bakong_account_id")?;
    require(&config.merchant_name, "merchant_name")?;

    let mut payload = String::new();
    payload.push_str(&encode(PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT_VALUE)?);
    payload.push_str(&encode(POINT_OF_INITIATION_METHOD, config.qr_type.poi_code())?);

    if let Some(upi) = non_empty(config.upi_account_information.as_deref()) {
        payload.push_str(&encode(
            UNIONPAY_MERCHANT_ACCOUNT,
            truncate_to_bytes(upi, MAX_UNIONPAY_ACCOUNT_LENGTH),
        )?);
    }

    payload.push_str(&encode_identity(config)?);
    payload.push_str(&encode(MERCHANT_CATEGORY_CODE, DEFAULT_MERCHANT_CATEGORY_CODE)?);
    payload.push_str(&encode(TRANSACTION_CURRENCY, config.currency.numeric_code())?);

    if let Some(amount) = non_empty(config.amount.as_deref()) {
        payload.push_str(&encode(
            TRANSACTION_AMOUNT,
            &format_amount(amount, config.currency)?,
        )?);
    }

    payload.push_str(&encode(COUNTRY_CODE, DEFAULT_COUNTRY_CODE)?);
    payload.push_str(&encode(
        MERCHANT_NAME,
        truncate_to_bytes(&config.merchant_name, MAX_MERCHANT_NAME_LENGTH),
    )?);

    let city = if config.merchant_city.is_empty() {
        DEFAULT_MERCHANT_CITY
    } else {
        config.merchant_city.as_str()
    };
    payload.push_str(&encode(
        MERCHANT_CITY,
        truncate_to_bytes(city, MAX_MERCHANT_CITY_LENGTH),
    )?);

    let additional = &config.additional_data;
    if let Some(template) = encode_template(
        ADDITIONAL_DATA,
        &[
            (
                BILL_NUMBER,
                truncated(additional.bill_number.as_deref(), MAX_BILL_NUMBER_LENGTH),
            ),
            (
                MOBILE_NUMBER,
                truncated(additional.mobile_number.as_deref(), MAX_MOBILE_NUMBER_LENGTH),
            ),
            (
                STORE_LABEL,
                truncated(additional.store_label.as_deref(), MAX_STORE_LABEL_LENGTH),
            ),
            (
                TERMINAL_LABEL,
                truncated(additional.terminal_label.as_deref(), MAX_TERMINAL_LABEL_LENGTH),
            ),
            (
                PURPOSE_OF_TRANSACTION,
                truncated(
                    additional.purpose_of_transaction.as_deref(),
                    MAX_PURPOSE_LENGTH,
                ),
            ),
        ],
    )? {
        payload.push_str(&template);
    }

    let language = &config.alternate_language;
    if let Some(template) = encode_template(
        MERCHANT_INFORMATION_LANGUAGE_TEMPLATE,
        &[
            (
                LANGUAGE_PREFERENCE,
                truncated(
                    language.language_preference.as_deref(),
                    MAX_LANGUAGE_PREFERENCE_LENGTH,
                ),
            ),
            (
                MERCHANT_NAME_ALTERNATE,
                truncated(
                    language.merchant_name_alternate.as_deref(),
                    MAX_ALTERNATE_NAME_LENGTH,
                ),
            ),
            (
                MERCHANT_CITY_ALTERNATE,
                truncated(
                    language.merchant_city_alternate.as_deref(),
                    MAX_ALTERNATE_CITY_LENGTH,
                ),
            ),
        ],
    )? {
        payload.push_str(&template);
    }

    let timestamp = match config.qr_type {
        QrType::Dynamic => Some(timestamp_ms.to_string()),
        QrType::Static => None,
    };
    if let Some(instant) = timestamp.as_deref() {
        if let Some(template) =
            encode_template(TIMESTAMP, &[(CREATION_TIMESTAMP, Some(instant))])?
        {
            payload.push_str(&template);
        }
    }

    payload.push_str(CRC);
    payload.push_str(CRC_LENGTH);
    let checksum = crc::checksum_hex(&payload);
    payload.push_str(&checksum);

    let merchant_type = config.merchant_info.merchant_type();
    debug!(
        len = payload.len(),
        merchant_type = ?merchant_type,
        dynamic = config.qr_type.is_dynamic(),
        "assembled KHQR payload"
    );

    let fingerprint = format!("{:x}", md5::compute(payload.as_bytes()));
    Ok(GeneratedQr {
        payload,
        timestamp,
        merchant_type,
        fingerprint,
    })
}

/// Current wall-clock instant in milliseconds since the Unix epoch.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Encode the identity template for the active profile variant.
///
/// The account identifier is checked before this runs, so the template is
/// never empty and never omitted.
fn encode_identity(config: &KhqrConfig) -> KhqrResult<String> {
    let account_id = truncate_to_bytes(&config.bakong_account_id, MAX_BAKONG_ACCOUNT_LENGTH);

    match &config.merchant_info {
        MerchantInfo::Individual {
            account_information,
            acquiring_bank,
        } => {
            let mut content = encode(BAKONG_ACCOUNT_ID, account_id)?;
            if let Some(info) = truncated(
                account_information.as_deref(),
                MAX_ACCOUNT_INFORMATION_LENGTH,
            ) {
                content.push_str(&encode(ACCOUNT_INFORMATION, info)?);
            }
            if let Some(bank) = truncated(acquiring_bank.as_deref(), MAX_ACQUIRING_BANK_LENGTH) {
                content.push_str(&encode(ACQUIRING_BANK, bank)?);
            }
            encode(INDIVIDUAL_ACCOUNT_INFORMATION, &content)
        }
        MerchantInfo::Merchant {
            merchant_id,
            acquiring_bank,
        } => {
            let merchant_id = required(merchant_id.as_deref(), "merchant_id")?;
            let bank = required(acquiring_bank.as_deref(), "acquiring_bank")?;

            let mut content = encode(BAKONG_ACCOUNT_ID, account_id)?;
            content.push_str(&encode(
                MERCHANT_ID,
                truncate_to_bytes(merchant_id, MAX_MERCHANT_ID_LENGTH),
            )?);
            content.push_str(&encode(
                ACQUIRING_BANK,
                truncate_to_bytes(bank, MAX_ACQUIRING_BANK_LENGTH),
            )?);
            encode(MERCHANT_ACCOUNT_INFORMATION, &content)
        }
    }
}

/// Format `amount` for the currency carried in the amount field.
///
/// USD renders with exactly two decimal places, rounding half-up past the
/// second fractional digit. KHR keeps integer input untouched; fractional
/// input loses trailing zeros and a trailing point.
fn format_amount(amount: &str, currency: Currency) -> KhqrResult<String> {
    let (integer, fraction) = split_amount(amount)?;
    match currency {
        Currency::Usd => Ok(render_usd(integer, fraction)),
        Currency::Khr => Ok(render_khr(amount, fraction)),
    }
}

/// Split a decimal numeral into integer and fraction digits, rejecting
/// anything outside `digits[.digits]`.
fn split_amount(amount: &str) -> KhqrResult<(&str, &str)> {
    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    let valid = !integer.is_empty()
        && integer.bytes().all(|b| b.is_ascii_digit())
        && (!amount.contains('.') || !fraction.is_empty())
        && fraction.bytes().all(|b| b.is_ascii_digit());
    if !valid {
        return Err(KhqrError::InvalidAmount {
            amount: amount.to_string(),
        });
    }
    Ok((integer, fraction))
}

fn render_usd(integer: &str, fraction: &str) -> String {
    if fraction.len() <= 2 {
        return format!("{}.{:0<2}", integer, fraction);
    }

    // Round half-up on the digit text; no float round-trip
    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(2))
        .map(|b| b - b'0')
        .collect();
    if fraction.as_bytes()[2] >= b'5' {
        let mut pos = digits.len();
        loop {
            if pos == 0 {
                digits.insert(0, 1);
                break;
            }
            pos -= 1;
            if digits[pos] < 9 {
                digits[pos] += 1;
                break;
            }
            digits[pos] = 0;
        }
    }

    let rendered: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let split = rendered.len() - 2;
    format!("{}.{}", &rendered[..split], &rendered[split..])
}

fn render_khr(amount: &str, fraction: &str) -> String {
    if fraction.is_empty() {
        return amount.to_string();
    }

    let stripped = amount.trim_end_matches('0');
    let stripped = stripped.strip_suffix('.').unwrap_or(stripped);
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

fn require(value: &str, field: &'static str) -> KhqrResult<()> {
    if value.is_empty() {
        return Err(KhqrError::MissingRequiredField { field });
    }
    Ok(())
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> KhqrResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(KhqrError::MissingRequiredField { field }),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn truncated(value: Option<&str>, max_bytes: usize) -> Option<&str> {
    non_empty(value).map(|v| truncate_to_bytes(v, max_bytes))
}
