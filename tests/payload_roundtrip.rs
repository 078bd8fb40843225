//! Payload Round-Trip and Tamper Properties
//!
//! Exercises the public assembly and verification surface end to end:
//! profile-variant preconditions, the fixed field order as seen by a
//! decoder, checksum integrity under tampering, and response determinism.

use khqr_codec::{
    assemble, assemble_at, decode_tlv, verify, Currency, GeneratedQr, KhqrConfig, KhqrError,
    MerchantInfo, MerchantType, QrType,
};

fn individual_usd_config() -> KhqrConfig {
    KhqrConfig {
        bakong_account_id: "john_smith@devb".to_string(),
        merchant_name: "John Smith".to_string(),
        currency: Currency::Usd,
        amount: Some("1.00".to_string()),
        qr_type: QrType::Static,
        ..KhqrConfig::default()
    }
}

fn merchant_khr_config() -> KhqrConfig {
    KhqrConfig {
        bakong_account_id: "coffee_corner@devb".to_string(),
        merchant_name: "Coffee Corner".to_string(),
        merchant_info: MerchantInfo::Merchant {
            merchant_id: Some("092384".to_string()),
            acquiring_bank: Some("Dev Bank".to_string()),
        },
        currency: Currency::Khr,
        amount: Some("1000".to_string()),
        ..KhqrConfig::default()
    }
}

#[test]
fn test_static_individual_payload_decodes_and_verifies() {
    let generated = assemble(&individual_usd_config()).unwrap();

    let fields = decode_tlv(&generated.payload);
    assert_eq!(fields["01"], "11");
    assert_eq!(fields["53"], "840");
    assert_eq!(fields["54"], "1.00");
    assert_eq!(fields["58"], "KH");
    assert_eq!(fields["59"], "John Smith");
    assert!(!fields.contains_key("99"));
    assert!(fields.contains_key("63"));

    assert!(verify(&generated.payload));
    assert!(generated.timestamp.is_none());
    assert_eq!(generated.merchant_type, MerchantType::Individual);
}

#[test]
fn test_dynamic_payload_carries_a_timestamp_template() {
    let mut config = individual_usd_config();
    config.qr_type = QrType::Dynamic;
    let generated = assemble(&config).unwrap();

    let timestamp = generated.timestamp.as_deref().expect("dynamic timestamp");
    assert!(!timestamp.is_empty());
    assert!(timestamp.bytes().all(|b| b.is_ascii_digit()));

    let fields = decode_tlv(&generated.payload);
    assert_eq!(fields["01"], "12");
    let wrapped = decode_tlv(&fields["99"]);
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped["00"], timestamp);

    assert!(verify(&generated.payload));
}

#[test]
fn test_merchant_payload_round_trips() {
    let generated = assemble(&merchant_khr_config()).unwrap();

    let fields = decode_tlv(&generated.payload);
    assert!(fields.contains_key("30"));
    assert!(!fields.contains_key("29"));
    assert_eq!(fields["53"], "116");
    // KHR integer amounts pass through without a decimal point
    assert_eq!(fields["54"], "1000");

    assert!(verify(&generated.payload));
    assert_eq!(generated.merchant_type, MerchantType::Merchant);
}

#[test]
fn test_merchant_variant_without_bank_is_rejected() {
    let mut config = merchant_khr_config();
    config.merchant_info = MerchantInfo::Merchant {
        merchant_id: Some("092384".to_string()),
        acquiring_bank: None,
    };
    assert_eq!(
        assemble(&config).unwrap_err(),
        KhqrError::MissingRequiredField {
            field: "acquiring_bank"
        }
    );
}

#[test]
fn test_individual_variant_needs_neither_bank_nor_merchant_id() {
    let config = individual_usd_config();
    match &config.merchant_info {
        MerchantInfo::Individual {
            account_information,
            acquiring_bank,
        } => {
            assert!(account_information.is_none());
            assert!(acquiring_bank.is_none());
        }
        MerchantInfo::Merchant { .. } => unreachable!(),
    }
    assert!(assemble(&config).is_ok());
}

#[test]
fn test_every_single_character_edit_before_the_checksum_breaks_verification() {
    let generated = assemble_at(&individual_usd_config(), 1_722_470_400_000).unwrap();
    let payload = generated.payload;
    assert!(verify(&payload));

    let checksum_start = payload.len() - 8;
    for pos in 0..checksum_start {
        let mut chars: Vec<char> = payload.chars().collect();
        chars[pos] = if chars[pos] == '0' { '1' } else { '0' };
        let tampered: String = chars.into_iter().collect();
        assert!(!verify(&tampered), "edit at {} went undetected", pos);
    }
}

#[test]
fn test_decoding_a_corrupt_tail_returns_only_complete_fields() {
    let generated = assemble(&individual_usd_config()).unwrap();
    // Drop the last six characters: the checksum field is now shorter than
    // its claimed length and must disappear from the decoded map
    let truncated = &generated.payload[..generated.payload.len() - 6];
    let fields = decode_tlv(truncated);
    assert!(!fields.contains_key("63"));
    assert_eq!(fields["00"], "01");
    assert_eq!(fields["59"], "John Smith");
}

#[test]
fn test_assembly_is_deterministic_for_a_fixed_instant() {
    let config = merchant_khr_config();
    let first = assemble_at(&config, 1_722_470_400_000).unwrap();
    let second = assemble_at(&config, 1_722_470_400_000).unwrap();
    assert_eq!(first, second);

    let mut dynamic = config;
    dynamic.qr_type = QrType::Dynamic;
    let first = assemble_at(&dynamic, 1_722_470_400_000).unwrap();
    let second = assemble_at(&dynamic, 1_722_470_400_000).unwrap();
    assert_eq!(first.payload, second.payload);
    assert_eq!(first.fingerprint, second.fingerprint);
}

#[test]
fn test_generated_qr_serde_round_trip() {
    let generated = assemble_at(&merchant_khr_config(), 1_722_470_400_000).unwrap();
    let json = serde_json::to_string(&generated).unwrap();
    let restored: GeneratedQr = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, generated);
}

#[test]
fn test_khmer_merchant_fields_survive_the_round_trip() {
    let mut config = individual_usd_config();
    config.merchant_name = "ហាងកាហ្វេ".to_string();
    config.merchant_city = "ភ្នំពេញ".to_string();
    let generated = assemble(&config).unwrap();

    let fields = decode_tlv(&generated.payload);
    // Three bytes per character: the 27-byte name fits 8 characters in its
    // 25-byte budget, the 21-byte city fits 5 in its 15-byte budget
    assert_eq!(fields["59"], "ហាងកាហ្វ");
    assert_eq!(fields["60"], "ភ្នំព");
    assert!(verify(&generated.payload));
}
