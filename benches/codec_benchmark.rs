//! Throughput Benchmarks for Payload Assembly and Verification
//!
//! Measures assembly and verification cost for the two profile variants,
//! and the read-side decode pass on a fully populated payload.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use khqr_codec::{
    assemble_at, decode_tlv, verify, AdditionalData, Currency, KhqrConfig, MerchantInfo, QrType,
};

const INSTANT_MS: u64 = 1_722_470_400_000;

fn individual_config() -> KhqrConfig {
    KhqrConfig {
        bakong_account_id: "john_smith@devb".to_string(),
        merchant_name: "John Smith".to_string(),
        currency: Currency::Usd,
        amount: Some("1.00".to_string()),
        ..KhqrConfig::default()
    }
}

fn merchant_config() -> KhqrConfig {
    KhqrConfig {
        bakong_account_id: "coffee_corner@devb".to_string(),
        merchant_name: "Coffee Corner".to_string(),
        merchant_info: MerchantInfo::Merchant {
            merchant_id: Some("092384".to_string()),
            acquiring_bank: Some("Dev Bank".to_string()),
        },
        currency: Currency::Khr,
        amount: Some("25500".to_string()),
        qr_type: QrType::Dynamic,
        additional_data: AdditionalData {
            bill_number: Some("INV-2024-001".to_string()),
            mobile_number: Some("85512233455".to_string()),
            store_label: Some("Store 12".to_string()),
            terminal_label: Some("POS-01".to_string()),
            purpose_of_transaction: Some("Coffee".to_string()),
        },
        ..KhqrConfig::default()
    }
}

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");

    let cases = [
        ("individual_static", individual_config()),
        ("merchant_dynamic", merchant_config()),
    ];
    for (name, config) in cases {
        group.bench_with_input(BenchmarkId::new("assemble", name), &config, |b, config| {
            b.iter(|| black_box(assemble_at(black_box(config), INSTANT_MS).unwrap()))
        });
    }

    group.finish();
}

fn bench_read_side(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_side");

    let payload = assemble_at(&merchant_config(), INSTANT_MS).unwrap().payload;

    group.bench_function("verify", |b| {
        b.iter(|| black_box(verify(black_box(&payload))))
    });
    group.bench_function("decode_tlv", |b| {
        b.iter(|| black_box(decode_tlv(black_box(&payload))))
    });

    group.finish();
}

criterion_group!(benches, bench_assembly, bench_read_side);
criterion_main!(benches);
