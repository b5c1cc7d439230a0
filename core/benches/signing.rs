//! Request signing and field cipher benchmarks.
//!
//! Every API call signs its body and the login path encrypts three fields,
//! so both sit on the per-request hot path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

use karcher_core::crypto::FieldCipher;
use karcher_core::signing::{canonical_body, sign, RequestBuilder, SigningContext};

const KEY_HEX: &str = "00112233445566778899aabbccddeeff";

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing/sign");
    let ctx = SigningContext::new(1_700_000_000, "0123456789abcdef0123456789abcdef", "token");

    for fields in [0usize, 4, 16, 64] {
        let mut builder = RequestBuilder::post("/bench");
        for i in 0..fields {
            builder = match i % 3 {
                0 => builder.field(format!("s{i}"), format!("value-{i}")),
                1 => builder.field(format!("n{i}"), i as u64),
                _ => builder.field(format!("o{i}"), json!({ "k": i, "v": [1, 2, 3] })),
            };
        }
        let request = builder.build();

        group.bench_with_input(BenchmarkId::from_parameter(fields), &request, |b, req| {
            b.iter(|| sign(black_box(req), black_box(&ctx)));
        });
    }

    group.finish();
}

fn bench_canonical(c: &mut Criterion) {
    let request = RequestBuilder::post("/bench")
        .field("dir", "1528983614213726208/rc-7/SN0001/01-01-2022/map/temp/0046690461_SN0001_1")
        .field("countryCode", "LV")
        .field("serviceType", 2)
        .field("tenantId", "1528983614213726208")
        .build();

    c.bench_function("signing/canonical_body", |b| {
        b.iter(|| canonical_body(black_box(&request)));
    });
}

fn bench_field_cipher(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing/field_cipher");
    let cipher = FieldCipher::from_hex(KEY_HEX).expect("bench key");
    let ciphertext = cipher.encrypt("86-12345678901");

    group.bench_function("encrypt", |b| {
        b.iter(|| cipher.encrypt(black_box("86-12345678901")));
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| cipher.decrypt(black_box(&ciphertext)));
    });

    group.finish();
}

criterion_group!(benches, bench_sign, bench_canonical, bench_field_cipher);
criterion_main!(benches);
