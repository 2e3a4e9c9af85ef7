// hex_format/benches/hex_codec.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hex_format::{bytes_to_hex, hex_to_bytes, HexFormat};

/// Generates dummy data: a vector of 1024 bytes cycling through 0 to 255.
fn generate_input() -> Vec<u8> {
    (0..1024).map(|i| (i % 256) as u8).collect()
}

/// Benchmarks the single-allocation encoder in the default format.
fn bench_bytes_to_hex(c: &mut Criterion) {
    let bytes = generate_input();
    c.bench_function("bytes_to_hex", |b| {
        b.iter(|| {
            let _ = bytes_to_hex(black_box(&bytes), &HexFormat::DEFAULT).unwrap();
        });
    });
}

/// Benchmarks the encoder's general path: grouped, line-wrapped output.
fn bench_bytes_to_hex_grouped(c: &mut Criterion) {
    let bytes = generate_input();
    let format = HexFormat::builder()
        .bytes_per_line(16)
        .bytes_per_group(1)
        .group_separator(" ")
        .build();
    c.bench_function("bytes_to_hex_grouped", |b| {
        b.iter(|| {
            let _ = bytes_to_hex(black_box(&bytes), &format).unwrap();
        });
    });
}

/// Benchmarks decoding the default-format output back into bytes.
fn bench_hex_to_bytes(c: &mut Criterion) {
    let bytes = generate_input();
    let text = bytes_to_hex(&bytes, &HexFormat::DEFAULT).unwrap();
    c.bench_function("hex_to_bytes", |b| {
        b.iter(|| {
            let _ = hex_to_bytes(black_box(&text), &HexFormat::DEFAULT).unwrap();
        });
    });
}

/// Benchmarks the standard formatting approach using the `format!("{:02x}", b)`
/// macro, which allocates a new String per byte.
fn bench_std_format_hex(c: &mut Criterion) {
    let bytes = generate_input();
    c.bench_function("std_format_hex", |b| {
        b.iter(|| {
            let s: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
            black_box(s);
        });
    });
}

criterion_group!(
    hex_benches,
    bench_bytes_to_hex,
    bench_bytes_to_hex_grouped,
    bench_hex_to_bytes,
    bench_std_format_hex
);
criterion_main!(hex_benches);
