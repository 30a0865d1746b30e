use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_qr_gen::encoder::mask::penalty_score;
use rust_qr_gen::encoder::reed_solomon::ReedSolomonEncoder;
use rust_qr_gen::{ECLevel, EncodeOptions, encode_binary_with, encode_text, encode_text_with};

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("encode_hello_world_m", |b| {
        b.iter(|| encode_text(black_box("HELLO WORLD"), black_box(ECLevel::M)))
    });
    c.bench_function("encode_url_q", |b| {
        b.iter(|| {
            encode_text(
                black_box("https://github.com/rizwankce/RustQR"),
                black_box(ECLevel::Q),
            )
        })
    });
}

fn bench_encode_by_version(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_forced_version");
    for version in [5u8, 10, 20, 40] {
        let options = EncodeOptions::new(ECLevel::M)
            .with_version_range(version, version)
            .with_boost_ecc(false);
        group.bench_with_input(BenchmarkId::from_parameter(version), &options, |b, opts| {
            b.iter(|| encode_text_with(black_box("0123456789"), opts))
        });
    }
    group.finish();
}

fn bench_encode_largest(c: &mut Criterion) {
    let data: Vec<u8> = (0..2953u32).map(|i| (i * 31) as u8).collect();
    let options = EncodeOptions::new(ECLevel::L);
    c.bench_function("encode_binary_40l", |b| {
        b.iter(|| encode_binary_with(black_box(&data), &options))
    });

    let forced = options.with_mask(3);
    c.bench_function("encode_binary_40l_forced_mask", |b| {
        b.iter(|| encode_binary_with(black_box(&data), &forced))
    });
}

fn bench_penalty_score(c: &mut Criterion) {
    let symbol = encode_text(&"A".repeat(1000), ECLevel::L).unwrap();
    c.bench_function("penalty_score", |b| {
        b.iter(|| penalty_score(black_box(symbol.modules())))
    });
}

fn bench_reed_solomon(c: &mut Criterion) {
    let rs = ReedSolomonEncoder::new(30);
    let data: Vec<u8> = (0..118u8).collect();
    c.bench_function("reed_solomon_118_30", |b| b.iter(|| rs.encode(black_box(&data))));
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_by_version,
    bench_encode_largest,
    bench_penalty_score,
    bench_reed_solomon
);
criterion_main!(benches);
