use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_encode::encoder::reed_solomon::ReedSolomonGenerator;
use rust_qr_encode::{ECLevel, EncodeOptions, Segment, encode_segments};

fn bench_encode_small(c: &mut Criterion) {
    let segments = Segment::make_segments("HELLO WORLD").unwrap();
    let options = EncodeOptions::standard();
    c.bench_function("encode_hello_world", |b| {
        b.iter(|| encode_segments(black_box(&segments), ECLevel::M, &options))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    let segments = Segment::make_segments("https://github.com/rizwankce/RustQR").unwrap();
    let options = EncodeOptions::standard();
    c.bench_function("encode_url", |b| {
        b.iter(|| encode_segments(black_box(&segments), ECLevel::Q, &options))
    });
}

// Mask search dominates large symbols
fn bench_mask_search_v40(c: &mut Criterion) {
    let data = vec![0x5Au8; 2900];
    let segments = vec![Segment::make_bytes(&data)];
    let sequential = EncodeOptions::standard().with_boost_ecl(false);
    let parallel = sequential.with_parallel_masks(true);

    c.bench_function("encode_v40_sequential_masks", |b| {
        b.iter(|| encode_segments(black_box(&segments), ECLevel::L, &sequential))
    });
    c.bench_function("encode_v40_parallel_masks", |b| {
        b.iter(|| encode_segments(black_box(&segments), ECLevel::L, &parallel))
    });
}

fn bench_rs_remainder(c: &mut Criterion) {
    let generator = ReedSolomonGenerator::new(30).unwrap();
    let block: Vec<u8> = (0..118u8).collect();
    c.bench_function("rs_remainder_118_30", |b| {
        b.iter(|| generator.remainder(black_box(&block)))
    });
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_url,
    bench_mask_search_v40,
    bench_rs_remainder
);
criterion_main!(benches);
