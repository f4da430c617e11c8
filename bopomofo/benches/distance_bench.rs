//! Benchmarks for syllable encoding and the phonetic distance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use giztoy_bopomofo::{distance, encode_transcription};

const SAMPLES: &[&str] = &[
    "ㄘㄜˋ ㄕˋ",
    "ㄓㄨㄥ ㄏㄨㄚˊ ㄇㄧㄣˊ ㄍㄨㄛˊ",
    "ㄊㄞˊ ㄅㄟˇ ㄕˋ ㄓㄥˋ ㄈㄨˇ ㄗㄨㄛˋ",
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bopomofo_encode");
    for text in SAMPLES {
        let len = text.split(' ').count();
        group.bench_with_input(BenchmarkId::new("transcription", len), text, |b, text| {
            b.iter(|| black_box(encode_transcription(black_box(text)).unwrap()));
        });
    }
    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let a = encode_transcription("ㄓㄨㄥ ㄏㄨㄚˊ ㄇㄧㄣˊ ㄍㄨㄛˊ").unwrap();
    let b = encode_transcription("ㄓㄨㄥˋ ㄏㄨㄚ ㄇㄧㄥˊ ㄍㄨㄛ").unwrap();
    c.bench_function("bopomofo_distance", |bench| {
        bench.iter(|| black_box(distance(black_box(&a), black_box(&b)).unwrap()));
    });
}

criterion_group!(benches, bench_encode, bench_distance);
criterion_main!(benches);
