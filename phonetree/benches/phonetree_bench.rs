//! Benchmarks for BK-tree and fixed-query-tree indexes.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use giztoy_phonetree::{BkIndex, FqIndex};

const INITIALS: &[&str] = &["ㄅ", "ㄆ", "ㄇ", "ㄉ", "ㄊ", "ㄍ", "ㄓ", "ㄕ", "ㄘ", "ㄙ"];
const FINALS: &[&str] = &["ㄚ", "ㄜ", "ㄞ", "ㄢ", "ㄤ", "ㄥ"];
const TONES: &[&str] = &["", "ˊ", "ˇ", "ˋ"];

/// Generate a deterministic vocabulary of two- and three-syllable words.
fn generate_vocab(count: usize) -> Vec<String> {
    let syllable = |n: usize| {
        format!(
            "{}{}{}",
            INITIALS[n % INITIALS.len()],
            FINALS[(n / 7) % FINALS.len()],
            TONES[(n / 3) % TONES.len()]
        )
    };
    (0..count)
        .map(|i| {
            let len = 2 + i % 2;
            (0..len)
                .map(|k| syllable(i.wrapping_mul(31).wrapping_add(k * 17)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("phonetree_insert");

    for size in [100, 1000, 10000].iter() {
        let vocab = generate_vocab(*size);

        group.bench_with_input(BenchmarkId::new("bk", size), size, |b, _| {
            b.iter(|| {
                let mut index = BkIndex::new();
                index.insert(&vocab);
                black_box(index)
            });
        });
        group.bench_with_input(BenchmarkId::new("fq", size), size, |b, _| {
            b.iter(|| {
                let mut index = FqIndex::new();
                index.insert(&vocab);
                black_box(index)
            });
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("phonetree_query");
    let vocab = generate_vocab(10000);

    let mut bk = BkIndex::new();
    bk.insert(&vocab);
    let mut fq = FqIndex::new();
    fq.insert(&vocab);

    for threshold in [1u32, 2, 3] {
        group.bench_with_input(BenchmarkId::new("bk", threshold), &threshold, |b, &t| {
            b.iter(|| black_box(bk.query(black_box(&vocab[42]), t).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("fq", threshold), &threshold, |b, &t| {
            b.iter(|| black_box(fq.query(black_box(&vocab[42]), t).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_query);
criterion_main!(benches);
