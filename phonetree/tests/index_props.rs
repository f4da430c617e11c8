//! Property-based tests comparing both indexes against a linear scan.

use std::collections::HashSet;

use giztoy_bopomofo::distance_str;
use giztoy_phonetree::{BkIndex, Config, FqIndex, Match};
use proptest::prelude::*;

// A narrow alphabet so generated vocabularies collide often.
fn arb_syllable() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "ㄅ", "ㄘ", "ㄕ"]),
        prop::sample::select(vec!["", "ㄧ"]),
        prop::sample::select(vec!["ㄚ", "ㄜ"]),
        prop::sample::select(vec!["", "ˊ", "ˋ"]),
    )
        .prop_map(|(i, m, f, t)| format!("{i}{m}{f}{t}"))
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_syllable(), 1..=3).prop_map(|v| v.join(" "))
}

fn arb_vocab() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_text(), 1..60)
}

fn as_set(matches: &[Match]) -> HashSet<(String, u32)> {
    matches
        .iter()
        .map(|m| (m.value.clone(), m.distance))
        .collect()
}

fn linear_scan(vocab: &[String], query: &str, threshold: u32) -> HashSet<(String, u32)> {
    vocab
        .iter()
        .filter(|v| v.split(' ').count() == query.split(' ').count())
        .filter_map(|v| {
            let d = distance_str(v, query).ok()?;
            (d < threshold).then(|| (v.clone(), d))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn bk_matches_linear_scan(vocab in arb_vocab(), query in arb_text(), threshold in 0u32..8) {
        let mut index = BkIndex::new();
        let summary = index.insert(&vocab);
        prop_assert!(summary.rejected.is_empty());

        let got = index.query(&query, threshold).unwrap();
        prop_assert_eq!(got.len(), as_set(&got).len(), "no duplicate matches");
        prop_assert_eq!(as_set(&got), linear_scan(&vocab, &query, threshold));
    }

    #[test]
    fn fq_matches_linear_scan(
        vocab in arb_vocab(),
        query in arb_text(),
        threshold in 0u32..8,
        bucket_size in 1usize..4,
    ) {
        let mut index = FqIndex::with_config(Config { bucket_size, max_length: 3 }).unwrap();
        index.insert(&vocab);

        let got = index.query(&query, threshold).unwrap();
        prop_assert_eq!(got.len(), as_set(&got).len(), "no duplicate matches");
        prop_assert_eq!(as_set(&got), linear_scan(&vocab, &query, threshold));
    }

    #[test]
    fn recall_is_monotonic(vocab in arb_vocab(), query in arb_text(), t1 in 0u32..6, dt in 0u32..4) {
        let mut bk = BkIndex::new();
        bk.insert(&vocab);
        let mut fq = FqIndex::new();
        fq.insert(&vocab);

        let t2 = t1 + dt;
        for (small, large) in [
            (bk.query(&query, t1).unwrap(), bk.query(&query, t2).unwrap()),
            (fq.query(&query, t1).unwrap(), fq.query(&query, t2).unwrap()),
        ] {
            prop_assert!(as_set(&small).is_subset(&as_set(&large)));
        }
    }

    #[test]
    fn every_insert_round_trips(vocab in arb_vocab()) {
        let mut bk = BkIndex::new();
        bk.insert(&vocab);
        let mut fq = FqIndex::new();
        fq.insert(&vocab);

        let distinct: HashSet<&String> = vocab.iter().collect();
        prop_assert_eq!(bk.len(), distinct.len());
        prop_assert_eq!(fq.len(), distinct.len());

        for text in &vocab {
            let hits = bk.query(text, 1).unwrap();
            prop_assert_eq!(hits.len(), 1);
            prop_assert_eq!(hits[0].distance, 0);
            let hits = fq.query(text, 1).unwrap();
            prop_assert_eq!(hits.len(), 1);
            prop_assert_eq!(hits[0].distance, 0);
        }
    }

    #[test]
    fn reinsert_keeps_shape(vocab in arb_vocab()) {
        let mut bk = BkIndex::new();
        bk.insert(&vocab);
        let mut fq = FqIndex::new();
        fq.insert(&vocab);
        let (bk_nodes, fq_nodes) = (bk.stats().total_nodes(), fq.stats().total_nodes());

        let again = bk.insert(&vocab);
        prop_assert_eq!(again.inserted, 0);
        let again = fq.insert(&vocab);
        prop_assert_eq!(again.inserted, 0);
        prop_assert_eq!(bk.stats().total_nodes(), bk_nodes);
        prop_assert_eq!(fq.stats().total_nodes(), fq_nodes);
    }
}
