// Criterion benchmarks for unkeysmash-align.
//
// Run:
//   cargo bench -p unkeysmash-align

use criterion::{Criterion, criterion_group, criterion_main};

use unkeysmash_align::{ScoringConfig, edit_sequences, ranked_edit_sequences};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// (intended, typed) pairs covering the common slip shapes: a neighbouring
/// key, a transposition, a dropped key and a doubled key.
const TYPO_PAIRS: &[(&str, &str)] = &[
    ("keyboard", "kwyboard"),
    ("because", "becuase"),
    ("definitely", "definately"),
    ("receive", "recieve"),
    ("hello", "helo"),
    ("spelling", "spellling"),
    ("separate", "seperate"),
    ("accommodate", "acommodate"),
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Full search for every pair with the default cutoffs.
fn bench_typo_pairs(c: &mut Criterion) {
    let config = ScoringConfig::default();
    c.bench_function("align_8_typo_pairs", |b| {
        b.iter(|| {
            for (target, source) in TYPO_PAIRS {
                std::hint::black_box(edit_sequences(target, source, &config));
            }
        });
    });
}

/// Same pairs, ranked, to include scoring and sorting of the survivors.
fn bench_ranked(c: &mut Criterion) {
    let config = ScoringConfig::default();
    c.bench_function("rank_8_typo_pairs", |b| {
        b.iter(|| {
            for (target, source) in TYPO_PAIRS {
                std::hint::black_box(ranked_edit_sequences(target, source, &config));
            }
        });
    });
}

/// A tight walk cutoff on a long, heavily garbled input.
fn bench_narrow_walk(c: &mut Criterion) {
    let config = ScoringConfig::default().with_walk_diff_cutoff(2);
    c.bench_function("align_long_garbled_walk2", |b| {
        b.iter(|| {
            std::hint::black_box(edit_sequences(
                "internationalization",
                "intrenatoinalizatoin",
                &config,
            ));
        });
    });
}

criterion_group!(benches, bench_typo_pairs, bench_ranked, bench_narrow_walk);
criterion_main!(benches);
