//! Edit-sequence search engine.
//!
//! Given an intended word (the target) and the text actually typed (the
//! source), enumerates every minimal, semantically valid alignment between
//! them as [`EditSequence`]s, bounded by the cutoffs of a
//! [`ScoringConfig`].
//!
//! # Architecture
//!
//! - [`config`] -- Cutoffs and scorer for one search
//! - [`score`] -- The [`SequenceScorer`] trait and default segment costs
//! - [`walk`] -- Memoized walk over (target prefix, source prefix) cells
//!
//! # Example
//!
//! ```
//! use unkeysmash_align::{ScoringConfig, edit_sequences};
//! use unkeysmash_core::{EditSegment, EditSequence};
//!
//! let results = edit_sequences("helo", "helw", &ScoringConfig::default());
//! let expected = EditSequence::from_segments(vec![
//!     EditSegment::Match("hel".to_string()),
//!     EditSegment::substitution("o", "w"),
//! ]);
//! assert_eq!(results.len(), 1);
//! assert!(results.contains(&expected));
//! ```

pub mod config;
pub mod score;
pub mod walk;

pub use config::{ScoringConfig, ScoringOptions};
pub use score::{SegmentCosts, SequenceScorer, default_score};
pub use walk::{EditSequenceSet, EditSequenceWalk};
pub use unkeysmash_core::{EditSegment, EditSequence};

/// Every surviving edit sequence explaining how `target` was typed as
/// `source`. Each call uses a fresh memo table.
pub fn edit_sequences(target: &str, source: &str, config: &ScoringConfig) -> EditSequenceSet {
    EditSequenceWalk::new(target, source, config).run()
}

/// Scored edit sequences, best first.
///
/// Equal scores are ordered by their printed form so output is stable.
pub fn ranked_edit_sequences(
    target: &str,
    source: &str,
    config: &ScoringConfig,
) -> Vec<(EditSequence, f64)> {
    let mut ranked: Vec<(EditSequence, f64)> = edit_sequences(target, source, config)
        .into_iter()
        .map(|sequence| {
            let score = config.score(&sequence);
            (sequence, score)
        })
        .collect();
    ranked.sort_by(|(a, a_score), (b, b_score)| {
        a_score
            .total_cmp(b_score)
            .then_with(|| a.to_string().cmp(&b.to_string()))
    });
    ranked
}
