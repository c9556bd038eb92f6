// Edit sequence scoring. Lower scores are better.

use serde::{Deserialize, Serialize};

use unkeysmash_core::{EditSegment, EditSequence};

/// Maps an edit sequence to a real-valued cost (lower is better).
///
/// Any `Fn(&EditSequence) -> f64` closure is a scorer, so callers can plug
/// in keyboard-distance or layer-aware scoring without a new type.
pub trait SequenceScorer {
    fn score(&self, sequence: &EditSequence) -> f64;
}

impl<F> SequenceScorer for F
where
    F: Fn(&EditSequence) -> f64,
{
    fn score(&self, sequence: &EditSequence) -> f64 {
        self(sequence)
    }
}

/// Per-kind segment costs for the default additive scorer.
///
/// Matches earn a flat bonus regardless of their length, deletions and
/// insertions cost a flat amount, and substitutions cost per character of
/// their target side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentCosts {
    /// Contribution of a match segment (negative: a reward).
    pub match_cost: f64,
    /// Contribution of a deletion segment.
    pub delete_cost: f64,
    /// Contribution of an insertion segment.
    pub insert_cost: f64,
    /// Contribution per target-side character of a substitution.
    pub substitute_char_cost: f64,
}

impl Default for SegmentCosts {
    fn default() -> Self {
        Self {
            match_cost: -9.0,
            delete_cost: 3.5,
            insert_cost: 3.0,
            substitute_char_cost: 1.0,
        }
    }
}

impl SegmentCosts {
    /// Cost of a single segment.
    pub fn segment_cost(&self, segment: &EditSegment) -> f64 {
        match segment {
            EditSegment::Match(_) => self.match_cost,
            EditSegment::Delete(_) => self.delete_cost,
            EditSegment::Insert(_) => self.insert_cost,
            EditSegment::Substitute { target, .. } => {
                target.chars().count() as f64 * self.substitute_char_cost
            }
        }
    }
}

impl SequenceScorer for SegmentCosts {
    fn score(&self, sequence: &EditSequence) -> f64 {
        sequence.iter().map(|segment| self.segment_cost(segment)).sum()
    }
}

/// Score a sequence with the default segment costs.
pub fn default_score(sequence: &EditSequence) -> f64 {
    SegmentCosts::default().score(sequence)
}
