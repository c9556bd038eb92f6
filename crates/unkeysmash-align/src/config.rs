// Scoring configuration: cutoffs that bound the search and the scorer used
// to rank the surviving edit sequences.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use unkeysmash_core::EditSequence;

use crate::score::{SegmentCosts, SequenceScorer};

/// Default score-difference cutoff.
pub const DEFAULT_SCORE_DIFF_CUTOFF: f64 = 3.0;

/// Default walk-difference cutoff.
pub const DEFAULT_WALK_DIFF_CUTOFF: usize = 5;

/// Plain-data form of a [`ScoringConfig`], suitable for config files and
/// command-line overrides. Only the default additive scorer is expressible
/// here; custom scorers are attached with [`ScoringConfig::with_scorer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    /// Keep only sequences scoring below `best + cutoff`. `None` disables
    /// score filtering.
    pub score_diff_cutoff: Option<f64>,
    /// Abandon subproblems whose remaining lengths differ by more than this.
    pub walk_diff_cutoff: usize,
    /// Segment costs for the default scorer.
    pub costs: SegmentCosts,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            score_diff_cutoff: Some(DEFAULT_SCORE_DIFF_CUTOFF),
            walk_diff_cutoff: DEFAULT_WALK_DIFF_CUTOFF,
            costs: SegmentCosts::default(),
        }
    }
}

/// Immutable scoring configuration shared by every subproblem of a walk.
///
/// Cheap to clone; the scorer sits behind an `Arc` so one configuration can
/// drive independent walks on several threads.
#[derive(Clone)]
pub struct ScoringConfig {
    score_diff_cutoff: Option<f64>,
    walk_diff_cutoff: usize,
    scorer: Arc<dyn SequenceScorer + Send + Sync>,
}

impl ScoringConfig {
    pub fn new(
        score_diff_cutoff: Option<f64>,
        walk_diff_cutoff: usize,
        scorer: impl SequenceScorer + Send + Sync + 'static,
    ) -> Self {
        Self {
            score_diff_cutoff,
            walk_diff_cutoff,
            scorer: Arc::new(scorer),
        }
    }

    /// Build a configuration using the default scorer with `options.costs`.
    pub fn from_options(options: &ScoringOptions) -> Self {
        Self::new(
            options.score_diff_cutoff,
            options.walk_diff_cutoff,
            options.costs,
        )
    }

    pub fn with_score_diff_cutoff(mut self, cutoff: Option<f64>) -> Self {
        self.score_diff_cutoff = cutoff;
        self
    }

    pub fn with_walk_diff_cutoff(mut self, cutoff: usize) -> Self {
        self.walk_diff_cutoff = cutoff;
        self
    }

    pub fn with_scorer(mut self, scorer: impl SequenceScorer + Send + Sync + 'static) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    pub fn score_diff_cutoff(&self) -> Option<f64> {
        self.score_diff_cutoff
    }

    pub fn walk_diff_cutoff(&self) -> usize {
        self.walk_diff_cutoff
    }

    /// Score one sequence with the configured scorer.
    pub fn score(&self, sequence: &EditSequence) -> f64 {
        self.scorer.score(sequence)
    }

    /// Lowest score among `sequences`, or `None` if there are none.
    pub fn best_score<'a, I>(&self, sequences: I) -> Option<f64>
    where
        I: IntoIterator<Item = &'a EditSequence>,
    {
        sequences
            .into_iter()
            .map(|sequence| self.score(sequence))
            .reduce(f64::min)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::from_options(&ScoringOptions::default())
    }
}

impl fmt::Debug for ScoringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringConfig")
            .field("score_diff_cutoff", &self.score_diff_cutoff)
            .field("walk_diff_cutoff", &self.walk_diff_cutoff)
            .finish_non_exhaustive()
    }
}
