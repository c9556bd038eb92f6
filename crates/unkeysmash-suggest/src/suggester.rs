// Suggester: ranks vocabulary words against typed text by combining the
// best edit-sequence score with how common each word is.

use log::debug;

use unkeysmash_align::{ScoringConfig, edit_sequences};
use unkeysmash_core::character::{char_len, char_prefix};

use crate::status::{Suggestion, SuggestionStatus};
use crate::vocabulary::Vocabulary;

/// Default number of suggestions returned per query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Added to the best edit-sequence score so distances stay positive.
const ALIGNMENT_BASE: f64 = 100.0;

/// Edit score used when no alignment survives the cutoffs.
const NO_ALIGNMENT_SCORE: f64 = 200.0;

/// Word suggester over a read-only vocabulary.
#[derive(Debug, Clone)]
pub struct Suggester {
    vocabulary: Vocabulary,
    config: ScoringConfig,
    max_suggestions: usize,
}

impl Suggester {
    pub fn new(vocabulary: Vocabulary, config: ScoringConfig) -> Self {
        Self {
            vocabulary,
            config,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Distance between a whole vocabulary word and a whole typed word.
    /// Lower is better. Used for corrections after a word is finished.
    pub fn full_word_match_distance(&self, target_word: &str, typed_word: &str) -> f64 {
        self.distance(target_word, target_word, typed_word)
    }

    /// Distance between the start of a vocabulary word and a partially typed
    /// word. Only the first `len(typed_prefix)` characters of `target_word`
    /// take part in the alignment.
    pub fn prefix_match_distance(&self, target_word: &str, typed_prefix: &str) -> f64 {
        let head = char_prefix(target_word, char_len(typed_prefix));
        self.distance(target_word, head, typed_prefix)
    }

    fn distance(&self, word: &str, aligned: &str, typed: &str) -> f64 {
        let results = edit_sequences(aligned, typed, &self.config);
        let edit_score = match self.config.best_score(&results) {
            Some(best) => ALIGNMENT_BASE + best,
            None => NO_ALIGNMENT_SCORE,
        };
        edit_score * (1.0 - self.frequency_of(word))
    }

    /// Relative frequency of `word`, or 0 for words with no recorded count.
    fn frequency_of(&self, word: &str) -> f64 {
        let lower = word.to_lowercase();
        match self.vocabulary.relative_frequency(&lower) {
            Ok(frequency) => frequency,
            Err(err) => {
                debug!("{err}; treating frequency as 0");
                0.0
            }
        }
    }

    /// Vocabulary words containing `typed_prefix`, best first.
    ///
    /// Matching is a case-sensitive substring test; ranking compares the
    /// lowercase forms by [`Suggester::prefix_match_distance`].
    pub fn get_prefix_suggestions(&self, typed_prefix: &str) -> Vec<String> {
        into_words(self.prefix_suggestions(typed_prefix))
    }

    /// Like [`Suggester::get_prefix_suggestions`], keeping each distance.
    pub fn prefix_suggestions(&self, typed_prefix: &str) -> Vec<Suggestion> {
        let typed = typed_prefix.to_lowercase();
        let candidates: Vec<&str> = self
            .vocabulary
            .iter_words()
            .filter(|word| word.contains(typed_prefix))
            .collect();
        let scored = score_candidates(candidates, |word| {
            self.prefix_match_distance(&word.to_lowercase(), &typed)
        });
        self.rank(typed_prefix, scored)
    }

    /// Vocabulary words that could be what `typed_word` was meant to be,
    /// best first. Only words whose length is within the walk-difference
    /// cutoff of the typed word are considered.
    pub fn get_correction_suggestions(&self, typed_word: &str) -> Vec<String> {
        into_words(self.correction_suggestions(typed_word))
    }

    /// Like [`Suggester::get_correction_suggestions`], keeping each distance.
    pub fn correction_suggestions(&self, typed_word: &str) -> Vec<Suggestion> {
        let typed = typed_word.to_lowercase();
        let typed_len = char_len(typed_word);
        let max_gap = self.config.walk_diff_cutoff();
        let candidates: Vec<&str> = self
            .vocabulary
            .iter_words()
            .filter(|word| char_len(word).abs_diff(typed_len) <= max_gap)
            .collect();
        let scored = score_candidates(candidates, |word| {
            self.full_word_match_distance(&word.to_lowercase(), &typed)
        });
        self.rank(typed_word, scored)
    }

    fn rank(&self, typed: &str, scored: Vec<(&str, f64)>) -> Vec<Suggestion> {
        let candidates = scored.len();
        let mut status = SuggestionStatus::new(typed, self.max_suggestions);
        for (word, distance) in scored {
            if status.would_accept(distance) {
                status.add_suggestion(word.to_string(), distance);
            }
        }
        debug!(
            "{:?}: kept {} (max {}) of {candidates} candidate(s)",
            status.typed(),
            status.suggestion_count(),
            status.max_suggestion_count()
        );
        status.into_suggestions()
    }
}

fn into_words(suggestions: Vec<Suggestion>) -> Vec<String> {
    suggestions.into_iter().map(|s| s.word).collect()
}

/// Compute each candidate's distance, preserving candidate order.
#[cfg(not(feature = "parallel"))]
fn score_candidates<'w, F>(candidates: Vec<&'w str>, distance: F) -> Vec<(&'w str, f64)>
where
    F: Fn(&str) -> f64 + Sync,
{
    candidates
        .into_iter()
        .map(|word| (word, distance(word)))
        .collect()
}

/// Compute each candidate's distance on the rayon pool. Every candidate
/// runs its own walk, and collection preserves candidate order.
#[cfg(feature = "parallel")]
fn score_candidates<'w, F>(candidates: Vec<&'w str>, distance: F) -> Vec<(&'w str, f64)>
where
    F: Fn(&str) -> f64 + Sync,
{
    use rayon::prelude::*;

    candidates
        .into_par_iter()
        .map(|word| (word, distance(word)))
        .collect()
}
