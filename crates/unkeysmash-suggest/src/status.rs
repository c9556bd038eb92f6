// Suggestion status tracking: bounded, deduplicated, distance-ordered
// collection of ranked candidates for one typed word.

use std::collections::HashSet;

/// A suggestion candidate with its computed distance.
///
/// Lower distances indicate better suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Distance from the typed text (lower is better).
    pub distance: f64,
}

/// Collects the best suggestions for one typed word.
///
/// At most `max_suggestions` entries are held at any time, kept sorted by
/// ascending distance. A candidate whose distance ties an entry already held
/// goes after it, so the first candidate offered wins ties.
pub struct SuggestionStatus<'a> {
    /// The text the suggestions are for.
    typed: &'a str,
    /// Maximum number of suggestions kept.
    max_suggestions: usize,
    /// Held suggestions, best first.
    suggestions: Vec<Suggestion>,
    /// Every word offered so far, for deduplication.
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(typed: &'a str, max_suggestions: usize) -> Self {
        Self {
            typed,
            max_suggestions,
            suggestions: Vec::with_capacity(max_suggestions),
            seen: HashSet::new(),
        }
    }

    /// Offer a candidate. Duplicates of a word already offered are ignored,
    /// and a candidate that does not rank among the best is dropped.
    pub fn add_suggestion(&mut self, word: String, distance: f64) {
        if self.seen.contains(&word) {
            return;
        }
        self.seen.insert(word.clone());

        let at = self
            .suggestions
            .partition_point(|held| held.distance.total_cmp(&distance).is_le());
        if at >= self.max_suggestions {
            return;
        }
        self.suggestions.insert(at, Suggestion { word, distance });
        self.suggestions.truncate(self.max_suggestions);
    }

    /// Whether another candidate at `distance` would be kept.
    pub fn would_accept(&self, distance: f64) -> bool {
        if self.suggestions.len() < self.max_suggestions {
            return true;
        }
        self.suggestions
            .last()
            .is_some_and(|worst| distance.total_cmp(&worst.distance).is_lt())
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    pub fn max_suggestion_count(&self) -> usize {
        self.max_suggestions
    }

    /// Number of distinct candidates offered so far.
    pub fn offered_count(&self) -> usize {
        self.seen.len()
    }

    pub fn typed(&self) -> &str {
        self.typed
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Consume the status and return the held suggestions, best first.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
    }

    /// Consume the status and return only the words, best first.
    pub fn into_words(self) -> Vec<String> {
        self.suggestions.into_iter().map(|s| s.word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words<'s>(status: &'s SuggestionStatus<'_>) -> Vec<&'s str> {
        status.suggestions().iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn new_status_is_empty() {
        let status = SuggestionStatus::new("keyb", 5);
        assert_eq!(status.suggestion_count(), 0);
        assert_eq!(status.max_suggestion_count(), 5);
        assert_eq!(status.typed(), "keyb");
    }

    #[test]
    fn suggestions_are_sorted_by_distance() {
        let mut status = SuggestionStatus::new("x", 5);
        status.add_suggestion("high".to_string(), 100.0);
        status.add_suggestion("low".to_string(), 1.0);
        status.add_suggestion("mid".to_string(), 10.0);
        assert_eq!(words(&status), ["low", "mid", "high"]);
    }

    #[test]
    fn ties_keep_offer_order() {
        let mut status = SuggestionStatus::new("x", 5);
        status.add_suggestion("first".to_string(), 2.0);
        status.add_suggestion("second".to_string(), 2.0);
        status.add_suggestion("best".to_string(), 1.0);
        assert_eq!(words(&status), ["best", "first", "second"]);
    }

    #[test]
    fn excess_suggestions_are_dropped() {
        let mut status = SuggestionStatus::new("x", 2);
        status.add_suggestion("a".to_string(), 3.0);
        status.add_suggestion("b".to_string(), 2.0);
        status.add_suggestion("c".to_string(), 1.0);
        status.add_suggestion("d".to_string(), 4.0);
        assert_eq!(words(&status), ["c", "b"]);
        assert_eq!(status.offered_count(), 4);
    }

    #[test]
    fn tie_with_worst_held_is_not_accepted_when_full() {
        let mut status = SuggestionStatus::new("x", 1);
        status.add_suggestion("kept".to_string(), 1.0);
        assert!(!status.would_accept(1.0));
        assert!(status.would_accept(0.5));
        status.add_suggestion("late".to_string(), 1.0);
        assert_eq!(words(&status), ["kept"]);
    }

    #[test]
    fn duplicate_suggestions_are_ignored() {
        let mut status = SuggestionStatus::new("x", 5);
        status.add_suggestion("test".to_string(), 5.0);
        status.add_suggestion("test".to_string(), 1.0);
        assert_eq!(status.suggestion_count(), 1);
        assert_eq!(status.suggestions()[0].distance, 5.0);
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut status = SuggestionStatus::new("x", 0);
        status.add_suggestion("a".to_string(), 1.0);
        assert_eq!(status.suggestion_count(), 0);
        assert!(!status.would_accept(0.0));
    }

    #[test]
    fn into_words_consumes_status() {
        let mut status = SuggestionStatus::new("x", 5);
        status.add_suggestion("b".to_string(), 2.0);
        status.add_suggestion("a".to_string(), 1.0);
        assert_eq!(status.into_words(), ["a", "b"]);
    }
}
