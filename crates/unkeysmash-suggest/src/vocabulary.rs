// Vocabulary: the set of known words plus case-folded usage counts, built
// from markdown text or loaded from its JSON form.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};

use unkeysmash_core::character::char_len;

/// Shortest token kept as a word.
const MIN_WORD_CHARS: usize = 3;

/// Inline data blobs such as `[data:image/png;base64,...]`.
static DATA_BLOB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[data:[^\]\s]+\]").expect("valid regex"));

/// Link targets: the `](...)` half of `[text](url)`.
static LINK_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\([^)\s]+\)").expect("valid regex"));

/// Bare URLs left dangling before `)]`.
static URL_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http[^\s]+\)\]").expect("valid regex"));

/// Markdown and punctuation characters that split words.
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\\"\[\]()*_`.,\-/%:&=?~+$!@])"#).expect("valid regex")
});

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("valid regex"));

/// Errors from vocabulary lookups and (de)serialization.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("word not in vocabulary: {0:?}")]
    UnknownWord(String),

    #[error("invalid vocabulary JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize vocabulary: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// On-disk layout: `{"_words": [...], "_wordfreq": {"word": count}}`.
#[derive(Serialize, Deserialize)]
struct VocabularyFile {
    #[serde(rename = "_words")]
    words: Vec<String>,
    #[serde(rename = "_wordfreq")]
    wordfreq: BTreeMap<String, u64>,
}

/// Known words and how often each was seen.
///
/// `words` keeps words as they appeared (so `Keyboard` and `keyboard` are
/// both suggestible), while counts are keyed by the lowercase form.
/// Iteration is in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "VocabularyFile", into = "VocabularyFile")]
pub struct Vocabulary {
    words: BTreeSet<String>,
    counts: BTreeMap<String, u64>,
    total_count: u64,
    max_count: u64,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from ready-made tables. Count keys are folded to
    /// lowercase; counts for keys that fold together are summed.
    pub fn from_counts<W, C, K>(words: W, counts: C) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        C: IntoIterator<Item = (K, u64)>,
        K: AsRef<str>,
    {
        let mut vocabulary = Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        };
        for (word, count) in counts {
            *vocabulary
                .counts
                .entry(word.as_ref().to_lowercase())
                .or_insert(0) += count;
        }
        vocabulary.refresh_stats();
        vocabulary
    }

    /// Record every word of a markdown document.
    ///
    /// Link targets and inline data are stripped, punctuation splits words,
    /// and tokens that contain a digit or are shorter than three characters
    /// are skipped. Returns the number of words recorded.
    pub fn consume_markdown(&mut self, markdown: &str) -> usize {
        let text = DATA_BLOB.replace_all(markdown, "");
        let text = LINK_TARGET.replace_all(&text, "");
        let text = URL_TAIL.replace_all(&text, "");
        let text = PUNCTUATION.replace_all(&text, " ${1} ");

        let mut recorded = 0;
        for token in text.split_whitespace() {
            if DIGIT.is_match(token) || char_len(token) < MIN_WORD_CHARS {
                trace!("omitting {token:?} as noise");
                continue;
            }
            self.record(token);
            recorded += 1;
        }
        self.refresh_stats();
        debug!(
            "consumed {recorded} word(s); vocabulary now holds {} word(s)",
            self.words.len()
        );
        recorded
    }

    fn record(&mut self, word: &str) {
        if !self.words.contains(word) {
            self.words.insert(word.to_string());
        }
        *self.counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    fn refresh_stats(&mut self) {
        self.total_count = self.counts.values().sum();
        self.max_count = self.counts.values().copied().max().unwrap_or(0);
    }

    /// Words in lexicographic order, as they were first seen.
    pub fn iter_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words (case-sensitive).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Count recorded for a lowercase word.
    pub fn count(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Mean count per lowercase word; 0 for an empty vocabulary.
    pub fn average_count(&self) -> f64 {
        if self.counts.is_empty() {
            0.0
        } else {
            self.total_count as f64 / self.counts.len() as f64
        }
    }

    /// Frequency of `word` relative to the most frequent word, in `[0, 1]`.
    ///
    /// `word` is looked up as given; callers pass the lowercase form.
    pub fn relative_frequency(&self, word: &str) -> Result<f64, VocabularyError> {
        let count = self
            .count(word)
            .ok_or_else(|| VocabularyError::UnknownWord(word.to_string()))?;
        if self.max_count == 0 {
            return Ok(0.0);
        }
        Ok(count as f64 / self.max_count as f64)
    }

    /// Parse the JSON layout written by [`Vocabulary::to_json`].
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        serde_json::from_str(json).map_err(VocabularyError::Parse)
    }

    /// Pretty-printed JSON; words are listed in sorted order.
    pub fn to_json(&self) -> Result<String, VocabularyError> {
        serde_json::to_string_pretty(self).map_err(VocabularyError::Serialize)
    }
}

impl From<VocabularyFile> for Vocabulary {
    fn from(file: VocabularyFile) -> Self {
        Self::from_counts(file.words, file.wordfreq)
    }
}

impl From<Vocabulary> for VocabularyFile {
    fn from(vocabulary: Vocabulary) -> Self {
        Self {
            words: vocabulary.words.into_iter().collect(),
            wordfreq: vocabulary.counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(vocabulary: &Vocabulary) -> Vec<&str> {
        vocabulary.iter_words().collect()
    }

    #[test]
    fn empty_vocabulary() {
        let v = Vocabulary::new();
        assert!(v.is_empty());
        assert_eq!(v.total_count(), 0);
        assert_eq!(v.max_count(), 0);
        assert_eq!(v.average_count(), 0.0);
    }

    #[test]
    fn consume_counts_case_folded() {
        let mut v = Vocabulary::new();
        let recorded = v.consume_markdown("Keep keep KEEP going");
        assert_eq!(recorded, 4);
        assert_eq!(words(&v), ["KEEP", "Keep", "going", "keep"]);
        assert_eq!(v.count("keep"), Some(3));
        assert_eq!(v.count("Keep"), None);
        assert_eq!(v.count("going"), Some(1));
    }

    #[test]
    fn consume_skips_short_and_numeric_tokens() {
        let mut v = Vocabulary::new();
        v.consume_markdown("a an the v2 2023 abc1 word");
        assert_eq!(words(&v), ["the", "word"]);
    }

    #[test]
    fn consume_splits_on_punctuation() {
        let mut v = Vocabulary::new();
        v.consume_markdown("**bold**, `code`.snake_case/path-name");
        assert_eq!(
            words(&v),
            ["bold", "case", "code", "name", "path", "snake"]
        );
    }

    #[test]
    fn consume_keeps_unlisted_punctuation() {
        let mut v = Vocabulary::new();
        v.consume_markdown("typos; (typos)");
        assert_eq!(words(&v), ["typos", "typos;"]);
    }

    #[test]
    fn consume_strips_link_targets_and_data() {
        let mut v = Vocabulary::new();
        v.consume_markdown(
            "see [the docs](https://example.com/docs) and ![logo][data:image/png;base64,AAAA]",
        );
        assert_eq!(words(&v), ["and", "docs", "logo", "see", "the"]);
        assert!(!v.contains("example"));
        assert!(!v.contains("https"));
    }

    #[test]
    fn consume_strips_bare_url_tails() {
        let mut v = Vocabulary::new();
        v.consume_markdown("[[link http://host/path)] after");
        assert_eq!(words(&v), ["after", "link"]);
    }

    #[test]
    fn stats_follow_counts() {
        let mut v = Vocabulary::new();
        v.consume_markdown("alpha alpha alpha beta beta gamma");
        assert_eq!(v.total_count(), 6);
        assert_eq!(v.max_count(), 3);
        assert_eq!(v.average_count(), 2.0);
    }

    #[test]
    fn relative_frequency_of_top_word_is_one() {
        let mut v = Vocabulary::new();
        v.consume_markdown("alpha alpha alpha alpha beta");
        assert_eq!(v.relative_frequency("alpha").unwrap(), 1.0);
        assert_eq!(v.relative_frequency("beta").unwrap(), 0.25);
    }

    #[test]
    fn relative_frequency_of_unknown_word_is_error() {
        let v = Vocabulary::from_counts(["alpha"], [("alpha", 1)]);
        let err = v.relative_frequency("omega").unwrap_err();
        assert!(matches!(err, VocabularyError::UnknownWord(ref w) if w == "omega"));
    }

    #[test]
    fn from_counts_folds_keys() {
        let v = Vocabulary::from_counts(["Word", "word"], [("Word", 2), ("word", 3)]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.count("word"), Some(5));
        assert_eq!(v.max_count(), 5);
    }

    #[test]
    fn json_layout_uses_underscored_keys() {
        let v = Vocabulary::from_counts(["Beta", "alpha"], [("alpha", 2), ("beta", 1)]);
        let value: serde_json::Value = serde_json::from_str(&v.to_json().unwrap()).unwrap();
        assert_eq!(value["_words"], serde_json::json!(["Beta", "alpha"]));
        assert_eq!(value["_wordfreq"]["alpha"], 2);
        assert_eq!(value["_wordfreq"]["beta"], 1);
    }

    #[test]
    fn loads_unsorted_json() {
        let json = r#"{"_words": ["the", "keyboard", "Keyboard"],
                       "_wordfreq": {"keyboard": 1, "the": 4}}"#;
        let v = Vocabulary::from_json(json).unwrap();
        assert_eq!(words(&v), ["Keyboard", "keyboard", "the"]);
        assert_eq!(v.max_count(), 4);
        assert_eq!(v.relative_frequency("keyboard").unwrap(), 0.25);
        assert_eq!(Vocabulary::from_json(&v.to_json().unwrap()).unwrap(), v);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = Vocabulary::from_json(r#"{"_words": 3}"#).unwrap_err();
        assert!(matches!(err, VocabularyError::Parse(_)));
    }
}
