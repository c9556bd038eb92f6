//! Word suggestions for fast, sloppy typing.
//!
//! A [`Vocabulary`] of known words and their usage counts is built from
//! markdown text (or loaded from JSON). A [`Suggester`] ranks vocabulary
//! words against typed text by the best edit-sequence score between them,
//! discounted by how frequent each word is.
//!
//! # Architecture
//!
//! - [`vocabulary`] -- Word set, counts, markdown ingestion, JSON form
//! - [`suggester`] -- Prefix and full-word distances, ranked suggestions
//! - [`status`] -- Bounded, deduplicated ranking of candidates
//! - [`correction`] -- Keystroke plans rewriting a typed word
//!
//! # Example
//!
//! ```
//! use unkeysmash_suggest::{ScoringConfig, Suggester, Vocabulary};
//!
//! let mut vocabulary = Vocabulary::new();
//! vocabulary.consume_markdown("The keyboard has keys. Keep the keyboard clean.");
//!
//! let suggester = Suggester::new(vocabulary, ScoringConfig::default());
//! let suggestions = suggester.get_prefix_suggestions("key");
//! assert_eq!(suggestions[0], "keyboard");
//! ```
//!
//! Enable the `parallel` feature to score candidates on the rayon pool.

pub mod correction;
pub mod status;
pub mod suggester;
pub mod vocabulary;

pub use correction::CorrectionPlan;
pub use status::{Suggestion, SuggestionStatus};
pub use suggester::{DEFAULT_MAX_SUGGESTIONS, Suggester};
pub use unkeysmash_align::{ScoringConfig, ScoringOptions};
pub use vocabulary::{Vocabulary, VocabularyError};
