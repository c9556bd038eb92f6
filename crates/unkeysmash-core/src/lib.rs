//! Shared types for the unkeysmash typo-alignment crates.
//!
//! An [`EditSequence`] explains how an intended (target) word could have
//! been mistyped as the observed (source) text, as an ordered list of
//! [`EditSegment`]s: matches, deletions, insertions and substitutions.
//!
//! # Architecture
//!
//! - [`segment`] -- Edit segment variants, merging and folding rules
//! - [`sequence`] -- Edit sequences, coalescing and validity checks
//! - [`character`] -- Character-indexed string helpers for typed text

pub mod character;
pub mod segment;
pub mod sequence;

pub use segment::{EditSegment, SegmentKind};
pub use sequence::EditSequence;
