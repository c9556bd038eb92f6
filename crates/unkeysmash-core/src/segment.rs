// Edit segments: the atomic alignment operations between an intended
// (target) word and the text that was actually typed (source).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of an edit segment, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Match,
    Delete,
    Insert,
    Substitute,
}

impl SegmentKind {
    /// Three-letter tag used when printing sequences.
    pub fn tag(self) -> &'static str {
        match self {
            SegmentKind::Match => "MAT",
            SegmentKind::Delete => "DEL",
            SegmentKind::Insert => "INS",
            SegmentKind::Substitute => "SUB",
        }
    }
}

/// One alignment operation between target and source.
///
/// Segments are immutable values; equality and hashing are structural so
/// that sequences of them can live in hash sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditSegment {
    /// Target and source agree on this text.
    Match(String),
    /// Text present in the target but missing from the source (typed short).
    Delete(String),
    /// Text present in the source but not in the target (extra keys hit).
    Insert(String),
    /// Same-length swap: `target` was intended, `source` was typed.
    Substitute { target: String, source: String },
}

impl EditSegment {
    /// Build a substitution, collapsing to [`EditSegment::Match`] when both
    /// sides are equal.
    pub fn substitution(target: impl Into<String>, source: impl Into<String>) -> Self {
        let target = target.into();
        let source = source.into();
        if target == source {
            EditSegment::Match(target)
        } else {
            EditSegment::Substitute { target, source }
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            EditSegment::Match(_) => SegmentKind::Match,
            EditSegment::Delete(_) => SegmentKind::Delete,
            EditSegment::Insert(_) => SegmentKind::Insert,
            EditSegment::Substitute { .. } => SegmentKind::Substitute,
        }
    }

    /// The part of the target string this segment accounts for.
    pub fn target_text(&self) -> &str {
        match self {
            EditSegment::Match(text) | EditSegment::Delete(text) => text,
            EditSegment::Insert(_) => "",
            EditSegment::Substitute { target, .. } => target,
        }
    }

    /// The part of the source string this segment accounts for.
    pub fn source_text(&self) -> &str {
        match self {
            EditSegment::Match(text) | EditSegment::Insert(text) => text,
            EditSegment::Delete(_) => "",
            EditSegment::Substitute { source, .. } => source,
        }
    }

    /// Join two adjacent segments of the same kind into one.
    ///
    /// Returns `None` when the kinds differ. Substitutions are rebuilt
    /// through [`EditSegment::substitution`].
    pub fn merge(&self, next: &EditSegment) -> Option<EditSegment> {
        match (self, next) {
            (EditSegment::Match(a), EditSegment::Match(b)) => {
                Some(EditSegment::Match(format!("{a}{b}")))
            }
            (EditSegment::Delete(a), EditSegment::Delete(b)) => {
                Some(EditSegment::Delete(format!("{a}{b}")))
            }
            (EditSegment::Insert(a), EditSegment::Insert(b)) => {
                Some(EditSegment::Insert(format!("{a}{b}")))
            }
            (
                EditSegment::Substitute { target: t1, source: s1 },
                EditSegment::Substitute { target: t2, source: s2 },
            ) => Some(EditSegment::substitution(
                format!("{t1}{t2}"),
                format!("{s1}{s2}"),
            )),
            _ => None,
        }
    }

    /// Fold a delete/insert pair (in either order) into a single
    /// substitution. The deleted text always lands on the target side.
    pub fn fold(&self, next: &EditSegment) -> Option<EditSegment> {
        match (self, next) {
            (EditSegment::Delete(deleted), EditSegment::Insert(inserted))
            | (EditSegment::Insert(inserted), EditSegment::Delete(deleted)) => {
                Some(EditSegment::substitution(deleted.as_str(), inserted.as_str()))
            }
            _ => None,
        }
    }

    /// Whether the segment satisfies its own invariant.
    ///
    /// Only substitutions carry one: both sides have the same character
    /// count, neither contains the other, and they share no character.
    pub fn is_well_formed(&self) -> bool {
        let EditSegment::Substitute { target, source } = self else {
            return true;
        };
        if source.contains(target.as_str()) || target.contains(source.as_str()) {
            return false;
        }
        if source.chars().count() != target.chars().count() {
            return false;
        }
        !source.chars().any(|c| target.contains(c))
    }
}

impl fmt::Display for EditSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.kind().tag();
        match self {
            EditSegment::Match(text) | EditSegment::Delete(text) | EditSegment::Insert(text) => {
                write!(f, "{tag}({text})")
            }
            EditSegment::Substitute { target, source } => write!(f, "{tag}({target}/{source})"),
        }
    }
}
