// Edit sequences: ordered lists of segments that fully explain how a
// target word turned into the typed source text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::segment::EditSegment;

/// An ordered, immutable list of [`EditSegment`]s read left to right.
///
/// Concatenating the target side of every segment yields the target word,
/// and likewise for the source side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditSequence {
    segments: Vec<EditSegment>,
}

impl EditSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence holding exactly one segment.
    pub fn single(segment: EditSegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    /// Wrap segments as given, without merging or folding.
    pub fn from_segments(segments: Vec<EditSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[EditSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&EditSegment> {
        self.segments.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditSegment> {
        self.segments.iter()
    }

    /// Return a copy of this sequence with `segment` added at the end.
    ///
    /// When the current last segment and `segment` form a delete/insert
    /// pair, the last segment is replaced by their substitution instead
    /// of appending.
    pub fn extended(&self, segment: EditSegment) -> Self {
        let mut segments = self.segments.clone();
        let folded = segments.last().and_then(|last| last.fold(&segment));
        match folded {
            Some(folded) => {
                segments.pop();
                segments.push(folded);
            }
            None => segments.push(segment),
        }
        Self { segments }
    }

    /// Merge every run of adjacent same-kind segments into one segment.
    pub fn coalesced(self) -> Self {
        let mut merged: Vec<EditSegment> = Vec::with_capacity(self.segments.len());
        for segment in self.segments {
            let joined = merged.last().and_then(|prev| prev.merge(&segment));
            match joined {
                Some(joined) => {
                    merged.pop();
                    merged.push(joined);
                }
                None => merged.push(segment),
            }
        }
        Self { segments: merged }
    }

    /// Whether the sequence is a minimal, semantically valid alignment.
    ///
    /// Rejects malformed substitutions, adjacent delete/insert pairs, and
    /// substitutions that re-use the boundary character of a neighbouring
    /// delete or insert (those describe an edit with a simpler form).
    pub fn is_valid(&self) -> bool {
        if !self.segments.iter().all(EditSegment::is_well_formed) {
            return false;
        }
        self.segments
            .windows(2)
            .all(|pair| adjacent_pair_is_valid(&pair[0], &pair[1]))
    }

    /// Reconstruct the target string.
    pub fn target_text(&self) -> String {
        self.segments.iter().map(EditSegment::target_text).collect()
    }

    /// Reconstruct the source string.
    pub fn source_text(&self) -> String {
        self.segments.iter().map(EditSegment::source_text).collect()
    }
}

fn starts_with_first_char(text: &str, boundary: &str) -> bool {
    boundary.chars().next().is_some_and(|c| text.starts_with(c))
}

fn ends_with_last_char(text: &str, boundary: &str) -> bool {
    boundary.chars().next_back().is_some_and(|c| text.ends_with(c))
}

fn adjacent_pair_is_valid(prev: &EditSegment, curr: &EditSegment) -> bool {
    match (prev, curr) {
        (EditSegment::Delete(_), EditSegment::Insert(_))
        | (EditSegment::Insert(_), EditSegment::Delete(_)) => false,
        // subbing in the deleted text
        (EditSegment::Delete(deleted), EditSegment::Substitute { source, .. }) => {
            !starts_with_first_char(source, deleted)
        }
        // subbing out the inserted text
        (EditSegment::Insert(inserted), EditSegment::Substitute { target, .. }) => {
            !starts_with_first_char(target, inserted)
        }
        (EditSegment::Substitute { target, .. }, EditSegment::Insert(inserted)) => {
            !ends_with_last_char(target, inserted)
        }
        (EditSegment::Substitute { source, .. }, EditSegment::Delete(deleted)) => {
            !ends_with_last_char(source, deleted)
        }
        _ => true,
    }
}

impl FromIterator<EditSegment> for EditSequence {
    fn from_iter<I: IntoIterator<Item = EditSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EditSequence {
    type Item = &'a EditSegment;
    type IntoIter = std::slice::Iter<'a, EditSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for EditSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
