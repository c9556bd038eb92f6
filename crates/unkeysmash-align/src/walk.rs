// Memoized walk over the (target prefix, source prefix) alignment space.
//
// Each cell (t, s) holds every minimal, valid edit sequence explaining how
// target[..t] was typed as source[..s]. Cells are resolved top-down from
// (len(target), len(source)) with an explicit work stack, and each resolved
// cell is stored once in a table owned by the walk. Nothing is shared
// between walks.

use hashbrown::{HashMap, HashSet};
use log::{debug, trace};

use unkeysmash_core::{EditSegment, EditSequence};

use crate::config::ScoringConfig;

/// A set of distinct edit sequences. Order carries no meaning.
pub type EditSequenceSet = HashSet<EditSequence>;

/// State for a single top-level edit-sequence search.
pub struct EditSequenceWalk<'c> {
    target: Vec<char>,
    source: Vec<char>,
    config: &'c ScoringConfig,
    /// Resolved cells keyed by (target prefix length, source prefix length).
    memo: HashMap<(usize, usize), EditSequenceSet>,
    /// Scores of sequences already seen; sequences recur across cells.
    scores: HashMap<EditSequence, f64>,
}

impl<'c> EditSequenceWalk<'c> {
    pub fn new(target: &str, source: &str, config: &'c ScoringConfig) -> Self {
        Self {
            target: target.chars().collect(),
            source: source.chars().collect(),
            config,
            memo: HashMap::new(),
            scores: HashMap::new(),
        }
    }

    /// Resolve the full alignment and return its edit sequences.
    pub fn run(mut self) -> EditSequenceSet {
        let root = (self.target.len(), self.source.len());
        self.resolve(root);
        let cells = self.resolved_cells();
        let results = self.memo.remove(&root).unwrap_or_default();
        debug!(
            "walk {:?} -> {:?}: {} sequence(s), {} cell(s) resolved",
            self.target.iter().collect::<String>(),
            self.source.iter().collect::<String>(),
            results.len(),
            cells,
        );
        results
    }

    /// Number of cells resolved so far.
    pub fn resolved_cells(&self) -> usize {
        self.memo.len()
    }

    /// Fill the memo table until `root` is resolved.
    fn resolve(&mut self, root: (usize, usize)) {
        let mut pending = vec![root];
        while let Some(&(t, s)) = pending.last() {
            if self.memo.contains_key(&(t, s)) {
                pending.pop();
                continue;
            }
            if let Some(results) = self.terminal(t, s) {
                self.memo.insert((t, s), results);
                pending.pop();
                continue;
            }

            // Non-terminal cells always have t > 0 and s > 0.
            let missing: Vec<(usize, usize)> = [(t - 1, s), (t, s - 1), (t - 1, s - 1)]
                .into_iter()
                .filter(|cell| !self.memo.contains_key(cell))
                .collect();
            if missing.is_empty() {
                let results = self.step(t, s);
                self.memo.insert((t, s), results);
                pending.pop();
            } else {
                pending.extend(missing);
            }
        }
    }

    /// Resolve cells that need no smaller subproblem: pruned cells and the
    /// base cases. Returns `None` for cells that need the recursive step.
    fn terminal(&self, t: usize, s: usize) -> Option<EditSequenceSet> {
        if t.abs_diff(s) > self.config.walk_diff_cutoff() {
            trace!("pruned cell ({t}, {s})");
            return Some(EditSequenceSet::new());
        }
        if t == 0 && s == 0 {
            return Some(EditSequenceSet::new());
        }
        if t == 0 {
            let inserted: String = self.source[..s].iter().collect();
            return Some(singleton(EditSegment::Insert(inserted)));
        }
        if s == 0 {
            let deleted: String = self.target[..t].iter().collect();
            return Some(singleton(EditSegment::Delete(deleted)));
        }
        if self.target[..t] == self.source[..s] {
            let matched: String = self.target[..t].iter().collect();
            return Some(singleton(EditSegment::Match(matched)));
        }
        None
    }

    /// Extend the three smaller subproblems by one trailing segment each,
    /// normalize, drop invalid sequences and apply the score cutoff.
    fn step(&mut self, t: usize, s: usize) -> EditSequenceSet {
        let target_char = self.target[t - 1];
        let source_char = self.source[s - 1];
        let branches = [
            ((t - 1, s), EditSegment::Delete(target_char.to_string())),
            ((t, s - 1), EditSegment::Insert(source_char.to_string())),
            (
                (t - 1, s - 1),
                EditSegment::substitution(target_char.to_string(), source_char.to_string()),
            ),
        ];

        let mut results = EditSequenceSet::new();
        for (cell, segment) in branches {
            let Some(parents) = self.memo.get(&cell) else {
                continue;
            };
            for parent in parents {
                let candidate = parent.extended(segment.clone()).coalesced();
                if candidate.is_valid() {
                    results.insert(candidate);
                }
            }
        }

        match self.config.score_diff_cutoff() {
            Some(cutoff) => self.retain_best(results, cutoff),
            None => results,
        }
    }

    /// Keep only sequences scoring strictly below `best + cutoff`.
    fn retain_best(&mut self, results: EditSequenceSet, cutoff: f64) -> EditSequenceSet {
        if results.is_empty() {
            return results;
        }
        let scored: Vec<(EditSequence, f64)> = results
            .into_iter()
            .map(|sequence| {
                let score = self.cached_score(&sequence);
                (sequence, score)
            })
            .collect();
        let best = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::INFINITY, f64::min);
        scored
            .into_iter()
            .filter(|(_, score)| *score < best + cutoff)
            .map(|(sequence, _)| sequence)
            .collect()
    }

    fn cached_score(&mut self, sequence: &EditSequence) -> f64 {
        if let Some(&score) = self.scores.get(sequence) {
            return score;
        }
        let score = self.config.score(sequence);
        self.scores.insert(sequence.clone(), score);
        score
    }
}

fn singleton(segment: EditSegment) -> EditSequenceSet {
    let mut set = EditSequenceSet::new();
    set.insert(EditSequence::single(segment));
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(t: &str) -> EditSegment {
        EditSegment::Match(t.to_string())
    }

    fn sub(target: &str, source: &str) -> EditSegment {
        EditSegment::Substitute {
            target: target.to_string(),
            source: source.to_string(),
        }
    }

    fn set_of(sequences: Vec<Vec<EditSegment>>) -> EditSequenceSet {
        sequences.into_iter().map(EditSequence::from_segments).collect()
    }

    fn walk(target: &str, source: &str) -> EditSequenceSet {
        let config = ScoringConfig::default();
        EditSequenceWalk::new(target, source, &config).run()
    }

    #[test]
    fn identical_words_match_whole() {
        assert_eq!(walk("abcd", "abcd"), set_of(vec![vec![mat("abcd")]]));
    }

    #[test]
    fn empty_source_deletes_whole() {
        assert_eq!(
            walk("abcd", ""),
            set_of(vec![vec![EditSegment::Delete("abcd".to_string())]])
        );
    }

    #[test]
    fn empty_target_inserts_whole() {
        assert_eq!(
            walk("", "abcd"),
            set_of(vec![vec![EditSegment::Insert("abcd".to_string())]])
        );
    }

    #[test]
    fn both_empty_is_empty_set() {
        assert!(walk("", "").is_empty());
    }

    #[test]
    fn simple_substitution() {
        assert_eq!(walk("ae", "ac"), set_of(vec![vec![mat("a"), sub("e", "c")]]));
    }

    #[test]
    fn end_substitution() {
        assert_eq!(
            walk("helo", "helw"),
            set_of(vec![vec![mat("hel"), sub("o", "w")]])
        );
    }

    #[test]
    fn mid_substitution() {
        assert_eq!(
            walk("abcd", "ab_d"),
            set_of(vec![vec![mat("ab"), sub("c", "_"), mat("d")]])
        );
    }

    #[test]
    fn beginning_substitution() {
        assert_eq!(
            walk("abcd", "~bcd"),
            set_of(vec![vec![sub("a", "~"), mat("bcd")]])
        );
    }

    #[test]
    fn length_imbalance_beyond_cutoff_is_pruned() {
        let config = ScoringConfig::default().with_walk_diff_cutoff(2);
        let results = EditSequenceWalk::new("abcdef", "a", &config).run();
        assert!(results.is_empty());
    }

    #[test]
    fn pruning_applies_before_base_cases() {
        // Six characters against nothing exceeds the default cutoff of five.
        assert!(walk("abcdef", "").is_empty());
    }

    #[test]
    fn run_reports_consistent_sides() {
        for sequence in walk("keyboard", "kwyboars") {
            assert_eq!(sequence.target_text(), "keyboard");
            assert_eq!(sequence.source_text(), "kwyboars");
        }
    }

    #[test]
    fn score_cutoff_narrows_results() {
        let unfiltered = ScoringConfig::default()
            .with_score_diff_cutoff(None)
            .with_walk_diff_cutoff(2);
        let filtered = ScoringConfig::default().with_walk_diff_cutoff(2);
        let all = EditSequenceWalk::new("keyboard", "kwyboard", &unfiltered).run();
        let best = EditSequenceWalk::new("keyboard", "kwyboard", &filtered).run();
        let expected = EditSequence::from_segments(vec![mat("k"), sub("e", "w"), mat("yboard")]);
        assert!(best.contains(&expected));
        assert!(all.contains(&expected));
        assert!(best.len() <= all.len());
    }

    #[test]
    fn memo_table_is_filled_during_walk() {
        let config = ScoringConfig::default();
        let mut walk = EditSequenceWalk::new("ab", "ba", &config);
        assert_eq!(walk.resolved_cells(), 0);
        walk.resolve((2, 2));
        assert!(walk.resolved_cells() > 0);
        assert!(walk.memo.contains_key(&(2, 2)));
    }
}
