// Correction plans: the keystrokes that rewrite a typed word into a chosen
// suggestion in place.

use unkeysmash_core::character::{char_len, char_prefix, char_suffix, common_prefix_len, last_word};

/// Backspaces and replacement text turning `current` into `intended`.
///
/// Positions count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionPlan {
    /// Index of the first character where the two words differ.
    pub mismatch: usize,
    /// Characters to erase from the end of the current word.
    pub backspaces: usize,
    /// Text to type after erasing.
    pub text: String,
}

impl CorrectionPlan {
    pub fn between(current: &str, intended: &str) -> Self {
        let mismatch = common_prefix_len(current, intended);
        Self {
            mismatch,
            backspaces: char_len(current) - mismatch,
            text: char_suffix(intended, mismatch).to_string(),
        }
    }

    /// Plan for replacing the last word of a typing buffer.
    pub fn for_buffer(buffer: &str, intended: &str) -> Self {
        Self::between(last_word(buffer), intended)
    }

    /// Whether the plan changes nothing.
    pub fn is_noop(&self) -> bool {
        self.backspaces == 0 && self.text.is_empty()
    }

    /// Apply the plan to `current`, as an editor would.
    pub fn apply(&self, current: &str) -> String {
        let kept = char_len(current).saturating_sub(self.backspaces);
        let mut result = char_prefix(current, kept).to_string();
        result.push_str(&self.text);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_from_first_mismatch() {
        let plan = CorrectionPlan::between("kwyb", "keyboard");
        assert_eq!(plan.mismatch, 1);
        assert_eq!(plan.backspaces, 3);
        assert_eq!(plan.text, "eyboard");
        assert_eq!(plan.apply("kwyb"), "keyboard");
    }

    #[test]
    fn completion_needs_no_backspaces() {
        let plan = CorrectionPlan::between("key", "keyboard");
        assert_eq!(plan.backspaces, 0);
        assert_eq!(plan.text, "board");
    }

    #[test]
    fn shorter_intended_word_only_erases() {
        let plan = CorrectionPlan::between("keeep", "kee");
        assert_eq!(plan.mismatch, 3);
        assert_eq!(plan.backspaces, 2);
        assert_eq!(plan.text, "");
        assert_eq!(plan.apply("keeep"), "kee");
    }

    #[test]
    fn identical_words_are_noop() {
        assert!(CorrectionPlan::between("same", "same").is_noop());
        assert!(!CorrectionPlan::between("same", "sane").is_noop());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let plan = CorrectionPlan::between("pää", "päivä");
        assert_eq!(plan.mismatch, 2);
        assert_eq!(plan.backspaces, 1);
        assert_eq!(plan.text, "ivä");
        assert_eq!(plan.apply("pää"), "päivä");
    }

    #[test]
    fn buffer_plan_targets_last_word() {
        let plan = CorrectionPlan::for_buffer("hello wrold", "world");
        assert_eq!(plan.backspaces, 4);
        assert_eq!(plan.text, "orld");
        assert_eq!(plan.apply("wrold"), "world");
    }
}
