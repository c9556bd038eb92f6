// Character-level helpers for typed text: counting, prefix slicing and
// locating the word under the cursor. All positions are in characters, not
// bytes.

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `n` characters of `text` (all of it if shorter).
pub fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// The text from character index `n` onwards (empty if `text` is shorter).
pub fn char_suffix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte_idx, _)) => &text[byte_idx..],
        None => "",
    }
}

/// Length, in characters, of the common prefix of `a` and `b`.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// The word being typed at the end of `buffer`: everything after the last
/// space, or the whole buffer when it holds no space.
pub fn last_word(buffer: &str) -> &str {
    match buffer.rfind(' ') {
        Some(idx) => &buffer[idx + 1..],
        None => buffer,
    }
}
