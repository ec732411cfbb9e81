//! Random-access view of the input used by the scanner.

use crate::tables::{is_blank, BLANK_CHARS};
use jss_core::Position;

/// Input decoded into characters, leading whitespace stripped and a single
/// `\n` appended so that line scans always terminate.
pub(crate) struct Source {
    chars: Vec<char>,
    /// The stripped leading whitespace, kept for error positions.
    leading: Vec<char>,
}

impl Source {
    pub(crate) fn new(text: &str) -> Self {
        let body = text.trim_start_matches(BLANK_CHARS);
        let leading = text[..text.len() - body.len()].chars().collect();
        let mut chars = Vec::with_capacity(body.len() + 1);
        chars.extend(body.chars());
        chars.push('\n');
        Self { chars, leading }
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn get(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    /// Characters in `start..end`, clamped to the buffer.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &[char] {
        let end = end.min(self.chars.len());
        &self.chars[start.min(end)..end]
    }

    /// Index of the first occurrence of `needle` at or after `from`.
    pub(crate) fn find(&self, needle: &[char], from: usize) -> Option<usize> {
        if needle.is_empty() || from >= self.chars.len() {
            return None;
        }
        self.chars[from..]
            .windows(needle.len())
            .position(|w| w == needle)
            .map(|p| p + from)
    }

    /// Whether the text ending just before `end` ends with `token`.
    pub(crate) fn ends_with_at(&self, end: usize, token: &str) -> bool {
        let n = token.chars().count();
        if end > self.chars.len() || n > end {
            return false;
        }
        token.chars().eq(self.chars[end - n..end].iter().copied())
    }

    /// Start of the blank run that ends just before `idx`.
    pub(crate) fn skip_blanks_back(&self, idx: usize) -> usize {
        let mut k = idx.min(self.chars.len());
        while k > 0 && is_blank(self.chars[k - 1]) {
            k -= 1;
        }
        k
    }

    /// Length of the run at `start` whose characters satisfy `pred`.
    pub(crate) fn run_len(&self, start: usize, pred: impl Fn(char) -> bool) -> usize {
        self.chars
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|&&c| pred(c)).count())
    }

    /// Location of `offset` in the text as it was passed in, leading
    /// whitespace included.
    pub(crate) fn position(&self, offset: usize) -> Position {
        let original: Vec<char> = self.leading.iter().chain(&self.chars).copied().collect();
        Position::locate(&original, offset + self.leading.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_appends_newline() {
        let src = Source::new(" \t\n\0var a");
        assert_eq!(src.slice(0, src.len()).iter().collect::<String>(), "var a\n");
    }

    #[test]
    fn test_get_out_of_bounds() {
        let src = Source::new("ab");
        assert_eq!(src.get(2), Some('\n'));
        assert_eq!(src.get(3), None);
    }

    #[test]
    fn test_find() {
        let src = Source::new("a/*b*/c*/");
        assert_eq!(src.find(&['*', '/'], 0), Some(4));
        assert_eq!(src.find(&['*', '/'], 5), Some(7));
        assert_eq!(src.find(&['*', '/'], 8), None);
        assert_eq!(src.find(&['*', '/'], 100), None);
    }

    #[test]
    fn test_ends_with_at() {
        let src = Source::new("return /x/");
        assert!(src.ends_with_at(6, "return"));
        assert!(src.ends_with_at(6, "n"));
        assert!(!src.ends_with_at(5, "return"));
        assert!(!src.ends_with_at(0, "("));
    }

    #[test]
    fn test_skip_blanks_back() {
        let src = Source::new("a( \t\n/");
        assert_eq!(src.skip_blanks_back(5), 2);
        assert_eq!(src.skip_blanks_back(2), 2);
    }

    #[test]
    fn test_slice_clamps() {
        let src = Source::new("abc");
        assert_eq!(src.slice(2, 99), &['c', '\n']);
        assert!(src.slice(9, 99).is_empty());
    }

    #[test]
    fn test_position_counts_stripped_prefix() {
        let src = Source::new("\n \tab");
        assert_eq!(src.get(0), Some('a'));
        let p = src.position(1);
        assert_eq!(p, Position { offset: 4, line: 2, column: 5 });
    }

    #[test]
    fn test_multibyte_indexing() {
        let src = Source::new("π/τ");
        assert_eq!(src.get(1), Some('/'));
        assert_eq!(src.get(2), Some('τ'));
    }
}
