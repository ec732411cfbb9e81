//! Human-readable locations inside a scanned source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in the input, counted in characters.
///
/// `line` and `column` are 1-based; `offset` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Locate a character offset inside `chars`.
    ///
    /// Offsets past the end clamp to the position just after the last character.
    pub fn locate(chars: &[char], offset: usize) -> Self {
        let end = offset.min(chars.len());
        let mut line = 1;
        let mut column = 1;
        for &ch in &chars[..end] {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { offset, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {} (offset {})", self.line, self.column, self.offset)
    }
}
