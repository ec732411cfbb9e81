//! Whitespace collapsing.
//!
//! Each whitespace character is looked at on its own: it is dropped when the
//! character before it (already emitted) or after it (in the input) is
//! special, otherwise it becomes a single space. A run therefore shrinks to
//! whatever its last character decides.

use crate::scanner::Scanner;
use crate::tables::{is_doubling_op, is_special};

impl Scanner {
    pub(crate) fn collapse_whitespace(&mut self) {
        let next = self.src.get(self.pos + 1);
        self.pos += 1;

        if let Some(next) = next {
            if !self.separates_doubled_op(next)
                && (is_special(next) || self.last.is_some_and(is_special))
            {
                return;
            }
        }
        self.emit(' ');
    }

    /// `a + ++b` must not become `a+++b`.
    fn separates_doubled_op(&self, next: char) -> bool {
        self.last == Some(next) && is_doubling_op(next)
    }
}
