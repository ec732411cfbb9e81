//! Regular-expression literals.
//!
//! Whether `/` starts a regex or is a division is decided by the token in
//! front of it, skipping whitespace: operators, opening brackets, separators
//! and a few keywords (`return /x/`) start a regex. Anything else, including
//! the start of the input, is taken as division.

use crate::scanner::Scanner;
use crate::tables::REGEX_STARTERS;

impl Scanner {
    fn follows_regex_starter(&self) -> bool {
        let end = self.src.skip_blanks_back(self.pos);
        end > 0 && REGEX_STARTERS.iter().any(|token| self.src.ends_with_at(end, token))
    }

    /// Copy a regex literal at the cursor verbatim. Returns `false` when the
    /// `/` is a division operator.
    pub(crate) fn copy_regex_literal(&mut self) -> bool {
        if !self.follows_regex_starter() {
            return false;
        }

        let start = self.pos;
        let mut idx = start + 1;
        let mut in_class = false;
        let end = loop {
            let Some(ch) = self.src.get(idx) else {
                tracing::debug!(
                    offset = start,
                    "unterminated regex literal, copying to end of input"
                );
                break self.src.len();
            };
            match ch {
                '/' if !in_class => break idx + 1,
                '\\' => idx += 2,
                '[' => {
                    in_class = true;
                    idx += 1;
                }
                ']' => {
                    in_class = false;
                    idx += 1;
                }
                _ => idx += 1,
            }
        };

        self.emit_range(start, end);
        self.pos = end;
        true
    }
}
