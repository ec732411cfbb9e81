//! Quoted strings and template literals.

use crate::scanner::Scanner;

impl Scanner {
    /// Copy the literal opened by `quote` at the cursor. Backslash-newline
    /// continuations are removed so the literal ends up on one line. A literal
    /// with no closing quote runs to the end of the input.
    pub(crate) fn copy_string_literal(&mut self, quote: char) {
        let start = self.pos;
        let mut literal = String::new();
        literal.push(quote);

        let mut idx = start + 1;
        loop {
            let Some(ch) = self.src.get(idx) else {
                tracing::debug!(
                    offset = start,
                    %quote,
                    "unterminated string literal, copying to end of input"
                );
                break;
            };
            if ch == quote {
                literal.push(ch);
                idx += 1;
                break;
            }
            if ch == '\\' {
                match self.src.get(idx + 1) {
                    Some('\n') => {
                        idx += 2;
                        continue;
                    }
                    Some(next) if next == quote || next == '\\' => {
                        literal.push(ch);
                        literal.push(next);
                        idx += 2;
                        continue;
                    }
                    _ => {}
                }
            }
            literal.push(ch);
            idx += 1;
        }

        self.emit_str(&literal);
        self.pos = idx;
    }
}
