//! Main scan loop. Each construct has its handler in a sibling module.

use crate::source::Source;
use crate::tables::{is_quote, is_space, is_special, BLANK_CHARS};
use jss_core::Result;

pub(crate) struct Scanner {
    pub(crate) src: Source,
    pub(crate) pos: usize,
    out: String,
    /// Last character written to `out`.
    pub(crate) last: Option<char>,
}

impl Scanner {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            src: Source::new(text),
            pos: 0,
            out: String::with_capacity(text.len()),
            last: None,
        }
    }

    pub(crate) fn emit(&mut self, ch: char) {
        self.out.push(ch);
        self.last = Some(ch);
    }

    pub(crate) fn emit_str(&mut self, text: &str) {
        if let Some(ch) = text.chars().next_back() {
            self.out.push_str(text);
            self.last = Some(ch);
        }
    }

    /// Copy `start..end` of the source to the output.
    pub(crate) fn emit_range(&mut self, start: usize, end: usize) {
        let chars = self.src.slice(start, end);
        if let Some(&ch) = chars.last() {
            self.out.extend(chars);
            self.last = Some(ch);
        }
    }

    pub(crate) fn run(mut self) -> Result<String> {
        let len = self.src.len();
        while self.pos < len {
            self.copy_boring_run();
            let Some(ch) = self.src.get(self.pos) else {
                break;
            };

            if ch == '/'
                && (self.skip_block_comment()?
                    || self.skip_line_comment()?
                    || self.copy_regex_literal())
            {
                continue;
            }
            if is_quote(ch) {
                self.copy_string_literal(ch);
                continue;
            }
            if is_space(ch) {
                self.collapse_whitespace();
                continue;
            }

            self.emit(ch);
            self.pos += 1;
        }
        Ok(self.out.trim_matches(BLANK_CHARS).to_string())
    }

    /// Identifiers, numbers and other characters outside the special set.
    fn copy_boring_run(&mut self) {
        let start = self.pos;
        let run = self.src.run_len(start, |c| !is_special(c));
        if run > 0 {
            self.emit_range(start, start + run);
            self.pos += run;
        }
    }
}
