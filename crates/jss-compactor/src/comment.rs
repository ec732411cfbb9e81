//! Block and line comments, and `NOCOMPRESS` regions.

use crate::scanner::Scanner;
use crate::tables::BLANK_CHARS;
use jss_core::{Result, StripError};
use std::sync::LazyLock;

pub const BEGIN_NOCOMPRESS: &str = "/* BEGIN NOCOMPRESS */";
pub const END_NOCOMPRESS: &str = "/* END NOCOMPRESS */";

const BLOCK_CLOSE: [char; 2] = ['*', '/'];

static BEGIN_MARKER: LazyLock<Vec<char>> = LazyLock::new(|| BEGIN_NOCOMPRESS.chars().collect());
static END_MARKER: LazyLock<Vec<char>> = LazyLock::new(|| END_NOCOMPRESS.chars().collect());

impl Scanner {
    /// Drop a `/* ... */` comment at the cursor. `/*@` conditional
    /// compilation comments are left for the caller to copy as code.
    pub(crate) fn skip_block_comment(&mut self) -> Result<bool> {
        let start = self.pos;
        if self.src.get(start + 1) != Some('*') || self.src.get(start + 2) == Some('@') {
            return Ok(false);
        }
        let close = self
            .src
            .find(&BLOCK_CLOSE, start + 2)
            .ok_or_else(|| StripError::UnterminatedBlockComment {
                position: self.src.position(start),
            })?;
        let end = close + BLOCK_CLOSE.len();

        if self.src.slice(start, end) == BEGIN_MARKER.as_slice() {
            self.copy_nocompress_block(start, close)?;
        } else {
            self.pos = end;
        }
        Ok(true)
    }

    /// Copy everything up to the matching END marker, trimmed and on its own
    /// lines. Nested BEGIN/END pairs are balanced with a depth counter.
    fn copy_nocompress_block(&mut self, start: usize, close: usize) -> Result<()> {
        let mut depth = 0i32;
        let mut cursor = close;
        let end = loop {
            let from = cursor + 2;
            let end = self.src.find(&END_MARKER, from).ok_or_else(|| {
                StripError::UnterminatedNocompressBlock {
                    position: self.src.position(start),
                }
            })?;
            match self.src.find(&BEGIN_MARKER, from) {
                Some(begin) if begin < end => {
                    depth += 1;
                    cursor = begin;
                }
                _ => {
                    depth -= 1;
                    cursor = end;
                }
            }
            if depth < 0 {
                break end;
            }
        };

        let body: String = self.src.slice(start + BEGIN_MARKER.len(), end).iter().collect();
        tracing::debug!(
            offset = start,
            len = end - start,
            "copying NOCOMPRESS block verbatim"
        );
        self.emit('\n');
        self.emit_str(body.trim_matches(BLANK_CHARS));
        self.emit('\n');
        self.pos = end + END_MARKER.len();
        Ok(())
    }

    /// Drop a `//` comment, stopping at the newline so it is handled as
    /// whitespace.
    pub(crate) fn skip_line_comment(&mut self) -> Result<bool> {
        let start = self.pos;
        if self.src.get(start + 1) != Some('/') {
            return Ok(false);
        }
        let newline = self
            .src
            .find(&['\n'], start + 2)
            .ok_or_else(|| StripError::UnterminatedLineComment {
                position: self.src.position(start),
            })?;
        self.pos = newline;
        Ok(true)
    }
}
