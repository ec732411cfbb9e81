//! Public entry points.

use crate::scanner::Scanner;
use jss_core::Result;
use serde::Serialize;

/// Stripped output with size statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StripResult {
    pub output: String,
    pub original_len: usize,
    pub compressed_len: usize,
    pub reduction_pct: f64,
}

impl StripResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.compressed_len as f64 / self.original_len as f64
    }
}

/// Remove comments and insignificant whitespace from JavaScript source.
///
/// Fails only on unterminated block comments and unbalanced
/// `NOCOMPRESS` markers. Unterminated strings and regex literals are copied
/// through to the end of the input.
pub fn compress(source: &str) -> Result<String> {
    Scanner::new(source).run()
}

/// Like [`compress`], also reporting byte sizes.
pub fn compress_with_stats(source: &str) -> Result<StripResult> {
    let output = compress(source)?;
    let original_len = source.len();
    let compressed_len = output.len();
    let reduction_pct = if original_len > 0 {
        (original_len.saturating_sub(compressed_len) as f64 / original_len as f64) * 100.0
    } else {
        0.0
    };
    tracing::trace!(original_len, compressed_len, "stripped source");

    Ok(StripResult {
        output,
        original_len,
        compressed_len,
        reduction_pct,
    })
}
