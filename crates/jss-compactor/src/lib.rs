//! jsstrip compactor: single-pass comment and whitespace stripper for JavaScript.
//!
//! The scanner walks the source once and classifies each position as:
//! 1. boring code (copied verbatim)
//! 2. block comment, including `/* BEGIN NOCOMPRESS */` regions copied as-is
//! 3. line comment
//! 4. regular-expression literal
//! 5. string or template literal
//! 6. whitespace (collapsed to one space or dropped)
//!
//! No syntax tree is built; every decision is local to the cursor.

pub mod pipeline;
pub mod tables;

mod comment;
mod regex_literal;
mod scanner;
mod source;
mod string_literal;
mod whitespace;

pub use comment::{BEGIN_NOCOMPRESS, END_NOCOMPRESS};
pub use jss_core::{Position, Result, StripError};
pub use pipeline::{compress, compress_with_stats, StripResult};
