//! jsstrip file layer: reading sources, writing results, batch runs over
//! directory trees.

pub mod batch;
pub mod source_fs;

pub use batch::{strip_tree, BatchReport, FileReport, WriteMode};
pub use source_fs::{mirror_path, output_path_for, SourceFs};
