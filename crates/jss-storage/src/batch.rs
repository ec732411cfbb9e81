//! Stripping single files and whole directory trees.

use crate::source_fs::{mirror_path, output_path_for, SourceFs};
use jss_core::error::{Result, StripError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Whether results are written or only checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    Check,
}

/// Outcome for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    /// Where the result was written; `None` in check mode or on failure.
    pub output: Option<PathBuf>,
    pub original_len: usize,
    pub compressed_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    fn failed(input: PathBuf, err: &StripError) -> Self {
        Self {
            input,
            output: None,
            original_len: 0,
            compressed_len: 0,
            error: Some(err.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of a batch run, files in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn original_len(&self) -> usize {
        self.files.iter().map(|f| f.original_len).sum()
    }

    pub fn compressed_len(&self) -> usize {
        self.files.iter().map(|f| f.compressed_len).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SourceFs {
    /// Strip one file. With `WriteMode::Check` nothing is written.
    pub async fn strip_file(&self, input: &Path, output: &Path, mode: WriteMode) -> Result<FileReport> {
        let source = self.read_source(input).await?;
        let result = jss_compactor::compress_with_stats(&source)?;
        let output = match mode {
            WriteMode::Write => {
                self.write_output(output, &result.output).await?;
                Some(output.to_path_buf())
            }
            WriteMode::Check => None,
        };
        tracing::info!(
            input = %input.display(),
            original = result.original_len,
            compressed = result.compressed_len,
            "stripped"
        );
        Ok(FileReport {
            input: input.to_path_buf(),
            output,
            original_len: result.original_len,
            compressed_len: result.compressed_len,
            error: None,
        })
    }
}

/// Strip every source under `root`.
///
/// Results go to the mirrored location under `out_dir`, or next to each input
/// with the configured suffix. A failing file is recorded in the report and
/// does not stop the others.
pub async fn strip_tree(
    sfs: Arc<SourceFs>,
    root: &Path,
    out_dir: Option<&Path>,
    mode: WriteMode,
) -> Result<BatchReport> {
    let inputs = sfs.collect_sources(root).await?;
    tracing::info!(root = %root.display(), files = inputs.len(), "collected sources");

    let permits = Arc::new(Semaphore::new(sfs.config().concurrency));
    let mut tasks = JoinSet::new();
    for (idx, input) in inputs.into_iter().enumerate() {
        let output = match out_dir {
            Some(dir) => mirror_path(&input, root, dir),
            None => output_path_for(&input, &sfs.config().output_suffix),
        };
        let sfs = Arc::clone(&sfs);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await;
            let report = match sfs.strip_file(&input, &output, mode).await {
                Ok(report) => report,
                Err(err) => {
                    tracing::warn!(input = %input.display(), error = %err, "failed to strip");
                    FileReport::failed(input, &err)
                }
            };
            (idx, report)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (idx, report) = joined.map_err(|e| StripError::Other(e.into()))?;
        results.push((idx, report));
    }
    results.sort_by_key(|(idx, _)| *idx);

    Ok(BatchReport {
        files: results.into_iter().map(|(_, report)| report).collect(),
    })
}
