//! Source file access.
//!
//! Reads and writes UTF-8 sources, derives output names and walks directory
//! trees for inputs according to [`StripConfig`].

use jss_core::error::{Result, StripError};
use jss_core::StripConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;

/// `dir/app.js` with suffix `.min` becomes `dir/app.min.js`.
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(name)
}

/// Place `input` (somewhere under `root`) at the same relative location
/// under `out_dir`.
pub fn mirror_path(input: &Path, root: &Path, out_dir: &Path) -> PathBuf {
    match input.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => out_dir.join(rel),
        _ => out_dir.join(input.file_name().unwrap_or(input.as_os_str())),
    }
}

/// Path relative to the walk root, with `/` separators.
fn relative_slash_path(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Config-aware file system access for the stripper.
pub struct SourceFs {
    config: StripConfig,
    exclude: Vec<Regex>,
}

impl SourceFs {
    pub fn new(config: StripConfig) -> Result<Self> {
        config.validate()?;
        let exclude = config.exclude_patterns()?;
        Ok(Self { config, exclude })
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    // ========== File Operations ==========

    /// Read a source file as UTF-8.
    pub async fn read_source(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .map_err(|e| StripError::Storage(format!("read {}: {e}", path.display())))
    }

    /// Write a result, creating parent directories.
    pub async fn write_output(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StripError::Storage(format!("mkdir {}: {e}", parent.display())))?;
        }
        fs::write(path, content)
            .await
            .map_err(|e| StripError::Storage(format!("write {}: {e}", path.display())))
    }

    // ========== Tree Walk ==========

    /// Whether a file found under `base` should be stripped.
    pub fn should_process(&self, base: &Path, path: &Path) -> bool {
        if !self.config.matches_extension(path) {
            return false;
        }
        if self.config.skip_minified && self.config.is_minified(path) {
            return false;
        }
        let rel = relative_slash_path(base, path);
        !self.exclude.iter().any(|re| re.is_match(&rel))
    }

    /// Recursively collect the sources under `root`, sorted by path.
    pub async fn collect_sources(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut out = Vec::new();
        self.walk(root, root, &mut out).await?;
        out.sort();
        Ok(out)
    }

    #[async_recursion::async_recursion]
    async fn walk(&self, base: &Path, current: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        let mut rd = fs::read_dir(current)
            .await
            .map_err(|e| StripError::Storage(format!("walk {}: {e}", current.display())))?;
        while let Some(entry) = rd
            .next_entry()
            .await
            .map_err(|e| StripError::Storage(format!("walk entry: {e}")))?
        {
            let path = entry.path();
            let is_dir = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                let rel = format!("{}/", relative_slash_path(base, &path));
                if self.exclude.iter().any(|re| re.is_match(&rel)) {
                    tracing::debug!(dir = %path.display(), "excluded directory");
                    continue;
                }
                self.walk(base, &path, out).await?;
            } else if self.should_process(base, &path) {
                out.push(path);
            } else {
                tracing::trace!(path = %path.display(), "skipping");
            }
        }
        Ok(())
    }
}
