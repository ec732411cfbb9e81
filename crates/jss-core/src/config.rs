use crate::error::{Result, StripError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the file layer and CLI. The scanner itself takes none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StripConfig {
    /// Extensions (with leading dot) picked up when walking a directory.
    pub extensions: Vec<String>,
    /// Inserted before the extension of derived output names.
    pub output_suffix: String,
    /// Skip inputs whose stem already ends with `output_suffix`.
    pub skip_minified: bool,
    /// Regular expressions matched against the path relative to the walk root.
    pub exclude: Vec<String>,
    /// Maximum number of files processed at once.
    pub concurrency: usize,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            extensions: vec![".js".into(), ".mjs".into(), ".cjs".into()],
            output_suffix: ".min".into(),
            skip_minified: true,
            exclude: Vec::new(),
            concurrency: 8,
        }
    }
}

impl StripConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StripError::Config(format!("read {}: {e}", path.display())))?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output_suffix.is_empty() {
            return Err(StripError::Config("output_suffix must not be empty".into()));
        }
        if self.concurrency == 0 {
            return Err(StripError::Config("concurrency must be at least 1".into()));
        }
        if let Some(ext) = self.extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(StripError::Config(format!("extension {ext:?} must start with '.'")));
        }
        self.exclude_patterns().map(|_| ())
    }

    /// Compile the `exclude` patterns.
    pub fn exclude_patterns(&self) -> Result<Vec<Regex>> {
        self.exclude
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| StripError::Config(format!("exclude pattern {p:?}: {e}")))
            })
            .collect()
    }

    /// Whether the file name carries one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|ext| name.len() > ext.len() && name.ends_with(ext.as_str()))
    }

    /// Whether the file looks like an output of a previous run (`app.min.js`).
    pub fn is_minified(&self, path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(self.output_suffix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = StripConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_suffix, ".min");
        assert_eq!(config.concurrency, 8);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = StripConfig::from_json(r#"{"exclude": ["^vendor/"]}"#).unwrap();
        assert_eq!(config.exclude, vec!["^vendor/".to_string()]);
        assert_eq!(config.extensions.len(), 3);
        assert!(config.skip_minified);
    }

    #[test]
    fn test_bad_exclude_pattern() {
        let err = StripConfig::from_json(r#"{"exclude": ["("]}"#).unwrap_err();
        assert!(matches!(err, StripError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_suffix_and_zero_concurrency() {
        let config = StripConfig { output_suffix: String::new(), ..Default::default() };
        assert!(config.validate().is_err());
        let config = StripConfig { concurrency: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_extension_without_dot() {
        let err = StripConfig::from_json(r#"{"extensions": ["js"]}"#).unwrap_err();
        assert!(err.to_string().contains("must start with '.'"));
    }

    #[test]
    fn test_invalid_json() {
        let err = StripConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, StripError::Serialization(_)));
    }

    #[test]
    fn test_matches_extension() {
        let config = StripConfig::default();
        assert!(config.matches_extension(Path::new("src/app.js")));
        assert!(config.matches_extension(Path::new("lib.mjs")));
        assert!(!config.matches_extension(Path::new("style.css")));
        assert!(!config.matches_extension(Path::new(".js")));
    }

    #[test]
    fn test_is_minified() {
        let config = StripConfig::default();
        assert!(config.is_minified(Path::new("app.min.js")));
        assert!(!config.is_minified(Path::new("app.js")));
        assert!(!config.is_minified(Path::new("admin.js")));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"output_suffix": ".stripped", "concurrency": 2}}"#).unwrap();
        let config = StripConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_suffix, ".stripped");
        assert_eq!(config.concurrency, 2);
    }

    #[test]
    fn test_from_missing_file() {
        let err = StripConfig::from_file("/nonexistent/jsstrip.json").unwrap_err();
        assert!(matches!(err, StripError::Config(_)));
    }
}
