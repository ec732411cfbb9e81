//! Log output for the CLI.
//!
//! Controlled by environment variables:
//!
//! ```bash
//! JSSTRIP_LOG=debug jsstrip src/ -o dist/
//! JSSTRIP_LOG=info JSSTRIP_LOG_FORMAT=json jsstrip src/
//! ```
//!
//! The subscriber is only installed when `JSSTRIP_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("JSSTRIP_LOG_FORMAT").unwrap_or_default())
    }
}

/// `JSSTRIP_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("JSSTRIP_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber, writing to stderr so stdout stays clean
/// for stripped output.
pub fn init_tracing() {
    if std::env::var("JSSTRIP_LOG").is_err() && std::env::var("RUST_LOG").is_err() {
        return;
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr);
    match LogFormat::from_env() {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
    }
}
