use crate::position::Position;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("unterminated block comment starting at {position}")]
    UnterminatedBlockComment { position: Position },
    #[error("unterminated NOCOMPRESS block starting at {position}")]
    UnterminatedNocompressBlock { position: Position },
    #[error("unterminated line comment starting at {position}")]
    UnterminatedLineComment { position: Position },
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StripError {
    /// Position of the offending construct, for scanner errors.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::UnterminatedBlockComment { position }
            | Self::UnterminatedNocompressBlock { position }
            | Self::UnterminatedLineComment { position } => Some(*position),
            _ => None,
        }
    }

    /// True for malformed-input errors raised by the scanner.
    pub fn is_malformed_input(&self) -> bool {
        self.position().is_some()
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
