//! Shared types for jsstrip: errors, source positions and configuration.

pub mod config;
pub mod error;
pub mod position;

pub use config::StripConfig;
pub use error::{Result, StripError};
pub use position::Position;
