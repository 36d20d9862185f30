//! Error types for journali
//!
//! The entry store itself has no failure taxonomy (absent targets are
//! silently ignored); errors exist only at the process edge.

use thiserror::Error;

/// Main error type for the journali application
#[derive(Debug, Error)]
pub enum JournaliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournaliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournaliError::Config(_) => 2,
            _ => 1,
        }
    }
}

/// Result type using JournaliError
pub type Result<T> = std::result::Result<T, JournaliError>;
