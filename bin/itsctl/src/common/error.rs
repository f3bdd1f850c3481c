use alloy_primitives::hex::FromHexError;
use interchain_deploy::{ConfigError, DecodeError, ExecuteError};

/// Error types for the itsctl commands
#[derive(Debug, thiserror::Error)]
pub enum ItsError {
    /// Configuration could not be loaded
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Payload could not be decoded
    #[error("Malformed payload: {0}")]
    Decode(#[from] DecodeError),

    /// The executor rejected the call
    #[error("Execution rejected: {0}")]
    Execute(#[from] ExecuteError),

    /// Failed to read or write a file
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid hex string
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] FromHexError),

    /// Output could not be serialized
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the itsctl commands
pub type Result<T> = std::result::Result<T, ItsError>;
