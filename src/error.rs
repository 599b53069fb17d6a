//! Error types for keyset generation and rendering.

use thiserror::Error;

/// Errors raised while generating, rendering or parsing a keyset.
#[derive(Error, Debug)]
pub enum KeygenError {
    /// The operating system random source could not supply key material
    #[error("secure random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),

    /// Writing the rendered keyset failed
    #[error("failed to write keyset: {0}")]
    Output(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("failed to serialize keyset: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Text input does not follow the keyset line format
    #[error("malformed keyset output: {0}")]
    Format(String),

    /// Decoded key material is unusable
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, KeygenError>;
