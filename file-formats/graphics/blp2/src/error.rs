//! Crate level error wrapping the errors of every stage

use thiserror::Error;

/// Any failure of a whole-file decode or encode
#[derive(Debug, Error)]
pub enum BlpError {
    /// The bytes are not a valid BLP2 file
    #[error("{0}")]
    Parse(#[from] crate::parser::Error),
    /// The file couldn't be read or parsed
    #[error("{0}")]
    Load(#[from] crate::parser::LoadError),
    /// Pixel content couldn't be converted
    #[error("{0}")]
    Convert(#[from] crate::convert::Error),
    /// The file couldn't be serialized or written
    #[error("{0}")]
    Encode(#[from] crate::encode::Error),
}

/// Result type of whole-file operations
pub type Result<T> = std::result::Result<T, BlpError>;
