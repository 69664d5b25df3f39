use crate::array;
use thiserror::Error;

/// Errors that can occur during BLP encoding operations
#[derive(Debug, Error)]
pub enum Error {
    /// Image width exceeds BLP format maximum of 65,535 pixels
    #[error("BLP supports width up to 65,535, the width: {0}")]
    WidthTooHigh(u32),
    /// Image height exceeds BLP format maximum of 65,535 pixels
    #[error("BLP supports height up to 65,535, the height: {0}")]
    HeightTooHigh(u32),
    /// More levels than the header tables can reference
    #[error("BLP supports up to 16 mipmaps, got {0}")]
    TooManyMipmaps(usize),
    /// Palette format without a palette to write
    #[error("Palette content requires a palette, but none is present")]
    MissingPalette,
    /// Mipmap data offset is invalid or out of bounds
    #[error("Invalid offset {offset} for mipmap {mipmap}, filled bytes {filled}")]
    InvalidOffset {
        /// Index of the mipmap with invalid offset
        mipmap: usize,
        /// The invalid offset value
        offset: usize,
        /// Number of bytes already written
        filled: usize,
    },
    /// Mipmap size in header doesn't match actual data size
    #[error("Size of mipmap {mipmap} in header {in_header} doesn't match actual {actual}")]
    InvalidMipmapSize {
        /// Index of the mipmap with size mismatch
        mipmap: usize,
        /// Size declared in the header
        in_header: usize,
        /// Actual size of the mipmap data
        actual: usize,
    },
    /// Header tables don't fit their fixed size
    #[error("Mipmap table error: {0}")]
    Array(#[from] array::Error),
    /// Filesystem operation failed
    #[error("Failed to proceed {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
}
