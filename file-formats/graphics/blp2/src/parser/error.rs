use thiserror::Error;

/// Errors that appears when loading from filesystem
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file was read but is not a valid BLP2 file
    #[error("Failed to parse {0}: {1}")]
    Parsing(std::path::PathBuf, Error),
    /// File system error when reading the file
    #[error("File system error with file {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
}

/// Errors that BLP2 parser can produce
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid magic bytes in the header
    #[error("Unexpected magic value {0}. The file format is not BLP2 or not supported.")]
    WrongMagic(String),
    /// Version field other than the supported one
    #[error("Unsupported BLP2 version {0}")]
    UnsupportedVersion(i32),
    /// Unknown pixel format tag
    #[error("Unknown color format tag: {0}")]
    UnknownFormat(u8),
    /// Unknown compression tag
    #[error("Unknown compression tag: {0}")]
    UnknownCompression(u8),
    /// Unknown mipmap mode tag
    #[error("Unknown mipmap mode tag: {0}")]
    UnknownMipMapMode(u8),
    /// Width or height below 1
    #[error("Invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Width field as stored
        width: i32,
        /// Height field as stored
        height: i32,
    },
    /// Offset and size tables disagree on the amount of levels
    #[error("Mipmap tables are malformed: {offsets} offsets but {sizes} sizes")]
    MismatchedMipTables {
        /// Used entries of the offset table
        offsets: usize,
        /// Used entries of the size table
        sizes: usize,
    },
    /// The header references no level at all
    #[error("The file has no mipmap levels")]
    NoMipmaps,
    /// Level data lies outside of the file or overlaps the header
    #[error("Part of image exceeds bounds of file at offset {offset} with size {size}")]
    OutOfBounds {
        /// Offset where the out of bounds access occurred
        offset: usize,
        /// Size of data that was attempted to be read
        size: usize,
    },
    /// Unexpected end of file while parsing
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// Parser error with context information
    #[error("Context: {0}. Error: {1}")]
    Context(String, Box<Self>),
}

impl Error {
    /// Add context information to an error
    pub fn with_context(self, context: &str) -> Self {
        Error::Context(context.to_owned(), Box::new(self))
    }

    /// The error without the context layers
    pub fn root(&self) -> &Self {
        match self {
            Error::Context(_, inner) => inner.root(),
            other => other,
        }
    }
}
