use crate::array;
use crate::types::{ColorFormat, Compression};
use ::image::error::ImageError;
use thiserror::Error;

/// Failure reported by one of the external codecs
#[derive(Debug, Error)]
pub enum CollaboratorFailure {
    /// JPEG coding or resampling through the `image` crate failed
    #[error("{0}")]
    Image(#[from] ImageError),
    /// The DXT codec produced a buffer of unexpected length
    #[error("DXT codec produced {actual} bytes, {expected} expected")]
    Dxt {
        /// Bytes the level needs
        expected: usize,
        /// Bytes the codec produced
        actual: usize,
    },
    /// Resampling produced a buffer of unexpected length
    #[error("Resampling to {width}x{height} failed")]
    Resize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// The quantizer produced no colors
    #[error("Color quantizer produced an empty palette")]
    Quantizer,
}

/// Errors that can occur during conversion between levels and encoded content
#[derive(Debug, Error)]
pub enum Error {
    /// Format, compression and alpha size combination is not allowed
    #[error("Unsupported combination of format {format}, compression {compression} and alpha size {alpha_size}")]
    UnsupportedCombination {
        /// Requested pixel format
        format: ColorFormat,
        /// Requested compression
        compression: Compression,
        /// Requested alpha bits
        alpha_size: u8,
    },
    /// Packing or unpacking of index and alpha samples failed
    #[error("Packed array error: {0}")]
    Packed(#[from] array::Error),
    /// An external codec failed on a level
    #[error("Failed to convert mipmap {level} of {format} content: {source}")]
    Collaborator {
        /// Mipmap index
        level: usize,
        /// Pixel format of the level
        format: ColorFormat,
        /// Failure of the codec
        #[source]
        source: CollaboratorFailure,
    },
    /// The requested mipmap level does not exist
    #[error("There is no image in the BLP mipmaps level {0}!")]
    MissingImage(usize),
    /// Palette content without a palette
    #[error("Palette content requires a palette, but none is present")]
    MissingPalette,
    /// Pixel buffer doesn't match the level dimensions
    #[error("Header sizes for mipmap {level} are {width}x{height}, but there are {actual} pixels actually in content.")]
    MismatchSizes {
        /// Mipmap index
        level: usize,
        /// Expected width
        width: u32,
        /// Expected height
        height: u32,
        /// Pixels found
        actual: usize,
    },
    /// Encoded level is shorter than its dimensions require
    #[error("Mipmap {level} needs {expected} bytes, but only {actual} are stored")]
    TruncatedLevel {
        /// Mipmap index
        level: usize,
        /// Required bytes
        expected: usize,
        /// Stored bytes
        actual: usize,
    },
    /// Nothing to encode
    #[error("No levels were supplied")]
    NoLevels,
    /// Caller supplied level doesn't have the halved dimensions of its predecessor
    #[error("Handmade mipmap {level} is {actual_width}x{actual_height}, expected {width}x{height}")]
    InvalidHandmadeLevel {
        /// Mipmap index
        level: usize,
        /// Expected width
        width: u32,
        /// Expected height
        height: u32,
        /// Supplied width
        actual_width: u32,
        /// Supplied height
        actual_height: u32,
    },
    /// Image width exceeds the maximum supported value of 65,535 pixels
    #[error("Maximum value for width is 65,535, got {0}")]
    WidthTooLarge(u32),
    /// Image height exceeds the maximum supported value of 65,535 pixels
    #[error("Maximum value for height is 65,535, got {0}")]
    HeightTooLarge(u32),
    /// More levels than the mipmap tables can hold
    #[error("There are {0} mipmaps, but at most 16 are supported")]
    TooManyMipmaps(usize),
}

impl Error {
    /// Attach level and format context to a codec failure
    pub fn collaborator(
        level: usize,
        format: ColorFormat,
        source: impl Into<CollaboratorFailure>,
    ) -> Self {
        Error::Collaborator {
            level,
            format,
            source: source.into(),
        }
    }
}
