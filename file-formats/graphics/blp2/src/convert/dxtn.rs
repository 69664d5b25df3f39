use super::error::{CollaboratorFailure, Error};
use crate::types::*;
use log::*;
use std::borrow::Cow;

/// Block fitting algorithm used when compressing DXT levels
pub use texpresso::Algorithm as DxtAlgorithm;

/// Size of the pixel blocks DXT compresses
pub const DXT_BLOCK_DIM: u32 = 4;

/// Which compression algorithm is used to compress the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxtnFormat {
    /// DXT1 compression (BC1)
    Dxt1,
    /// DXT3 compression (BC2)
    Dxt3,
    /// DXT5 compression (BC3)
    Dxt5,
}

impl From<DxtnFormat> for texpresso::Format {
    fn from(v: DxtnFormat) -> texpresso::Format {
        match v {
            DxtnFormat::Dxt1 => texpresso::Format::Bc1,
            DxtnFormat::Dxt3 => texpresso::Format::Bc2,
            DxtnFormat::Dxt5 => texpresso::Format::Bc3,
        }
    }
}

impl From<DxtnFormat> for Compression {
    fn from(v: DxtnFormat) -> Compression {
        match v {
            DxtnFormat::Dxt1 => Compression::Dxt1,
            DxtnFormat::Dxt3 => Compression::Dxt3,
            DxtnFormat::Dxt5 => Compression::Dxt5,
        }
    }
}

impl DxtnFormat {
    /// DXT variant selected by a compression tag
    pub fn from_compression(compression: Compression) -> Option<Self> {
        match compression {
            Compression::Dxt1 => Some(DxtnFormat::Dxt1),
            Compression::Dxt3 => Some(DxtnFormat::Dxt3),
            Compression::Dxt5 => Some(DxtnFormat::Dxt5),
            _ => None,
        }
    }

    /// Returns the block size in bytes for this DXT format
    pub fn block_size(&self) -> usize {
        match self {
            DxtnFormat::Dxt1 => 8,
            DxtnFormat::Dxt3 => 16,
            DxtnFormat::Dxt5 => 16,
        }
    }

    /// Bytes of one row of blocks for a level of the given width
    pub fn block_row_size(&self, width: u32) -> usize {
        width.div_ceil(DXT_BLOCK_DIM) as usize * self.block_size()
    }
}

/// Decompress a DXT level into RGBA pixels
pub fn dxtn_to_rgba(
    content: &[u8],
    format: DxtnFormat,
    width: u32,
    height: u32,
    level: usize,
) -> Result<Vec<u8>, Error> {
    let decoder: texpresso::Format = format.into();
    let required_size = decoder.compressed_size(width as usize, height as usize);

    // Small mipmaps are often stored with fewer bytes than their blocks
    // need, the missing blocks decode from zeros. Anything shorter than
    // that is a broken level.
    let compressed: Cow<'_, [u8]> = if content.len() < required_size {
        let below_block = width < DXT_BLOCK_DIM || height < DXT_BLOCK_DIM;
        let missing = required_size - content.len();
        if !below_block && missing > format.block_row_size(width) {
            return Err(Error::TruncatedLevel {
                level,
                expected: required_size,
                actual: content.len(),
            });
        }
        warn!(
            "Mipmap {level} has {} bytes, {required_size} required for {width}x{height}, padding with zeros",
            content.len()
        );
        let mut padded = vec![0u8; required_size];
        padded[..content.len()].copy_from_slice(content);
        Cow::Owned(padded)
    } else {
        Cow::Borrowed(content)
    };

    let mut output = vec![0; width as usize * height as usize * 4];
    decoder.decompress(&compressed, width as usize, height as usize, &mut output);
    Ok(output)
}

/// Compress RGBA pixels of a level. Levels smaller than a block are first
/// padded to a whole block by repeating their edge pixels.
pub fn rgba_to_dxtn(
    image: &MipLevel,
    format: DxtnFormat,
    algorithm: DxtAlgorithm,
    level: usize,
) -> Result<Vec<u8>, Error> {
    let expected = image.pixel_count() * 4;
    if !image.is_consistent() {
        return Err(Error::collaborator(
            level,
            ColorFormat::Dxt,
            CollaboratorFailure::Dxt {
                expected,
                actual: image.rgba.len(),
            },
        ));
    }

    let width = image.width.max(DXT_BLOCK_DIM);
    let height = image.height.max(DXT_BLOCK_DIM);
    let rgba: Cow<'_, [u8]> = if (width, height) == (image.width, image.height) {
        Cow::Borrowed(&image.rgba)
    } else {
        trace!(
            "Padding mipmap {level} from {}x{} to {width}x{height}",
            image.width, image.height
        );
        Cow::Owned(edge_pad(image, width, height))
    };

    let encoder: texpresso::Format = format.into();
    let mut output = vec![0; encoder.compressed_size(width as usize, height as usize)];
    let params = texpresso::Params {
        algorithm,
        ..Default::default()
    };
    encoder.compress(&rgba, width as usize, height as usize, params, &mut output);
    Ok(output)
}

fn edge_pad(image: &MipLevel, width: u32, height: u32) -> Vec<u8> {
    let mut padded = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        let src_y = y.min(image.height - 1) as usize;
        for x in 0..width {
            let src_x = x.min(image.width - 1) as usize;
            let start = (src_y * image.width as usize + src_x) * 4;
            padded.extend_from_slice(&image.rgba[start..start + 4]);
        }
    }
    padded
}
