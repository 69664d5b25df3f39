/// Error types for BLP encoding operations
pub mod error;

use crate::array::encode_sentinel_array;
use crate::types::*;
use bytes::{BufMut, BytesMut};
pub use error::Error;
use log::*;
use std::path::Path;

/// Write down the file to the file system
pub fn save_blp<Q>(image: &BlpFile, path: Q) -> Result<(), Error>
where
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = encode_blp(image)?;
    std::fs::write(path, bytes).map_err(|e| Error::FileSystem(path.to_owned(), e))?;
    debug!("Saved {}", path.display());
    Ok(())
}

/// Serialize the file into bytes: header, padded mipmap tables, palette and
/// the content of every level at its recorded offset.
pub fn encode_blp(image: &BlpFile) -> Result<Vec<u8>, Error> {
    let header = &image.header;
    if header.width > BLP_MAX_WIDTH {
        return Err(Error::WidthTooHigh(header.width));
    }
    if header.height > BLP_MAX_HEIGHT {
        return Err(Error::HeightTooHigh(header.height));
    }
    if image.images.len() > MIPMAP_SLOTS {
        return Err(Error::TooManyMipmaps(image.images.len()));
    }

    let mut output = BytesMut::with_capacity(image.file_size());
    encode_header(header, &mut output)?;

    if header.has_palette() {
        let palette = image.palette.as_ref().ok_or(Error::MissingPalette)?;
        output.put_slice(&palette.to_bytes());
    }
    debug_assert_eq!(output.len(), header.content_offset());

    for level in &image.images {
        let mipmap = level.index;
        let offset = header.mipmap_offsets.get(mipmap).copied().unwrap_or(0) as usize;
        if offset < output.len() {
            error!(
                "Offset of mipmap {mipmap} is {offset}, but {} bytes are already written",
                output.len()
            );
            return Err(Error::InvalidOffset {
                mipmap,
                offset,
                filled: output.len(),
            });
        }
        let in_header = header.mipmap_sizes.get(mipmap).copied().unwrap_or(0) as usize;
        if in_header != level.len() {
            return Err(Error::InvalidMipmapSize {
                mipmap,
                in_header,
                actual: level.len(),
            });
        }
        output.put_bytes(0, offset - output.len());
        trace!("Writing mipmap {mipmap}: offset {offset}, size {in_header}");
        output.put_slice(&level.content);
    }

    Ok(output.to_vec())
}

fn encode_header(header: &BlpHeader, output: &mut BytesMut) -> Result<(), Error> {
    output.put_slice(&BLP2_MAGIC);
    output.put_i32_le(header.version);
    output.put_u8(header.format.into());
    output.put_u8(header.alpha_size);
    output.put_u8(header.compression.into());
    output.put_u8(header.mipmap_mode.into());
    output.put_i32_le(header.width as i32);
    output.put_i32_le(header.height as i32);

    let offsets = encode_sentinel_array(&header.mipmap_offsets, MIPMAP_SLOTS, &MIPMAP_SENTINEL)?;
    let sizes = encode_sentinel_array(&header.mipmap_sizes, MIPMAP_SLOTS, &MIPMAP_SENTINEL)?;
    for value in offsets.into_iter().chain(sizes) {
        output.put_u32_le(value);
    }
    Ok(())
}
