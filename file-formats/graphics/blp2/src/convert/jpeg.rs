use super::error::Error;
use crate::types::*;
use ::image::{ExtendedColorType, ImageFormat, codecs::jpeg::JpegEncoder, load_from_memory_with_format};
use log::*;

/// Decode a JPEG level. The result always carries an alpha channel, opaque
/// unless the stream had one.
pub fn jpeg_to_rgba(content: &[u8], width: u32, height: u32, level: usize) -> Result<Vec<u8>, Error> {
    let jpeg = load_from_memory_with_format(content, ImageFormat::Jpeg)
        .map_err(|e| Error::collaborator(level, ColorFormat::Jpeg, e))?;
    let rgba = jpeg.into_rgba8();
    if rgba.dimensions() != (width, height) {
        return Err(Error::MismatchSizes {
            level,
            width,
            height,
            actual: rgba.width() as usize * rgba.height() as usize,
        });
    }
    Ok(rgba.into_raw())
}

/// Encode a level as a standalone JPEG stream. Alpha is dropped.
pub fn rgba_to_jpeg(image: &MipLevel, quality: u8, level: usize) -> Result<Vec<u8>, Error> {
    let rgb: Vec<u8> = image
        .rgba
        .chunks_exact(4)
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect();
    let mut content = vec![];
    JpegEncoder::new_with_quality(&mut content, quality)
        .encode(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| Error::collaborator(level, ColorFormat::Jpeg, e))?;
    trace!("Mipmap {level} compressed to {} JPEG bytes", content.len());
    Ok(content)
}
