//! Whole-file decode and encode, and interop with the `image` crate

use crate::convert::{self, blp_to_levels, levels_to_blp};
use crate::encode::encode_blp;
use crate::error::Result;
use crate::options::{DecodeOptions, EncodeOptions};
use crate::parser::{load_blp_with, parse_blp_with};
use crate::types::*;
use ::image::{DynamicImage, RgbaImage};
use log::*;
use std::path::Path;

/// Decode a BLP2 file from bytes into RGBA levels
pub fn decode_texture(input: &[u8], options: &DecodeOptions) -> Result<BlpTexture> {
    let file = parse_blp_with(input, options)?;
    texture_from_file(file)
}

/// Read and decode a BLP2 file from the file system
pub fn load_texture<Q>(path: Q, options: &DecodeOptions) -> Result<BlpTexture>
where
    Q: AsRef<Path>,
{
    let file = load_blp_with(path, options)?;
    texture_from_file(file)
}

/// Decode the levels of an already parsed file
pub fn texture_from_file(file: BlpFile) -> Result<BlpTexture> {
    let levels = blp_to_levels(&file)?;
    debug!("Decoded {} levels", levels.len());
    Ok(BlpTexture {
        header: file.header,
        palette: file.palette,
        levels,
    })
}

/// Encode caller supplied levels into the bytes of a BLP2 file. The first
/// level is the base, the rest are only used for handmade mipmaps.
pub fn encode_texture(levels: Vec<MipLevel>, options: &EncodeOptions) -> Result<Vec<u8>> {
    let file = levels_to_blp(levels, options)?;
    Ok(encode_blp(&file)?)
}

/// Convert an image of any color type into a BLP2 file
pub fn image_to_blp(image: DynamicImage, options: &EncodeOptions) -> Result<BlpFile> {
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    let rgba = rgba.into_raw();
    let actual = rgba.len() / 4;
    let base = MipLevel::from_rgba(width, height, rgba).ok_or(convert::Error::MismatchSizes {
        level: 0,
        width,
        height,
        actual,
    })?;
    Ok(levels_to_blp(vec![base], options)?)
}

/// Take a decoded level as an RGBA image
pub fn blp_to_image(texture: &BlpTexture, level: usize) -> Result<DynamicImage> {
    let image = texture
        .level(level)
        .ok_or(convert::Error::MissingImage(level))?;
    let rgba = RgbaImage::from_raw(image.width, image.height, image.rgba.clone()).ok_or(
        convert::Error::MismatchSizes {
            level,
            width: image.width,
            height: image.height,
            actual: image.rgba.len() / 4,
        },
    )?;
    Ok(DynamicImage::ImageRgba8(rgba))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlpError;
    use crate::convert::DxtnFormat;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_solid_red_dxt5() {
        let options = EncodeOptions::dxt(DxtnFormat::Dxt5, 8);
        let bytes = encode_texture(vec![MipLevel::filled(4, 4, [255, 0, 0, 255])], &options).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE + 16);

        let texture = decode_texture(&bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(texture.header.mipmap_offsets, vec![148]);
        assert_eq!(texture.header.mipmap_sizes, vec![16]);
        assert_eq!(texture.mipmap_count(), 1);
        for pixel in texture.levels[0].pixels() {
            assert!(pixel[0] >= 250 && pixel[1] <= 5 && pixel[2] <= 5);
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_image_interop() {
        let image = DynamicImage::ImageRgb8(::image::RgbImage::from_pixel(
            3,
            2,
            ::image::Rgb([1, 2, 3]),
        ));
        let file = image_to_blp(image, &EncodeOptions::argb8888(8)).unwrap();
        let texture = texture_from_file(file).unwrap();
        let decoded = blp_to_image(&texture, 0).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert!(decoded.pixels().all(|p| p.0 == [1, 2, 3, 255]));

        assert!(matches!(
            blp_to_image(&texture, 1),
            Err(BlpError::Convert(convert::Error::MissingImage(1)))
        ));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(0, 3));
        assert!(matches!(
            image_to_blp(image, &EncodeOptions::argb8888(8)),
            Err(BlpError::Convert(convert::Error::MismatchSizes {
                width: 0,
                height: 3,
                actual: 0,
                ..
            }))
        ));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_texture(b"not a texture", &DecodeOptions::default()),
            Err(BlpError::Parse(_))
        ));
    }
}
