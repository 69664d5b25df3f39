//! Conversion between encoded level content and RGBA pixels

/// Conversion for uncompressed BGRA content
pub mod argb8888;
/// Allowed format, compression and alpha size combinations
pub mod compat;
/// Conversion for DXT content
pub mod dxtn;
/// Error types for conversion operations
pub mod error;
/// Conversion for JPEG content
pub mod jpeg;
pub mod mipmap;
/// Conversion for palette content
pub mod palette;
pub mod quantize;

use crate::options::EncodeOptions;
use crate::types::*;
pub use compat::check_combination;
pub use dxtn::{DxtAlgorithm, DxtnFormat};
pub use error::{CollaboratorFailure, Error};
use log::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Decode every stored level of a parsed file, finest first
pub fn blp_to_levels(blp: &BlpFile) -> Result<Vec<MipLevel>, Error> {
    check_decodable(&blp.header, blp.palette.as_ref())?;

    #[cfg(feature = "parallel")]
    let levels = blp
        .images
        .par_iter()
        .map(|image| decode_level(&blp.header, blp.palette.as_ref(), image))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let levels = blp
        .images
        .iter()
        .map(|image| decode_level(&blp.header, blp.palette.as_ref(), image))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(levels)
}

/// Header combinations no level of the file can be decoded with. A
/// compression tag that doesn't fit the format is tolerated when the format
/// doesn't depend on it.
fn check_decodable(header: &BlpHeader, palette: Option<&Palette>) -> Result<(), Error> {
    let unsupported = || Error::UnsupportedCombination {
        format: header.format,
        compression: header.compression,
        alpha_size: header.alpha_size,
    };
    match header.format {
        ColorFormat::Dxt if DxtnFormat::from_compression(header.compression).is_none() => {
            return Err(unsupported());
        }
        ColorFormat::Palette => {
            if !compat::ALPHA_SIZES.contains(&header.alpha_size) {
                return Err(unsupported());
            }
            if palette.is_none() {
                return Err(Error::MissingPalette);
            }
        }
        _ => {}
    }
    if !compat::is_compression_allowed(header.format, header.compression) {
        warn!(
            "Compression {} is not expected for {} content, decoding anyway",
            header.compression, header.format
        );
    }
    Ok(())
}

/// Decode a single stored level. Its dimensions follow from the header and
/// the level index.
pub fn decode_level(
    header: &BlpHeader,
    palette: Option<&Palette>,
    image: &EncodedLevel,
) -> Result<MipLevel, Error> {
    let level = image.index;
    let (width, height) = header.mipmap_size(level);
    trace!(
        "Decoding mipmap {level}: {width}x{height} from {} bytes",
        image.len()
    );
    let rgba = match header.format {
        ColorFormat::Argb8888 => argb8888::argb8888_to_rgba(&image.content, width, height, level)?,
        ColorFormat::Dxt => {
            let format = DxtnFormat::from_compression(header.compression).ok_or(
                Error::UnsupportedCombination {
                    format: header.format,
                    compression: header.compression,
                    alpha_size: header.alpha_size,
                },
            )?;
            dxtn::dxtn_to_rgba(&image.content, format, width, height, level)?
        }
        ColorFormat::Palette => {
            let palette = palette.ok_or(Error::MissingPalette)?;
            palette::palette_to_rgba(
                &image.content,
                palette,
                header.alpha_size,
                width,
                height,
                level,
            )?
        }
        ColorFormat::Jpeg => jpeg::jpeg_to_rgba(&image.content, width, height, level)?,
    };
    let actual = rgba.len() / 4;
    MipLevel::from_rgba(width, height, rgba).ok_or(Error::MismatchSizes {
        level,
        width,
        height,
        actual,
    })
}

fn check_level(image: &MipLevel, level: usize) -> Result<(), Error> {
    if image.width > BLP_MAX_WIDTH {
        return Err(Error::WidthTooLarge(image.width));
    }
    if image.height > BLP_MAX_HEIGHT {
        return Err(Error::HeightTooLarge(image.height));
    }
    if !image.is_consistent() {
        return Err(Error::MismatchSizes {
            level,
            width: image.width,
            height: image.height,
            actual: image.rgba.len() / 4,
        });
    }
    Ok(())
}

/// Encode one level of the chain
pub fn encode_level(
    image: &MipLevel,
    palette: Option<&Palette>,
    options: &EncodeOptions,
    level: usize,
) -> Result<EncodedLevel, Error> {
    check_level(image, level)?;
    let content = match options.format {
        ColorFormat::Argb8888 => argb8888::rgba_to_argb8888(&image.rgba),
        ColorFormat::Dxt => {
            let format = DxtnFormat::from_compression(options.compression).ok_or(
                Error::UnsupportedCombination {
                    format: options.format,
                    compression: options.compression,
                    alpha_size: options.alpha_size,
                },
            )?;
            dxtn::rgba_to_dxtn(image, format, options.dxt_algorithm, level)?
        }
        ColorFormat::Palette => {
            let palette = palette.ok_or(Error::MissingPalette)?;
            palette::rgba_to_palette(image, palette, options.alpha_size)?
        }
        ColorFormat::Jpeg => jpeg::rgba_to_jpeg(image, options.jpeg_quality, level)?,
    };
    trace!(
        "Encoded mipmap {level} of {}x{} into {} bytes",
        image.width,
        image.height,
        content.len()
    );
    Ok(EncodedLevel {
        index: level,
        content,
    })
}

/// Build a complete file from caller supplied levels: the mipmap chain, the
/// palette and the encoded content of every level. Nothing is returned
/// unless every level converts.
pub fn levels_to_blp(levels: Vec<MipLevel>, options: &EncodeOptions) -> Result<BlpFile, Error> {
    check_combination(options.format, options.compression, options.alpha_size)?;
    for (i, image) in levels.iter().enumerate() {
        check_level(image, i)?;
    }

    let chain = mipmap::build_mip_chain(levels, options.mipmap_mode, options.format)?;
    if chain.len() > MIPMAP_SLOTS {
        return Err(Error::TooManyMipmaps(chain.len()));
    }
    debug!("Mipmap chain has {} levels", chain.len());

    // The palette comes from the base level only and is shared by the chain
    let palette = match options.format {
        ColorFormat::Palette => Some(palette::build_palette(&chain[0])?),
        _ => None,
    };

    let images = chain
        .iter()
        .enumerate()
        .map(|(i, image)| encode_level(image, palette.as_ref(), options, i))
        .collect::<Result<Vec<_>, _>>()?;

    let (mipmap_offsets, mipmap_sizes) = BlpFile::mipmap_tables(palette.is_some(), &images);
    let header = BlpHeader {
        version: BLP2_VERSION,
        format: options.format,
        alpha_size: options.alpha_size,
        compression: options.compression,
        mipmap_mode: options.mipmap_mode,
        width: chain[0].width,
        height: chain[0].height,
        mipmap_offsets,
        mipmap_sizes,
    };
    Ok(BlpFile {
        header,
        palette,
        images,
    })
}
