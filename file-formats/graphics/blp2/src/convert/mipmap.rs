//! Construction of the mipmap chain for every [`MipMapMode`]

use super::error::{CollaboratorFailure, Error};
use crate::types::*;
use ::image::{RgbaImage, imageops::FilterType, imageops::resize};
use log::*;

/// Dimensions of the level following one of the given size
pub fn next_mipmap_size(width: u32, height: u32) -> (u32, u32) {
    ((width / 2).max(1), (height / 2).max(1))
}

/// Resample a level to the given size with nearest neighbour filtering.
/// `format` is the content the level is resampled for, failures carry it.
pub fn downsample_nearest(
    image: &MipLevel,
    width: u32,
    height: u32,
    level: usize,
    format: ColorFormat,
) -> Result<MipLevel, Error> {
    let resize_failure =
        || Error::collaborator(level, format, CollaboratorFailure::Resize { width, height });
    let source = RgbaImage::from_raw(image.width, image.height, image.rgba.clone())
        .ok_or_else(resize_failure)?;
    let resized = resize(&source, width, height, FilterType::Nearest);
    MipLevel::from_rgba(width, height, resized.into_raw()).ok_or_else(resize_failure)
}

/// Levels `[base, half, quarter, .., 1x1]`, each resampled from the previous one
pub fn generate_mipmaps(base: MipLevel, format: ColorFormat) -> Result<Vec<MipLevel>, Error> {
    let mut chain = vec![base];
    while let Some(last) = chain.last().filter(|l| l.width > 1 || l.height > 1) {
        let (width, height) = next_mipmap_size(last.width, last.height);
        let next = downsample_nearest(last, width, height, chain.len(), format)?;
        trace!("Generated mipmap {} of {width}x{height}", chain.len());
        chain.push(next);
    }
    Ok(chain)
}

/// Amount of levels a generated chain of the given base has
pub fn generated_chain_len(width: u32, height: u32) -> usize {
    let longest = width.max(height).max(1);
    (u32::BITS - longest.leading_zeros()) as usize
}

/// Turn the caller supplied levels into the chain that gets encoded
pub fn build_mip_chain(
    levels: Vec<MipLevel>,
    mode: MipMapMode,
    format: ColorFormat,
) -> Result<Vec<MipLevel>, Error> {
    let mut levels = levels.into_iter();
    let base = levels.next().ok_or(Error::NoLevels)?;
    match mode {
        MipMapMode::None => {
            let extra = levels.count();
            if extra > 0 {
                warn!("Mipmap mode is none, ignoring {extra} supplied levels past the base one");
            }
            Ok(vec![base])
        }
        MipMapMode::Generated => {
            let extra = levels.count();
            if extra > 0 {
                warn!("Mipmaps are generated, ignoring {extra} supplied levels past the base one");
            }
            generate_mipmaps(base, format)
        }
        MipMapMode::Handmade => {
            let mut chain = vec![base];
            for image in levels {
                let previous = &chain[chain.len() - 1];
                let (width, height) = next_mipmap_size(previous.width, previous.height);
                if (image.width, image.height) != (width, height) {
                    return Err(Error::InvalidHandmadeLevel {
                        level: chain.len(),
                        width,
                        height,
                        actual_width: image.width,
                        actual_height: image.height,
                    });
                }
                chain.push(image);
            }
            Ok(chain)
        }
    }
}
