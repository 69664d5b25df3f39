use super::error::Error;
use log::*;

/// Exchange the first and third channel of every 4 byte pixel. The same
/// swap turns BGRA into RGBA and back.
pub fn swap_red_blue(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(4)
        .flat_map(|p| [p[2], p[1], p[0], p[3]])
        .collect()
}

/// Decode stored BGRA pixels of a level
pub fn argb8888_to_rgba(
    content: &[u8],
    width: u32,
    height: u32,
    level: usize,
) -> Result<Vec<u8>, Error> {
    let expected = width as usize * height as usize * 4;
    if content.len() < expected {
        return Err(Error::TruncatedLevel {
            level,
            expected,
            actual: content.len(),
        });
    }
    if content.len() > expected {
        trace!(
            "Mipmap {level} has {} bytes past its pixels, ignoring them",
            content.len() - expected
        );
    }
    Ok(swap_red_blue(&content[..expected]))
}

/// Encode RGBA pixels of a level as BGRA
pub fn rgba_to_argb8888(rgba: &[u8]) -> Vec<u8> {
    swap_red_blue(rgba)
}
