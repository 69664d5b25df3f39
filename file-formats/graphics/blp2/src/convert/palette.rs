use super::error::Error;
use super::quantize::{reduce, sample_palette};
use crate::array::{pack_bits, packed_len, unpack_bits};
use crate::types::*;
use log::*;

/// Derive the palette shared by every level from the base level
pub fn build_palette(base: &MipLevel) -> Result<Palette, Error> {
    let colors =
        sample_palette(&base.rgba).map_err(|e| Error::collaborator(0, ColorFormat::Palette, e))?;
    Ok(Palette::from_rgb(&colors))
}

/// Largest sample value of the alpha size
fn alpha_max(alpha_size: u8) -> u32 {
    (1u32 << alpha_size.min(8)) - 1
}

/// Scale a stored alpha sample to 0..=255
pub fn expand_alpha(sample: u8, alpha_size: u8) -> u8 {
    match alpha_size {
        0 => 255,
        1 => sample.saturating_mul(255),
        8 => sample,
        _ => {
            let max = alpha_max(alpha_size);
            ((sample as u32 * 510 + max) / (2 * max)).min(255) as u8
        }
    }
}

/// Quantize a 0..=255 alpha value to a sample of the alpha size
pub fn quantize_alpha(alpha: u8, alpha_size: u8) -> u8 {
    match alpha_size {
        0 => 0,
        1 => u8::from(alpha != 0),
        8 => alpha,
        _ => ((alpha as u32 * alpha_max(alpha_size) * 2 + 255) / 510) as u8,
    }
}

/// Decode a level of palette indices followed by packed alpha
pub fn palette_to_rgba(
    content: &[u8],
    palette: &Palette,
    alpha_size: u8,
    width: u32,
    height: u32,
    level: usize,
) -> Result<Vec<u8>, Error> {
    let count = width as usize * height as usize;
    if content.len() < count {
        return Err(Error::TruncatedLevel {
            level,
            expected: count,
            actual: content.len(),
        });
    }
    let (indices, alpha_bytes) = content.split_at(count);

    let alphas = if alpha_size == 0 {
        vec![255; count]
    } else {
        let needed = packed_len(alpha_size, count);
        if alpha_bytes.len() < needed {
            warn!(
                "Mipmap {level} holds {} alpha bytes, {needed} expected, missing samples are transparent",
                alpha_bytes.len()
            );
        }
        unpack_bits(alpha_bytes, alpha_size, count)?
            .into_iter()
            .map(|sample| expand_alpha(sample, alpha_size))
            .collect()
    };

    let mut rgba = Vec::with_capacity(count * 4);
    for (&index, &alpha) in indices.iter().zip(alphas.iter()) {
        match palette.rgb(index) {
            Some([r, g, b]) => rgba.extend_from_slice(&[r, g, b, alpha]),
            None => rgba.extend_from_slice(&[0, 0, 0, 0]),
        }
    }
    Ok(rgba)
}

/// Encode a level against an already built palette
pub fn rgba_to_palette(image: &MipLevel, palette: &Palette, alpha_size: u8) -> Result<Vec<u8>, Error> {
    let mut content = reduce(&image.rgba, palette);
    if alpha_size > 0 {
        let samples: Vec<u8> = image
            .pixels()
            .map(|[_, _, _, a]| quantize_alpha(a, alpha_size))
            .collect();
        content.extend(pack_bits(&samples, alpha_size)?);
    }
    Ok(content)
}
