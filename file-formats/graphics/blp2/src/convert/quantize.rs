//! Adapter over the color quantizer: palette sampling and index reduction

use super::error::CollaboratorFailure;
use crate::types::{PALETTE_ENTRIES, Palette};
use color_quant::NeuQuant;
use log::*;
use std::collections::{HashMap, HashSet};

/// Sampling factor of the quantizer, 1 is slowest and best
const SAMPLE_FACTOR: i32 = 10;

/// Up to 256 representative RGB colors of the pixels. Images with at most
/// 256 distinct colors keep them exactly, in order of first appearance.
pub fn sample_palette(rgba: &[u8]) -> Result<Vec<[u8; 3]>, CollaboratorFailure> {
    let mut colors = vec![];
    let mut seen = HashSet::new();
    for p in rgba.chunks_exact(4) {
        let color = [p[0], p[1], p[2]];
        if seen.insert(color) {
            colors.push(color);
            if colors.len() > PALETTE_ENTRIES {
                break;
            }
        }
    }
    if colors.is_empty() {
        return Err(CollaboratorFailure::Quantizer);
    }
    if colors.len() <= PALETTE_ENTRIES {
        debug!("Image has {} distinct colors, using them as palette", colors.len());
        return Ok(colors);
    }

    // Alpha is stored apart from the palette, the quantizer sees opaque pixels
    let opaque: Vec<u8> = rgba
        .chunks_exact(4)
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect();
    let quantizer = NeuQuant::new(SAMPLE_FACTOR, PALETTE_ENTRIES, &opaque);
    let mut palette = vec![];
    for c in quantizer.color_map_rgb().chunks_exact(3) {
        let color = [c[0], c[1], c[2]];
        if !palette.contains(&color) {
            palette.push(color);
        }
    }
    debug!("Quantized image down to {} colors", palette.len());
    if palette.is_empty() {
        return Err(CollaboratorFailure::Quantizer);
    }
    Ok(palette)
}

fn distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x.abs_diff(y) as u32;
            d * d
        })
        .sum()
}

/// Index of the nearest palette color for every pixel
pub fn reduce(rgba: &[u8], palette: &Palette) -> Vec<u8> {
    let colors: Vec<[u8; 3]> = palette.colors().collect();
    let mut cache: HashMap<[u8; 3], u8> = HashMap::new();
    rgba.chunks_exact(4)
        .map(|p| {
            let color = [p[0], p[1], p[2]];
            *cache.entry(color).or_insert_with(|| {
                colors
                    .iter()
                    .enumerate()
                    .min_by_key(|&(_, &c)| distance(c, color))
                    .map(|(i, _)| i as u8)
                    .unwrap_or(0)
            })
        })
        .collect()
}
