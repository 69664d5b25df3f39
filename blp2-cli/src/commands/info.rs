//! Header and mipmap layout of a BLP2 file

use anyhow::{Context, Result};
use blp2::{BlpFile, DecodeOptions, load_blp_with};
use std::path::Path;

pub fn execute(file: &Path, legacy_sentinel: bool) -> Result<()> {
    let options = if legacy_sentinel {
        DecodeOptions::legacy_tolerant()
    } else {
        DecodeOptions::default()
    };
    let blp = load_blp_with(file, &options)
        .with_context(|| format!("Failed to read BLP2 file {}", file.display()))?;

    println!("BLP2 File Information: {}", file.display());
    println!("=====================================");
    print_summary(&blp);
    Ok(())
}

fn print_summary(blp: &BlpFile) {
    let header = &blp.header;
    println!("Version: {}", header.version);
    println!("Dimensions: {}x{}", header.width, header.height);
    println!("Format: {}", header.format);
    println!("Compression: {}", header.compression);
    println!("Alpha Bits: {}", header.alpha_size);
    println!("Mipmap Mode: {:?}", header.mipmap_mode);
    if let Some(palette) = &blp.palette {
        println!("Palette Colors: {}/256", palette.used());
    }

    println!("\nMipmaps ({}):", blp.image_count());
    println!("  Level  Dimensions    Offset      Size");
    for image in &blp.images {
        let (width, height) = header.mipmap_size(image.index);
        let offset = header.mipmap_offsets.get(image.index).copied().unwrap_or(0);
        println!(
            "  {:>5}  {:>10}  {:>8}  {:>8}",
            image.index,
            format!("{width}x{height}"),
            offset,
            image.len()
        );
    }
    println!("\nFile Size: {} bytes", blp.file_size());
}
