use blp2::*;
use pretty_assertions::assert_eq;
use test_log::test;

fn checkerboard(width: u32, height: u32) -> MipLevel {
    let rgba = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            let on = (x / 2 + y / 2) % 2 == 0;
            let shade = ((x * 16 + y * 4) % 256) as u8;
            if on {
                [shade, 255 - shade, 40, 255]
            } else {
                [10, shade, 200, (x * 8 % 256) as u8]
            }
        })
        .collect();
    MipLevel::from_rgba(width, height, rgba).unwrap()
}

#[test]
fn test_argb8888_round_trip_is_exact() {
    let base = checkerboard(16, 8);
    let options = EncodeOptions::argb8888(8).with_mipmaps(MipMapMode::Generated);
    let bytes = encode_texture(vec![base.clone()], &options).unwrap();

    let texture = decode_texture(&bytes, &DecodeOptions::default()).unwrap();
    assert_eq!(texture.mipmap_count(), 5);
    assert_eq!(texture.levels[0], base);
    let sizes: Vec<(u32, u32)> = texture.levels.iter().map(|l| (l.width, l.height)).collect();
    assert_eq!(sizes, vec![(16, 8), (8, 4), (4, 2), (2, 1), (1, 1)]);

    // Re-encoding the parsed container reproduces the bytes
    let file = parse_blp(&bytes).unwrap();
    assert_eq!(encode_blp(&file).unwrap(), bytes);
}

#[test]
fn test_solid_red_dxt5_layout() {
    let options = EncodeOptions::dxt(DxtnFormat::Dxt5, 8);
    let bytes = encode_texture(vec![MipLevel::filled(4, 4, [255, 0, 0, 255])], &options).unwrap();
    let file = parse_blp(&bytes).unwrap();
    assert_eq!(file.header.mipmap_offsets, vec![148]);
    assert_eq!(file.header.mipmap_sizes, vec![16]);
    assert_eq!(file.header.mipmap_mode, MipMapMode::None);

    let texture = texture_from_file(file).unwrap();
    let base = texture.base().unwrap();
    assert_eq!((base.width, base.height), (4, 4));
    for pixel in base.pixels() {
        assert!(pixel[0] >= 250, "{pixel:?}");
        assert!(pixel[1] <= 5 && pixel[2] <= 5, "{pixel:?}");
        assert_eq!(pixel[3], 255);
    }
}

#[test]
fn test_dxt_levels_never_shrink_below_a_block() {
    let options = EncodeOptions::dxt(DxtnFormat::Dxt1, 1).with_mipmaps(MipMapMode::Generated);
    let bytes = encode_texture(vec![MipLevel::filled(16, 8, [0, 0, 255, 255])], &options).unwrap();
    let texture = decode_texture(&bytes, &DecodeOptions::default()).unwrap();
    let sizes: Vec<(u32, u32)> = texture.levels.iter().map(|l| (l.width, l.height)).collect();
    assert_eq!(sizes, vec![(16, 8), (8, 4), (4, 4), (4, 4), (4, 4)]);
    assert_eq!(texture.header.mipmap_sizes, vec![64, 16, 8, 8, 8]);
    for level in &texture.levels {
        for pixel in level.pixels() {
            assert!(pixel[2] >= 250 && pixel[0] <= 5, "{pixel:?}");
        }
    }
}

#[test]
fn test_palette_alpha_sizes() {
    let base = checkerboard(8, 8);
    for alpha_size in [0, 1, 2, 4, 8] {
        let options = EncodeOptions::palette(alpha_size);
        let bytes = encode_texture(vec![base.clone()], &options).unwrap();
        let pixels = 64;
        let alpha_bytes = (pixels * alpha_size as usize).div_ceil(8);
        assert_eq!(bytes.len(), 148 + 1024 + pixels + alpha_bytes);

        let texture = decode_texture(&bytes, &DecodeOptions::default()).unwrap();
        for (decoded, original) in texture.levels[0].pixels().zip(base.pixels()) {
            assert_eq!(&decoded[..3], &original[..3]);
            match alpha_size {
                0 => assert_eq!(decoded[3], 255),
                1 => assert_eq!(decoded[3], if original[3] == 0 { 0 } else { 255 }),
                8 => assert_eq!(decoded[3], original[3]),
                _ => assert!(decoded[3].abs_diff(original[3]) <= 255 / ((1 << alpha_size) - 1) / 2 + 1),
            }
        }
    }
}

#[test]
fn test_palette_does_not_depend_on_chain_length() {
    let base = checkerboard(32, 32);
    let single = encode_texture(vec![base.clone()], &EncodeOptions::palette(8)).unwrap();
    let chain = encode_texture(
        vec![base],
        &EncodeOptions::palette(8).with_mipmaps(MipMapMode::Generated),
    )
    .unwrap();
    assert_eq!(&single[148..148 + 1024], &chain[148..148 + 1024]);

    let single = parse_blp(&single).unwrap();
    let chain = parse_blp(&chain).unwrap();
    assert_eq!(single.palette, chain.palette);
    assert_eq!(chain.image_count(), 6);
    assert_eq!(chain.header.mipmap_offsets[0], 148 + 1024);
}

#[test]
fn test_palette_with_many_colors_is_quantized() {
    let rgba: Vec<u8> = (0..64 * 64u32)
        .flat_map(|i| [(i % 64 * 4) as u8, (i / 64 * 4) as u8, 128, 255])
        .collect();
    let base = MipLevel::from_rgba(64, 64, rgba).unwrap();
    let bytes = encode_texture(vec![base.clone()], &EncodeOptions::palette(0)).unwrap();
    let texture = decode_texture(&bytes, &DecodeOptions::default()).unwrap();
    let palette = texture.palette.as_ref().unwrap();
    assert!(palette.used() <= 256);

    let error: u64 = texture.levels[0]
        .pixels()
        .zip(base.pixels())
        .map(|(a, b)| (0..3).map(|c| a[c].abs_diff(b[c]) as u64).sum::<u64>())
        .sum();
    // Mean error per channel stays small for a smooth gradient
    assert!(error / (64 * 64 * 3) < 16, "mean error {}", error / (64 * 64 * 3));
}

#[test]
fn test_jpeg_levels_are_standalone() {
    let options = EncodeOptions::jpeg(0)
        .with_mipmaps(MipMapMode::Generated)
        .with_jpeg_quality(90);
    let bytes = encode_texture(vec![MipLevel::filled(8, 8, [30, 60, 90, 128])], &options).unwrap();
    let file = parse_blp(&bytes).unwrap();
    assert_eq!(file.image_count(), 4);
    for level in &file.images {
        assert_eq!(&level.content[..2], &[0xFF, 0xD8]);
    }

    let texture = texture_from_file(file).unwrap();
    for pixel in texture.levels[0].pixels() {
        assert!(pixel[0].abs_diff(30) <= 8 && pixel[2].abs_diff(90) <= 8);
        assert_eq!(pixel[3], 255);
    }
}

#[test]
fn test_handmade_levels_are_kept() {
    let levels = vec![
        MipLevel::filled(4, 4, [1, 1, 1, 1]),
        MipLevel::filled(2, 2, [2, 2, 2, 2]),
        MipLevel::filled(1, 1, [3, 3, 3, 3]),
    ];
    let options = EncodeOptions::argb8888(8).with_mipmaps(MipMapMode::Handmade);
    let bytes = encode_texture(levels.clone(), &options).unwrap();
    let texture = decode_texture(&bytes, &DecodeOptions::default()).unwrap();
    assert_eq!(texture.levels, levels);
    assert_eq!(texture.header.mipmap_mode, MipMapMode::Handmade);
}

#[test]
fn test_unsupported_combination_fails_before_work() {
    let options = EncodeOptions {
        compression: Compression::Rgb565,
        ..EncodeOptions::argb8888(8)
    };
    let err = encode_texture(vec![MipLevel::filled(4, 4, [0; 4])], &options).unwrap_err();
    assert!(matches!(
        err,
        BlpError::Convert(blp2::convert::Error::UnsupportedCombination {
            format: ColorFormat::Argb8888,
            compression: Compression::Rgb565,
            alpha_size: 8
        })
    ));
}

#[test]
fn test_huge_dxt_header_with_tiny_level_is_truncated() {
    let mut bytes = b"BLP2".to_vec();
    bytes.extend(1i32.to_le_bytes());
    bytes.extend([2, 0, 0, 0]);
    bytes.extend(65535i32.to_le_bytes());
    bytes.extend(65535i32.to_le_bytes());
    for table in [148u32, 8] {
        bytes.extend(table.to_le_bytes());
        bytes.extend([0u8; 60]);
    }
    bytes.extend([0u8; 8]);
    assert_eq!(bytes.len(), 156);

    let err = decode_texture(&bytes, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        BlpError::Convert(blp2::convert::Error::TruncatedLevel {
            level: 0,
            actual: 8,
            ..
        })
    ));
}
