use blp2::*;
use pretty_assertions::assert_eq;
use test_log::test;

/// ARGB8888 file of a 4x4 base whose offset table holds a stray zero in
/// place of the second level.
fn file_with_stray_zero() -> Vec<u8> {
    let mut bytes = b"BLP2".to_vec();
    bytes.extend(1i32.to_le_bytes());
    bytes.extend([3, 8, 2, 1]);
    bytes.extend(4i32.to_le_bytes());
    bytes.extend(4i32.to_le_bytes());
    let offsets = [148u32, 0, 148 + 64 + 16];
    let sizes = [64u32, 16, 4];
    for table in [&offsets, &sizes] {
        for slot in 0..16 {
            bytes.extend(table.get(slot).copied().unwrap_or(0).to_le_bytes());
        }
    }
    bytes.extend([10u8, 20, 30, 255].repeat(16));
    bytes.extend([0u8; 16]);
    bytes.extend([1u8, 2, 3, 4]);
    bytes
}

#[test]
fn test_strict_mode_rejects_stray_zero() {
    let err = parse_blp(&file_with_stray_zero()).unwrap_err();
    assert!(matches!(
        err.root(),
        blp2::parser::Error::MismatchedMipTables {
            offsets: 1,
            sizes: 3
        }
    ));
}

#[test]
fn test_legacy_mode_skips_stray_level() {
    let texture =
        decode_texture(&file_with_stray_zero(), &DecodeOptions::legacy_tolerant()).unwrap();
    assert_eq!(texture.header.mipmaps_count(), 3);
    assert_eq!(texture.mipmap_count(), 2);

    let base = texture.level(0).unwrap();
    assert_eq!((base.width, base.height), (4, 4));
    assert!(base.pixels().all(|p| p == [30, 20, 10, 255]));

    // The level after the stray entry keeps its own dimensions
    let last = texture.level(1).unwrap();
    assert_eq!((last.width, last.height), (1, 1));
    assert_eq!(last.rgba, vec![3, 2, 1, 4]);
}

#[test]
fn test_legacy_mode_reads_regular_files() {
    let options = EncodeOptions::argb8888(8).with_mipmaps(MipMapMode::Generated);
    let bytes = encode_texture(vec![MipLevel::filled(4, 4, [5, 6, 7, 8])], &options).unwrap();
    let strict = decode_texture(&bytes, &DecodeOptions::default()).unwrap();
    let legacy = decode_texture(&bytes, &DecodeOptions::legacy_tolerant()).unwrap();
    assert_eq!(strict, legacy);
    assert_eq!(legacy.mipmap_count(), 3);
}
