use blp2::*;
use pretty_assertions::assert_eq;
use test_log::test;

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("texture.blp");

    let image = ::image::DynamicImage::ImageRgba8(::image::RgbaImage::from_fn(8, 4, |x, y| {
        ::image::Rgba([x as u8 * 30, y as u8 * 60, 7, 255])
    }));
    let options = EncodeOptions::argb8888(8).with_mipmaps(MipMapMode::Generated);
    let file = image_to_blp(image.clone(), &options).unwrap();
    save_blp(&file, &path).unwrap();

    let loaded = load_blp(&path).unwrap();
    assert_eq!(loaded, file);

    let texture = load_texture(&path, &DecodeOptions::default()).unwrap();
    assert_eq!(texture.mipmap_count(), 4);
    let decoded = blp_to_image(&texture, 0).unwrap();
    assert_eq!(decoded.to_rgba8(), image.to_rgba8());
}

#[test]
fn test_load_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.blp");
    std::fs::write(&path, b"BLP1 definitely not a texture").unwrap();

    let err = load_blp(&path).unwrap_err();
    assert!(matches!(&err, blp2::parser::LoadError::Parsing(p, _) if p == &path));
    assert!(err.to_string().contains("broken.blp"));
}

#[test]
fn test_failed_encode_produces_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.blp");

    // The second handmade level has the wrong size
    let levels = vec![
        MipLevel::filled(8, 8, [0; 4]),
        MipLevel::filled(4, 4, [0; 4]),
        MipLevel::filled(3, 3, [0; 4]),
    ];
    let options = EncodeOptions::palette(4).with_mipmaps(MipMapMode::Handmade);
    let result = convert::levels_to_blp(levels, &options).map(|file| save_blp(&file, &path));
    assert!(matches!(
        result,
        Err(convert::Error::InvalidHandmadeLevel { level: 2, .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_independent_conversions_in_parallel() {
    let handles: Vec<_> = (1..=4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let base = MipLevel::filled(16, 16, [i * 40, 0, 255 - i * 40, 255]);
                let options = EncodeOptions::palette(1).with_mipmaps(MipMapMode::Generated);
                let bytes = encode_texture(vec![base], &options).unwrap();
                decode_texture(&bytes, &DecodeOptions::default()).unwrap()
            })
        })
        .collect();
    for (i, handle) in (1..=4u8).zip(handles) {
        let texture = handle.join().unwrap();
        assert_eq!(texture.mipmap_count(), 5);
        assert!(texture
            .levels
            .iter()
            .all(|l| l.pixels().all(|p| p == [i * 40, 0, 255 - i * 40, 255])));
    }
}
