use super::error::Error;
use super::reader::{ByteReader, Cursor, read_u32_table};
use super::types::ParseResult;
use crate::array::{SentinelMode, decode_sentinel_array};
use crate::types::*;
use log::*;
use std::str;

pub fn parse_header(input: &[u8], sentinel_mode: SentinelMode) -> ParseResult<BlpHeader> {
    let mut reader = Cursor::new(input);

    parse_magic(&mut reader).map_err(|e| e.with_context("magic"))?;
    let version = reader
        .read_i32_le()
        .map_err(|e| e.with_context("version field"))?;
    if version != BLP2_VERSION {
        return Err(Error::UnsupportedVersion(version));
    }

    let format_field = reader
        .read_u8()
        .map_err(|e| e.with_context("format field"))?;
    let format = ColorFormat::try_from(format_field).map_err(Error::UnknownFormat)?;
    let alpha_size = reader
        .read_u8()
        .map_err(|e| e.with_context("alpha_size field"))?;
    let compression_field = reader
        .read_u8()
        .map_err(|e| e.with_context("compression field"))?;
    let compression =
        Compression::try_from(compression_field).map_err(Error::UnknownCompression)?;
    let mipmap_field = reader
        .read_u8()
        .map_err(|e| e.with_context("mipmap mode field"))?;
    let mipmap_mode = MipMapMode::try_from(mipmap_field).map_err(Error::UnknownMipMapMode)?;

    let width = reader
        .read_i32_le()
        .map_err(|e| e.with_context("width field"))?;
    let height = reader
        .read_i32_le()
        .map_err(|e| e.with_context("height field"))?;
    // Only the encoder limits dimensions to 65535, files claiming more still parse
    if width < 1 || height < 1 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let offsets: [u32; MIPMAP_SLOTS] =
        read_u32_table(&mut reader).map_err(|e| e.with_context("mipmap offsets"))?;
    let sizes: [u32; MIPMAP_SLOTS] =
        read_u32_table(&mut reader).map_err(|e| e.with_context("mipmap sizes"))?;
    debug_assert_eq!(reader.position(), HEADER_SIZE);

    let (mipmap_offsets, mipmap_sizes) = trim_mipmap_tables(&offsets, &sizes, sentinel_mode)
        .map_err(|e| e.with_context("mipmap tables"))?;
    trace!("Mipmap offsets: {mipmap_offsets:?}, sizes: {mipmap_sizes:?}");

    Ok(BlpHeader {
        version,
        format,
        alpha_size,
        compression,
        mipmap_mode,
        width: width as u32,
        height: height as u32,
        mipmap_offsets,
        mipmap_sizes,
    })
}

fn parse_magic(reader: &mut impl ByteReader) -> ParseResult<()> {
    let magic: [u8; 4] = reader.read_array()?;
    if magic != BLP2_MAGIC {
        return Err(Error::WrongMagic(
            str::from_utf8(&magic)
                .map(|s| s.to_owned())
                .unwrap_or_else(|_| format!("{magic:?}")),
        ));
    }
    Ok(())
}

/// Cut both tables down to their used entries. In legacy tolerant mode the
/// trailing sentinel kept by the sentinel codec is dropped again, interior
/// sentinels stay and are reported when the levels are read.
fn trim_mipmap_tables(
    offsets: &[u32; MIPMAP_SLOTS],
    sizes: &[u32; MIPMAP_SLOTS],
    mode: SentinelMode,
) -> ParseResult<(Vec<u32>, Vec<u32>)> {
    let mut offsets = decode_sentinel_array(offsets, &MIPMAP_SENTINEL, mode);
    let mut sizes = decode_sentinel_array(sizes, &MIPMAP_SENTINEL, mode);

    if mode == SentinelMode::LegacyTolerant {
        for table in [&mut offsets, &mut sizes] {
            while table.last() == Some(&MIPMAP_SENTINEL) {
                table.pop();
            }
        }
        if offsets.len() != sizes.len() {
            warn!(
                "Mipmap tables disagree ({} offsets, {} sizes), using the shorter one",
                offsets.len(),
                sizes.len()
            );
            let len = offsets.len().min(sizes.len());
            offsets.truncate(len);
            sizes.truncate(len);
        }
    }

    if offsets.len() != sizes.len() {
        return Err(Error::MismatchedMipTables {
            offsets: offsets.len(),
            sizes: sizes.len(),
        });
    }
    if offsets.is_empty() {
        return Err(Error::NoMipmaps);
    }
    Ok((offsets, sizes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn raw_header(offsets: &[u32], sizes: &[u32]) -> Vec<u8> {
        let mut bytes = b"BLP2".to_vec();
        bytes.extend(1i32.to_le_bytes());
        bytes.extend([2, 8, 7, 0]);
        bytes.extend(4i32.to_le_bytes());
        bytes.extend(4i32.to_le_bytes());
        for table in [offsets, sizes] {
            for i in 0..MIPMAP_SLOTS {
                bytes.extend(table.get(i).copied().unwrap_or(0).to_le_bytes());
            }
        }
        bytes
    }

    #[test]
    fn test_parse_header_fields() {
        let bytes = raw_header(&[148], &[16]);
        assert_eq!(bytes.len(), HEADER_SIZE);
        let header = parse_header(&bytes, SentinelMode::Strict).unwrap();
        assert_eq!(header.format, ColorFormat::Dxt);
        assert_eq!(header.alpha_size, 8);
        assert_eq!(header.compression, Compression::Dxt5);
        assert_eq!(header.mipmap_mode, MipMapMode::None);
        assert_eq!((header.width, header.height), (4, 4));
        assert_eq!(header.mipmap_offsets, vec![148]);
        assert_eq!(header.mipmap_sizes, vec![16]);
    }

    #[test]
    fn test_wrong_magic() {
        let mut bytes = raw_header(&[148], &[16]);
        bytes[..4].copy_from_slice(b"BLP1");
        let err = parse_header(&bytes, SentinelMode::Strict).unwrap_err();
        assert!(matches!(err.root(), Error::WrongMagic(m) if m == "BLP1"));
    }

    #[test]
    fn test_unsupported_version() {
        let mut bytes = raw_header(&[148], &[16]);
        bytes[4..8].copy_from_slice(&2i32.to_le_bytes());
        let err = parse_header(&bytes, SentinelMode::Strict).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion(2)));
    }

    #[test]
    fn test_unknown_tags() {
        let mut bytes = raw_header(&[148], &[16]);
        bytes[8] = 4;
        assert!(matches!(
            parse_header(&bytes, SentinelMode::Strict),
            Err(Error::UnknownFormat(4))
        ));
        let mut bytes = raw_header(&[148], &[16]);
        bytes[10] = 11;
        assert!(matches!(
            parse_header(&bytes, SentinelMode::Strict),
            Err(Error::UnknownCompression(11))
        ));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let mut bytes = raw_header(&[148], &[16]);
        bytes[12..16].copy_from_slice(&0i32.to_le_bytes());
        assert!(matches!(
            parse_header(&bytes, SentinelMode::Strict),
            Err(Error::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_wide_header_is_accepted() {
        let mut bytes = raw_header(&[148], &[16]);
        bytes[12..16].copy_from_slice(&70_000i32.to_le_bytes());
        let header = parse_header(&bytes, SentinelMode::Strict).unwrap();
        assert_eq!(header.width, 70_000);

        bytes[16..20].copy_from_slice(&(-4i32).to_le_bytes());
        assert!(matches!(
            parse_header(&bytes, SentinelMode::Strict),
            Err(Error::InvalidDimensions { height: -4, .. })
        ));
    }

    #[test]
    fn test_truncated_header() {
        let bytes = raw_header(&[148], &[16]);
        let err = parse_header(&bytes[..100], SentinelMode::Strict).unwrap_err();
        assert!(matches!(err.root(), Error::UnexpectedEof));
    }

    #[test]
    fn test_strict_rejects_stray_zero() {
        let bytes = raw_header(&[148, 0, 300], &[64, 16, 16]);
        let err = parse_header(&bytes, SentinelMode::Strict).unwrap_err();
        assert!(matches!(
            err.root(),
            Error::MismatchedMipTables {
                offsets: 1,
                sizes: 3
            }
        ));
    }

    #[test]
    fn test_legacy_keeps_stray_zero() {
        let bytes = raw_header(&[148, 0, 300], &[64, 16, 16]);
        let header = parse_header(&bytes, SentinelMode::LegacyTolerant).unwrap();
        assert_eq!(header.mipmap_offsets, vec![148, 0, 300]);
        assert_eq!(header.mipmap_sizes, vec![64, 16, 16]);
    }

    #[test]
    fn test_legacy_on_regular_tables() {
        let bytes = raw_header(&[148, 212], &[64, 16]);
        let header = parse_header(&bytes, SentinelMode::LegacyTolerant).unwrap();
        assert_eq!(header.mipmap_offsets, vec![148, 212]);
        assert_eq!(header.mipmap_sizes, vec![64, 16]);
    }

    #[test]
    fn test_empty_tables() {
        let bytes = raw_header(&[], &[]);
        let err = parse_header(&bytes, SentinelMode::Strict).unwrap_err();
        assert!(matches!(err.root(), Error::NoMipmaps));
    }
}
