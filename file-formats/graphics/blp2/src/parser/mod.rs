/// Bounds checking of level locations
mod bounds;
/// Error types for BLP parsing operations
pub mod error;
mod header;
/// Native byte reading utilities
mod reader;
/// Type definitions used by the BLP parser
pub mod types;

use super::types::*;
use crate::array::{SentinelMode, decode_sentinel_array};
use crate::options::DecodeOptions;
use bounds::get_level_slice;
pub use error::{Error, LoadError};
use header::parse_header;
use log::*;
use reader::{ByteReader, Cursor};
use std::path::Path;
use types::ParseResult;

/// Read BLP2 file from file system with default options
pub fn load_blp<Q>(path: Q) -> Result<BlpFile, LoadError>
where
    Q: AsRef<Path>,
{
    load_blp_with(path, &DecodeOptions::default())
}

/// Read BLP2 file from file system
pub fn load_blp_with<Q>(path: Q, options: &DecodeOptions) -> Result<BlpFile, LoadError>
where
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let input = std::fs::read(path).map_err(|e| LoadError::FileSystem(path.to_owned(), e))?;
    parse_blp_with(&input, options).map_err(|e| LoadError::Parsing(path.to_owned(), e))
}

/// Parse BLP2 file from slice with strict mipmap tables
pub fn parse_blp(input: &[u8]) -> ParseResult<BlpFile> {
    parse_blp_with(input, &DecodeOptions::default())
}

/// Parse BLP2 file from slice: header, palette and the raw bytes of every
/// level. The pixel data is not decoded.
pub fn parse_blp_with(input: &[u8], options: &DecodeOptions) -> ParseResult<BlpFile> {
    let header =
        parse_header(input, options.sentinel_mode).map_err(|e| e.with_context("header"))?;
    debug!(
        "Parsed header: {}x{}, {} {}, alpha {}, {} levels",
        header.width,
        header.height,
        header.format,
        header.compression,
        header.alpha_size,
        header.mipmaps_count()
    );

    let palette = if header.has_palette() {
        let palette_input = input.get(HEADER_SIZE..).ok_or(Error::UnexpectedEof)?;
        Some(parse_palette(palette_input).map_err(|e| e.with_context("palette"))?)
    } else {
        None
    };

    let images = parse_levels(&header, input).map_err(|e| e.with_context("mipmap levels"))?;

    Ok(BlpFile {
        header,
        palette,
        images,
    })
}

/// The palette keeps one black entry, the table ends at the second
/// all-zero entry.
fn parse_palette(input: &[u8]) -> ParseResult<Palette> {
    let mut reader = Cursor::new(input);
    let mut entries = [PALETTE_SENTINEL; PALETTE_ENTRIES];
    for entry in entries.iter_mut() {
        *entry = reader.read_array()?;
    }
    let used =
        decode_sentinel_array(&entries, &PALETTE_SENTINEL, SentinelMode::LegacyTolerant).len();
    trace!("Palette holds {used} colors");
    Ok(Palette::from_entries(entries, used))
}

fn parse_levels(header: &BlpHeader, input: &[u8]) -> ParseResult<Vec<EncodedLevel>> {
    let content_offset = header.content_offset();
    let mut images = Vec::with_capacity(header.mipmaps_count());
    for (i, (&offset, &size)) in header
        .mipmap_offsets
        .iter()
        .zip(header.mipmap_sizes.iter())
        .enumerate()
    {
        if offset == MIPMAP_SENTINEL || size == MIPMAP_SENTINEL {
            warn!(
                "Mipmap {i} has a stray zero entry (offset {offset}, size {size}), skipping the level"
            );
            continue;
        }
        trace!("Mipmap {i}: offset {offset}, size {size}");
        let content = get_level_slice(input, content_offset, offset, size, i)?;
        images.push(EncodedLevel {
            index: i,
            content: content.to_vec(),
        });
    }
    if images.is_empty() {
        return Err(Error::NoMipmaps);
    }
    Ok(images)
}
