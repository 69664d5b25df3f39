//! Bounds checking of mipmap level locations

use super::error::Error;
use super::types::ParseResult;
use log::error;

/// Get the bytes of a mipmap level after checking that the level lies
/// between the end of the header (and palette) and the end of the input.
pub fn get_level_slice(
    input: &[u8],
    content_offset: usize,
    offset: u32,
    size: u32,
    mipmap_index: usize,
) -> ParseResult<&[u8]> {
    let offset = offset as usize;
    let size = size as usize;

    if offset < content_offset || offset >= input.len() {
        error!(
            "Offset of mipmap {} is out of bounds! {} not in {}..{}",
            mipmap_index,
            offset,
            content_offset,
            input.len()
        );
        return Err(Error::OutOfBounds { offset, size: 0 });
    }

    match offset.checked_add(size) {
        Some(end) if end <= input.len() => Ok(&input[offset..end]),
        _ => {
            error!(
                "Offset+size of mipmap {} is out of bounds! {} + {} > {}",
                mipmap_index,
                offset,
                size,
                input.len()
            );
            Err(Error::OutOfBounds { offset, size })
        }
    }
}
