//! Little endian reading over a byte slice

use super::error::Error;
use super::types::ParseResult;

/// Trait for reading binary data from a byte slice
pub trait ByteReader {
    /// Read a single unsigned 8-bit integer
    fn read_u8(&mut self) -> ParseResult<u8>;

    /// Read exactly `buf.len()` bytes into a pre-allocated buffer
    fn read_into(&mut self, buf: &mut [u8]) -> ParseResult<()>;

    /// Read a fixed amount of bytes
    fn read_array<const N: usize>(&mut self) -> ParseResult<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Read a single unsigned 32-bit integer in little-endian format
    fn read_u32_le(&mut self) -> ParseResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Read a single signed 32-bit integer in little-endian format
    fn read_i32_le(&mut self) -> ParseResult<i32> {
        self.read_array().map(i32::from_le_bytes)
    }
}

/// A cursor for reading binary data from a byte slice
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the beginning of the data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Amount of bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }
}

impl ByteReader for Cursor<'_> {
    fn read_u8(&mut self) -> ParseResult<u8> {
        let value = *self.data.get(self.position).ok_or(Error::UnexpectedEof)?;
        self.position += 1;
        Ok(value)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> ParseResult<()> {
        let end = self.position + buf.len();
        let bytes = self
            .data
            .get(self.position..end)
            .ok_or(Error::UnexpectedEof)?;
        buf.copy_from_slice(bytes);
        self.position = end;
        Ok(())
    }
}

/// Read a fixed table of u32 values
pub fn read_u32_table<const N: usize>(reader: &mut impl ByteReader) -> ParseResult<[u32; N]> {
    let mut values = [0u32; N];
    for value in values.iter_mut() {
        *value = reader.read_u32_le()?;
    }
    Ok(values)
}
