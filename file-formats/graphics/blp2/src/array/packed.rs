//! Arrays of 1, 2, 4 or 8 bit values packed into bytes, least significant
//! bits first.

use super::error::Error;

/// Bit widths a packed array can use
pub const SUPPORTED_BIT_WIDTHS: [u8; 4] = [1, 2, 4, 8];

fn check_bit_width(bits: u8) -> Result<(), Error> {
    if SUPPORTED_BIT_WIDTHS.contains(&bits) {
        Ok(())
    } else {
        Err(Error::UnsupportedBitWidth(bits))
    }
}

/// Largest value a `bits` wide slot can hold
pub fn max_value(bits: u8) -> u8 {
    u8::MAX >> (8 - bits.clamp(1, 8))
}

/// Amount of bytes needed to store `count` values of `bits` width
pub fn packed_len(bits: u8, count: usize) -> usize {
    (count * bits as usize).div_ceil(8)
}

/// Extract `count` values of `bits` width. Bytes missing at the end of the
/// input read as zero.
pub fn unpack_bits(bytes: &[u8], bits: u8, count: usize) -> Result<Vec<u8>, Error> {
    check_bit_width(bits)?;
    let mask = max_value(bits);
    let values = (0..count)
        .map(|i| {
            let position = i * bits as usize;
            let byte = bytes.get(position / 8).copied().unwrap_or(0);
            (byte >> (position % 8)) & mask
        })
        .collect();
    Ok(values)
}

/// Pack values into `bits` wide slots. Fails if a value doesn't fit.
pub fn pack_bits(values: &[u8], bits: u8) -> Result<Vec<u8>, Error> {
    check_bit_width(bits)?;
    let max = max_value(bits);
    let mut bytes = vec![0u8; packed_len(bits, values.len())];
    for (index, &value) in values.iter().enumerate() {
        if value > max {
            return Err(Error::ValueOutOfRange { index, value, bits });
        }
        let position = index * bits as usize;
        bytes[position / 8] |= value << (position % 8);
    }
    Ok(bytes)
}
