//! Compact `Debug` output for pixel buffers and palettes

use std::fmt;

const FIRST_N_BYTES: usize = 8;

/// Print the byte count and the first few bytes of a buffer
#[cfg(not(feature = "debug-print-all"))]
pub fn trimmed_bytes_fmt<T: AsRef<[u8]>>(bytes: &T, f: &mut fmt::Formatter) -> fmt::Result {
    let bytes = bytes.as_ref();
    if bytes.len() <= FIRST_N_BYTES {
        write!(f, "{bytes:?}")
    } else {
        write!(
            f,
            "{:?} + {} bytes",
            &bytes[..FIRST_N_BYTES],
            bytes.len() - FIRST_N_BYTES
        )
    }
}

#[cfg(feature = "debug-print-all")]
pub fn trimmed_bytes_fmt<T: AsRef<[u8]>>(bytes: &T, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?}", bytes.as_ref())
}

/// Print the leading palette entries
pub fn palette_fmt(entries: &[[u8; 4]; 256], f: &mut fmt::Formatter) -> fmt::Result {
    let shown = FIRST_N_BYTES / 2;
    write!(f, "{:?} + {} entries", &entries[..shown], entries.len() - shown)
}
