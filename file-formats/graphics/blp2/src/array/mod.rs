//! Codecs for the fixed size arrays used by the BLP2 layout: sentinel
//! terminated tables and bit packed value arrays.

/// Errors of the array codecs
pub mod error;
/// Bit packed value arrays
pub mod packed;
/// Sentinel terminated fixed arrays
pub mod sentinel;

pub use error::Error;
pub use packed::{pack_bits, packed_len, unpack_bits};
pub use sentinel::{SentinelMode, decode_sentinel_array, encode_sentinel_array};
