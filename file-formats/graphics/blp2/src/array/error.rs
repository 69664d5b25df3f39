use thiserror::Error;

/// Errors of the fixed array codecs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A value doesn't fit into the packed bit width
    #[error("Value {value} at index {index} does not fit into {bits} bits")]
    ValueOutOfRange {
        /// Position of the value in the input
        index: usize,
        /// The offending value
        value: u8,
        /// Bit width of the packed array
        bits: u8,
    },
    /// Only 1, 2, 4 and 8 bits per value are supported
    #[error("Bit width {0} is not supported, expected one of 1, 2, 4, 8")]
    UnsupportedBitWidth(u8),
    /// More values than the fixed array can hold
    #[error("Array of {len} entries doesn't fit into {capacity} slots")]
    TooManyEntries {
        /// Amount of provided values
        len: usize,
        /// Fixed length of the array
        capacity: usize,
    },
}
