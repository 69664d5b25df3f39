//! Allowed combinations of pixel format, compression and alpha size

use super::error::Error;
use crate::types::{ColorFormat, Compression};

/// Alpha sizes any format can declare
pub const ALPHA_SIZES: &[u8] = &[0, 1, 2, 4, 8];

/// One row of the compatibility table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRule {
    /// Pixel format the row applies to
    pub format: ColorFormat,
    /// Compression tags the format may be stored with
    pub compressions: &'static [Compression],
    /// Alpha sizes allowed for the format
    pub alpha_sizes: &'static [u8],
}

/// Every format with its allowed compressions and alpha sizes. DXT1 carries
/// a further restriction to 1 bit of alpha, see [`allowed_alpha_sizes`].
pub const COMPATIBILITY: [FormatRule; 4] = [
    FormatRule {
        format: ColorFormat::Argb8888,
        compressions: &[Compression::Argb8888],
        alpha_sizes: ALPHA_SIZES,
    },
    FormatRule {
        format: ColorFormat::Dxt,
        compressions: &[Compression::Dxt1, Compression::Dxt3, Compression::Dxt5],
        alpha_sizes: ALPHA_SIZES,
    },
    FormatRule {
        format: ColorFormat::Palette,
        compressions: &[Compression::Unspecified],
        alpha_sizes: ALPHA_SIZES,
    },
    FormatRule {
        format: ColorFormat::Jpeg,
        compressions: &[Compression::Unspecified],
        alpha_sizes: ALPHA_SIZES,
    },
];

/// Table row of the format
pub fn rule(format: ColorFormat) -> &'static FormatRule {
    match format {
        ColorFormat::Argb8888 => &COMPATIBILITY[0],
        ColorFormat::Dxt => &COMPATIBILITY[1],
        ColorFormat::Palette => &COMPATIBILITY[2],
        ColorFormat::Jpeg => &COMPATIBILITY[3],
    }
}

/// Alpha sizes allowed for a format and compression pair
pub fn allowed_alpha_sizes(format: ColorFormat, compression: Compression) -> &'static [u8] {
    if format == ColorFormat::Dxt && compression == Compression::Dxt1 {
        &ALPHA_SIZES[..2]
    } else {
        rule(format).alpha_sizes
    }
}

/// Whether the compression may be used with the format
pub fn is_compression_allowed(format: ColorFormat, compression: Compression) -> bool {
    rule(format).compressions.contains(&compression)
}

/// Reject combinations outside of the table
pub fn check_combination(
    format: ColorFormat,
    compression: Compression,
    alpha_size: u8,
) -> Result<(), Error> {
    if is_compression_allowed(format, compression)
        && allowed_alpha_sizes(format, compression).contains(&alpha_size)
    {
        Ok(())
    } else {
        Err(Error::UnsupportedCombination {
            format,
            compression,
            alpha_size,
        })
    }
}
