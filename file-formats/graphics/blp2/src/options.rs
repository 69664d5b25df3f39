//! Settings for decoding and encoding

use crate::array::SentinelMode;
use crate::convert::{DxtAlgorithm, DxtnFormat};
use crate::types::{ColorFormat, Compression, MipMapMode};
use std::fmt;

/// Default quality of JPEG levels
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Settings for reading BLP2 files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// How the mipmap offset and size tables are trimmed
    pub sentinel_mode: SentinelMode,
}

impl DecodeOptions {
    /// Options accepting one stray zero inside the mipmap tables
    pub fn legacy_tolerant() -> Self {
        Self {
            sentinel_mode: SentinelMode::LegacyTolerant,
        }
    }
}

/// Target layout of an encoded BLP2 file
#[derive(Clone, Copy, PartialEq)]
pub struct EncodeOptions {
    /// Pixel storage of every level
    pub format: ColorFormat,
    /// Compression tag written to the header
    pub compression: Compression,
    /// Bits of alpha per pixel: 0, 1, 2, 4 or 8
    pub alpha_size: u8,
    /// How the levels past the base one are produced
    pub mipmap_mode: MipMapMode,
    /// Block fitting algorithm for DXT content
    pub dxt_algorithm: DxtAlgorithm,
    /// Quality for JPEG content, 1..=100
    pub jpeg_quality: u8,
}

fn dxt_algorithm_name(algorithm: DxtAlgorithm) -> &'static str {
    match algorithm {
        DxtAlgorithm::RangeFit => "RangeFit",
        DxtAlgorithm::ClusterFit => "ClusterFit",
        DxtAlgorithm::IterativeClusterFit => "IterativeClusterFit",
    }
}

// `DxtAlgorithm` has no `Debug` of its own
impl fmt::Debug for EncodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeOptions")
            .field("format", &self.format)
            .field("compression", &self.compression)
            .field("alpha_size", &self.alpha_size)
            .field("mipmap_mode", &self.mipmap_mode)
            .field(
                "dxt_algorithm",
                &format_args!("{}", dxt_algorithm_name(self.dxt_algorithm)),
            )
            .field("jpeg_quality", &self.jpeg_quality)
            .finish()
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::dxt(DxtnFormat::Dxt5, 8)
    }
}

impl EncodeOptions {
    fn new(format: ColorFormat, compression: Compression, alpha_size: u8) -> Self {
        Self {
            format,
            compression,
            alpha_size,
            mipmap_mode: MipMapMode::None,
            dxt_algorithm: DxtAlgorithm::ClusterFit,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// DXT block compressed content
    pub fn dxt(format: DxtnFormat, alpha_size: u8) -> Self {
        Self::new(ColorFormat::Dxt, format.into(), alpha_size)
    }

    /// Palette content with packed alpha
    pub fn palette(alpha_size: u8) -> Self {
        Self::new(ColorFormat::Palette, Compression::Unspecified, alpha_size)
    }

    /// Uncompressed BGRA content
    pub fn argb8888(alpha_size: u8) -> Self {
        Self::new(ColorFormat::Argb8888, Compression::Argb8888, alpha_size)
    }

    /// JPEG content
    pub fn jpeg(alpha_size: u8) -> Self {
        Self::new(ColorFormat::Jpeg, Compression::Unspecified, alpha_size)
    }

    /// Set how the mipmap chain is produced
    pub fn with_mipmaps(mut self, mode: MipMapMode) -> Self {
        self.mipmap_mode = mode;
        self
    }

    /// Set the DXT block fitting algorithm
    pub fn with_dxt_algorithm(mut self, algorithm: DxtAlgorithm) -> Self {
        self.dxt_algorithm = algorithm;
        self
    }

    /// Set the JPEG quality, clamped to 1..=100
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
}
