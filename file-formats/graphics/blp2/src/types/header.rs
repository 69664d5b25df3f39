use std::fmt;

/// Magic bytes at the start of every BLP2 file
pub const BLP2_MAGIC: [u8; 4] = *b"BLP2";
/// The only version value this crate reads and writes
pub const BLP2_VERSION: i32 = 1;
/// Size of the fixed header in bytes
pub const HEADER_SIZE: usize = 148;
/// Number of slots in the mipmap offset and size tables
pub const MIPMAP_SLOTS: usize = 16;
/// Value marking unused trailing slots of the mipmap tables
pub const MIPMAP_SENTINEL: u32 = 0;

/// Maximum width that BLP image can have due limitation
/// of mipmaping storage.
pub const BLP_MAX_WIDTH: u32 = 65535;
/// Maximum height that BLP image can have due limitation
/// of mipmaping storage.
pub const BLP_MAX_HEIGHT: u32 = 65535;

/// How the pixel data of every mipmap level is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorFormat {
    /// Each level is a standalone JPEG stream
    Jpeg,
    /// 8-bit indices into a shared 256 entries palette plus packed alpha
    Palette,
    /// S3TC block compression
    Dxt,
    /// Uncompressed BGRA pixels
    Argb8888,
}

impl TryFrom<u8> for ColorFormat {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Jpeg),
            1 => Ok(Self::Palette),
            2 => Ok(Self::Dxt),
            3 => Ok(Self::Argb8888),
            _ => Err(value),
        }
    }
}

impl From<ColorFormat> for u8 {
    fn from(value: ColorFormat) -> u8 {
        match value {
            ColorFormat::Jpeg => 0,
            ColorFormat::Palette => 1,
            ColorFormat::Dxt => 2,
            ColorFormat::Argb8888 => 3,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jpeg => "JPEG",
            Self::Palette => "PALETTE",
            Self::Dxt => "DXT",
            Self::Argb8888 => "ARGB8888",
        };
        f.write_str(name)
    }
}

/// Pixel compression tag stored in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Compression {
    /// BC1
    Dxt1,
    /// BC2
    Dxt3,
    /// 32-bit BGRA
    Argb8888,
    /// 16-bit, 1-bit alpha
    Argb1555,
    /// 16-bit, 4-bit alpha
    Argb4444,
    /// 16-bit, no alpha
    Rgb565,
    /// Alpha only
    A8,
    /// BC3
    Dxt5,
    /// Used by palette and JPEG content
    Unspecified,
    /// 16-bit, 2-bit alpha
    Argb2565,
    /// BC5
    Bc5,
}

impl Compression {
    /// Whether the compression belongs to the DXT family whose levels
    /// never get smaller than a single 4x4 block.
    pub fn is_dxt(self) -> bool {
        matches!(self, Self::Dxt1 | Self::Dxt3 | Self::Dxt5)
    }
}

impl TryFrom<u8> for Compression {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Dxt1),
            1 => Ok(Self::Dxt3),
            2 => Ok(Self::Argb8888),
            3 => Ok(Self::Argb1555),
            4 => Ok(Self::Argb4444),
            5 => Ok(Self::Rgb565),
            6 => Ok(Self::A8),
            7 => Ok(Self::Dxt5),
            8 => Ok(Self::Unspecified),
            9 => Ok(Self::Argb2565),
            10 => Ok(Self::Bc5),
            _ => Err(value),
        }
    }
}

impl From<Compression> for u8 {
    fn from(value: Compression) -> u8 {
        match value {
            Compression::Dxt1 => 0,
            Compression::Dxt3 => 1,
            Compression::Argb8888 => 2,
            Compression::Argb1555 => 3,
            Compression::Argb4444 => 4,
            Compression::Rgb565 => 5,
            Compression::A8 => 6,
            Compression::Dxt5 => 7,
            Compression::Unspecified => 8,
            Compression::Argb2565 => 9,
            Compression::Bc5 => 10,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dxt1 => "PIXEL_DXT1",
            Self::Dxt3 => "PIXEL_DXT3",
            Self::Argb8888 => "PIXEL_ARGB8888",
            Self::Argb1555 => "PIXEL_ARGB1555",
            Self::Argb4444 => "PIXEL_ARGB4444",
            Self::Rgb565 => "PIXEL_RGB565",
            Self::A8 => "PIXEL_A8",
            Self::Dxt5 => "PIXEL_DXT5",
            Self::Unspecified => "PIXEL_UNSPECIFIED",
            Self::Argb2565 => "PIXEL_ARGB2565",
            Self::Bc5 => "PIXEL_BC5",
        };
        f.write_str(name)
    }
}

/// Where the mipmap levels of a texture come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MipMapMode {
    /// Only the base level is stored
    #[default]
    None,
    /// Levels are derived from the base level by halving
    Generated,
    /// Levels are supplied by the caller as is
    Handmade,
}

impl TryFrom<u8> for MipMapMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Generated),
            2 => Ok(Self::Handmade),
            _ => Err(value),
        }
    }
}

impl From<MipMapMode> for u8 {
    fn from(value: MipMapMode) -> u8 {
        match value {
            MipMapMode::None => 0,
            MipMapMode::Generated => 1,
            MipMapMode::Handmade => 2,
        }
    }
}

/// Header of a BLP2 file.
///
/// The offset and size tables hold only the used entries, the sentinel
/// padding is stripped on parsing and restored on encoding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlpHeader {
    /// Version field, always [`BLP2_VERSION`] for supported files
    pub version: i32,
    /// Pixel storage of every level
    pub format: ColorFormat,
    /// Bits of alpha per pixel: 0, 1, 2, 4 or 8
    pub alpha_size: u8,
    /// Compression tag, selects the DXT variant for DXT content
    pub compression: Compression,
    /// How the mipmap levels were produced
    pub mipmap_mode: MipMapMode,
    /// Width of the base level
    pub width: u32,
    /// Height of the base level
    pub height: u32,
    /// Absolute file offsets of every level
    pub mipmap_offsets: Vec<u32>,
    /// Byte lengths of every level
    pub mipmap_sizes: Vec<u32>,
}

impl BlpHeader {
    /// Number of levels referenced by the header tables
    pub fn mipmaps_count(&self) -> usize {
        self.mipmap_offsets.len()
    }

    /// Whether a 256 entries palette follows the header
    pub fn has_palette(&self) -> bool {
        self.format == ColorFormat::Palette
    }

    /// Offset of the first byte after the header and the palette
    pub fn content_offset(&self) -> usize {
        if self.has_palette() {
            HEADER_SIZE + super::palette::PALETTE_BYTES
        } else {
            HEADER_SIZE
        }
    }

    /// Dimensions of the given mipmap level. Halving stops at 4 pixels for
    /// DXT compression and at 1 pixel otherwise.
    pub fn mipmap_size(&self, i: usize) -> (u32, u32) {
        let floor = if self.compression.is_dxt() { 4 } else { 1 };
        let shrink = |dimension: u32| {
            let size = dimension.checked_shr(i as u32).unwrap_or(0);
            size.max(floor)
        };
        (shrink(self.width), shrink(self.height))
    }

    /// Amount of pixels in the given mipmap level
    pub fn mipmap_pixels(&self, i: usize) -> u32 {
        let (width, height) = self.mipmap_size(i);
        width * height
    }
}
