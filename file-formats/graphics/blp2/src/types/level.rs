use crate::debug;
use custom_debug::Debug;

/// A single decoded mipmap level holding tightly packed RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MipLevel {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixels in RGBA order, `width * height * 4` bytes
    #[debug(with = debug::trimmed_bytes_fmt)]
    pub rgba: Vec<u8>,
}

impl MipLevel {
    /// Wrap an RGBA buffer, returns `None` if the dimensions are zero or the
    /// buffer length doesn't match them.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let level = Self {
            width,
            height,
            rgba,
        };
        level.is_consistent().then_some(level)
    }

    /// Level of the given size filled with one color
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            rgba: color.repeat(pixels),
        }
    }

    /// Amount of pixels in the level
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the buffer length matches the dimensions
    pub fn is_consistent(&self) -> bool {
        self.width > 0 && self.height > 0 && self.rgba.len() == self.pixel_count() * 4
    }

    /// Iterate over the pixels
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.rgba
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Format specific bytes of one mipmap level as stored in the file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedLevel {
    /// Mipmap index the bytes belong to, defines the level dimensions
    pub index: usize,
    /// Raw level bytes
    #[debug(with = debug::trimmed_bytes_fmt)]
    pub content: Vec<u8>,
}

impl EncodedLevel {
    /// Get size in bytes of serialized level
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the level has no data
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
