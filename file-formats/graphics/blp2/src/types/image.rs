use super::header::*;
use super::level::*;
use super::palette::*;

/// Parsed BLP2 file. The structure strictly follows how the file is stored
/// on the disk: header, optional palette and the raw bytes of every level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlpFile {
    /// File header containing metadata
    pub header: BlpHeader,
    /// Palette, present only for palette content
    pub palette: Option<Palette>,
    /// Encoded mipmap levels, finest first
    pub images: Vec<EncodedLevel>,
}

impl BlpFile {
    /// Get total amount of levels stored in the file
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Predict the offset and size tables for the given levels. Offsets are
    /// a running sum of the level sizes starting right after the header and
    /// the palette.
    pub fn mipmap_tables(has_palette: bool, images: &[EncodedLevel]) -> (Vec<u32>, Vec<u32>) {
        let start = if has_palette {
            HEADER_SIZE + PALETTE_BYTES
        } else {
            HEADER_SIZE
        };
        let mut offsets = Vec::with_capacity(images.len());
        let mut sizes = Vec::with_capacity(images.len());
        // The end offset of the last level is never recorded
        let mut cur_offset = start;
        for image in images {
            offsets.push(cur_offset as u32);
            sizes.push(image.len() as u32);
            cur_offset += image.len();
        }
        (offsets, sizes)
    }

    /// Total size of the serialized file
    pub fn file_size(&self) -> usize {
        self.header.content_offset() + self.images.iter().map(EncodedLevel::len).sum::<usize>()
    }
}

/// Fully decoded texture: header, palette (for palette content) and the RGBA
/// levels ordered finest first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlpTexture {
    /// Header the levels were decoded with
    pub header: BlpHeader,
    /// Palette used by palette content
    pub palette: Option<Palette>,
    /// Decoded levels, index 0 is the base resolution
    pub levels: Vec<MipLevel>,
}

impl BlpTexture {
    /// Amount of decoded levels
    pub fn mipmap_count(&self) -> usize {
        self.levels.len()
    }

    /// Decoded level by index
    pub fn level(&self, i: usize) -> Option<&MipLevel> {
        self.levels.get(i)
    }

    /// Base level, `None` only for a texture without levels
    pub fn base(&self) -> Option<&MipLevel> {
        self.levels.first()
    }
}
