use crate::debug;
use custom_debug::Debug;

/// Number of entries in a palette
pub const PALETTE_ENTRIES: usize = 256;
/// Size of the palette region following the header
pub const PALETTE_BYTES: usize = PALETTE_ENTRIES * 4;
/// Entry value used for unused palette slots
pub const PALETTE_SENTINEL: [u8; 4] = [0, 0, 0, 0];

/// Color table shared by every level of a palette texture.
///
/// Entries are stored the way they are laid out on disk: blue, green, red
/// and a fourth byte that is always written as zero. Only the first `used`
/// entries correspond to sampled colors, an index past them renders as
/// fully transparent black.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    #[debug(with = debug::palette_fmt)]
    entries: [[u8; 4]; PALETTE_ENTRIES],
    used: usize,
}

impl Palette {
    /// Build a palette from sampled RGB colors. Colors past the 256th are
    /// ignored, the remaining slots are zero filled.
    pub fn from_rgb(colors: &[[u8; 3]]) -> Self {
        let mut entries = [PALETTE_SENTINEL; PALETTE_ENTRIES];
        let used = colors.len().min(PALETTE_ENTRIES);
        for (entry, [r, g, b]) in entries.iter_mut().zip(colors.iter().take(used)) {
            *entry = [*b, *g, *r, 0];
        }
        Self { entries, used }
    }

    /// Wrap raw BGRA entries read from a file. `used` is clamped to 256.
    pub fn from_entries(entries: [[u8; 4]; PALETTE_ENTRIES], used: usize) -> Self {
        Self {
            entries,
            used: used.min(PALETTE_ENTRIES),
        }
    }

    /// All 256 entries in BGRA order
    pub fn entries(&self) -> &[[u8; 4]; PALETTE_ENTRIES] {
        &self.entries
    }

    /// Amount of entries that hold sampled colors
    pub fn used(&self) -> usize {
        self.used
    }

    /// BGRA entry for the index, `None` when the index has no sampled color
    pub fn lookup(&self, index: u8) -> Option<[u8; 4]> {
        let index = index as usize;
        (index < self.used).then(|| self.entries[index])
    }

    /// RGB color for the index, `None` when the index has no sampled color
    pub fn rgb(&self, index: u8) -> Option<[u8; 3]> {
        self.lookup(index).map(|[b, g, r, _]| [r, g, b])
    }

    /// Iterate over the sampled colors as RGB
    pub fn colors(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.entries[..self.used].iter().map(|&[b, g, r, _]| [r, g, b])
    }

    /// Serialize all 256 entries
    pub fn to_bytes(&self) -> Vec<u8> {
        self.entries.iter().flatten().copied().collect()
    }
}
