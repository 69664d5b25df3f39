/// BLP2 file header structures
pub mod header;
/// Parsed file and decoded texture types
pub mod image;
/// Mipmap level types
pub mod level;
/// Shared color table of palette content
pub mod palette;

pub use self::image::*;
pub use header::*;
pub use level::*;
pub use palette::*;
