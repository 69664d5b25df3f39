//! Encoder and decoder for BLP2 texture files.
//!
//! A BLP2 file is a 148 byte header with the offsets and sizes of up to 16
//! mipmap levels, an optional 256 entries palette, and the content of every
//! level. The content is one of:
//!
//! - uncompressed BGRA pixels (`ARGB8888`),
//! - DXT1, DXT3 or DXT5 blocks,
//! - 8-bit palette indices followed by 0, 1, 2, 4 or 8 bits of alpha per pixel,
//! - a standalone JPEG stream.
//!
//! Reading goes through [`parser`] into a [`BlpFile`] holding the raw level
//! bytes, then through [`convert`] into RGBA [`MipLevel`]s. Writing goes the
//! other way through [`convert::levels_to_blp`] and [`encode`]. The
//! [`conversion`] module does both steps at once.
//!
//! # Examples
//!
//! ```no_run
//! use blp2::{DecodeOptions, EncodeOptions, MipLevel, MipMapMode, decode_texture, encode_texture};
//!
//! # fn main() -> blp2::Result<()> {
//! let base = MipLevel::filled(64, 64, [255, 0, 0, 255]);
//! let options = EncodeOptions::palette(8).with_mipmaps(MipMapMode::Generated);
//! let bytes = encode_texture(vec![base], &options)?;
//!
//! let texture = decode_texture(&bytes, &DecodeOptions::default())?;
//! assert_eq!(texture.mipmap_count(), 7);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Sentinel terminated and bit packed arrays
pub mod array;
pub mod conversion;
/// Conversion between level content and RGBA pixels
pub mod convert;
mod debug;
/// Serialization of BLP2 files
pub mod encode;
pub mod error;
pub mod options;
/// Parsing of BLP2 files
pub mod parser;
/// Types describing BLP2 files and decoded textures
pub mod types;

pub use conversion::{
    blp_to_image, decode_texture, encode_texture, image_to_blp, load_texture, texture_from_file,
};
pub use convert::{DxtAlgorithm, DxtnFormat};
pub use encode::{encode_blp, save_blp};
pub use error::{BlpError, Result};
pub use options::{DecodeOptions, EncodeOptions};
pub use parser::{load_blp, load_blp_with, parse_blp, parse_blp_with};
pub use types::*;
