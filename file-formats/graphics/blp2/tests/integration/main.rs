//! Integration tests for whole-file BLP2 decoding and encoding

mod files;
mod formats;
mod legacy;
