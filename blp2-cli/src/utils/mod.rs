//! Shared utilities for the blp2 CLI

pub mod progress;

pub use progress::*;
