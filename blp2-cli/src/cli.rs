//! Root CLI structure for blp2

use crate::commands::convert::ConvertArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blp2")]
#[command(about = "Convert between PNG and BLP2 textures", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert PNG files to BLP2 and BLP2 files to PNG
    Convert(ConvertArgs),

    /// Display the header and mipmap layout of a BLP2 file
    Info {
        /// Path to the BLP2 file
        file: PathBuf,

        /// Accept one stray zero inside the mipmap tables
        #[arg(long)]
        legacy_sentinel: bool,
    },
}
