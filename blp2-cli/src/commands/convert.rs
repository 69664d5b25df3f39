//! Batch conversion between PNG and BLP2

use anyhow::{Context, Result, bail};
use blp2::convert::check_combination;
use blp2::{
    DecodeOptions, DxtAlgorithm, DxtnFormat, EncodeOptions, MipMapMode, blp_to_image,
    image_to_blp, load_texture, save_blp,
};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::utils::create_progress_bar;

#[derive(Args)]
pub struct ConvertArgs {
    /// Files or directories to convert. Directories are scanned for .png
    /// and .blp files, without descending into subdirectories.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Content of the produced BLP2 files
    #[arg(short, long, value_enum, default_value = "dxt5")]
    pub compression: CompressionArg,

    /// Bits of alpha per pixel (0, 1, 2, 4 or 8)
    #[arg(short, long, default_value_t = 8)]
    pub alpha: u8,

    /// Generate a full mipmap chain
    #[arg(short, long)]
    pub mips: bool,

    /// Accept one stray zero inside the mipmap tables of input BLP2 files
    #[arg(long)]
    pub legacy_sentinel: bool,

    /// DXT block fitting effort
    #[arg(long, value_enum, default_value = "medium")]
    pub dxt_compression: DxtCompression,

    /// Quality of JPEG content (1-100)
    #[arg(long, default_value_t = blp2::options::DEFAULT_JPEG_QUALITY)]
    pub jpeg_quality: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompressionArg {
    Dxt1,
    Dxt3,
    Dxt5,
    Palette,
    Raw,
    Jpeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DxtCompression {
    /// Fastest compression, lower quality
    Fastest,
    /// Balanced compression
    Medium,
    /// Best quality, slowest compression
    Finest,
}

impl From<DxtCompression> for DxtAlgorithm {
    fn from(value: DxtCompression) -> Self {
        match value {
            DxtCompression::Fastest => Self::RangeFit,
            DxtCompression::Medium => Self::ClusterFit,
            DxtCompression::Finest => Self::IterativeClusterFit,
        }
    }
}

impl ConvertArgs {
    fn encode_options(&self) -> EncodeOptions {
        let options = match self.compression {
            CompressionArg::Dxt1 => EncodeOptions::dxt(DxtnFormat::Dxt1, self.alpha),
            CompressionArg::Dxt3 => EncodeOptions::dxt(DxtnFormat::Dxt3, self.alpha),
            CompressionArg::Dxt5 => EncodeOptions::dxt(DxtnFormat::Dxt5, self.alpha),
            CompressionArg::Palette => EncodeOptions::palette(self.alpha),
            CompressionArg::Raw => EncodeOptions::argb8888(self.alpha),
            CompressionArg::Jpeg => EncodeOptions::jpeg(self.alpha),
        };
        let mipmaps = if self.mips {
            MipMapMode::Generated
        } else {
            MipMapMode::None
        };
        options
            .with_mipmaps(mipmaps)
            .with_dxt_algorithm(self.dxt_compression.into())
            .with_jpeg_quality(self.jpeg_quality)
    }

    fn decode_options(&self) -> DecodeOptions {
        if self.legacy_sentinel {
            DecodeOptions::legacy_tolerant()
        } else {
            DecodeOptions::default()
        }
    }
}

pub fn execute(args: ConvertArgs, quiet: bool) -> Result<()> {
    let encode = args.encode_options();
    let decode = args.decode_options();

    // Reject bad settings before touching any file
    check_combination(encode.format, encode.compression, encode.alpha_size).with_context(|| {
        format!(
            "Invalid settings: {:?} with {} bits of alpha",
            args.compression, args.alpha
        )
    })?;

    let files = collect_files(&args.paths)?;
    if files.is_empty() {
        bail!("No .png or .blp files found");
    }
    log::info!("Converting {} files", files.len());

    let pb = create_progress_bar(files.len() as u64, "Converting", quiet);
    let failed = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        match convert_file(path, &encode, &decode) {
            Ok(output) => log::info!("{} -> {}", path.display(), output.display()),
            Err(e) => {
                log::error!("Failed to convert {}: {:#}", path.display(), e);
                failed.fetch_add(1, Ordering::Relaxed);
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done");

    let failed = failed.load(Ordering::Relaxed);
    if failed > 0 {
        bail!("{failed} of {} files failed to convert", files.len());
    }
    Ok(())
}

fn is_convertible(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png") || e.eq_ignore_ascii_case("blp"))
}

fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let entries = std::fs::read_dir(path)
                .with_context(|| format!("Failed to read directory {}", path.display()))?;
            let mut found: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_convertible(p))
                .collect();
            found.sort();
            files.extend(found);
        } else if is_convertible(path) {
            files.push(path.clone());
        } else {
            log::info!("Skipping {}: not a .png or .blp file", path.display());
        }
    }
    Ok(files)
}

/// Convert one file next to itself, returning the written path
fn convert_file(path: &Path, encode: &EncodeOptions, decode: &DecodeOptions) -> Result<PathBuf> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => {
            let output = path.with_extension("blp");
            let image = image::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let blp = image_to_blp(image, encode)?;
            save_blp(&blp, &output)?;
            Ok(output)
        }
        Some("blp") => {
            let output = path.with_extension("png");
            let texture = load_texture(path, decode)?;
            let image = blp_to_image(&texture, 0)?;
            image
                .save(&output)
                .with_context(|| format!("Failed to save {}", output.display()))?;
            Ok(output)
        }
        _ => bail!("Unsupported file type: {}", path.display()),
    }
}
