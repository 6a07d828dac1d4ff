//! Command-line interface for solving maze images one at a time or in batch

use crate::algorithm::binarize::{BinarizeOptions, binarize};
use crate::algorithm::entrances::find_entrances;
use crate::algorithm::render::render_to_file;
use crate::algorithm::solve::shortest_path;
use crate::io::configuration::{
    BINARIZED_SUFFIX, DEFAULT_BACKGROUND_PERCENTILE, DEFAULT_CROP_PADDING, DEFAULT_LINE_WIDTH,
    PATH_COLOR, SOLVED_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{MazeError, Result};
use crate::io::image::{decode_grayscale, encode_bitmap};
use crate::io::progress::ProgressManager;
use clap::Parser;
use image::Rgb;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazesnap")]
#[command(
    author,
    version,
    about = "Solve photographed mazes: binarize, locate the entrances, walk the shortest path"
)]
/// Command-line arguments for the maze solving tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Working grid width in cells (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Working grid height in cells
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Percentile of intensities treated as background when cropping
    #[arg(long, default_value_t = DEFAULT_BACKGROUND_PERCENTILE)]
    pub percentile: f64,

    /// Pixels of margin kept around the cropped maze content
    #[arg(long, default_value_t = DEFAULT_CROP_PADDING)]
    pub padding: u32,

    /// Invert the open/wall classification (light corridors on dark walls)
    #[arg(short, long)]
    pub invert: bool,

    /// Width of the drawn solution line in pixels
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Working grid size derived from the width/height flags
    ///
    /// One dimension given implies a square grid, matching how scanned
    /// mazes are usually close to square anyway.
    pub const fn target_size(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            (Some(w), None) => Some((w, w)),
            (None, Some(h)) => Some((h, h)),
            (None, None) => None,
        }
    }
}

/// Orchestrates solving a file or a directory of maze images
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// A missing target is logged as an error and the pipeline does not
    /// run; no artifact is produced and no error propagates to the exit
    /// status.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any pipeline stage fails.
    pub fn process(&mut self) -> Result<()> {
        if !self.cli.target.exists() {
            log::error!("input not found: '{}'", self.cli.target.display());
            return Ok(());
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_supported_extension(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(MazeError::InvalidSourceData {
                    reason: format!(
                        "target file must be one of: {}",
                        SUPPORTED_EXTENSIONS.join(", ")
                    ),
                })
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if has_supported_extension(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(MazeError::InvalidSourceData {
                reason: "target must be an image file or directory".to_string(),
            })
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path_with_suffix(input_path, SOLVED_SUFFIX);
        if output_path.exists() {
            log::info!("skipping '{}' (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage(0);
        }
        let gray = decode_grayscale(input_path)?;
        let options = BinarizeOptions {
            target_size: self.cli.target_size(),
            background_percentile: self.cli.percentile,
            padding: self.cli.padding,
            invert: self.cli.invert,
        };
        let (bitmap, mut preview) = binarize(&gray, &options)?;
        encode_bitmap(&bitmap, &output_path_with_suffix(input_path, BINARIZED_SUFFIX))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage(1);
        }
        let [start, end] = find_entrances(&bitmap)?;
        log::info!("entrances located at {start} and {end}");

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage(2);
        }
        let path = shortest_path(&bitmap, start, end)?;
        log::info!("shortest path has {} steps", path.len() - 1);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage(3);
        }
        render_to_file(
            &mut preview,
            &path,
            self.cli.line_width,
            Rgb(PATH_COLOR),
            &output_path_with_suffix(input_path, SOLVED_SUFFIX),
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Derive an artifact path by appending a suffix to the input file stem
pub fn output_path_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = match input_path.extension() {
        Some(extension) => format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            suffix,
            extension.to_string_lossy()
        ),
        None => format!("{}{}", stem.to_string_lossy(), suffix),
    };

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}
