//! Image-to-bitmap binarization with automatic border cropping
//!
//! A scanned maze usually arrives with margins, scanner shadows, and a
//! slightly uneven background. Border-based entrance detection cannot
//! tolerate any of that, so binarization first crops the image to its
//! content bounding box before thresholding.

use image::{GrayImage, Rgb, RgbImage, imageops};
use ndarray::Array2;

use crate::io::configuration::{DEFAULT_BACKGROUND_PERCENTILE, DEFAULT_CROP_PADDING};
use crate::io::error::{MazeError, Result};
use crate::math::statistics;
use crate::spatial::Bitmap;

/// Tuning knobs for binarization
#[derive(Debug, Clone)]
pub struct BinarizeOptions {
    /// Resample the cropped image to exactly this `(width, height)`
    ///
    /// Uses nearest-neighbor interpolation so no new gray values are
    /// introduced and hard wall edges survive.
    pub target_size: Option<(u32, u32)>,

    /// Percentile of pixel intensities treated as background brightness
    pub background_percentile: f64,

    /// Pixels of margin kept around the content bounding box
    pub padding: u32,

    /// Flip the open/wall classification after thresholding
    ///
    /// For mazes drawn as light corridors on dark walls.
    pub invert: bool,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            target_size: None,
            background_percentile: DEFAULT_BACKGROUND_PERCENTILE,
            padding: DEFAULT_CROP_PADDING,
            invert: false,
        }
    }
}

/// Convert a grayscale image to a passability bitmap plus an RGB preview
///
/// The preview replicates the binarized values (0 or 255) across all three
/// channels and has the same dimensions as the bitmap; the renderer later
/// draws the solution onto it. Deterministic: the same image and options
/// always produce a bit-identical bitmap.
///
/// # Errors
///
/// Returns `InvalidSourceData` if the image has no pixels.
pub fn binarize(image: &GrayImage, options: &BinarizeOptions) -> Result<(Bitmap, RgbImage)> {
    let cropped = crop_to_content(image, options.background_percentile, options.padding);

    let working = match options.target_size {
        Some((width, height)) => {
            imageops::resize(&cropped, width, height, imageops::FilterType::Nearest)
        }
        None => cropped,
    };

    let (min, max) = statistics::min_max(working.as_raw()).ok_or_else(|| {
        MazeError::InvalidSourceData {
            reason: "image has no pixels".to_string(),
        }
    })?;
    // Midpoint threshold; a uniform image lands entirely on one side,
    // which is accepted behavior rather than an error.
    let threshold = ((u16::from(min) + u16::from(max)) / 2) as u8;

    let width = working.width() as usize;
    let height = working.height() as usize;
    let mut cells = Array2::zeros((height, width));
    for (x, y, pixel) in working.enumerate_pixels() {
        let mut open = u8::from(pixel.0[0] > threshold);
        if options.invert {
            open = 1 - open;
        }
        if let Some(cell) = cells.get_mut([y as usize, x as usize]) {
            *cell = open;
        }
    }

    let bitmap = Bitmap::from_cells(cells)?;
    log::debug!(
        "binarized {}x{} grid at threshold {threshold} (intensity range {min}..={max})",
        bitmap.width(),
        bitmap.height()
    );

    let preview = RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let coord = crate::spatial::Coord::new(x as usize, y as usize);
        let value = if bitmap.is_open(coord) { 255 } else { 0 };
        Rgb([value, value, value])
    });

    Ok((bitmap, preview))
}

/// Crop the image to the bounding box of its content pixels
///
/// Content is everything darker than the background percentile estimate.
/// The box is expanded by `padding` on each side and clamped to the image.
/// If nothing qualifies as content the original image is returned whole.
fn crop_to_content(image: &GrayImage, background_percentile: f64, padding: u32) -> GrayImage {
    let Some(background) = statistics::percentile(image.as_raw(), background_percentile) else {
        return image.clone();
    };

    let mut min_x = u32::MAX;
    let mut max_x = 0;
    let mut min_y = u32::MAX;
    let mut max_y = 0;
    let mut found_content = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if f64::from(pixel.0[0]) < background {
            found_content = true;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if !found_content {
        return image.clone();
    }

    let left = min_x.saturating_sub(padding);
    let top = min_y.saturating_sub(padding);
    let right = max_x.saturating_add(padding).min(image.width() - 1);
    let bottom = max_y.saturating_add(padding).min(image.height() - 1);

    imageops::crop_imm(image, left, top, right - left + 1, bottom - top + 1).to_image()
}
