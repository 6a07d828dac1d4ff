//! Image decoding and encoding at the pipeline boundaries

use image::{GrayImage, Luma, RgbImage};
use std::path::Path;

use crate::io::error::{MazeError, Result};
use crate::spatial::Bitmap;

/// Decode an image file to a grayscale pixel grid
///
/// Color inputs are converted to 8-bit luma; the result feeds the
/// binarizer unchanged.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded.
pub fn decode_grayscale(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|e| MazeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let gray = img.to_luma8();
    log::info!(
        "decoded '{}': {}x{}",
        path.display(),
        gray.width(),
        gray.height()
    );
    Ok(gray)
}

/// Encode a bitmap as a grayscale preview image
///
/// Open cells become white (255), walls black (0), matching the RGB
/// preview the binarizer hands to the renderer.
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created, or
/// `ImageExport` if the image cannot be written.
pub fn encode_bitmap(bitmap: &Bitmap, path: &Path) -> Result<()> {
    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    let preview = GrayImage::from_fn(width, height, |x, y| {
        let coord = crate::spatial::Coord::new(x as usize, y as usize);
        Luma([if bitmap.is_open(coord) { 255 } else { 0 }])
    });

    create_parent_dirs(path)?;
    preview.save(path).map_err(|e| MazeError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode an RGB pixel grid to a file
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created, or
/// `ImageExport` if the image cannot be written.
pub fn encode_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    create_parent_dirs(path)?;
    image.save(path).map_err(|e| MazeError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
