//! Path overlay rendering with start/end markers

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use std::path::Path;

use crate::io::configuration::{END_MARKER_COLOR, START_MARKER_COLOR};
use crate::io::error::{MazeError, Result};
use crate::spatial::Coord;

/// Draw the solution path onto an RGB image in place
///
/// Draws a connected polyline through every path coordinate in order,
/// thickened by stamping a filled disc of radius `line_width / 2` at each
/// vertex, then outlines a green marker circle at the start coordinate
/// and a blue one at the end, each with radius `line_width + 1` (minimum
/// 1). A single-coordinate path renders as a dot with both markers.
///
/// # Errors
///
/// Returns `EmptyPath` if the path has no elements.
pub fn draw_path(
    image: &mut RgbImage,
    path: &[Coord],
    line_width: u32,
    line_color: Rgb<u8>,
) -> Result<()> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Err(MazeError::EmptyPath);
    };

    for pair in path.windows(2) {
        if let [a, b] = pair {
            draw_line_segment_mut(
                image,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                line_color,
            );
        }
    }

    let stamp_radius = (line_width / 2) as i32;
    for coord in path {
        draw_filled_circle_mut(
            image,
            (coord.x as i32, coord.y as i32),
            stamp_radius,
            line_color,
        );
    }

    let marker_radius = (line_width + 1).max(1) as i32;
    draw_hollow_circle_mut(
        image,
        (first.x as i32, first.y as i32),
        marker_radius,
        Rgb(START_MARKER_COLOR),
    );
    draw_hollow_circle_mut(
        image,
        (last.x as i32, last.y as i32),
        marker_radius,
        Rgb(END_MARKER_COLOR),
    );

    Ok(())
}

/// Draw the solution path and encode the result to a file
///
/// # Errors
///
/// Returns `EmptyPath` for an empty path, or an export error if the
/// image cannot be written.
pub fn render_to_file(
    image: &mut RgbImage,
    path: &[Coord],
    line_width: u32,
    line_color: Rgb<u8>,
    out: &Path,
) -> Result<()> {
    draw_path(image, path, line_width, line_color)?;
    crate::io::image::encode_rgb(image, out)
}
