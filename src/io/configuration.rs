//! Pipeline constants and runtime configuration defaults

// Binarization defaults
/// Percentile of pixel intensities treated as background brightness
///
/// A high percentile is robust against the small footprint the maze lines
/// leave in the intensity distribution.
pub const DEFAULT_BACKGROUND_PERCENTILE: f64 = 98.0;

/// Pixels of margin kept around the content bounding box after cropping
pub const DEFAULT_CROP_PADDING: u32 = 2;

// Rendering defaults
/// Width of the solution polyline in pixels
pub const DEFAULT_LINE_WIDTH: u32 = 3;

/// Solution polyline color (red)
pub const PATH_COLOR: [u8; 3] = [255, 0, 0];

/// Start marker outline color (green)
pub const START_MARKER_COLOR: [u8; 3] = [0, 255, 0];

/// End marker outline color (blue)
pub const END_MARKER_COLOR: [u8; 3] = [0, 0, 255];

// Output settings
/// Suffix added to the binarized preview filename
pub const BINARIZED_SUFFIX: &str = "_binarized";

/// Suffix added to the solved overlay filename
pub const SOLVED_SUFFIX: &str = "_solved";

/// Append-only log file written next to the working directory
pub const LOG_FILE_NAME: &str = "mazesnap.log";

/// Image extensions accepted in batch mode
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

// Progress bar display settings
/// Human-readable names for the four pipeline stages, in run order
pub const STAGE_NAMES: [&str; 4] = ["binarize", "entrances", "solve", "render"];
