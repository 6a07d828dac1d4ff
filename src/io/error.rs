//! Error types for pipeline operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::bitmap::Coord;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum MazeError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a pipeline artifact to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Source data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Fewer than two border openings remained after run merging
    ///
    /// A maze needs both an entrance and an exit on the outer border;
    /// anything less means the image was mis-binarized or is not a maze.
    TooFewOpenings {
        /// Number of distinct openings actually found
        found: usize,
    },

    /// Path endpoint lies outside the grid
    ///
    /// Indicates an upstream entrance-location defect rather than bad input.
    OutOfBounds {
        /// The offending coordinate
        coord: Coord,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Path endpoint addresses a wall cell
    BlockedEndpoint {
        /// The offending coordinate
        coord: Coord,
    },

    /// No sequence of open cells connects the two entrances
    NoPathFound {
        /// Search start coordinate
        start: Coord,
        /// Search end coordinate
        end: Coord,
    },

    /// A zero-length path reached the renderer
    ///
    /// Indicates a solver defect; the solver always returns at least the
    /// start coordinate on success.
    EmptyPath,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::TooFewOpenings { found } => {
                write!(f, "Expected 2 border openings, found {found}")
            }
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinate {coord} lies outside the {width}x{height} grid"
                )
            }
            Self::BlockedEndpoint { coord } => {
                write!(f, "Path endpoint {coord} addresses a wall cell")
            }
            Self::NoPathFound { start, end } => {
                write!(f, "No open path connects {start} to {end}")
            }
            Self::EmptyPath => {
                write!(f, "Cannot render an empty path")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}
