//! Error types for track generation, collision building and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::{Axis, Direction, Point, TileType};

/// Main error type for all track operations
#[derive(Debug)]
pub enum TrackError {
    /// Row or column duplication would sever a connection
    ///
    /// Rows may only hold `None` and `StraightNS`, columns `None` and `StraightWE`.
    InsertionBlocked {
        /// Orientation of the refused line
        axis: Axis,
        /// Index of the refused line
        index: usize,
        /// First tile that prevented the insertion
        blocking: TileType,
    },

    /// Row or column index lies outside the grid
    LineOutOfRange {
        /// Orientation of the line
        axis: Axis,
        /// Requested index
        index: usize,
        /// Number of lines along that axis
        len: usize,
    },

    /// Scan region does not fit inside the grid
    RegionOutOfBounds {
        /// Minimum corner of the region
        origin: Point,
        /// Side length of the region
        size: usize,
        /// Current grid dimensions (rows, cols)
        grid_dimensions: (usize, usize),
    },

    /// Patch size does not evenly divide the grid
    PatchMisaligned {
        /// Configured patch side length
        patch_size: usize,
        /// Current grid dimensions (rows, cols)
        grid_dimensions: (usize, usize),
    },

    /// No tile connects the requested pair of sides
    UnresolvableJunction {
        /// Grid cell being written
        position: Point,
        /// Side facing the previous cell
        entry: Direction,
        /// Side facing the next cell
        exit: Direction,
    },

    /// The track does not continue through a cell it reaches
    BrokenLoop {
        /// Cell where the walk stopped
        position: Point,
        /// Side the walk tried to enter through
        entry: Direction,
    },

    /// Operation needs at least one road tile
    EmptyTrack,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a preview image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
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
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsertionBlocked {
                axis,
                index,
                blocking,
            } => {
                let allowed = TileType::through(*axis);
                write!(
                    f,
                    "{axis} {index} is invalid for insertion: found {blocking}, only {allowed} and None are allowed"
                )
            }
            Self::LineOutOfRange { axis, index, len } => {
                write!(f, "{axis} {index} is out of range (grid has {len})")
            }
            Self::RegionOutOfBounds {
                origin,
                size,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Scan area {size}x{size} at {origin} is outside the {}x{} tile map",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::PatchMisaligned {
                patch_size,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Patch size {patch_size} does not divide the {}x{} grid",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::UnresolvableJunction {
                position,
                entry,
                exit,
            } => {
                write!(
                    f,
                    "No tile connects {entry} and {exit} at {position}"
                )
            }
            Self::BrokenLoop { position, entry } => {
                write!(
                    f,
                    "Track is broken at {position}: tile does not open to the {entry}"
                )
            }
            Self::EmptyTrack => f.write_str("Grid contains no road tiles"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
        }
    }
}

impl std::error::Error for TrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for track results
pub type Result<T> = std::result::Result<T, TrackError>;

impl From<std::io::Error> for TrackError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TrackError {
    TrackError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
