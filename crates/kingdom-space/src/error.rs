//! Error types for grid construction and writes.

use kingdom_core::Point;
use std::fmt;

/// Errors arising from grid construction or direct grid writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A point lies outside the grid.
    CoordOutOfBounds {
        /// The offending point.
        point: Point,
        /// Grid side length.
        side: u32,
    },
    /// The kingdom size is outside the supported range.
    InvalidSize {
        /// The requested kingdom size.
        size: u32,
        /// Smallest supported size.
        min: u32,
        /// Largest supported size.
        max: u32,
    },
    /// Attempted to overwrite the castle at the grid centre.
    CastleOverwrite,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { point, side } => {
                write!(f, "point {point} out of bounds: [0, {side}) x [0, {side})")
            }
            Self::InvalidSize { size, min, max } => {
                write!(f, "kingdom size {size} outside [{min}, {max}]")
            }
            Self::CastleOverwrite => write!(f, "the castle cell cannot be overwritten"),
        }
    }
}

impl std::error::Error for SpaceError {}
