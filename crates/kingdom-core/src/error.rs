//! Error types shared across the workspace.
//!
//! [`InvalidPlay`] is the single rejection raised by placement validation.
//! It is recoverable: callers pick another placement or discard.

use std::error::Error;
use std::fmt;

use crate::geometry::Point;

/// Which validation check rejected a placement.
///
/// Checks run in this order and the first failure is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// At least one target cell already holds a tile.
    Occupied,
    /// A target cell is off the grid or would stretch the kingdom past its
    /// maximum width or height.
    OutOfBounds,
    /// Neither half touches a compatible tile (same suit or the castle).
    Disconnected,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied => write!(f, "target cell is occupied"),
            Self::OutOfBounds => write!(f, "target cell is out of bounds"),
            Self::Disconnected => write!(f, "no compatible neighbouring tile"),
        }
    }
}

/// A placement failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPlay {
    /// The two cells the placement tried to occupy, anchor first.
    pub points: (Point, Point),
    /// The failing check.
    pub reason: Rejection,
}

impl fmt::Display for InvalidPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.points;
        write!(f, "invalid play at {a}-{b}: {}", self.reason)
    }
}

impl Error for InvalidPlay {}

/// Text could not be parsed into a core value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the six terrain names.
    UnknownSuit {
        /// The rejected input.
        input: String,
    },
    /// Not a direction name or abbreviation.
    UnknownDirection {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSuit { input } => write!(f, "unknown suit '{input}'"),
            Self::UnknownDirection { input } => write!(f, "unknown direction '{input}'"),
        }
    }
}

impl Error for ParseError {}
