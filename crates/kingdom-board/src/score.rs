//! Scoring summaries.

use std::fmt;

/// One connected same-suit region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region {
    /// Total crowns on the region's tiles.
    pub crowns: u32,
    /// Number of tiles in the region.
    pub tiles: u32,
}

impl Region {
    /// Points the region contributes: crowns times tiles.
    pub fn points(&self) -> u32 {
        self.crowns * self.tiles
    }
}

impl From<Region> for (u32, u32) {
    fn from(r: Region) -> Self {
        (r.crowns, r.tiles)
    }
}

/// A board's final standing.
///
/// Orders by points, then by crowns as the tie-break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    /// Region points plus any bonuses.
    pub points: u32,
    /// Crowns across all scored regions.
    pub crowns: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} points ({} crowns)", self.points, self.crowns)
    }
}
