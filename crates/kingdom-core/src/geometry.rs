//! Grid points and the four cardinal directions.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::ParseError;

/// A cell address in a kingdom grid.
///
/// `x` is the row and `y` the column. Points are ordered lexicographically
/// (`x` first), which is what `kingdom_space::Play` relies on to pick a
/// canonical descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index.
    pub x: i32,
    /// Column index.
    pub y: i32,
}

impl Point {
    /// Construct a point from row and column.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four 4-neighbours, in [`Direction::ALL`] order.
    ///
    /// Neighbours are not clipped to any grid; callers bounds-check.
    pub fn adjacent_points(self) -> [Point; 4] {
        Direction::ALL.map(|d| self + d)
    }

    /// The four edges `(self, neighbour)` leaving this point.
    pub fn adjacent_edges(self) -> [(Point, Point); 4] {
        self.adjacent_points().map(|p| (self, p))
    }

    /// Whether `other` is one of the four 4-neighbours of `self`.
    pub fn is_adjacent(self, other: Point) -> bool {
        matches!(
            (self.x.abs_diff(other.x), self.y.abs_diff(other.y)),
            (0, 1) | (1, 0)
        )
    }
}

/// Steps saturate at the `i32` range, so a point far off any grid stays
/// off it instead of overflowing.
impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, d: Direction) -> Point {
        let (dx, dy) = d.offset();
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four unit steps on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `(0, +1)`: next column.
    East,
    /// `(+1, 0)`: next row.
    South,
    /// `(0, -1)`: previous column.
    West,
    /// `(-1, 0)`: previous row.
    North,
}

impl Direction {
    /// All directions, clockwise from east.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Row/column delta of a single step.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::North => (-1, 0),
        }
    }

    /// The direction pointing back. `d.opposite().opposite() == d`.
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::North => Self::South,
        }
    }

    /// Whether a step in this direction increases the point ordering.
    ///
    /// East and south move to a lexicographically larger point.
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::East | Self::South)
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::North => "north",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts full names and single-letter abbreviations, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "east" | "e" => Ok(Self::East),
            "south" | "s" => Ok(Self::South),
            "west" | "w" => Ok(Self::West),
            "north" | "n" => Ok(Self::North),
            _ => Err(ParseError::UnknownDirection {
                input: s.to_string(),
            }),
        }
    }
}
