//! Suits, tiles, and dominoes.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Terrain type of a tile.
///
/// `Castle` marks the fixed centre tile of every kingdom and `None` is an
/// explicit "no terrain" marker; neither appears on a domino from a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Forest terrain.
    Forest,
    /// Grassland terrain.
    Grass,
    /// Mine terrain.
    Mine,
    /// Swamp terrain.
    Swamp,
    /// Lake terrain.
    Water,
    /// Wheat field terrain.
    Wheat,
    /// The starting castle.
    Castle,
    /// No terrain.
    None,
}

impl Suit {
    /// The six suits that appear on dominoes.
    pub const TERRAIN: [Suit; 6] = [
        Suit::Forest,
        Suit::Grass,
        Suit::Mine,
        Suit::Swamp,
        Suit::Water,
        Suit::Wheat,
    ];

    /// Lowercase name, as used by the catalog format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forest => "forest",
            Self::Grass => "grass",
            Self::Mine => "mine",
            Self::Swamp => "swamp",
            Self::Water => "water",
            Self::Wheat => "wheat",
            Self::Castle => "castle",
            Self::None => "none",
        }
    }

    /// Single-character glyph used by grid rendering.
    pub const fn glyph(self) -> char {
        match self {
            Self::Forest => 'F',
            Self::Grass => 'G',
            Self::Mine => 'M',
            Self::Swamp => 'S',
            Self::Water => 'W',
            Self::Wheat => 'H',
            Self::Castle => 'C',
            Self::None => '.',
        }
    }

    /// Whether this is one of the six terrain suits.
    pub const fn is_terrain(self) -> bool {
        !matches!(self, Self::Castle | Self::None)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    /// Parses the six terrain names. `castle` and `none` are rejected:
    /// they never appear in a catalog.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::TERRAIN
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| ParseError::UnknownSuit {
                input: s.to_string(),
            })
    }
}

/// One half of a domino, or the castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    /// Terrain type.
    pub suit: Suit,
    /// Number of crowns printed on the tile.
    pub crowns: u8,
}

impl Tile {
    /// The castle tile placed at the centre of every kingdom.
    pub const CASTLE: Tile = Tile {
        suit: Suit::Castle,
        crowns: 0,
    };

    /// Construct a tile.
    pub const fn new(suit: Suit, crowns: u8) -> Self {
        Self { suit, crowns }
    }

    /// Whether a neighbouring `other` tile accepts this tile next to it.
    ///
    /// True iff `other` is present and is either the castle or of the same
    /// suit. An empty neighbour never connects.
    pub fn valid_connection(&self, other: Option<Tile>) -> bool {
        match other {
            Some(tile) => tile.suit == Suit::Castle || tile.suit == self.suit,
            None => false,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.crowns == 0 {
            write!(f, "{}", self.suit)
        } else {
            write!(f, "{}({})", self.suit, self.crowns)
        }
    }
}

/// A two-tile piece.
///
/// Ordering compares `number` first, which is how a draft line presents
/// dominoes. Numbers are unique within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domino {
    /// Catalog number.
    pub number: u32,
    /// Half placed at a play's anchor.
    pub left: Tile,
    /// Half placed one step from the anchor.
    pub right: Tile,
}

impl Domino {
    /// Construct a domino.
    pub const fn new(number: u32, left: Tile, right: Tile) -> Self {
        Self {
            number,
            left,
            right,
        }
    }

    /// Total crowns on both halves.
    pub fn crowns(&self) -> u32 {
        u32::from(self.left.crowns) + u32::from(self.right.crowns)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{} | {}]", self.number, self.left, self.right)
    }
}
