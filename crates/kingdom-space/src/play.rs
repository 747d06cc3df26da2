//! Domino placement descriptors.
//!
//! A placement puts the two halves of a domino on two adjacent cells. The
//! same placement can be described from either end: anchored on the left
//! half stepping towards the right half, or anchored on the right half
//! stepping back. [`Play`] stores one canonical descriptor, so both
//! descriptions compare and hash equal without a custom equivalence.
//!
//! The two orientations of a domino on the same pair of cells (left half
//! on either cell) are different placements; [`Play::reversed`] maps one
//! to the other.

use std::fmt;

use kingdom_core::{Direction, Domino, Point, Tile};
use smallvec::SmallVec;

/// Which half of a domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Half {
    /// [`Domino::left`].
    Left,
    /// [`Domino::right`].
    Right,
}

impl Half {
    /// The other half.
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// This half's tile on `domino`.
    pub const fn of(self, domino: &Domino) -> Tile {
        match self {
            Self::Left => domino.left,
            Self::Right => domino.right,
        }
    }
}

/// A domino placed on two adjacent cells.
///
/// Canonical form: `anchor` is the smaller of the two cells and
/// `direction` is east or south. `anchor_half` records which half sits on
/// the anchor. Construction normalises any descriptor into this form.
///
/// # Examples
///
/// ```
/// use kingdom_core::{Direction, Domino, Point, Suit, Tile};
/// use kingdom_space::Play;
///
/// let domino = Domino::new(
///     1,
///     Tile::new(Suit::Forest, 0),
///     Tile::new(Suit::Grass, 0),
/// );
/// let play = Play::new(domino, Point::new(4, 5), Direction::East);
/// assert_eq!(play.points(), (Point::new(4, 5), Point::new(4, 6)));
/// assert_eq!(play.flipped(), play);
/// assert_ne!(play.reversed(), play);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Play {
    domino: Domino,
    anchor: Point,
    direction: Direction,
    anchor_half: Half,
}

impl Play {
    /// Place `domino.left` at `anchor` and `domino.right` one step in
    /// `direction`.
    pub fn new(domino: Domino, anchor: Point, direction: Direction) -> Self {
        Self::with_anchor_half(domino, anchor, direction, Half::Left)
    }

    /// Place the given half at `anchor` and the other half one step in
    /// `direction`.
    pub fn with_anchor_half(
        domino: Domino,
        anchor: Point,
        direction: Direction,
        anchor_half: Half,
    ) -> Self {
        if direction.is_forward() {
            Self {
                domino,
                anchor,
                direction,
                anchor_half,
            }
        } else {
            Self {
                domino,
                anchor: anchor + direction,
                direction: direction.opposite(),
                anchor_half: anchor_half.other(),
            }
        }
    }

    /// The placed domino.
    pub fn domino(&self) -> &Domino {
        &self.domino
    }

    /// Canonical anchor: the smaller occupied cell.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Canonical direction: east or south.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Which half sits on [`anchor`](Play::anchor).
    pub fn anchor_half(&self) -> Half {
        self.anchor_half
    }

    /// The occupied pair `(anchor, anchor + direction)`.
    pub fn points(&self) -> (Point, Point) {
        (self.anchor, self.anchor + self.direction)
    }

    /// The cell holding `half`.
    pub fn point_of(&self, half: Half) -> Point {
        if half == self.anchor_half {
            self.anchor
        } else {
            self.anchor + self.direction
        }
    }

    /// The cell holding the left half.
    pub fn left_point(&self) -> Point {
        self.point_of(Half::Left)
    }

    /// The cell holding the right half.
    pub fn right_point(&self) -> Point {
        self.point_of(Half::Right)
    }

    /// Both `(cell, tile)` writes this placement performs, left half first.
    pub fn placements(&self) -> [(Point, Tile); 2] {
        [Half::Left, Half::Right].map(|half| (self.point_of(half), half.of(&self.domino)))
    }

    fn external_neighbours(from: Point, partner: Point) -> SmallVec<[Point; 3]> {
        from.adjacent_points()
            .into_iter()
            .filter(|&p| p != partner)
            .collect()
    }

    /// The three 4-neighbours of the left half, excluding the right half.
    pub fn left_adjacent_points(&self) -> SmallVec<[Point; 3]> {
        Self::external_neighbours(self.left_point(), self.right_point())
    }

    /// The three 4-neighbours of the right half, excluding the left half.
    pub fn right_adjacent_points(&self) -> SmallVec<[Point; 3]> {
        Self::external_neighbours(self.right_point(), self.left_point())
    }

    /// `(occupied, neighbour)` edges leaving the placement: three per half,
    /// the internal edge between the halves excluded.
    pub fn adjacent_edges(&self) -> SmallVec<[(Point, Point); 6]> {
        let (left, right) = (self.left_point(), self.right_point());
        left.adjacent_edges()
            .into_iter()
            .chain(right.adjacent_edges())
            .filter(|&(a, b)| !((a, b) == (left, right) || (a, b) == (right, left)))
            .collect()
    }

    /// The same placement described from the other end: anchored one step
    /// along `direction`, pointing back.
    ///
    /// Always equal to `self`.
    pub fn flipped(&self) -> Self {
        Self::with_anchor_half(
            self.domino,
            self.anchor + self.direction,
            self.direction.opposite(),
            self.anchor_half.other(),
        )
    }

    /// The domino turned end-for-end on the same two cells.
    pub fn reversed(&self) -> Self {
        Self {
            anchor_half: self.anchor_half.other(),
            ..*self
        }
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}@{} {}@{}",
            self.domino.number,
            self.domino.left.suit,
            self.left_point(),
            self.domino.right.suit,
            self.right_point(),
        )
    }
}
