//! Fixed-size kingdom grid with bounding-box tracking.

use std::fmt;

use kingdom_core::{Point, Tile};

use crate::error::SpaceError;

/// A square tile store centred on a castle.
///
/// For kingdom size `N` the grid has side `2N - 1`, so a kingdom of at most
/// `N x N` tiles fits no matter which direction it grows from the centre.
/// The centre cell holds [`Tile::CASTLE`] from construction onwards.
///
/// The grid keeps a running bounding box over every occupied cell. Every
/// write folds its point into the box first, and [`within_bounds`] asks
/// what the box would become without mutating it.
///
/// [`within_bounds`]: Grid::within_bounds
///
/// # Examples
///
/// ```
/// use kingdom_core::{Point, Suit, Tile};
/// use kingdom_space::Grid;
///
/// let mut grid = Grid::new(5).unwrap();
/// assert_eq!(grid.side(), 9);
/// assert_eq!(grid.get(grid.middle()), Some(Tile::CASTLE));
///
/// grid.set(Point::new(4, 5), Tile::new(Suit::Forest, 1)).unwrap();
/// assert!(grid.within_bounds(Point::new(4, 8)));
/// assert!(!grid.within_bounds(Point::new(4, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    side: u32,
    cells: Box<[Option<Tile>]>,
    min: Point,
    max: Point,
}

impl Grid {
    /// Kingdom size of the standard game.
    pub const STANDARD: u32 = 5;
    /// Kingdom size of the Mighty Duel variant.
    pub const MIGHTY_DUEL: u32 = 7;
    /// Smallest size whose inner ring does not collide with the castle.
    pub const MIN_SIZE: u32 = 3;
    /// Largest supported kingdom size.
    pub const MAX_SIZE: u32 = 1 << 12;

    /// Create an empty grid for a kingdom of `size x size` tiles.
    ///
    /// Returns `Err(SpaceError::InvalidSize)` outside
    /// `[MIN_SIZE, MAX_SIZE]`.
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(SpaceError::InvalidSize {
                size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self::build(size))
    }

    /// Grid for the standard 5x5 kingdom.
    pub fn standard() -> Self {
        Self::build(Self::STANDARD)
    }

    /// Grid for the 7x7 Mighty Duel kingdom.
    pub fn mighty_duel() -> Self {
        Self::build(Self::MIGHTY_DUEL)
    }

    fn build(size: u32) -> Self {
        let side = size * 2 - 1;
        let half = (size - 1) as i32;
        let middle = Point::new(half, half);
        let mut cells = vec![None; (side as usize) * (side as usize)].into_boxed_slice();
        cells[Self::flat_index(side, middle)] = Some(Tile::CASTLE);
        Self {
            size,
            side,
            cells,
            min: middle,
            max: middle,
        }
    }

    /// Kingdom size `N`: the maximum width and height of the kingdom.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Grid side length, `2N - 1`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// The castle cell.
    pub fn middle(&self) -> Point {
        let half = (self.size - 1) as i32;
        Point::new(half, half)
    }

    /// Inclusive `(min, max)` corners of the occupied bounding box.
    pub fn bounding_box(&self) -> (Point, Point) {
        (self.min, self.max)
    }

    fn flat_index(side: u32, point: Point) -> usize {
        (point.x as usize) * (side as usize) + (point.y as usize)
    }

    fn index(&self, point: Point) -> Option<usize> {
        self.within_grid(point)
            .then(|| Self::flat_index(self.side, point))
    }

    /// The tile at `point`, or `None` if the cell is empty or off the grid.
    pub fn get(&self, point: Point) -> Option<Tile> {
        self.index(point).and_then(|i| self.cells[i])
    }

    /// Whether `point` is on the grid and holds no tile.
    pub fn is_vacant(&self, point: Point) -> bool {
        self.index(point).is_some_and(|i| self.cells[i].is_none())
    }

    /// Write `tile` at `point`, growing the bounding box to include it.
    ///
    /// Occupancy and kingdom bounds are the caller's responsibility; this
    /// only refuses points off the grid and the castle cell.
    pub fn set(&mut self, point: Point, tile: Tile) -> Result<(), SpaceError> {
        let i = self.index(point).ok_or(SpaceError::CoordOutOfBounds {
            point,
            side: self.side,
        })?;
        if point == self.middle() {
            return Err(SpaceError::CastleOverwrite);
        }
        (self.min, self.max) = self.extended_box(point);
        self.cells[i] = Some(tile);
        Ok(())
    }

    fn extended_box(&self, point: Point) -> (Point, Point) {
        (
            Point::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            Point::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        )
    }

    /// `0 <= x, y < 2N - 1`.
    pub fn within_grid(&self, point: Point) -> bool {
        let side = self.side as i32;
        (0..side).contains(&point.x) && (0..side).contains(&point.y)
    }

    /// Whether the bounding box grown to include `point` would still be
    /// narrower and shorter than `N`.
    pub fn within_bounds(&self, point: Point) -> bool {
        let (min, max) = self.extended_box(point);
        let size = self.size as i32;
        max.x - min.x < size && max.y - min.y < size
    }

    /// [`within_grid`](Grid::within_grid) and
    /// [`within_bounds`](Grid::within_bounds).
    pub fn within_grid_and_bounds(&self, point: Point) -> bool {
        self.within_grid(point) && self.within_bounds(point)
    }

    /// True iff no occupied cell lies on row or column `1` or `2N - 3`.
    ///
    /// A contiguous kingdom that touches neither index on either axis is
    /// confined to rows and columns `2..=2N - 4`: a square `2N - 5` wide
    /// centred on the castle.
    pub fn bounded(&self) -> bool {
        let ring = [1, self.side as i32 - 2];
        !self
            .occupied()
            .any(|(p, _)| ring.contains(&p.x) || ring.contains(&p.y))
    }

    /// Every occupied cell in row-major order, castle included.
    pub fn occupied(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        let side = self.side as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|tile| (Point::new((i / side) as i32, (i % side) as i32), tile))
        })
    }

    /// Number of occupied cells, castle included.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl fmt::Display for Grid {
    /// Two characters per cell: the suit glyph and the crown count
    /// (blank for none). Empty cells render as `. `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for y in 0..self.side {
            write!(f, "{:<2}", y % 10)?;
        }
        writeln!(f)?;
        for x in 0..self.side as i32 {
            write!(f, "{:<2}", x % 10)?;
            for y in 0..self.side as i32 {
                match self.get(Point::new(x, y)) {
                    Some(tile) if tile.crowns > 0 => {
                        write!(f, "{}{}", tile.suit.glyph(), tile.crowns)?
                    }
                    Some(tile) => write!(f, "{} ", tile.suit.glyph())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_core::Suit;
    use proptest::prelude::*;

    fn forest() -> Tile {
        Tile::new(Suit::Forest, 0)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_places_castle_at_centre() {
        let g = Grid::new(Grid::STANDARD).unwrap();
        assert_eq!(g.side(), 9);
        assert_eq!(g.middle(), Point::new(4, 4));
        assert_eq!(g.get(Point::new(4, 4)), Some(Tile::CASTLE));
        assert_eq!(g.occupied_count(), 1);
        assert_eq!(g.bounding_box(), (Point::new(4, 4), Point::new(4, 4)));
    }

    #[test]
    fn mighty_duel_grid_is_thirteen_wide() {
        let g = Grid::mighty_duel();
        assert_eq!(g.side(), 13);
        assert_eq!(g.middle(), Point::new(6, 6));
        assert_eq!(Grid::standard(), Grid::new(5).unwrap());
    }

    #[test]
    fn new_rejects_unsupported_sizes() {
        assert!(matches!(
            Grid::new(2),
            Err(SpaceError::InvalidSize { size: 2, .. })
        ));
        assert!(matches!(
            Grid::new(Grid::MAX_SIZE + 1),
            Err(SpaceError::InvalidSize { .. })
        ));
    }

    // ── Access tests ────────────────────────────────────────────

    #[test]
    fn get_off_grid_is_none() {
        let g = Grid::new(5).unwrap();
        assert_eq!(g.get(Point::new(-1, 4)), None);
        assert_eq!(g.get(Point::new(4, 9)), None);
        assert!(!g.is_vacant(Point::new(9, 9)));
    }

    #[test]
    fn set_off_grid_is_rejected() {
        let mut g = Grid::new(5).unwrap();
        assert!(matches!(
            g.set(Point::new(9, 0), forest()),
            Err(SpaceError::CoordOutOfBounds { side: 9, .. })
        ));
        assert_eq!(g.bounding_box(), (Point::new(4, 4), Point::new(4, 4)));
    }

    #[test]
    fn set_refuses_castle_cell() {
        let mut g = Grid::new(5).unwrap();
        assert_eq!(g.set(g.middle(), forest()), Err(SpaceError::CastleOverwrite));
        assert_eq!(g.get(g.middle()), Some(Tile::CASTLE));
    }

    #[test]
    fn set_grows_bounding_box() {
        let mut g = Grid::new(5).unwrap();
        g.set(Point::new(3, 4), forest()).unwrap();
        g.set(Point::new(4, 6), forest()).unwrap();
        assert_eq!(g.bounding_box(), (Point::new(3, 4), Point::new(4, 6)));
        assert!(!g.is_vacant(Point::new(3, 4)));
        assert!(g.is_vacant(Point::new(3, 5)));
    }

    // ── Bounds tests ────────────────────────────────────────────

    #[test]
    fn within_bounds_caps_width_at_size() {
        let mut g = Grid::new(5).unwrap();
        // Kingdom spans columns 4..=7 (width 4).
        for y in 5..=7 {
            g.set(Point::new(4, y), forest()).unwrap();
        }
        assert!(g.within_bounds(Point::new(4, 8)));
        assert!(g.within_bounds(Point::new(4, 3)));
        assert!(!g.within_bounds(Point::new(4, 2)));
        assert!(g.within_bounds(Point::new(0, 4)));
        assert!(g.within_grid_and_bounds(Point::new(4, 8)));
        assert!(!g.within_grid_and_bounds(Point::new(4, 9)));
    }

    #[test]
    fn within_bounds_does_not_mutate() {
        let g = Grid::new(5).unwrap();
        assert!(g.within_bounds(Point::new(0, 0)));
        assert_eq!(g.bounding_box(), (Point::new(4, 4), Point::new(4, 4)));
    }

    // ── Middle Kingdom predicate ────────────────────────────────

    #[test]
    fn bounded_until_inner_ring_is_touched() {
        let mut g = Grid::new(5).unwrap();
        assert!(g.bounded());
        g.set(Point::new(4, 6), forest()).unwrap();
        g.set(Point::new(2, 4), forest()).unwrap();
        assert!(g.bounded());
        g.set(Point::new(4, 7), forest()).unwrap();
        assert!(!g.bounded());
    }

    #[test]
    fn bounded_square_is_2n_minus_5_wide() {
        for size in [Grid::STANDARD, Grid::MIGHTY_DUEL] {
            let mut g = Grid::new(size).unwrap();
            let (lo, hi) = (2, 2 * size as i32 - 4);
            assert_eq!(hi - lo + 1, 2 * size as i32 - 5);
            let mid = g.middle().x;
            for p in [(lo, mid), (hi, mid), (mid, lo), (mid, hi)] {
                g.set(p.into(), forest()).unwrap();
            }
            assert!(g.bounded());
            g.set(Point::new(hi + 1, mid), forest()).unwrap();
            assert!(!g.bounded());
        }
    }

    #[test]
    fn bounded_checks_both_axes() {
        let mut g = Grid::new(5).unwrap();
        g.set(Point::new(1, 4), forest()).unwrap();
        assert!(!g.bounded());

        let mut g = Grid::new(5).unwrap();
        g.set(Point::new(4, 1), forest()).unwrap();
        assert!(!g.bounded());
    }

    #[test]
    fn display_renders_castle_and_crowns() {
        let mut g = Grid::new(3).unwrap();
        g.set(Point::new(2, 3), Tile::new(Suit::Water, 2)).unwrap();
        let text = g.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "  0 1 2 3 4 ");
        assert_eq!(rows[1], "0 . . . . . ");
        assert_eq!(rows[3], "2 . . C W2. ");
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn bounding_box_covers_every_write(
            writes in proptest::collection::vec((0i32..9, 0i32..9), 0..20),
        ) {
            let mut g = Grid::new(5).unwrap();
            for (x, y) in writes {
                let p = Point::new(x, y);
                if p != g.middle() {
                    g.set(p, forest()).unwrap();
                }
            }
            let (min, max) = g.bounding_box();
            for (p, _) in g.occupied() {
                prop_assert!(min.x <= p.x && p.x <= max.x);
                prop_assert!(min.y <= p.y && p.y <= max.y);
            }
        }

        #[test]
        fn within_grid_matches_get_domain(x in -3i32..12, y in -3i32..12) {
            let g = Grid::new(5).unwrap();
            let p = Point::new(x, y);
            prop_assert_eq!(g.within_grid(p), (0..9).contains(&x) && (0..9).contains(&y));
            if !g.within_grid(p) {
                prop_assert_eq!(g.get(p), None);
            }
        }
    }
}
