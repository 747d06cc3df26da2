//! A single player's kingdom: grid, regions, and discards.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use indexmap::IndexSet;
use kingdom_core::{Direction, Domino, InvalidPlay, Point, Rejection, Tile};
use kingdom_space::{Grid, Play, UnionFind};
use tracing::{debug, instrument, trace};

use crate::rules::{Rules, HARMONY_BONUS, MIDDLE_KINGDOM_BONUS};
use crate::score::{Region, Score};

/// One player's kingdom.
///
/// Owns the [`Grid`], the region forest over placed cells, and the list of
/// discarded dominoes. All three only change through [`play`](Board::play)
/// and [`discard`](Board::discard).
///
/// # Examples
///
/// ```
/// use kingdom_board::{Board, Rules};
/// use kingdom_core::{Direction, Domino, Point, Suit, Tile};
/// use kingdom_space::Play;
///
/// let mut board = Board::new(Rules::default());
/// let domino = Domino::new(
///     1,
///     Tile::new(Suit::Forest, 1),
///     Tile::new(Suit::Forest, 2),
/// );
/// board.play(Play::new(domino, Point::new(4, 5), Direction::East)).unwrap();
/// assert_eq!(board.crowns_and_tiles(), vec![(3, 2)]);
/// assert_eq!(board.points(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    rules: Rules,
    grid: Grid,
    regions: UnionFind<Point>,
    discards: Vec<Domino>,
}

impl Board {
    /// An empty kingdom sized for `rules`.
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            grid: rules.grid(),
            regions: UnionFind::new(),
            discards: Vec::new(),
        }
    }

    /// Rules in effect.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The tile grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Region forest over placed cells.
    pub fn regions(&self) -> &UnionFind<Point> {
        &self.regions
    }

    /// Dominoes discarded so far, oldest first.
    pub fn discards(&self) -> &[Domino] {
        &self.discards
    }

    // ── Validation ──────────────────────────────────────────────

    /// Whether `play` passes every placement check.
    pub fn valid_play(&self, play: &Play) -> bool {
        self.check_play(play).is_ok()
    }

    /// Run the placement checks in order: vacancy, bounds, connection.
    ///
    /// Returns the first failing check as [`InvalidPlay`].
    pub fn check_play(&self, play: &Play) -> Result<(), InvalidPlay> {
        let (a, b) = play.points();
        let reject = |reason| {
            Err(InvalidPlay {
                points: (a, b),
                reason,
            })
        };
        if self.grid.get(a).is_some() || self.grid.get(b).is_some() {
            return reject(Rejection::Occupied);
        }
        if !(self.grid.within_grid_and_bounds(a) && self.grid.within_grid_and_bounds(b)) {
            return reject(Rejection::OutOfBounds);
        }
        let domino = play.domino();
        let connected = self.connects(domino.left, &play.left_adjacent_points())
            || self.connects(domino.right, &play.right_adjacent_points());
        if !connected {
            return reject(Rejection::Disconnected);
        }
        Ok(())
    }

    fn connects(&self, tile: Tile, neighbours: &[Point]) -> bool {
        neighbours.iter().any(|&p| {
            self.grid.within_grid_and_bounds(p) && tile.valid_connection(self.grid.get(p))
        })
    }

    // ── Placement ───────────────────────────────────────────────

    /// Validate and commit `play`, then merge the new tiles into regions.
    ///
    /// On rejection the board is unchanged.
    #[instrument(level = "debug", skip(self), fields(play = %play))]
    pub fn play(&mut self, play: Play) -> Result<(), InvalidPlay> {
        if let Err(err) = self.check_play(&play) {
            debug!(reason = %err.reason, "placement rejected");
            return Err(err);
        }
        for (point, tile) in play.placements() {
            self.grid.set(point, tile).map_err(|_| InvalidPlay {
                points: play.points(),
                reason: Rejection::OutOfBounds,
            })?;
        }
        self.merge_regions(&play);
        debug!(
            occupied = self.grid.occupied_count(),
            regions = self.regions.group_count(),
            "placement committed"
        );
        Ok(())
    }

    /// Register both new cells and join every same-suit neighbour pair.
    ///
    /// Pre-existing regions touching the placement are extended through
    /// the external edges; the internal edge joins the halves when they
    /// share a suit.
    fn merge_regions(&mut self, play: &Play) {
        let (left, right) = (play.left_point(), play.right_point());
        self.regions.find(left);
        self.regions.find(right);
        let domino = play.domino();
        if domino.left.suit == domino.right.suit {
            self.regions.join(left, right);
        }
        for (from, to) in play.adjacent_edges() {
            let (Some(placed), Some(neighbour)) = (self.grid.get(from), self.grid.get(to)) else {
                continue;
            };
            if placed.suit == neighbour.suit && self.regions.join(from, to) {
                trace!(%from, %to, suit = %placed.suit, "regions merged");
            }
        }
    }

    /// Record a domino that was not placed. Only affects the Harmony bonus.
    #[instrument(level = "debug", skip(self), fields(domino = %domino))]
    pub fn discard(&mut self, domino: Domino) {
        self.discards.push(domino);
        debug!(discards = self.discards.len(), "domino discarded");
    }

    // ── Move generation ─────────────────────────────────────────

    /// Every legal placement of `domino`, optionally restricted to one
    /// anchor point and/or one direction.
    ///
    /// Without a point, anchors come from [`vacant_points`]; a point off
    /// the grid yields no plays. Each `(point, direction)` candidate is
    /// tried in both orientations; the result holds each distinct
    /// placement once, in discovery order.
    ///
    /// [`vacant_points`]: Board::vacant_points
    pub fn valid_plays(
        &self,
        domino: Domino,
        point: Option<Point>,
        direction: Option<Direction>,
    ) -> IndexSet<Play> {
        let points: Vec<Point> = match point {
            Some(p) if self.grid.within_grid(p) => vec![p],
            Some(_) => Vec::new(),
            None => self.vacant_points().into_iter().collect(),
        };
        let directions: Vec<Direction> = match direction {
            Some(d) => vec![d],
            None => Direction::ALL.to_vec(),
        };
        let mut valid = IndexSet::new();
        for &p in &points {
            for &d in &directions {
                let candidate = Play::new(domino, p, d);
                for play in [candidate, candidate.reversed()] {
                    if self.valid_play(&play) {
                        valid.insert(play);
                    }
                }
            }
        }
        valid
    }

    /// Whether `domino` has at least one legal placement.
    pub fn can_place(&self, domino: Domino) -> bool {
        self.vacant_points().into_iter().any(|p| {
            Direction::ALL.into_iter().any(|d| {
                let play = Play::new(domino, p, d);
                self.valid_play(&play) || self.valid_play(&play.reversed())
            })
        })
    }

    /// Vacant cells adjacent to the kingdom, within grid and bounds.
    ///
    /// Breadth-first from the castle through occupied cells only, so a
    /// vacant cell is reported iff it touches the contiguous kingdom.
    pub fn vacant_points(&self) -> IndexSet<Point> {
        let mut vacant = IndexSet::new();
        let mut seen = HashSet::new();
        let mut frontier = VecDeque::from([self.grid.middle()]);
        while let Some(point) = frontier.pop_front() {
            if !seen.insert(point) {
                continue;
            }
            for next in point.adjacent_points() {
                if !self.grid.within_grid_and_bounds(next) {
                    continue;
                }
                if self.grid.get(next).is_none() {
                    vacant.insert(next);
                } else if !seen.contains(&next) {
                    frontier.push_back(next);
                }
            }
        }
        vacant
    }

    // ── Scoring ─────────────────────────────────────────────────

    /// Every scored region. Regions containing the castle cell are skipped.
    pub fn scored_regions(&self) -> Vec<Region> {
        let castle = self.grid.middle();
        self.regions
            .groups()
            .into_iter()
            .filter(|group| !group.contains(&castle))
            .map(|group| Region {
                crowns: group
                    .iter()
                    .filter_map(|&p| self.grid.get(p))
                    .map(|t| u32::from(t.crowns))
                    .sum(),
                tiles: group.len() as u32,
            })
            .collect()
    }

    /// `(crowns, tiles)` for every scored region.
    pub fn crowns_and_tiles(&self) -> Vec<(u32, u32)> {
        self.scored_regions().into_iter().map(Into::into).collect()
    }

    /// Region points plus any Middle Kingdom and Harmony bonus.
    pub fn points(&self) -> u32 {
        let regions: u32 = self.scored_regions().iter().map(Region::points).sum();
        regions + self.middle_kingdom_points() + self.harmony_points()
    }

    /// Crowns across all scored regions; the tie-break score.
    pub fn crowns(&self) -> u32 {
        self.scored_regions().iter().map(|r| r.crowns).sum()
    }

    /// [`MIDDLE_KINGDOM_BONUS`] if the rule is on and the grid is bounded.
    pub fn middle_kingdom_points(&self) -> u32 {
        if self.rules.middle_kingdom && self.grid.bounded() {
            MIDDLE_KINGDOM_BONUS
        } else {
            0
        }
    }

    /// [`HARMONY_BONUS`] if the rule is on and nothing was discarded.
    pub fn harmony_points(&self) -> u32 {
        if self.rules.harmony && self.discards.is_empty() {
            HARMONY_BONUS
        } else {
            0
        }
    }

    /// Points and crowns together.
    pub fn score(&self) -> Score {
        Score {
            points: self.points(),
            crowns: self.crowns(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.fmt(f)
    }
}
