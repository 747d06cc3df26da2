//! Test fixtures for Kingdom development.
//!
//! Short constructors for tiles and dominoes, a deterministic synthetic
//! domino set, and [`fixtures`] for driving a [`Board`] through a sequence
//! of placements.
//!
//! [`Board`]: kingdom_board::Board

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use kingdom_core::{Domino, Point, Suit, Tile};

pub use fixtures::{board_with, play_indexed, PlacementLog};

/// Shorthand for [`Point::new`].
pub fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Shorthand for [`Tile::new`].
pub fn tile(suit: Suit, crowns: u8) -> Tile {
    Tile::new(suit, crowns)
}

/// A domino from `(suit, crowns)` pairs.
pub fn domino(number: u32, left: (Suit, u8), right: (Suit, u8)) -> Domino {
    Domino::new(number, tile(left.0, left.1), tile(right.0, right.1))
}

/// A crownless domino with the same suit on both halves.
pub fn plain(number: u32, suit: Suit) -> Domino {
    domino(number, (suit, 0), (suit, 0))
}

/// `count` dominoes numbered from 1, cycling through every ordered pair of
/// terrain suits with crowns `0..=2` on the right half.
///
/// Deterministic, so tests and benches see the same set every run.
pub fn synthetic_dominoes(count: u32) -> Vec<Domino> {
    let suits = Suit::TERRAIN;
    let n = suits.len() as u32;
    (0..count)
        .map(|i| {
            let left = suits[(i % n) as usize];
            let right = suits[((i / n) % n) as usize];
            domino(i + 1, (left, 0), (right, (i % 3) as u8))
        })
        .collect()
}
