//! Kingdom: tile-placement legality and territory scoring for
//! Kingdomino-style games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Kingdom sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use kingdom::prelude::*;
//!
//! let mut board = Board::new(Rules::default().with_harmony());
//! let domino = Domino::new(
//!     1,
//!     Tile::new(Suit::Forest, 1),
//!     Tile::new(Suit::Forest, 2),
//! );
//!
//! // Every legal placement, both orientations, each listed once.
//! let plays = board.valid_plays(domino, None, None);
//! assert!(!plays.is_empty());
//!
//! board.play(Play::new(domino, Point::new(4, 5), Direction::East)).unwrap();
//! assert_eq!(board.crowns_and_tiles(), vec![(3, 2)]);
//! // 3 crowns x 2 tiles, plus the Harmony bonus.
//! assert_eq!(board.points(), 11);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kingdom-core` | Points, directions, suits, tiles, dominoes, errors |
//! | [`space`] | `kingdom-space` | Grid, placements, union-find |
//! | [`board`] | `kingdom-board` | Validation, placement, scoring, rule variants |
//! | [`draft`] | `kingdom-draft` | Catalog, deck, draft line, game orchestration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`kingdom-core`).
pub use kingdom_core as types;

/// Grid storage, placement descriptors, and the region union-find
/// (`kingdom-space`).
pub use kingdom_space as space;

/// A single player's kingdom: validation, placement, scoring
/// (`kingdom-board`).
pub use kingdom_board as board;

/// Catalog loading, seeded decks, and the draft cycle (`kingdom-draft`).
pub use kingdom_draft as draft;

/// Common imports for typical Kingdom usage.
///
/// ```rust
/// use kingdom::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use kingdom_core::{Direction, Domino, PlayerId, Point, Suit, Tile};

    // Errors
    pub use kingdom_core::{InvalidPlay, Rejection};
    pub use kingdom_draft::{CatalogError, ConfigError, DraftError};

    // Space
    pub use kingdom_space::{Grid, Play};

    // Board
    pub use kingdom_board::{Board, Rules, Score};

    // Draft
    pub use kingdom_draft::{Catalog, Game, GameConfig, Phase, Placement};
}
