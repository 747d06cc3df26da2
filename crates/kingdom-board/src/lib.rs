//! Placement validation and territory scoring for a single kingdom.
//!
//! A [`Board`] owns one player's grid, region forest, and discard pile. It
//! is the only way those three change: [`Board::play`] validates and
//! commits a placement, [`Board::discard`] records a domino that could not
//! be placed, and the scoring methods read the resulting regions.
//!
//! Validation rejects with [`InvalidPlay`](kingdom_core::InvalidPlay),
//! which is recoverable: pick another placement from
//! [`Board::valid_plays`] or discard.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod rules;
pub mod score;

pub use board::Board;
pub use rules::Rules;
pub use score::{Region, Score};
