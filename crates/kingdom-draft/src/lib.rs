//! Catalog, deck, and draft orchestration around Kingdom boards.
//!
//! The placement engine in `kingdom-board` only sees `(player, play)` and
//! `(player, discard)` events. This crate produces them: a [`Catalog`] of
//! dominoes loaded from JSON, a seeded [`Deck`] that draws a round's worth
//! at a time, a [`DraftLine`] players claim from, and a [`Game`] that runs
//! the select/place cycle over one [`Board`](kingdom_board::Board) per
//! player.
//!
//! Nothing here performs terminal I/O. Callers drive a [`Game`] by
//! inspecting its [`Phase`] and feeding choices back in.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod line;

pub use catalog::Catalog;
pub use config::{ConfigError, GameConfig};
pub use deck::Deck;
pub use error::{CatalogError, DraftError};
pub use game::{Game, Phase, Placement};
pub use line::{DraftLine, Slot};
