//! Core value types for the Kingdom placement engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the immutable vocabulary shared by every other crate in the workspace:
//! grid points and directions, suits, tiles and dominoes, player IDs,
//! and the error types raised when a placement or a parse is rejected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod tile;

pub use error::{InvalidPlay, ParseError, Rejection};
pub use geometry::{Direction, Point};
pub use id::PlayerId;
pub use tile::{Domino, Suit, Tile};
