//! Spatial data structures for Kingdom boards.
//!
//! This crate holds the three pieces a board is assembled from:
//!
//! - [`Grid`]: fixed-size tile store centred on a castle, with a running
//!   bounding box over every occupied cell.
//! - [`Play`]: a domino placement descriptor with flip-equivalent identity
//!   and the adjacency sets that validation and region merging consume.
//! - [`UnionFind`]: disjoint sets over arbitrary keys, used to track
//!   connected same-suit regions as tiles are placed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod play;
pub mod union_find;

pub use error::SpaceError;
pub use grid::Grid;
pub use play::{Half, Play};
pub use union_find::UnionFind;
