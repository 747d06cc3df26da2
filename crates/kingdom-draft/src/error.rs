//! Error types for catalog loading and draft actions.

use std::error::Error;
use std::fmt;
use std::io;

use kingdom_core::{Domino, InvalidPlay, ParseError, PlayerId};

/// Errors raised while loading or writing a [`Catalog`](crate::Catalog).
///
/// All of these are fatal for the load: the caller gets no partial catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    Io(io::Error),
    /// The input is not valid catalog JSON.
    Json(serde_json::Error),
    /// A tile names a suit that does not appear on dominoes.
    Suit {
        /// Number of the offending domino.
        number: u32,
        /// The underlying parse failure.
        source: ParseError,
    },
    /// Two entries share a domino number.
    DuplicateNumber {
        /// The repeated number.
        number: u32,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "catalog i/o: {e}"),
            Self::Json(e) => write!(f, "catalog json: {e}"),
            Self::Suit { number, source } => write!(f, "domino #{number}: {source}"),
            Self::DuplicateNumber { number } => {
                write!(f, "domino #{number} appears more than once")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Suit { source, .. } => Some(source),
            Self::DuplicateNumber { .. } => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Errors from out-of-turn or out-of-range draft actions.
///
/// Every variant is recoverable: the game state is unchanged and the
/// caller may retry with a different action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftError {
    /// The action does not fit the current phase of the round.
    WrongPhase {
        /// What the action needed.
        expected: &'static str,
    },
    /// The deck has no dominoes left to start a round.
    DeckExhausted,
    /// The player is not part of this game.
    UnknownPlayer {
        /// The rejected player.
        player: PlayerId,
    },
    /// Someone else is due to act.
    OutOfTurn {
        /// The player whose turn it is.
        expected: PlayerId,
        /// The player who tried to act.
        got: PlayerId,
    },
    /// Line index past the end of the line.
    SlotOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slots in the line.
        len: usize,
    },
    /// Line slot already claimed.
    SlotTaken {
        /// Requested index.
        index: usize,
        /// Player holding the slot.
        by: PlayerId,
    },
    /// The domino is not in the current line.
    UnknownDomino {
        /// Number of the requested domino.
        number: u32,
    },
    /// The placement names a domino other than the one being placed.
    WrongDomino {
        /// The domino due for placement.
        expected: Domino,
        /// The domino named by the caller.
        got: Domino,
    },
    /// The board rejected the play.
    IllegalPlay(InvalidPlay),
    /// A discard was requested although the domino has a legal placement.
    DiscardWithLegalPlays {
        /// Number of the domino.
        number: u32,
    },
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongPhase { expected } => write!(f, "action requires {expected}"),
            Self::DeckExhausted => write!(f, "deck is exhausted"),
            Self::UnknownPlayer { player } => write!(f, "{player} is not in this game"),
            Self::OutOfTurn { expected, got } => {
                write!(f, "{got} acted out of turn, waiting on {expected}")
            }
            Self::SlotOutOfRange { index, len } => {
                write!(f, "slot {index} out of range for line of {len}")
            }
            Self::SlotTaken { index, by } => write!(f, "slot {index} already claimed by {by}"),
            Self::UnknownDomino { number } => write!(f, "domino #{number} is not in the line"),
            Self::WrongDomino { expected, got } => {
                write!(f, "expected #{} to be placed, got #{}", expected.number, got.number)
            }
            Self::IllegalPlay(e) => write!(f, "{e}"),
            Self::DiscardWithLegalPlays { number } => {
                write!(f, "domino #{number} has a legal placement and cannot be discarded")
            }
        }
    }
}

impl Error for DraftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IllegalPlay(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidPlay> for DraftError {
    fn from(e: InvalidPlay) -> Self {
        Self::IllegalPlay(e)
    }
}
