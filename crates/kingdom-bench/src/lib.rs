//! Benchmark profiles for the Kingdom placement engine.
//!
//! - [`filled_board`]: a board grown by a fixed number of deterministic
//!   placements, for move-generation and scoring benches.
//! - [`greedy_game`]: a full seeded game where every player takes the first
//!   free slot and the first legal play.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use kingdom_board::{Board, Rules};
use kingdom_core::{Domino, InvalidPlay};
use kingdom_draft::{Catalog, ConfigError, DraftError, Game, GameConfig, Phase, Placement};

/// Grow a board by placing `dominoes` in order, each on the legal play at
/// position `seed % legal.len()` (rotating the seed between turns).
/// Dominoes without a legal play are discarded.
///
/// Every play comes from `valid_plays`, so an error here means move
/// generation and validation disagree.
pub fn filled_board(rules: Rules, dominoes: &[Domino], seed: u64) -> Result<Board, InvalidPlay> {
    let mut board = Board::new(rules);
    let mut state = seed;
    for &domino in dominoes {
        let legal = board.valid_plays(domino, None, None);
        if legal.is_empty() {
            board.discard(domino);
            continue;
        }
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let index = (state >> 33) as usize % legal.len();
        if let Some(&play) = legal.get_index(index) {
            board.play(play)?;
        }
    }
    Ok(board)
}

/// Errors a benchmark game can hit.
#[derive(Debug)]
pub enum ProfileError {
    /// The game could not be created.
    Config(ConfigError),
    /// A draft action was rejected.
    Draft(DraftError),
}

impl From<ConfigError> for ProfileError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DraftError> for ProfileError {
    fn from(e: DraftError) -> Self {
        Self::Draft(e)
    }
}

/// Play a full game greedily and return it finished.
pub fn greedy_game(catalog: &Catalog, config: GameConfig) -> Result<Game, ProfileError> {
    let mut game = Game::new(catalog, config)?;
    loop {
        match game.phase() {
            Phase::Draw => {
                game.begin_round()?;
            }
            Phase::Select(player) => {
                let index = game
                    .line()
                    .and_then(|line| line.unclaimed().first().copied())
                    .unwrap_or(0);
                game.select(player, index)?;
            }
            Phase::Place => {
                let Some((player, domino)) = game.next_placement() else {
                    continue;
                };
                let placement = game
                    .legal_plays()
                    .and_then(|plays| plays.first().copied())
                    .map_or(Placement::Discard, Placement::Play);
                game.place(player, domino, placement)?;
            }
            Phase::Over => return Ok(game),
        }
    }
}
