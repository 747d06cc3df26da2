//! Board-driving fixtures.
//!
//! - [`board_with`] replays a fixed list of placements.
//! - [`play_indexed`] plays a domino sequence, choosing among the legal
//!   placements by index. Paired with proptest-generated indices it yields
//!   random but always-legal games.

use kingdom_board::{Board, Rules};
use kingdom_core::{Domino, InvalidPlay};
use kingdom_space::Play;

/// A fresh board under `rules` with every play in `plays` committed.
///
/// Stops at the first rejected play.
pub fn board_with(rules: Rules, plays: impl IntoIterator<Item = Play>) -> Result<Board, InvalidPlay> {
    let mut board = Board::new(rules);
    for play in plays {
        board.play(play)?;
    }
    Ok(board)
}

/// What [`play_indexed`] did with each domino.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementLog {
    pub plays: Vec<Play>,
    pub discards: Vec<Domino>,
}

/// Place each domino using `picks[i] % legal.len()` as the choice among
/// its legal placements, discarding when there are none.
///
/// Picks are reused cyclically; an empty `picks` always takes the first
/// legal placement.
pub fn play_indexed(board: &mut Board, dominoes: &[Domino], picks: &[usize]) -> PlacementLog {
    let mut log = PlacementLog::default();
    for (i, &domino) in dominoes.iter().enumerate() {
        let legal = board.valid_plays(domino, None, None);
        if legal.is_empty() {
            board.discard(domino);
            log.discards.push(domino);
            continue;
        }
        let pick = if picks.is_empty() { 0 } else { picks[i % picks.len()] };
        let Some(&play) = legal.get_index(pick % legal.len()) else {
            continue;
        };
        if board.play(play).is_ok() {
            log.plays.push(play);
        }
    }
    log
}
