//! Kingdom greedy duel: two bots play a seeded standard game.
//!
//! Demonstrates:
//!   1. Loading the standard catalog
//!   2. Driving a Game through draw, select, and place phases
//!   3. Choosing plays with a one-step lookahead on Board::points
//!   4. Reading standings at the end
//!
//! Run with:
//!   RUST_LOG=kingdom_board=debug cargo run --example greedy_duel

use std::error::Error;

use kingdom::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SEED: u64 = 2024;

/// The legal play that scores best immediately, ties to the first found.
fn best_play(board: &Board, domino: Domino) -> Option<Play> {
    let mut best: Option<(Score, Play)> = None;
    for play in board.valid_plays(domino, None, None) {
        let mut trial = board.clone();
        if trial.play(play).is_err() {
            continue;
        }
        let score = trial.score();
        if best.is_none_or(|(s, _)| score > s) {
            best = Some((score, play));
        }
    }
    best.map(|(_, play)| play)
}

/// The slot whose domino carries the most crowns.
fn best_slot(game: &Game) -> usize {
    let Some(line) = game.line() else {
        return 0;
    };
    let slots: Vec<&kingdom::draft::Slot> = line.slots().collect();
    line.unclaimed()
        .into_iter()
        .max_by_key(|&i| (slots[i].domino.crowns(), std::cmp::Reverse(i)))
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = Catalog::standard()?;
    let config = GameConfig::new(2)
        .with_rules(Rules::default().with_harmony().with_middle_kingdom())
        .with_seed(SEED);
    let mut game = Game::new(&catalog, config)?;

    loop {
        match game.phase() {
            Phase::Draw => {
                let line = game.begin_round()?.to_string();
                info!(round = game.round(), "drew line");
                print!("{line}");
            }
            Phase::Select(player) => {
                let index = best_slot(&game);
                game.select(player, index)?;
            }
            Phase::Place => {
                let Some((player, domino)) = game.next_placement() else {
                    continue;
                };
                let board = game.board(player).ok_or("missing board")?;
                let placement = match best_play(board, domino) {
                    Some(play) => {
                        info!(%player, %play, "placing");
                        Placement::Play(play)
                    }
                    None => {
                        info!(%player, %domino, "discarding");
                        Placement::Discard
                    }
                };
                game.place(player, domino, placement)?;
            }
            Phase::Over => break,
        }
    }

    for (rank, (player, score)) in game.standings().into_iter().enumerate() {
        println!("{}. {player}: {score}", rank + 1);
        if let Some(board) = game.board(player) {
            println!("{board}");
        }
    }
    Ok(())
}
