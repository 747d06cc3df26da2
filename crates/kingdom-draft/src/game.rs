//! The draft-and-place round cycle over one board per player.
//!
//! Each round runs three phases:
//!
//! 1. [`begin_round`](Game::begin_round) draws a [`DraftLine`].
//! 2. Players [`select`](Game::select) slots in the current pick order.
//! 3. [`next_placement`](Game::next_placement) hands out claimed dominoes
//!    lowest number first, and each is resolved with
//!    [`place`](Game::place). The order players resolve in becomes the
//!    next round's pick order.
//!
//! All actions validate against the current [`Phase`] and the player due
//! to act; a rejected action leaves the game unchanged.

use std::collections::VecDeque;

use indexmap::IndexSet;
use kingdom_board::{Board, Score};
use kingdom_core::{Domino, PlayerId};
use kingdom_space::Play;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::config::{ConfigError, GameConfig};
use crate::deck::Deck;
use crate::error::DraftError;
use crate::line::DraftLine;

/// How a player resolves the domino they drafted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Place it on the board.
    Play(Play),
    /// Discard it. Only allowed when no legal play exists.
    Discard,
}

/// What the game is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for [`Game::begin_round`].
    Draw,
    /// Waiting for this player to [`select`](Game::select) a slot.
    Select(PlayerId),
    /// Waiting for [`Game::next_placement`] or [`Game::place`].
    Place,
    /// Deck and line are exhausted.
    Over,
}

/// A full game: boards, deck, line, and turn order.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    boards: Vec<Board>,
    deck: Deck,
    line: Option<DraftLine>,
    pick_order: VecDeque<PlayerId>,
    next_order: Vec<PlayerId>,
    pending: Option<(PlayerId, Domino)>,
    round: u32,
}

impl Game {
    /// Set up boards, deal the deck, and draw the initial player order.
    ///
    /// The deck shuffle and the initial order both come from one
    /// `ChaCha8Rng` seeded with `config.seed`. In two-player games every
    /// player appears twice in the pick order.
    pub fn new(catalog: &Catalog, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let deck = Deck::from_rng(catalog, config.deck_size(), config.draw_count(), &mut rng)?;
        let mut players: Vec<PlayerId> = (0..config.players).map(PlayerId).collect();
        players.shuffle(&mut rng);
        let pick_order: VecDeque<PlayerId> = players
            .iter()
            .copied()
            .cycle()
            .take(players.len() * config.picks_per_player())
            .collect();
        debug!(
            players = config.players,
            deck = deck.len(),
            order = ?pick_order,
            "game created"
        );
        Ok(Self {
            boards: (0..config.players).map(|_| Board::new(config.rules)).collect(),
            config,
            deck,
            line: None,
            pick_order,
            next_order: Vec::new(),
            pending: None,
            round: 0,
        })
    }

    /// The configuration this game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Rounds begun so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every board, indexed by [`PlayerId::index`].
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// `player`'s board.
    pub fn board(&self, player: PlayerId) -> Option<&Board> {
        self.boards.get(player.index())
    }

    /// The current draft line, if a round is in progress.
    pub fn line(&self) -> Option<&DraftLine> {
        self.line.as_ref()
    }

    /// Dominoes left in the deck.
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Players still to pick this round, in order. Between rounds this is
    /// the next round's full order.
    pub fn pick_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.pick_order.iter().copied()
    }

    /// The domino awaiting [`place`](Game::place), if one was handed out.
    pub fn pending(&self) -> Option<(PlayerId, Domino)> {
        self.pending
    }

    /// What the game is waiting for.
    pub fn phase(&self) -> Phase {
        match &self.line {
            Some(_) if self.pending.is_some() => Phase::Place,
            Some(_) => match self.pick_order.front() {
                Some(&player) => Phase::Select(player),
                None => Phase::Place,
            },
            None if self.deck.is_empty() => Phase::Over,
            None => Phase::Draw,
        }
    }

    /// True once every drafted domino has been resolved and the deck is
    /// empty.
    pub fn is_over(&self) -> bool {
        self.phase() == Phase::Over
    }

    // ── Round cycle ─────────────────────────────────────────────

    /// Draw the next line.
    #[instrument(level = "debug", skip(self), fields(round = self.round + 1))]
    pub fn begin_round(&mut self) -> Result<&DraftLine, DraftError> {
        if self.phase() != Phase::Draw {
            return Err(if self.deck.is_empty() {
                DraftError::DeckExhausted
            } else {
                DraftError::WrongPhase {
                    expected: "a finished round",
                }
            });
        }
        self.round += 1;
        let line = DraftLine::new(self.deck.draw());
        debug!(slots = line.len(), deck = self.deck.len(), "round started");
        Ok(&*self.line.insert(line))
    }

    /// Claim line slot `index` for `player`, who must be next to pick.
    #[instrument(level = "debug", skip(self))]
    pub fn select(&mut self, player: PlayerId, index: usize) -> Result<(), DraftError> {
        self.check_player(player)?;
        let expected = match self.phase() {
            Phase::Select(expected) => expected,
            _ => {
                return Err(DraftError::WrongPhase {
                    expected: "selection",
                })
            }
        };
        if expected != player {
            return Err(DraftError::OutOfTurn {
                expected,
                got: player,
            });
        }
        let line = self.line.as_mut().ok_or(DraftError::WrongPhase {
            expected: "selection",
        })?;
        line.choose(player, index)?;
        self.pick_order.pop_front();
        debug!(remaining = self.pick_order.len(), "slot claimed");
        Ok(())
    }

    /// Hand out the next claimed domino for placement.
    ///
    /// Returns the same domino again until it is resolved. Unclaimed
    /// slots are dropped. Returns `None` outside the placement phase.
    pub fn next_placement(&mut self) -> Option<(PlayerId, Domino)> {
        if self.phase() != Phase::Place {
            return None;
        }
        if self.pending.is_some() {
            return self.pending;
        }
        let line = self.line.as_mut()?;
        while let Some((claimant, domino)) = line.pop() {
            match claimant {
                Some(player) => {
                    self.pending = Some((player, domino));
                    return self.pending;
                }
                None => debug!(domino = %domino, "unclaimed domino dropped"),
            }
        }
        self.finish_round();
        None
    }

    /// Resolve the pending domino for `player`.
    ///
    /// A play must name the pending domino and be legal on the player's
    /// board. A discard is only accepted when the board has no legal play
    /// for the domino.
    #[instrument(level = "debug", skip(self, placement))]
    pub fn place(
        &mut self,
        player: PlayerId,
        domino: Domino,
        placement: Placement,
    ) -> Result<(), DraftError> {
        self.check_player(player)?;
        let (expected, due) = self.pending.ok_or(DraftError::WrongPhase {
            expected: "a pending placement",
        })?;
        if expected != player {
            return Err(DraftError::OutOfTurn {
                expected,
                got: player,
            });
        }
        if domino != due {
            return Err(DraftError::WrongDomino {
                expected: due,
                got: domino,
            });
        }
        let board = &mut self.boards[player.index()];
        match placement {
            Placement::Play(play) => {
                if *play.domino() != due {
                    return Err(DraftError::WrongDomino {
                        expected: due,
                        got: *play.domino(),
                    });
                }
                board.play(play)?;
            }
            Placement::Discard => {
                if board.can_place(due) {
                    return Err(DraftError::DiscardWithLegalPlays { number: due.number });
                }
                board.discard(due);
            }
        }
        self.pending = None;
        self.next_order.push(player);
        if self.line.as_ref().is_some_and(DraftLine::is_empty) {
            self.finish_round();
        }
        Ok(())
    }

    /// Legal plays for the pending domino on its owner's board.
    pub fn legal_plays(&self) -> Option<IndexSet<Play>> {
        let (player, domino) = self.pending?;
        let board = self.board(player)?;
        Some(board.valid_plays(domino, None, None))
    }

    fn finish_round(&mut self) {
        self.line = None;
        self.pick_order = self.next_order.drain(..).collect();
        debug!(round = self.round, order = ?self.pick_order, "round finished");
    }

    fn check_player(&self, player: PlayerId) -> Result<(), DraftError> {
        if player.index() < self.boards.len() {
            Ok(())
        } else {
            Err(DraftError::UnknownPlayer { player })
        }
    }

    // ── Results ─────────────────────────────────────────────────

    /// Players ranked best first by points, then crowns. Ties keep player
    /// order.
    pub fn standings(&self) -> Vec<(PlayerId, Score)> {
        let mut ranked: Vec<(PlayerId, Score)> = self
            .boards
            .iter()
            .zip(0..)
            .map(|(board, i)| (PlayerId(i), board.score()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_board::Rules;
    use kingdom_core::{Direction, Point};

    fn game(players: u32, seed: u64) -> Game {
        let catalog = Catalog::standard().unwrap();
        Game::new(&catalog, GameConfig::new(players).with_seed(seed)).unwrap()
    }

    /// Everyone takes the first free slot and the first legal play.
    fn play_round(game: &mut Game) {
        game.begin_round().unwrap();
        while let Phase::Select(player) = game.phase() {
            let index = game.line().unwrap().unclaimed()[0];
            game.select(player, index).unwrap();
        }
        while let Some((player, domino)) = game.next_placement() {
            let placement = match game.legal_plays().unwrap().first() {
                Some(&play) => Placement::Play(play),
                None => Placement::Discard,
            };
            game.place(player, domino, placement).unwrap();
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(
            Game::new(&catalog, GameConfig::new(5)).unwrap_err(),
            ConfigError::InvalidPlayerCount { players: 5 }
        );
        let small = Catalog::from_dominoes(catalog.dominoes()[..10].to_vec()).unwrap();
        assert!(matches!(
            Game::new(&small, GameConfig::new(2)),
            Err(ConfigError::CatalogTooSmall { required: 24, .. })
        ));
    }

    #[test]
    fn two_players_pick_twice() {
        let g = game(2, 3);
        let order: Vec<PlayerId> = g.pick_order().collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], order[2]);
        assert_eq!(order[1], order[3]);
        assert_ne!(order[0], order[1]);
        assert_eq!(g.phase(), Phase::Draw);
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = game(3, 11);
        let mut b = game(3, 11);
        while !a.is_over() {
            play_round(&mut a);
            play_round(&mut b);
        }
        assert_eq!(a.standings(), b.standings());
        for (x, y) in a.boards().iter().zip(b.boards()) {
            assert_eq!(x.grid(), y.grid());
        }
    }

    #[test]
    fn select_enforces_turn_order() {
        let mut g = game(3, 0);
        g.begin_round().unwrap();
        let Phase::Select(first) = g.phase() else {
            panic!("expected selection phase");
        };
        let other = PlayerId((first.0 + 1) % 3);
        assert_eq!(
            g.select(other, 0),
            Err(DraftError::OutOfTurn {
                expected: first,
                got: other
            })
        );
        assert_eq!(
            g.select(PlayerId(7), 0),
            Err(DraftError::UnknownPlayer {
                player: PlayerId(7)
            })
        );
        g.select(first, 0).unwrap();
        let Phase::Select(second) = g.phase() else {
            panic!("expected selection phase");
        };
        assert_eq!(
            g.select(second, 0),
            Err(DraftError::SlotTaken { index: 0, by: first })
        );
    }

    #[test]
    fn begin_round_requires_finished_round() {
        let mut g = game(4, 0);
        g.begin_round().unwrap();
        assert_eq!(
            g.begin_round().unwrap_err(),
            DraftError::WrongPhase {
                expected: "a finished round"
            }
        );
    }

    #[test]
    fn placement_order_sets_next_pick_order() {
        let mut g = game(4, 5);
        g.begin_round().unwrap();
        // Each player in turn claims the last free slot, so the first
        // picker places last.
        let mut picks = Vec::new();
        while let Phase::Select(player) = g.phase() {
            let index = *g.line().unwrap().unclaimed().last().unwrap();
            g.select(player, index).unwrap();
            picks.push(player);
        }
        let mut placed = Vec::new();
        while let Some((player, domino)) = g.next_placement() {
            let play = *g.legal_plays().unwrap().first().unwrap();
            g.place(player, domino, Placement::Play(play)).unwrap();
            placed.push(player);
        }
        picks.reverse();
        assert_eq!(placed, picks);
        assert_eq!(g.pick_order().collect::<Vec<_>>(), placed);
        assert_eq!(g.phase(), Phase::Draw);
    }

    #[test]
    fn place_validates_player_and_domino() {
        let mut g = game(2, 8);
        g.begin_round().unwrap();
        while let Phase::Select(player) = g.phase() {
            let index = g.line().unwrap().unclaimed()[0];
            g.select(player, index).unwrap();
        }
        let (player, domino) = g.next_placement().unwrap();
        assert_eq!(g.next_placement(), Some((player, domino)));
        let other = PlayerId(1 - player.0);
        assert!(matches!(
            g.place(other, domino, Placement::Discard),
            Err(DraftError::OutOfTurn { .. })
        ));
        assert_eq!(
            g.place(player, domino, Placement::Discard),
            Err(DraftError::DiscardWithLegalPlays {
                number: domino.number
            })
        );
        let far = Play::new(domino, Point::new(0, 0), Direction::East);
        assert!(matches!(
            g.place(player, domino, Placement::Play(far)),
            Err(DraftError::IllegalPlay(_))
        ));
        assert_eq!(g.pending(), Some((player, domino)));
    }

    #[test]
    fn full_game_runs_to_completion() {
        for (players, rules) in [
            (2, Rules::default()),
            (3, Rules::default().with_harmony()),
            (4, Rules::default().with_middle_kingdom()),
            (2, Rules::default().with_mighty_duel()),
        ] {
            let catalog = Catalog::standard().unwrap();
            let config = GameConfig::new(players).with_rules(rules).with_seed(21);
            let mut g = Game::new(&catalog, config).unwrap();
            let mut rounds = 0;
            while !g.is_over() {
                play_round(&mut g);
                rounds += 1;
            }
            assert_eq!(rounds, config.rounds());
            assert_eq!(g.deck_len(), 0);
            assert_eq!(g.begin_round().unwrap_err(), DraftError::DeckExhausted);
            let per_player = config.deck_size() / players as usize;
            for board in g.boards() {
                let placed = board.grid().occupied_count() - 1;
                assert_eq!(placed / 2 + board.discards().len(), per_player);
            }
            let standings = g.standings();
            assert_eq!(standings.len(), players as usize);
            assert!(standings.windows(2).all(|w| w[0].1 >= w[1].1));
        }
    }
}
