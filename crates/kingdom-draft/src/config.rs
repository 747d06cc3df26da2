//! Game configuration, derived sizes, and validation.
//!
//! [`GameConfig`] is the builder input for a [`Game`](crate::Game).
//! [`validate()`](GameConfig::validate) checks the player count and rule
//! combination before any deck is dealt; everything else (turn count,
//! draw size, deck size) is derived from the validated fields.

use std::error::Error;
use std::fmt;

use kingdom_board::Rules;

/// Fewest players in a game.
pub const MIN_PLAYERS: u32 = 2;
/// Most players in a game.
pub const MAX_PLAYERS: u32 = 4;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GameConfig::validate()`] or deck setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Player count outside `[MIN_PLAYERS, MAX_PLAYERS]`.
    InvalidPlayerCount {
        /// The configured count.
        players: u32,
    },
    /// Mighty Duel is a two-player variant.
    MightyDuelPlayers {
        /// The configured count.
        players: u32,
    },
    /// The catalog holds fewer dominoes than the deck needs.
    CatalogTooSmall {
        /// Dominoes the deck needs.
        required: usize,
        /// Dominoes in the catalog.
        available: usize,
    },
    /// A deck must draw at least one domino per round.
    ZeroDraw,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlayerCount { players } => write!(
                f,
                "player count {players} outside [{MIN_PLAYERS}, {MAX_PLAYERS}]"
            ),
            Self::MightyDuelPlayers { players } => {
                write!(f, "mighty duel needs exactly 2 players, got {players}")
            }
            Self::CatalogTooSmall {
                required,
                available,
            } => write!(
                f,
                "deck needs {required} dominoes but the catalog holds {available}"
            ),
            Self::ZeroDraw => write!(f, "draw count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── GameConfig ─────────────────────────────────────────────────────

/// Complete configuration for a [`Game`](crate::Game).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of players. Default: 2.
    pub players: u32,
    /// Rule variants shared by every board.
    pub rules: Rules,
    /// Seed for the deck shuffle and initial player order.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            rules: Rules::default(),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// A config for `players` players with default rules and seed 0.
    pub fn new(players: u32) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    /// Replace the rule variants.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the player count and rule combination.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::InvalidPlayerCount {
                players: self.players,
            });
        }
        if self.rules.mighty_duel && self.players != 2 {
            return Err(ConfigError::MightyDuelPlayers {
                players: self.players,
            });
        }
        Ok(())
    }

    /// Base turn count: 24 for Mighty Duel, 6 for the standard two-player
    /// game, 12 otherwise.
    pub fn max_turns(&self) -> u32 {
        if self.rules.mighty_duel {
            24
        } else if self.players == 2 {
            6
        } else {
            12
        }
    }

    /// Dominoes drawn per round: 3 with three players, 4 otherwise.
    pub fn draw_count(&self) -> usize {
        if self.players == 3 {
            3
        } else {
            4
        }
    }

    /// Dominoes dealt into the deck.
    ///
    /// `max_turns × players`, doubled for the standard two-player game so
    /// each player still places twelve dominoes.
    pub fn deck_size(&self) -> usize {
        let base = (self.max_turns() * self.players) as usize;
        if self.players == 2 && !self.rules.mighty_duel {
            base * 2
        } else {
            base
        }
    }

    /// Rounds until the deck runs out.
    pub fn rounds(&self) -> usize {
        self.deck_size().div_ceil(self.draw_count())
    }

    /// How many line slots each player claims per round.
    ///
    /// Two players claim two each, so every slot is taken.
    pub fn picks_per_player(&self) -> usize {
        if self.players == 2 {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn player_count_is_bounded() {
        for players in [0, 1, 5] {
            assert_eq!(
                GameConfig::new(players).validate(),
                Err(ConfigError::InvalidPlayerCount { players })
            );
        }
        for players in 2..=4 {
            assert!(GameConfig::new(players).validate().is_ok());
        }
    }

    #[test]
    fn mighty_duel_needs_two_players() {
        let rules = Rules::default().with_mighty_duel();
        assert!(GameConfig::new(2).with_rules(rules).validate().is_ok());
        assert_eq!(
            GameConfig::new(3).with_rules(rules).validate(),
            Err(ConfigError::MightyDuelPlayers { players: 3 })
        );
    }

    #[test]
    fn derived_sizes_match_player_counts() {
        // (players, mighty duel, max turns, draw, deck, rounds)
        let cases = [
            (2, false, 6, 4, 24, 6),
            (3, false, 12, 3, 36, 12),
            (4, false, 12, 4, 48, 12),
            (2, true, 24, 4, 48, 12),
        ];
        for (players, duel, turns, draw, deck, rounds) in cases {
            let mut rules = Rules::default();
            rules.mighty_duel = duel;
            let cfg = GameConfig::new(players).with_rules(rules);
            assert_eq!(cfg.max_turns(), turns, "{players} players, duel {duel}");
            assert_eq!(cfg.draw_count(), draw);
            assert_eq!(cfg.deck_size(), deck);
            assert_eq!(cfg.rounds(), rounds);
            assert_eq!(cfg.draw_count(), players as usize * cfg.picks_per_player());
        }
    }

    #[test]
    fn each_player_fills_the_kingdom() {
        let duel = Rules::default().with_mighty_duel();
        for cfg in [
            GameConfig::new(2),
            GameConfig::new(3),
            GameConfig::new(4),
            GameConfig::new(2).with_rules(duel),
        ] {
            let per_player = cfg.deck_size() / cfg.players as usize;
            let side = cfg.rules.kingdom_size() as usize;
            assert_eq!(per_player * 2, side * side - 1);
        }
    }
}
