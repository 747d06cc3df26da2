//! Optional rule variants that change board size and scoring.

use kingdom_space::Grid;

/// Flat bonus for a player who never discarded.
pub const HARMONY_BONUS: u32 = 5;

/// Flat bonus for a kingdom that stayed inside the inner square.
pub const MIDDLE_KINGDOM_BONUS: u32 = 10;

/// Rule variants in effect for a board.
///
/// All variants are off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Award [`MIDDLE_KINGDOM_BONUS`] when the castle stays centred.
    pub middle_kingdom: bool,
    /// Award [`HARMONY_BONUS`] when nothing was discarded.
    pub harmony: bool,
    /// Two-player variant on a 7x7 kingdom.
    pub mighty_duel: bool,
}

impl Rules {
    /// Enable the Middle Kingdom bonus.
    pub const fn with_middle_kingdom(mut self) -> Self {
        self.middle_kingdom = true;
        self
    }

    /// Enable the Harmony bonus.
    pub const fn with_harmony(mut self) -> Self {
        self.harmony = true;
        self
    }

    /// Enable the Mighty Duel variant.
    pub const fn with_mighty_duel(mut self) -> Self {
        self.mighty_duel = true;
        self
    }

    /// Maximum kingdom width and height under these rules.
    pub const fn kingdom_size(&self) -> u32 {
        if self.mighty_duel {
            Grid::MIGHTY_DUEL
        } else {
            Grid::STANDARD
        }
    }

    /// An empty grid sized for these rules.
    pub fn grid(&self) -> Grid {
        if self.mighty_duel {
            Grid::mighty_duel()
        } else {
            Grid::standard()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_without_bonuses() {
        let rules = Rules::default();
        assert!(!rules.middle_kingdom && !rules.harmony && !rules.mighty_duel);
        assert_eq!(rules.kingdom_size(), 5);
        assert_eq!(rules.grid().side(), 9);
    }

    #[test]
    fn builders_compose() {
        let rules = Rules::default().with_harmony().with_mighty_duel();
        assert!(rules.harmony);
        assert!(!rules.middle_kingdom);
        assert_eq!(rules.kingdom_size(), 7);
        assert_eq!(rules.grid().side(), 13);
    }
}
