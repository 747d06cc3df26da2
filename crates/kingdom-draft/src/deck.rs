//! Seeded deck of dominoes dealt from a catalog.

use kingdom_core::Domino;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::ConfigError;

/// A shuffled sample of a catalog, drawn a round at a time.
///
/// Identical catalogs, sizes, and seeds give identical decks.
///
/// # Examples
///
/// ```
/// use kingdom_draft::{Catalog, Deck};
///
/// let catalog = Catalog::standard().unwrap();
/// let mut deck = Deck::new(&catalog, 24, 4, 7).unwrap();
/// assert_eq!(deck.len(), 24);
/// assert_eq!(deck.draw().len(), 4);
/// assert_eq!(deck.len(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    dominoes: Vec<Domino>,
    draw_num: usize,
}

impl Deck {
    /// Deal `deck_size` dominoes from `catalog`, shuffled with
    /// `ChaCha8Rng` seeded from `seed`.
    pub fn new(
        catalog: &Catalog,
        deck_size: usize,
        draw_num: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::from_rng(catalog, deck_size, draw_num, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Deal `deck_size` dominoes from `catalog` using `rng`.
    pub fn from_rng<R: Rng + ?Sized>(
        catalog: &Catalog,
        deck_size: usize,
        draw_num: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if draw_num == 0 {
            return Err(ConfigError::ZeroDraw);
        }
        if catalog.len() < deck_size {
            return Err(ConfigError::CatalogTooSmall {
                required: deck_size,
                available: catalog.len(),
            });
        }
        let mut dominoes = catalog.dominoes().to_vec();
        dominoes.shuffle(rng);
        dominoes.truncate(deck_size);
        debug!(deck_size, draw_num, "deck dealt");
        Ok(Self { dominoes, draw_num })
    }

    /// Take up to `draw_num` dominoes off the top.
    ///
    /// Returns fewer only when the deck runs short, and an empty vector
    /// once it is exhausted.
    pub fn draw(&mut self) -> Vec<Domino> {
        let at = self.dominoes.len().saturating_sub(self.draw_num);
        self.dominoes.split_off(at)
    }

    /// Dominoes per draw.
    pub fn draw_num(&self) -> usize {
        self.draw_num
    }

    /// Dominoes left.
    pub fn len(&self) -> usize {
        self.dominoes.len()
    }

    /// True once every domino has been drawn.
    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }
}
