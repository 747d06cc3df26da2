//! The draft line: one round's dominoes, claimed by players.

use std::collections::VecDeque;
use std::fmt;

use kingdom_core::{Domino, PlayerId};

use crate::error::DraftError;

/// One position in a [`DraftLine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// The domino on offer.
    pub domino: Domino,
    /// Who claimed it, if anyone.
    pub claimed_by: Option<PlayerId>,
}

/// A round's dominoes, ordered by number.
///
/// Players claim slots during selection; [`pop`](DraftLine::pop) then
/// hands slots out lowest number first, which fixes the placement order
/// and therefore the next round's pick order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftLine {
    slots: VecDeque<Slot>,
}

impl DraftLine {
    /// A line of unclaimed slots, sorted by domino number.
    pub fn new(mut dominoes: Vec<Domino>) -> Self {
        dominoes.sort_by_key(|d| d.number);
        Self {
            slots: dominoes
                .into_iter()
                .map(|domino| Slot {
                    domino,
                    claimed_by: None,
                })
                .collect(),
        }
    }

    /// Claim slot `index` for `player`.
    pub fn choose(&mut self, player: PlayerId, index: usize) -> Result<(), DraftError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(DraftError::SlotOutOfRange { index, len })?;
        if let Some(by) = slot.claimed_by {
            return Err(DraftError::SlotTaken { index, by });
        }
        slot.claimed_by = Some(player);
        Ok(())
    }

    /// Claim the slot holding `domino` for `player`.
    pub fn choose_domino(&mut self, player: PlayerId, domino: &Domino) -> Result<(), DraftError> {
        let index = self
            .position(domino.number)
            .ok_or(DraftError::UnknownDomino {
                number: domino.number,
            })?;
        self.choose(player, index)
    }

    /// Index of the slot holding domino `number`.
    pub fn position(&self, number: u32) -> Option<usize> {
        self.slots.iter().position(|s| s.domino.number == number)
    }

    /// Remove and return the first slot as `(claimant, domino)`.
    pub fn pop(&mut self) -> Option<(Option<PlayerId>, Domino)> {
        self.slots.pop_front().map(|s| (s.claimed_by, s.domino))
    }

    /// Slots in line order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter()
    }

    /// Indices of slots nobody has claimed.
    pub fn unclaimed(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.claimed_by.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of slots left.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True once every slot has been popped.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for DraftLine {
    /// One slot per line: the index when unclaimed, else the claimant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot.claimed_by {
                Some(player) => writeln!(f, "{player}: {}", slot.domino)?,
                None => writeln!(f, "{i}: {}", slot.domino)?,
            }
        }
        Ok(())
    }
}
