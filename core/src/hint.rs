use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Remaining hint uses, never refilled within a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintBudget {
    allowance: u8,
    left: u8,
}

impl HintBudget {
    pub const fn new(allowance: u8) -> Self {
        Self {
            allowance,
            left: allowance,
        }
    }

    pub const fn allowance(&self) -> u8 {
        self.allowance
    }

    pub const fn left(&self) -> u8 {
        self.left
    }

    pub const fn is_exhausted(&self) -> bool {
        self.left == 0
    }

    /// Spends one hint, `false` if none are left.
    pub fn consume(&mut self) -> bool {
        match self.left.checked_sub(1) {
            Some(left) => {
                self.left = left;
                true
            }
            None => false,
        }
    }
}

/// First pair of hidden cards, in row-major scan order, that share a value.
pub fn find_hint_pair(board: &Board) -> Option<(Coord2, Coord2)> {
    let hidden: Vec<_> = board.iter_with_status(CardStatus::Hidden).collect();

    for (i, &(first, first_card)) in hidden.iter().enumerate() {
        if let Some(&(second, _)) = hidden[i + 1..]
            .iter()
            .find(|(_, card)| card.value == first_card.value)
        {
            return Some((first, second));
        }
    }
    None
}
