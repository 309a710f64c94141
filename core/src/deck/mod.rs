use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, config: &GameConfig) -> Result<Deck>;
}

/// Face assignment for every cell of a board, holding each value exactly twice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    values: Array2<CardValue>,
}

impl Deck {
    /// Builds a deck from row-major `values`, checking the perfect-pairing invariant.
    pub fn from_values(size: Coord2, values: &[CardValue]) -> Result<Self> {
        let cells = mult(size.0, size.1);
        if cells == 0 {
            return Err(ConfigIssue::EmptyBoard.into());
        }
        if values.len() != usize::from(cells) {
            return Err(ConfigIssue::ShapeMismatch.into());
        }
        if cells % 2 != 0 {
            return Err(ConfigIssue::OddCellCount(cells).into());
        }

        let mut counts = [0u8; VALUE_ALPHABET as usize];
        for &value in values {
            let Some(count) = counts.get_mut(usize::from(value)) else {
                return Err(ConfigIssue::AlphabetExhausted {
                    pairs: cells / 2,
                    alphabet: VALUE_ALPHABET,
                }
                .into());
            };
            *count = count.saturating_add(1);
        }
        if counts.iter().any(|&count| count != 0 && count != 2) {
            return Err(ConfigIssue::UnpairedValues.into());
        }

        let values = Array2::from_shape_vec(size.to_nd_index(), values.to_vec())
            .map_err(|_| GameError::Configuration(ConfigIssue::ShapeMismatch))?;
        Ok(Self { values })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.values.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.values.len().try_into().unwrap()
    }

    pub fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }

    pub fn value_at(&self, coords: Coord2) -> CardValue {
        self.values[coords.to_nd_index()]
    }

    /// Values in row-major order.
    pub fn to_vec(&self) -> Vec<CardValue> {
        self.values.iter().copied().collect()
    }
}
