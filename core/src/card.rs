use serde::{Deserialize, Serialize};

/// Face value printed on a card, drawn from `0..VALUE_ALPHABET`.
pub type CardValue = u8;

/// Number of distinct faces available to a deck.
pub const VALUE_ALPHABET: CardValue = 16;

/// Lifecycle of a single card.
///
/// `Hidden -> Revealed` on selection or hint, `Revealed -> Hidden` on mismatch or
/// when a hint expires, `Revealed -> Removed` on a confirmed match. `Removed` is final.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardStatus {
    Hidden,
    Revealed,
    Removed,
}

impl CardStatus {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_in_play(self) -> bool {
        !matches!(self, Self::Removed)
    }
}

impl Default for CardStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub value: CardValue,
    pub status: CardStatus,
}

impl Card {
    pub const fn new(value: CardValue) -> Self {
        Self {
            value,
            status: CardStatus::Hidden,
        }
    }
}
