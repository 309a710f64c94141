use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player may see of a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    FaceDown,
    FaceUp(CardValue),
    Gone,
}

impl From<Card> for CardFace {
    fn from(card: Card) -> Self {
        match card.status {
            CardStatus::Hidden => Self::FaceDown,
            CardStatus::Revealed => Self::FaceUp(card.value),
            CardStatus::Removed => Self::Gone,
        }
    }
}

/// Read-only, player-visible view of a round for renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub size: Coord2,
    pub faces: Array2<CardFace>,
    pub score: u32,
    pub matched_pairs: CellCount,
    pub total_pairs: CellCount,
    pub remaining_secs: u32,
    pub total_secs: u32,
    pub time_band: TimeBand,
    pub hints_left: u8,
    pub phase: TurnPhase,
    pub state: RoundState,
}

impl RoundSnapshot {
    pub fn from_round(round: &Round) -> Self {
        let board = round.board();
        let size = board.size();
        let mut faces = Array2::from_elem(size.to_nd_index(), CardFace::FaceDown);
        for (coords, card) in board.iter_cards() {
            faces[coords.to_nd_index()] = card.into();
        }

        let clock = round.clock();
        let tracker = round.tracker();
        Self {
            size,
            faces,
            score: tracker.score(),
            matched_pairs: tracker.matched_pairs(),
            total_pairs: tracker.total_pairs(),
            remaining_secs: clock.remaining(),
            total_secs: clock.total(),
            time_band: clock.band(),
            hints_left: round.hints().left(),
            phase: round.turn().phase(),
            state: round.state(),
        }
    }

    pub fn face_at(&self, coords: Coord2) -> CardFace {
        self.faces[coords.to_nd_index()]
    }
}
