use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owns every card of a round. The only place card status changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cards: Array2<Card>,
    revealed_count: Saturating<CellCount>,
    removed_count: Saturating<CellCount>,
    frozen: bool,
}

impl Board {
    pub fn new(deck: &Deck) -> Self {
        let size = deck.size();
        let cards = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            Card::new(deck.value_at((row as Coord, col as Coord)))
        });
        Self {
            cards,
            revealed_count: Saturating(0),
            removed_count: Saturating(0),
            frozen: false,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cards.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cards.len().try_into().unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn card_at(&self, coords: Coord2) -> Card {
        self.cards[coords.to_nd_index()]
    }

    pub fn value_at(&self, coords: Coord2) -> CardValue {
        self.card_at(coords).value
    }

    pub fn status_at(&self, coords: Coord2) -> CardStatus {
        self.card_at(coords).status
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn removed_count(&self) -> CellCount {
        self.removed_count.0
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Stops accepting mutations, used once the round is decided.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Cards in row-major order with their coordinates.
    pub fn iter_cards(&self) -> impl Iterator<Item = (Coord2, Card)> + '_ {
        self.cards
            .indexed_iter()
            .map(|((row, col), &card)| ((row as Coord, col as Coord), card))
    }

    pub fn iter_with_status(&self, status: CardStatus) -> impl Iterator<Item = (Coord2, Card)> + '_ {
        self.iter_cards().filter(move |(_, card)| card.status == status)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<()> {
        self.transition(coords, CardStatus::Hidden, CardStatus::Revealed)?;
        self.revealed_count += 1;
        Ok(())
    }

    /// Turns a face-up card back down. Hiding a card that is already face down does nothing.
    pub fn hide(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if !self.frozen && self.status_at(coords).is_hidden() {
            log::trace!("Card at {:?} already hidden", coords);
            return Ok(());
        }
        self.transition(coords, CardStatus::Revealed, CardStatus::Hidden)?;
        self.revealed_count -= 1;
        Ok(())
    }

    pub fn remove(&mut self, coords: Coord2) -> Result<()> {
        self.transition(coords, CardStatus::Revealed, CardStatus::Removed)?;
        self.revealed_count -= 1;
        self.removed_count += 1;
        Ok(())
    }

    fn transition(&mut self, coords: Coord2, from: CardStatus, to: CardStatus) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if self.frozen {
            return Err(GameError::AlreadyEnded);
        }

        let card = &mut self.cards[coords.to_nd_index()];
        if card.status != from {
            return Err(GameError::InvalidTransition {
                card: coords,
                from: card.status,
                to,
            });
        }
        card.status = to;
        log::trace!("Card at {:?} {:?} -> {:?}", coords, from, to);
        Ok(())
    }
}
