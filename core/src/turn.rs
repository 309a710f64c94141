use serde::{Deserialize, Serialize};

use crate::*;

/// Where the current turn stands.
///
/// Valid transitions:
/// - Idle -> AwaitingFirstReveal (first selection)
/// - AwaitingFirstReveal -> OneSelected (first face shown)
/// - OneSelected -> AwaitingSecondReveal (second selection)
/// - AwaitingSecondReveal -> Resolving (second face shown)
/// - Resolving -> Idle (pair removed or hidden again)
/// - Idle -> TurnLocked (hint on display)
/// - TurnLocked -> Idle (hint hidden again)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    Idle,
    AwaitingFirstReveal,
    OneSelected,
    AwaitingSecondReveal,
    Resolving,
    TurnLocked,
}

impl TurnPhase {
    /// While locked, selections are dropped without side effects.
    pub const fn is_locked(self) -> bool {
        use TurnPhase::*;
        match self {
            Idle => false,
            AwaitingFirstReveal => true,
            OneSelected => false,
            AwaitingSecondReveal => true,
            Resolving => true,
            TurnLocked => true,
        }
    }
}

impl Default for TurnPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// At most two selected cards plus the phase they are in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    first: Option<Coord2>,
    second: Option<Coord2>,
    phase: TurnPhase,
}

impl Turn {
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    pub fn first(&self) -> Option<Coord2> {
        self.first
    }

    pub fn second(&self) -> Option<Coord2> {
        self.second
    }

    pub fn selected_count(&self) -> usize {
        usize::from(self.first.is_some()) + usize::from(self.second.is_some())
    }

    pub fn is_full(&self) -> bool {
        self.selected_count() == 2
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }

    /// Both selected cards, only once the turn holds two.
    pub fn pair(&self) -> Option<(Coord2, Coord2)> {
        Some((self.first?, self.second?))
    }

    /// Records a selection and locks the turn until its face is shown.
    ///
    /// Returns the new phase, or `None` when the turn cannot take another card.
    pub fn select(&mut self, coords: Coord2) -> Option<TurnPhase> {
        use TurnPhase::*;
        match (self.phase, self.first, self.second) {
            (Idle, None, None) => {
                self.first = Some(coords);
                self.phase = AwaitingFirstReveal;
            }
            (OneSelected, Some(_), None) => {
                self.second = Some(coords);
                self.phase = AwaitingSecondReveal;
            }
            _ => return None,
        }
        Some(self.phase)
    }

    /// Handles the end of a reveal animation for `coords`.
    ///
    /// Unlocks the turn for the second pick after the first card, or moves to
    /// `Resolving` after the second. Returns `false` if the reveal is not the one
    /// the turn is waiting for.
    pub fn reveal_done(&mut self, coords: Coord2) -> bool {
        use TurnPhase::*;
        match self.phase {
            AwaitingFirstReveal if self.first == Some(coords) => {
                self.phase = OneSelected;
                true
            }
            AwaitingSecondReveal if self.second == Some(coords) => {
                self.phase = Resolving;
                true
            }
            _ => false,
        }
    }

    /// Locks input while a hint pair is face up, only possible from an empty idle turn.
    pub fn lock_for_hint(&mut self) -> bool {
        if self.phase == TurnPhase::Idle && self.is_empty() {
            self.phase = TurnPhase::TurnLocked;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
