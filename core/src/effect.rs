use core::ops::BitOr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Handle for one outstanding asynchronous step, completed exactly once by the presenter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket {
    generation: u32,
    seq: u32,
}

impl Ticket {
    pub(crate) const fn new(generation: u32, seq: u32) -> Self {
        Self { generation, seq }
    }

    /// Round generation that issued this ticket.
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// One-way notices for score displays, audio and overlays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    Match { first: Coord2, second: Coord2 },
    Mismatch { first: Coord2, second: Coord2 },
    ScoreChanged { score: u32 },
    HintUsed { first: Coord2, second: Coord2, hints_left: u8 },
    ClockChanged { remaining: u32, total: u32 },
    Win { score: u32 },
    Timeout { score: u32 },
}

impl Notification {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win { .. } | Self::Timeout { .. })
    }
}

/// Work the round hands to its collaborators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    ShowFace {
        card: Coord2,
        value: CardValue,
        ticket: Ticket,
    },
    ShowBack {
        card: Coord2,
        ticket: Ticket,
    },
    AnimateRemoval {
        card: Coord2,
        ticket: Ticket,
    },
    /// Plain delay, completed once `delay_ms` has passed.
    Wait {
        delay_ms: u32,
        ticket: Ticket,
    },
    Notify(Notification),
}

impl Effect {
    pub const fn ticket(&self) -> Option<Ticket> {
        use Effect::*;
        match *self {
            ShowFace { ticket, .. } => Some(ticket),
            ShowBack { ticket, .. } => Some(ticket),
            AnimateRemoval { ticket, .. } => Some(ticket),
            Wait { ticket, .. } => Some(ticket),
            Notify(_) => None,
        }
    }

    /// How long the effect runs before its ticket completes.
    pub const fn duration_ms(&self, timing: &Timing) -> Option<u32> {
        use Effect::*;
        match *self {
            ShowFace { .. } | ShowBack { .. } => Some(timing.flip_ms),
            AnimateRemoval { .. } => Some(timing.removal_ms),
            Wait { delay_ms, .. } => Some(delay_ms),
            Notify(_) => None,
        }
    }

    pub const fn notification(&self) -> Option<Notification> {
        match *self {
            Effect::Notify(notification) => Some(notification),
            _ => None,
        }
    }
}

/// Outcome of a completion or a clock tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    NoChange,
    Changed,
    Won,
    TimedOut,
}

impl StepOutcome {
    /// Whether this outcome could have caused an update to the round
    pub const fn has_update(self) -> bool {
        use StepOutcome::*;
        match self {
            NoChange => false,
            Changed => true,
            Won => true,
            TimedOut => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::TimedOut)
    }
}

/// Used to merge outcomes when several steps run together
impl BitOr for StepOutcome {
    type Output = StepOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use StepOutcome::*;
        match (self, rhs) {
            // whichever terminal came first is kept
            (Won, _) => Won,
            (TimedOut, _) => TimedOut,
            (_, Won) => Won,
            (_, TimedOut) => TimedOut,
            (Changed, _) => Changed,
            (_, Changed) => Changed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_terminal_outcome_wins_merge() {
        use StepOutcome::*;
        assert_eq!(Won | TimedOut, Won);
        assert_eq!(TimedOut | Won, TimedOut);
        assert_eq!(Changed | TimedOut, TimedOut);
        assert_eq!(NoChange | Changed, Changed);
        assert_eq!(NoChange | NoChange, NoChange);
    }

    #[test]
    fn durations_follow_timing() {
        let timing = Timing::default();
        let ticket = Ticket::new(0, 0);

        let face = Effect::ShowFace {
            card: (0, 0),
            value: 1,
            ticket,
        };
        let wait = Effect::Wait {
            delay_ms: 800,
            ticket,
        };
        let notice = Effect::Notify(Notification::ScoreChanged { score: 10 });

        assert_eq!(face.duration_ms(&timing), Some(300));
        assert_eq!(wait.duration_ms(&timing), Some(800));
        assert_eq!(notice.duration_ms(&timing), None);
        assert_eq!(notice.ticket(), None);
    }
}
