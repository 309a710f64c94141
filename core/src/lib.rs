#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use card::*;
pub use clock::*;
pub use deck::*;
pub use effect::*;
pub use error::*;
pub use hint::*;
pub use outcome::*;
pub use round::*;
pub use session::*;
pub use snapshot::*;
pub use timeline::*;
pub use turn::*;
pub use types::*;

mod board;
mod card;
mod clock;
mod deck;
mod effect;
mod error;
mod hint;
mod outcome;
mod round;
mod session;
mod snapshot;
mod timeline;
mod turn;
mod types;

/// Durations, in milliseconds, of every deferred step a round schedules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Full card flip, both halves.
    pub flip_ms: u32,
    pub removal_ms: u32,
    /// How long a mismatched pair stays face up before flipping back.
    pub mismatch_delay_ms: u32,
    /// How long a hinted pair stays face up.
    pub hint_hold_ms: u32,
    /// Real-time length of one clock unit.
    pub tick_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            flip_ms: 300,
            removal_ms: 300,
            mismatch_delay_ms: 800,
            hint_hold_ms: 1000,
            tick_ms: 1000,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board size as `(rows, cols)`.
    pub size: Coord2,
    pub hint_budget: u8,
    /// Round length in clock ticks.
    pub round_secs: u32,
    /// Score awarded per confirmed match.
    pub match_reward: u32,
    pub timing: Timing,
}

impl GameConfig {
    /// 6x5 board holding 15 pairs.
    pub const fn classic() -> Self {
        Self {
            size: (6, 5),
            hint_budget: 3,
            round_secs: 120,
            match_reward: 10,
            timing: Timing {
                flip_ms: 300,
                removal_ms: 300,
                mismatch_delay_ms: 800,
                hint_hold_ms: 1000,
                tick_ms: 1000,
            },
        }
    }

    /// 8x4 board holding 16 pairs, using every available face.
    pub const fn extended() -> Self {
        let mut config = Self::classic();
        config.size = (8, 4);
        config
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }

    pub fn validate(&self) -> Result<()> {
        let cells = self.total_cells();
        if cells == 0 {
            return Err(ConfigIssue::EmptyBoard.into());
        }
        if cells % 2 != 0 {
            return Err(ConfigIssue::OddCellCount(cells).into());
        }
        let pairs = self.pair_count();
        if pairs > CellCount::from(VALUE_ALPHABET) {
            return Err(ConfigIssue::AlphabetExhausted {
                pairs,
                alphabet: VALUE_ALPHABET,
            }
            .into());
        }
        if self.round_secs == 0 {
            return Err(ConfigIssue::ZeroRoundLength.into());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
