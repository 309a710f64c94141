use serde::{Deserialize, Serialize};

/// Result of feeding one tick to the clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockOutcome {
    /// Clock already stopped, tick ignored.
    Stopped,
    Running { remaining: u32 },
    /// Remaining time just reached zero.
    Expired,
}

/// Colour band of the remaining-time bar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBand {
    Plenty,
    Low,
    Critical,
}

impl TimeBand {
    pub fn from_fraction(fraction: f32) -> Self {
        if fraction > 0.5 {
            Self::Plenty
        } else if fraction > 0.2 {
            Self::Low
        } else {
            Self::Critical
        }
    }
}

/// Countdown of whole ticks, one-way to zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    total: u32,
    remaining: u32,
    running: bool,
}

impl RoundClock {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
            running: total > 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Remaining share of the round in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.remaining as f32 / self.total as f32).clamp(0.0, 1.0)
    }

    pub fn band(&self) -> TimeBand {
        TimeBand::from_fraction(self.fraction())
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> ClockOutcome {
        if !self.running || self.remaining == 0 {
            return ClockOutcome::Stopped;
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            ClockOutcome::Running {
                remaining: self.remaining,
            }
        } else {
            self.running = false;
            ClockOutcome::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_expiry_once() {
        let mut clock = RoundClock::new(3);

        assert_eq!(clock.tick(), ClockOutcome::Running { remaining: 2 });
        assert_eq!(clock.tick(), ClockOutcome::Running { remaining: 1 });
        assert_eq!(clock.tick(), ClockOutcome::Expired);
        assert_eq!(clock.tick(), ClockOutcome::Stopped);
        assert_eq!(clock.remaining(), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn stopped_clock_ignores_ticks() {
        let mut clock = RoundClock::new(120);
        clock.tick();
        clock.stop();

        assert_eq!(clock.tick(), ClockOutcome::Stopped);
        assert_eq!(clock.remaining(), 119);
    }

    #[test]
    fn bands_follow_remaining_share() {
        let mut clock = RoundClock::new(10);
        assert_eq!(clock.band(), TimeBand::Plenty);

        for _ in 0..5 {
            clock.tick();
        }
        assert_eq!(clock.band(), TimeBand::Low);

        for _ in 0..3 {
            clock.tick();
        }
        assert_eq!(clock.band(), TimeBand::Critical);
    }
}
