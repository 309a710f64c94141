use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Scheduled {
    at_ms: u64,
    seq: u64,
    ticket: Ticket,
}

/// Single-threaded virtual clock that plays the presenter's part.
///
/// Each ticketed effect completes after its [`Timing`] duration, and the round clock
/// ticks every `tick_ms`. Steps due at the same instant run completions first, in the
/// order they were scheduled, then the tick.
#[derive(Clone, Debug)]
pub struct Timeline {
    timing: Timing,
    now_ms: u64,
    next_tick_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl Timeline {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            now_ms: 0,
            next_tick_ms: Self::tick_len(&timing),
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of scheduled completions not yet delivered.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drops every scheduled completion and restarts the tick cadence from now.
    pub fn restart(&mut self) {
        self.queue.clear();
        self.next_tick_ms = self.now_ms + Self::tick_len(&self.timing);
    }

    /// Takes the session's new effects and schedules the ones that complete later.
    pub fn pump(&mut self, session: &mut Session) -> Vec<Effect> {
        let effects = session.take_effects();
        for effect in &effects {
            self.schedule(effect);
        }
        effects
    }

    /// Moves time forward by `dt_ms`, delivering completions and ticks as they fall due.
    ///
    /// Returns every effect the session produced on the way.
    pub fn advance(&mut self, session: &mut Session, dt_ms: u64) -> Vec<Effect> {
        let target = self.now_ms.saturating_add(dt_ms);
        let mut effects = self.pump(session);

        loop {
            let due = self
                .queue
                .peek()
                .map(|Reverse(scheduled)| scheduled.at_ms)
                .filter(|&at| at <= target && at <= self.next_tick_ms);

            if let Some(at) = due {
                let Some(Reverse(scheduled)) = self.queue.pop() else {
                    break;
                };
                self.now_ms = at;
                session.complete(scheduled.ticket);
            } else if self.next_tick_ms <= target {
                self.now_ms = self.next_tick_ms;
                self.next_tick_ms += Self::tick_len(&self.timing);
                session.tick();
            } else {
                break;
            }
            effects.extend(self.pump(session));
        }

        self.now_ms = target;
        effects
    }

    /// Advances until nothing is scheduled, ticking the clock on the way.
    pub fn settle(&mut self, session: &mut Session) -> Vec<Effect> {
        let mut effects = self.pump(session);
        while let Some(at) = self.queue.peek().map(|Reverse(scheduled)| scheduled.at_ms) {
            let dt = at.saturating_sub(self.now_ms);
            effects.extend(self.advance(session, dt));
        }
        effects
    }

    fn schedule(&mut self, effect: &Effect) {
        let (Some(ticket), Some(duration)) = (effect.ticket(), effect.duration_ms(&self.timing))
        else {
            return;
        };
        let scheduled = Scheduled {
            at_ms: self.now_ms + u64::from(duration),
            seq: self.next_seq,
            ticket,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(scheduled));
    }

    fn tick_len(timing: &Timing) -> u64 {
        u64::from(timing.tick_ms.max(1))
    }
}
