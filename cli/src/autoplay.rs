use pairmatch_core::{
    CardFace, CardValue, Coord2, Effect, RoundSnapshot, Session, Timeline, TurnPhase, iter_coords,
};
use std::collections::HashMap;

use crate::render;

/// Simulated time between two looks at the board.
const STEP_MS: u64 = 100;

/// Remembers every face it has seen, like a player with perfect recall.
#[derive(Debug, Default)]
struct Memory {
    seen: HashMap<Coord2, CardValue>,
}

impl Memory {
    fn observe(&mut self, snapshot: &RoundSnapshot) {
        for coords in iter_coords(snapshot.size) {
            match snapshot.face_at(coords) {
                CardFace::FaceUp(value) => {
                    self.seen.insert(coords, value);
                }
                CardFace::Gone => {
                    self.seen.remove(&coords);
                }
                CardFace::FaceDown => {}
            }
        }
    }

    fn hidden_known(&self, snapshot: &RoundSnapshot) -> Vec<(Coord2, CardValue)> {
        let mut known: Vec<_> = self
            .seen
            .iter()
            .filter(|&(&coords, _)| snapshot.face_at(coords) == CardFace::FaceDown)
            .map(|(&coords, &value)| (coords, value))
            .collect();
        known.sort_unstable();
        known
    }

    fn known_pair(&self, snapshot: &RoundSnapshot) -> Option<(Coord2, Coord2)> {
        let known = self.hidden_known(snapshot);
        known.iter().enumerate().find_map(|(i, &(first, value))| {
            known[i + 1..]
                .iter()
                .find(|&&(_, other)| other == value)
                .map(|&(second, _)| (first, second))
        })
    }

    fn partner_of(&self, snapshot: &RoundSnapshot, value: CardValue) -> Option<Coord2> {
        self.hidden_known(snapshot)
            .into_iter()
            .find(|&(_, other)| other == value)
            .map(|(coords, _)| coords)
    }

    /// First face-down card never seen, or any face-down card once all have been seen.
    fn unexplored(&self, snapshot: &RoundSnapshot) -> Option<Coord2> {
        let candidates: Vec<_> = iter_coords(snapshot.size)
            .filter(|&coords| snapshot.face_at(coords) == CardFace::FaceDown)
            .collect();
        candidates
            .iter()
            .copied()
            .find(|coords| !self.seen.contains_key(coords))
            .or_else(|| candidates.first().copied())
    }

    fn next_move(&self, session: &Session, snapshot: &RoundSnapshot) -> Option<Move> {
        match snapshot.phase {
            TurnPhase::Idle => {
                if let Some((first, _)) = self.known_pair(snapshot) {
                    Some(Move::Select(first))
                } else if snapshot.hints_left > 0 {
                    Some(Move::Hint)
                } else {
                    self.unexplored(snapshot).map(Move::Select)
                }
            }
            TurnPhase::OneSelected => {
                let first = session.round().turn().first()?;
                let CardFace::FaceUp(value) = snapshot.face_at(first) else {
                    return None;
                };
                self.partner_of(snapshot, value)
                    .or_else(|| self.unexplored(snapshot))
                    .map(Move::Select)
            }
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Move {
    Select(Coord2),
    Hint,
}

fn log_effects(effects: &[Effect]) {
    for notification in effects.iter().filter_map(Effect::notification) {
        if let Some(line) = render::describe(notification) {
            log::info!("{}", line);
        }
    }
}

/// Plays the current round to its end on a simulated clock.
pub(crate) fn run(session: &mut Session) -> RoundSnapshot {
    let mut timeline = Timeline::new(session.config().timing);
    let mut memory = Memory::default();

    while !session.round().is_finished() {
        let snapshot = session.snapshot();
        memory.observe(&snapshot);

        match memory.next_move(session, &snapshot) {
            Some(Move::Select(coords)) => {
                log::debug!("Autoplay flips {:?}", coords);
                if let Err(err) = session.select(coords) {
                    log::warn!("Autoplay move {:?} failed: {}", coords, err);
                }
            }
            Some(Move::Hint) => {
                let outcome = session.request_hint();
                log::debug!("Autoplay asks for a hint: {:?}", outcome);
            }
            None => {}
        }
        log_effects(&timeline.advance(session, STEP_MS));
    }

    let snapshot = session.snapshot();
    println!("{}", render::board_text(&snapshot));
    println!(
        "Finished {:?} after {:.1}s with score {}",
        snapshot.state,
        timeline.now_ms() as f64 / 1000.0,
        snapshot.score
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairmatch_core::{GameConfig, RoundState};

    #[test]
    fn perfect_recall_clears_classic_board_in_time() {
        for seed in 0..4 {
            let mut session = Session::new(GameConfig::classic(), seed).unwrap();
            let snapshot = run(&mut session);

            assert_eq!(snapshot.state, RoundState::Won);
            assert_eq!(snapshot.matched_pairs, 15);
            assert_eq!(snapshot.score, 150);
            assert_eq!(snapshot.hints_left, 0);
        }
    }

    #[test]
    fn known_pair_is_preferred() {
        let config = GameConfig {
            size: (1, 4),
            ..GameConfig::classic()
        };
        let deck = pairmatch_core::Deck::from_values(config.size, &[0, 1, 1, 0]).unwrap();
        let session = Session::with_deck(config, &deck).unwrap();
        let snapshot = session.snapshot();

        let mut memory = Memory::default();
        memory.seen.insert((0, 1), 1);
        memory.seen.insert((0, 2), 1);

        assert_eq!(
            memory.next_move(&session, &snapshot),
            Some(Move::Select((0, 1)))
        );
    }
}
