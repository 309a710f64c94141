use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::*;

/// What happens once a ticket completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Continuation {
    /// Face of a selected card is now showing.
    Revealed(Coord2),
    /// Mismatched pair has been shown long enough.
    MismatchShown,
    /// Hinted pair has been shown long enough.
    HintShown,
    /// One card of a mismatched or hinted pair is face down again.
    FlippedBack,
    /// Nothing waits on this step.
    Settled,
}

/// Why a selection was dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    RoundOver,
    /// A turn is waiting on an animation or delay, or already holds two cards.
    TurnLocked,
    NotHidden(CardStatus),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Accepted,
    Ignored(Rejection),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HintRefusal {
    RoundOver,
    Exhausted,
    TurnInProgress,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    Refused(HintRefusal),
    NoPairFound,
    Shown { first: Coord2, second: Coord2 },
}

impl HintOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Shown { .. })
    }
}

/// One live round: board, turn, clock, hint budget and score, created and dropped together.
///
/// Every asynchronous step is handed out as an [`Effect`] carrying a [`Ticket`]; the round
/// only moves on when [`Round::complete`] is called with that ticket. Once the round ends,
/// outstanding tickets are forgotten and completing them does nothing.
#[derive(Clone, Debug)]
pub struct Round {
    config: GameConfig,
    generation: u32,
    board: Board,
    turn: Turn,
    clock: RoundClock,
    hints: HintBudget,
    tracker: OutcomeTracker,
    hint_pair: Option<(Coord2, Coord2)>,
    pending: BTreeMap<Ticket, Continuation>,
    next_seq: u32,
    effects: Vec<Effect>,
}

impl Round {
    pub fn new(config: GameConfig, generation: u32, deck: &Deck) -> Result<Self> {
        config.validate()?;
        if deck.size() != config.size {
            return Err(ConfigIssue::ShapeMismatch.into());
        }

        let board = Board::new(deck);
        log::debug!(
            "Round {} started: {:?} board, {} pairs, {}s, {} hints",
            generation,
            config.size,
            deck.pair_count(),
            config.round_secs,
            config.hint_budget
        );
        Ok(Self {
            config,
            generation,
            board,
            turn: Default::default(),
            clock: RoundClock::new(config.round_secs),
            hints: HintBudget::new(config.hint_budget),
            tracker: OutcomeTracker::new(deck.pair_count(), config.match_reward),
            hint_pair: None,
            pending: BTreeMap::new(),
            next_seq: 0,
            effects: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    pub fn hints(&self) -> &HintBudget {
        &self.hints
    }

    pub fn tracker(&self) -> &OutcomeTracker {
        &self.tracker
    }

    pub fn state(&self) -> RoundState {
        self.tracker.state()
    }

    pub fn is_finished(&self) -> bool {
        self.tracker.is_finished()
    }

    pub fn score(&self) -> u32 {
        self.tracker.score()
    }

    pub fn matched_pairs(&self) -> CellCount {
        self.tracker.matched_pairs()
    }

    pub fn hint_pair(&self) -> Option<(Coord2, Coord2)> {
        self.hint_pair
    }

    /// Number of tickets still waiting for completion.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drains the effects produced since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        core::mem::take(&mut self.effects)
    }

    /// Handles a card-selected input.
    pub fn select(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        use Rejection::*;

        let coords = self.board.validate_coords(coords)?;

        let rejection = if self.tracker.is_finished() {
            Some(RoundOver)
        } else if self.turn.is_locked() {
            Some(TurnLocked)
        } else {
            match self.board.status_at(coords) {
                CardStatus::Hidden => None,
                status => Some(NotHidden(status)),
            }
        };
        if let Some(rejection) = rejection {
            log::trace!("Selection at {:?} ignored: {:?}", coords, rejection);
            return Ok(SelectOutcome::Ignored(rejection));
        }

        let Some(phase) = self.turn.select(coords) else {
            self.recover("unlocked turn refused a selection");
            return Ok(SelectOutcome::Ignored(TurnLocked));
        };
        if !self.apply(coords, Board::reveal) {
            self.recover("selected card could not be revealed");
            return Ok(SelectOutcome::Ignored(NotHidden(self.board.status_at(coords))));
        }

        let ticket = self.issue(Continuation::Revealed(coords));
        self.effects.push(Effect::ShowFace {
            card: coords,
            value: self.board.value_at(coords),
            ticket,
        });
        log::debug!("Selected card at {:?}, turn {:?}", coords, phase);
        Ok(SelectOutcome::Accepted)
    }

    /// Handles the completion of a step handed out earlier.
    pub fn complete(&mut self, ticket: Ticket) -> StepOutcome {
        use Continuation::*;

        if ticket.generation() != self.generation {
            log::trace!("Ticket {:?} belongs to another round", ticket);
            return StepOutcome::NoChange;
        }
        let Some(continuation) = self.pending.remove(&ticket) else {
            if self.tracker.is_finished() {
                log::trace!("Ticket {:?} completed after round ended", ticket);
            } else {
                log::warn!("Unknown ticket {:?}", ticket);
            }
            return StepOutcome::NoChange;
        };
        if self.tracker.is_finished() {
            return StepOutcome::NoChange;
        }

        log::trace!("Ticket {:?} completed: {:?}", ticket, continuation);
        match continuation {
            Revealed(coords) => self.on_revealed(coords),
            MismatchShown => self.on_mismatch_shown(),
            HintShown => self.on_hint_shown(),
            FlippedBack => self.on_flipped_back(),
            Settled => StepOutcome::NoChange,
        }
    }

    /// Handles a hint-requested input.
    pub fn request_hint(&mut self) -> HintOutcome {
        use HintRefusal::*;

        if self.tracker.is_finished() {
            return HintOutcome::Refused(RoundOver);
        }
        if self.hints.is_exhausted() {
            return HintOutcome::Refused(Exhausted);
        }
        if self.turn.is_locked() || !self.turn.is_empty() {
            return HintOutcome::Refused(TurnInProgress);
        }

        let Some((first, second)) = find_hint_pair(&self.board) else {
            log::trace!("No hidden pair left to hint");
            return HintOutcome::NoPairFound;
        };
        if !self.turn.lock_for_hint() {
            return HintOutcome::Refused(TurnInProgress);
        }
        self.hints.consume();

        for card in [first, second] {
            if self.apply(card, Board::reveal) {
                let ticket = self.issue(Continuation::Settled);
                self.effects.push(Effect::ShowFace {
                    card,
                    value: self.board.value_at(card),
                    ticket,
                });
            }
        }
        self.hint_pair = Some((first, second));

        let ticket = self.issue(Continuation::HintShown);
        self.effects.push(Effect::Wait {
            delay_ms: self.config.timing.hint_hold_ms,
            ticket,
        });
        self.notify(Notification::HintUsed {
            first,
            second,
            hints_left: self.hints.left(),
        });
        log::debug!(
            "Hint shows {:?} and {:?}, {} left",
            first,
            second,
            self.hints.left()
        );
        HintOutcome::Shown { first, second }
    }

    /// Handles one clock tick.
    pub fn tick(&mut self) -> StepOutcome {
        if self.tracker.is_finished() {
            return StepOutcome::NoChange;
        }

        match self.clock.tick() {
            ClockOutcome::Stopped => StepOutcome::NoChange,
            ClockOutcome::Running { remaining } => {
                self.notify(Notification::ClockChanged {
                    remaining,
                    total: self.clock.total(),
                });
                StepOutcome::Changed
            }
            ClockOutcome::Expired => {
                self.finish(RoundState::TimedOut);
                StepOutcome::TimedOut
            }
        }
    }

    fn on_revealed(&mut self, coords: Coord2) -> StepOutcome {
        if !self.turn.reveal_done(coords) {
            log::trace!("Reveal of {:?} is not awaited by the turn", coords);
            return StepOutcome::NoChange;
        }

        match self.turn.phase() {
            TurnPhase::OneSelected => StepOutcome::Changed,
            TurnPhase::Resolving => self.resolve(),
            _ => self.recover("reveal finished in an unexpected phase"),
        }
    }

    fn resolve(&mut self) -> StepOutcome {
        let Some((first, second)) = self.turn.pair() else {
            return self.recover("resolving without two selected cards");
        };

        if self.board.value_at(first) != self.board.value_at(second) {
            log::debug!("Mismatch between {:?} and {:?}", first, second);
            self.notify(Notification::Mismatch { first, second });
            let ticket = self.issue(Continuation::MismatchShown);
            self.effects.push(Effect::Wait {
                delay_ms: self.config.timing.mismatch_delay_ms,
                ticket,
            });
            return StepOutcome::Changed;
        }

        let removed = self.apply(first, Board::remove) & self.apply(second, Board::remove);
        if !removed {
            return self.recover("matched pair could not be removed");
        }
        let completed = self.tracker.record_match();
        log::debug!(
            "Match between {:?} and {:?}, pairs: {}/{}",
            first,
            second,
            self.tracker.matched_pairs(),
            self.tracker.total_pairs()
        );
        self.notify(Notification::Match { first, second });
        self.notify(Notification::ScoreChanged {
            score: self.tracker.score(),
        });
        for card in [first, second] {
            let ticket = self.issue(Continuation::Settled);
            self.effects.push(Effect::AnimateRemoval { card, ticket });
        }
        self.turn.reset();

        if completed {
            self.finish(RoundState::Won);
            StepOutcome::Won
        } else {
            StepOutcome::Changed
        }
    }

    fn on_mismatch_shown(&mut self) -> StepOutcome {
        let (TurnPhase::Resolving, Some((first, second))) = (self.turn.phase(), self.turn.pair())
        else {
            return self.recover("mismatch delay ended outside of resolution");
        };

        self.flip_pair_back(first, second)
    }

    fn on_hint_shown(&mut self) -> StepOutcome {
        let Some((first, second)) = self.hint_pair.take() else {
            return self.recover("hint expired without a hinted pair");
        };
        if self.turn.phase() != TurnPhase::TurnLocked {
            return self.recover("hint expired while the turn was not held");
        }

        self.flip_pair_back(first, second)
    }

    /// Hides both cards and keeps the turn locked until both backs are showing.
    fn flip_pair_back(&mut self, first: Coord2, second: Coord2) -> StepOutcome {
        self.flip_back(first, Continuation::FlippedBack);
        self.flip_back(second, Continuation::FlippedBack);
        if !self.awaits_flip_back() {
            self.turn.reset();
        }
        StepOutcome::Changed
    }

    fn on_flipped_back(&mut self) -> StepOutcome {
        if self.awaits_flip_back() {
            return StepOutcome::NoChange;
        }
        if !matches!(
            self.turn.phase(),
            TurnPhase::Resolving | TurnPhase::TurnLocked
        ) {
            return self.recover("flip back finished outside of a held turn");
        }

        self.turn.reset();
        log::trace!("Turn released after flip back");
        StepOutcome::Changed
    }

    fn awaits_flip_back(&self) -> bool {
        self.pending
            .values()
            .any(|continuation| *continuation == Continuation::FlippedBack)
    }

    fn flip_back(&mut self, card: Coord2, continuation: Continuation) {
        if self.apply(card, Board::hide) {
            let ticket = self.issue(continuation);
            self.effects.push(Effect::ShowBack { card, ticket });
        }
    }

    /// Ends the round. Only the first terminal state is announced.
    fn finish(&mut self, state: RoundState) -> bool {
        if !self.tracker.finish(state) {
            return false;
        }

        self.clock.stop();
        self.board.freeze();
        let dropped = self.pending.len();
        self.pending.clear();
        self.hint_pair = None;
        log::debug!("Round {} frozen, {} pending steps dropped", self.generation, dropped);

        let score = self.tracker.score();
        self.notify(match state {
            RoundState::Won => Notification::Win { score },
            _ => Notification::Timeout { score },
        });
        true
    }

    /// Last resort when the turn bookkeeping no longer agrees with the board.
    ///
    /// Panics in debug builds. Otherwise every face-up card is turned back, the turn is
    /// cleared and any step that would have moved the turn on is forgotten.
    fn recover(&mut self, reason: &'static str) -> StepOutcome {
        let err = GameError::InternalInconsistency(reason);
        log::error!("{}, resetting turn", err);
        if cfg!(debug_assertions) {
            panic!("{}", err);
        }
        if self.tracker.is_finished() {
            return StepOutcome::NoChange;
        }

        let revealed: Vec<Coord2> = self
            .board
            .iter_with_status(CardStatus::Revealed)
            .map(|(coords, _)| coords)
            .collect();
        for card in revealed {
            self.flip_back(card, Continuation::Settled);
        }
        self.pending
            .retain(|_, continuation| *continuation == Continuation::Settled);
        self.hint_pair = None;
        self.turn.reset();
        StepOutcome::Changed
    }

    fn apply(&mut self, coords: Coord2, op: fn(&mut Board, Coord2) -> Result<()>) -> bool {
        match op(&mut self.board, coords) {
            Ok(()) => true,
            Err(err) => {
                log::error!("Board rejected update at {:?}: {}", coords, err);
                false
            }
        }
    }

    fn issue(&mut self, continuation: Continuation) -> Ticket {
        let ticket = Ticket::new(self.generation, self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        self.pending.insert(ticket, continuation);
        ticket
    }

    fn notify(&mut self, notification: Notification) {
        self.effects.push(Effect::Notify(notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x3 board: pairs of 0 at (0,0)/(1,1), 1 at (0,1)/(1,2), 2 at (0,2)/(1,0)
    fn round() -> Round {
        let config = GameConfig {
            size: (2, 3),
            ..GameConfig::classic()
        };
        let deck = Deck::from_values(config.size, &[0, 1, 2, 2, 0, 1]).unwrap();
        Round::new(config, 0, &deck).unwrap()
    }

    /// Completes every ticket currently handed out, returning the merged outcome.
    fn complete_all(round: &mut Round) -> StepOutcome {
        let mut outcome = StepOutcome::NoChange;
        loop {
            let tickets: Vec<_> = round
                .take_effects()
                .iter()
                .filter_map(Effect::ticket)
                .collect();
            if tickets.is_empty() {
                return outcome;
            }
            for ticket in tickets {
                outcome = outcome | round.complete(ticket);
            }
        }
    }

    fn ticket_of(effects: &[Effect]) -> Ticket {
        effects.iter().find_map(Effect::ticket).unwrap()
    }

    #[test]
    fn first_selection_locks_until_face_shown() {
        let mut round = round();

        assert_eq!(round.select((0, 0)), Ok(SelectOutcome::Accepted));
        assert_eq!(round.turn().phase(), TurnPhase::AwaitingFirstReveal);
        assert_eq!(
            round.select((0, 1)),
            Ok(SelectOutcome::Ignored(Rejection::TurnLocked))
        );
        assert_eq!(round.board().status_at((0, 1)), CardStatus::Hidden);

        let effects = round.take_effects();
        assert!(matches!(
            effects[..],
            [Effect::ShowFace {
                card: (0, 0),
                value: 0,
                ..
            }]
        ));
        assert_eq!(round.complete(ticket_of(&effects)), StepOutcome::Changed);
        assert_eq!(round.turn().phase(), TurnPhase::OneSelected);
    }

    #[test]
    fn match_removes_pair_and_scores_once() {
        let mut round = round();

        round.select((0, 0)).unwrap();
        complete_all(&mut round);
        round.select((1, 1)).unwrap();
        let face = round.take_effects();
        assert_eq!(round.complete(ticket_of(&face)), StepOutcome::Changed);

        assert_eq!(round.board().status_at((0, 0)), CardStatus::Removed);
        assert_eq!(round.board().status_at((1, 1)), CardStatus::Removed);
        assert_eq!(round.score(), 10);
        assert_eq!(round.matched_pairs(), 1);
        assert!(round.turn().is_empty());
        assert_eq!(round.turn().phase(), TurnPhase::Idle);

        let notices: Vec<_> = round
            .take_effects()
            .iter()
            .filter_map(Effect::notification)
            .collect();
        assert_eq!(
            notices,
            [
                Notification::Match {
                    first: (0, 0),
                    second: (1, 1)
                },
                Notification::ScoreChanged { score: 10 },
            ]
        );
        assert_eq!(
            round.select((0, 0)),
            Ok(SelectOutcome::Ignored(Rejection::NotHidden(
                CardStatus::Removed
            )))
        );
    }

    #[test]
    fn mismatch_holds_lock_until_delay_ends() {
        let mut round = round();

        round.select((0, 0)).unwrap();
        complete_all(&mut round);
        round.select((0, 1)).unwrap();
        let face = round.take_effects();
        round.complete(ticket_of(&face));

        assert_eq!(round.turn().phase(), TurnPhase::Resolving);
        assert_eq!(
            round.select((0, 2)),
            Ok(SelectOutcome::Ignored(Rejection::TurnLocked))
        );

        let effects = round.take_effects();
        assert_eq!(
            effects[0],
            Effect::Notify(Notification::Mismatch {
                first: (0, 0),
                second: (0, 1)
            })
        );
        let Effect::Wait { delay_ms, ticket } = effects[1] else {
            panic!("expected mismatch delay, got {:?}", effects[1]);
        };
        assert_eq!(delay_ms, 800);

        assert_eq!(round.complete(ticket), StepOutcome::Changed);
        assert_eq!(round.board().status_at((0, 0)), CardStatus::Hidden);
        assert_eq!(round.board().status_at((0, 1)), CardStatus::Hidden);
        assert_eq!(round.score(), 0);

        let backs = round.take_effects();
        let tickets: Vec<_> = backs.iter().filter_map(Effect::ticket).collect();
        assert!(matches!(
            backs[..],
            [
                Effect::ShowBack { card: (0, 0), .. },
                Effect::ShowBack { card: (0, 1), .. }
            ]
        ));
        assert_eq!(
            round.select((0, 0)),
            Ok(SelectOutcome::Ignored(Rejection::TurnLocked))
        );

        assert_eq!(round.complete(tickets[0]), StepOutcome::NoChange);
        assert_eq!(
            round.select((0, 1)),
            Ok(SelectOutcome::Ignored(Rejection::TurnLocked))
        );
        assert_eq!(round.complete(tickets[1]), StepOutcome::Changed);
        assert!(round.turn().is_empty());
        assert_eq!(round.select((0, 0)), Ok(SelectOutcome::Accepted));
    }

    #[test]
    fn reselecting_face_up_card_changes_nothing() {
        let mut round = round();
        round.select((0, 2)).unwrap();
        complete_all(&mut round);
        assert_eq!(round.turn().phase(), TurnPhase::OneSelected);
        let before = RoundSnapshot::from_round(&round);

        assert_eq!(
            round.select((0, 2)),
            Ok(SelectOutcome::Ignored(Rejection::NotHidden(
                CardStatus::Revealed
            )))
        );
        assert!(round.take_effects().is_empty());
        assert_eq!(round.pending_count(), 0);
        assert_eq!(round.turn().first(), Some((0, 2)));
        assert_eq!(RoundSnapshot::from_round(&round), before);
    }

    #[test]
    fn out_of_range_selection_is_inert() {
        let mut round = round();

        assert_eq!(round.select((2, 0)), Err(GameError::OutOfRange));
        assert_eq!(round.select((0, 3)), Err(GameError::OutOfRange));
        assert!(round.take_effects().is_empty());
        assert_eq!(round.turn().phase(), TurnPhase::Idle);
    }

    #[test]
    fn last_match_wins_and_freezes() {
        let mut round = round();

        for (a, b) in [((0, 0), (1, 1)), ((0, 1), (1, 2)), ((0, 2), (1, 0))] {
            round.select(a).unwrap();
            complete_all(&mut round);
            round.select(b).unwrap();
            let face = round.take_effects();
            let outcome = round.complete(ticket_of(&face));
            if b == (1, 0) {
                assert_eq!(outcome, StepOutcome::Won);
            }
            complete_all(&mut round);
        }

        assert_eq!(round.state(), RoundState::Won);
        assert!(!round.clock().is_running());
        assert!(round.board().is_frozen());
        assert_eq!(round.tick(), StepOutcome::NoChange);
        assert_eq!(
            round.request_hint(),
            HintOutcome::Refused(HintRefusal::RoundOver)
        );
    }

    #[test]
    fn hint_reveals_pair_then_hides_it() {
        let mut round = round();

        assert_eq!(
            round.request_hint(),
            HintOutcome::Shown {
                first: (0, 0),
                second: (1, 1)
            }
        );
        assert_eq!(round.hints().left(), 2);
        assert_eq!(round.turn().phase(), TurnPhase::TurnLocked);
        assert_eq!(
            round.select((0, 1)),
            Ok(SelectOutcome::Ignored(Rejection::TurnLocked))
        );
        assert_eq!(
            round.request_hint(),
            HintOutcome::Refused(HintRefusal::TurnInProgress)
        );

        let hold = round
            .take_effects()
            .into_iter()
            .find_map(|effect| match effect {
                Effect::Wait { ticket, .. } => Some(ticket),
                _ => None,
            })
            .unwrap();
        assert_eq!(round.complete(hold), StepOutcome::Changed);
        assert_eq!(round.board().revealed_count(), 0);
        assert_eq!(round.turn().phase(), TurnPhase::TurnLocked);

        complete_all(&mut round);
        assert_eq!(round.board().status_at((0, 0)), CardStatus::Hidden);
        assert_eq!(round.board().status_at((1, 1)), CardStatus::Hidden);
        assert_eq!(round.turn().phase(), TurnPhase::Idle);
        assert_eq!(round.score(), 0);
        assert_eq!(round.matched_pairs(), 0);
    }

    #[test]
    fn hint_refused_with_one_card_selected() {
        let mut round = round();
        round.select((0, 1)).unwrap();
        assert_eq!(
            round.request_hint(),
            HintOutcome::Refused(HintRefusal::TurnInProgress)
        );

        complete_all(&mut round);
        assert_eq!(
            round.request_hint(),
            HintOutcome::Refused(HintRefusal::TurnInProgress)
        );
        assert_eq!(round.hints().left(), 3);
    }

    #[test]
    fn timeout_drops_pending_steps() {
        let config = GameConfig {
            size: (2, 3),
            round_secs: 2,
            ..GameConfig::classic()
        };
        let deck = Deck::from_values(config.size, &[0, 1, 2, 2, 0, 1]).unwrap();
        let mut round = Round::new(config, 3, &deck).unwrap();

        round.select((0, 0)).unwrap();
        let face = round.take_effects();

        assert_eq!(round.tick(), StepOutcome::Changed);
        assert_eq!(round.tick(), StepOutcome::TimedOut);
        assert_eq!(round.pending_count(), 0);
        assert_eq!(
            round.take_effects().last(),
            Some(&Effect::Notify(Notification::Timeout { score: 0 }))
        );

        assert_eq!(round.complete(ticket_of(&face)), StepOutcome::NoChange);
        assert_eq!(round.turn().phase(), TurnPhase::AwaitingFirstReveal);
        assert_eq!(
            round.select((0, 1)),
            Ok(SelectOutcome::Ignored(Rejection::RoundOver))
        );
        assert!(round.take_effects().is_empty());
    }

    #[test]
    fn tickets_from_other_rounds_are_ignored() {
        let mut round = round();
        round.select((0, 0)).unwrap();
        round.take_effects();

        assert_eq!(round.complete(Ticket::new(1, 0)), StepOutcome::NoChange);
        assert_eq!(round.turn().phase(), TurnPhase::AwaitingFirstReveal);
    }

    #[test]
    fn deck_must_fit_config() {
        let deck = Deck::from_values((1, 2), &[0, 0]).unwrap();
        assert_eq!(
            Round::new(GameConfig::classic(), 0, &deck).err(),
            Some(GameError::Configuration(ConfigIssue::ShapeMismatch))
        );
    }
}
