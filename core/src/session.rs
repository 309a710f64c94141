use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::*;

/// Owns the single live round and replaces it wholesale when a new one starts.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    rng: SmallRng,
    generation: u32,
    round: Round,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let deck = RandomDeckGenerator::new(rng.next_u64()).generate(&config)?;
        let round = Round::new(config, 0, &deck)?;
        Ok(Self {
            config,
            rng,
            generation: 0,
            round,
        })
    }

    /// Session whose first round uses a fixed layout. Later rounds are shuffled from `seed` 0.
    pub fn with_deck(config: GameConfig, deck: &Deck) -> Result<Self> {
        let round = Round::new(config, 0, deck)?;
        Ok(Self {
            config,
            rng: SmallRng::seed_from_u64(0),
            generation: 0,
            round,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Discards the current round and deals a fresh one.
    pub fn new_round(&mut self) -> Result<()> {
        let deck = RandomDeckGenerator::new(self.rng.next_u64()).generate(&self.config)?;
        let generation = self.generation.wrapping_add(1);
        self.round = Round::new(self.config, generation, &deck)?;
        self.generation = generation;
        Ok(())
    }

    pub fn select(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        self.round.select(coords)
    }

    pub fn request_hint(&mut self) -> HintOutcome {
        self.round.request_hint()
    }

    pub fn tick(&mut self) -> StepOutcome {
        self.round.tick()
    }

    pub fn complete(&mut self, ticket: Ticket) -> StepOutcome {
        if ticket.generation() != self.generation {
            log::trace!(
                "Ticket {:?} from round {} ignored, live round is {}",
                ticket,
                ticket.generation(),
                self.generation
            );
            return StepOutcome::NoChange;
        }
        self.round.complete(ticket)
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.round.take_effects()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from_round(&self.round)
    }
}
