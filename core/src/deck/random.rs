use super::*;

/// Generation strategy that lays out `pair_count` values twice each and shuffles them uniformly.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, config: &GameConfig) -> Result<Deck> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        use rand::seq::SliceRandom;

        config.validate()?;

        let pairs = config.pair_count();
        let mut values: Vec<CardValue> = (0..pairs)
            .flat_map(|value| {
                let value = value as CardValue;
                [value, value]
            })
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        values.shuffle(&mut rng);
        log::debug!(
            "Generated deck of {} pairs for {:?} board, seed: {}",
            pairs,
            config.size,
            self.seed
        );

        Deck::from_values(config.size, &values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiplicities(deck: &Deck) -> [u8; VALUE_ALPHABET as usize] {
        let mut counts = [0u8; VALUE_ALPHABET as usize];
        for value in deck.to_vec() {
            counts[usize::from(value)] += 1;
        }
        counts
    }

    #[test]
    fn every_value_appears_exactly_twice() {
        for config in [GameConfig::classic(), GameConfig::extended()] {
            for seed in 0..32 {
                let deck = RandomDeckGenerator::new(seed).generate(&config).unwrap();
                assert_eq!(deck.total_cells(), config.total_cells());

                let counts = multiplicities(&deck);
                let pairs = usize::from(config.pair_count());
                assert!(counts[..pairs].iter().all(|&count| count == 2));
                assert!(counts[pairs..].iter().all(|&count| count == 0));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::classic();
        let a = RandomDeckGenerator::new(7).generate(&config).unwrap();
        let b = RandomDeckGenerator::new(7).generate(&config).unwrap();
        let c = RandomDeckGenerator::new(8).generate(&config).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn invalid_config_fails() {
        let config = GameConfig {
            size: (5, 5),
            ..GameConfig::classic()
        };
        assert_eq!(
            RandomDeckGenerator::new(0).generate(&config),
            Err(GameError::Configuration(ConfigIssue::OddCellCount(25)))
        );
    }
}
