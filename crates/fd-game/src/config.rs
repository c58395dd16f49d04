//! Configuration for a game.

/// Configuration for a single game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Offer the probability table before dice are selected.
    pub offer_help: bool,
    /// Seed for the computer's die choice. `None` seeds from the OS.
    ///
    /// Only the computer's free pick uses this generator; turn order and
    /// rolls always go through fair draws.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            offer_help: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the seed for the computer's die choice.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the help offer.
    pub fn with_help(mut self, offer_help: bool) -> Self {
        self.offer_help = offer_help;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert!(cfg.offer_help);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default().with_seed(123).with_help(false);
        assert_eq!(cfg.seed, Some(123));
        assert!(!cfg.offer_help);
    }
}
