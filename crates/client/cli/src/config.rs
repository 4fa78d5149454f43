//! Console client configuration.
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use game_core::GameConfig;

/// Runtime configuration for the console client.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Seed for the dice roller.
    pub seed: u64,
    /// Banked score that ends the game.
    pub target_score: u32,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GREED_SEED` - RNG seed; fixing it replays the same dice
    ///   (default: derived from the system clock)
    /// - `GREED_TARGET_SCORE` - banked score that ends the game
    ///   (default: 3000)
    pub fn from_env() -> Self {
        let seed = read_env::<u64>("GREED_SEED").unwrap_or_else(seed_from_clock);
        let target_score =
            read_env::<u32>("GREED_TARGET_SCORE").unwrap_or(GameConfig::DEFAULT_TARGET_SCORE);
        Self { seed, target_score }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::with_target_score(self.target_score)
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Parses an environment variable, ignoring unset or malformed values.
fn read_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| raw.parse().ok())
}
