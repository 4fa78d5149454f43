/// Rule constants and tunable parameters for a Greed session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Banked score a player must reach to trigger the final round.
    pub target_score: u32,
}

impl GameConfig {
    // ===== compile-time rule constants =====
    /// Capacity of the dice pool; also the pool size restored by hot dice.
    pub const MAX_DICE: usize = 6;
    /// Dice thrown on the first roll of every turn.
    pub const STARTING_DICE: u8 = 5;
    /// A turn's accumulation can only be banked once it reaches this total.
    pub const MINIMUM_BANK: u32 = 300;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TARGET_SCORE: u32 = 3000;

    pub fn new() -> Self {
        Self {
            target_score: Self::DEFAULT_TARGET_SCORE,
        }
    }

    pub fn with_target_score(target_score: u32) -> Self {
        Self { target_score }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
