//! Per-turn state machine: roll, evaluate, continue or stop.
//!
//! [`TurnState`] is owned by whoever drives a single turn (the runtime's turn
//! runner, or a test). It is created at turn start, fed one scored roll at a
//! time through [`TurnState::apply_roll`], and consumed by [`TurnState::bank`]
//! when the player stops voluntarily. A bust forfeits the accumulation and the
//! verdict is the only thing the caller gets back.
use crate::config::GameConfig;
use crate::scoring::RollScore;

/// Verdict after folding one scored roll into the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RollVerdict {
    /// The roll scored nothing; the turn is over and its accumulation lost.
    Busted,
    /// Accumulation is still below the banking minimum; the player must roll
    /// again and is not offered a choice.
    MustContinue,
    /// Banking minimum reached; the player may bank or keep rolling.
    MayBank,
}

/// How a finished turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    Banked,
    Busted,
}

/// Turn-local accumulation and dice pool.
///
/// `dice_remaining` stays in `[1, MAX_DICE]`: a fully-scoring roll restores
/// the full pool instead of leaving zero dice to throw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    accumulated: u32,
    dice_remaining: u8,
}

impl TurnState {
    /// Starts a turn with the standard opening pool.
    pub fn new() -> Self {
        Self::with_pool(GameConfig::STARTING_DICE)
    }

    /// Starts a turn with a specific opening pool; `dice` must be in
    /// `[1, MAX_DICE]`.
    pub fn with_pool(dice: u8) -> Self {
        debug_assert!(dice >= 1 && usize::from(dice) <= GameConfig::MAX_DICE);
        Self {
            accumulated: 0,
            dice_remaining: dice,
        }
    }

    /// Points accumulated so far this turn.
    pub fn accumulated(&self) -> u32 {
        self.accumulated
    }

    /// Dice available for the next throw.
    pub fn dice_remaining(&self) -> u8 {
        self.dice_remaining
    }

    /// Folds a scored roll into the turn and reports what the player can do.
    ///
    /// A zero-point roll busts the turn and zeroes the accumulation.
    /// Otherwise the non-scoring dice become the next pool, with a hot-dice
    /// roll restoring all six.
    pub fn apply_roll(&mut self, score: &RollScore) -> RollVerdict {
        if score.points == 0 {
            self.accumulated = 0;
            return RollVerdict::Busted;
        }

        self.accumulated += score.points;
        self.dice_remaining = match score.non_scoring {
            0 => GameConfig::MAX_DICE as u8,
            dice => dice,
        };

        if self.accumulated < GameConfig::MINIMUM_BANK {
            RollVerdict::MustContinue
        } else {
            RollVerdict::MayBank
        }
    }

    /// Ends the turn voluntarily, committing the accumulation.
    pub fn bank(self) -> u32 {
        self.accumulated
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
