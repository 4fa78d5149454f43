//! Pluggable sources for dice rolls and banking decisions.
//!
//! Different implementations can handle:
//! - Human input (console prompts)
//! - Seeded RNG rolls ([`crate::rng::PcgDice`])
//! - Scripted/replayed fixtures for tests
use std::collections::VecDeque;

use game_core::{Player, Roll};

use crate::error::{Result, RuntimeError};

/// Produces the faces for one throw of `dice` dice.
pub trait RollSource {
    /// Rolls `dice` dice for `player`.
    ///
    /// # Errors
    /// Fails when no roll can be produced (closed input, exhausted script) or
    /// when the produced faces are malformed.
    fn roll(&mut self, player: &Player, dice: u8) -> Result<Roll>;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll(&mut self, player: &Player, dice: u8) -> Result<Roll> {
        (**self).roll(player, dice)
    }
}

/// Decides whether a player keeps rolling once banking is allowed.
pub trait ContinueDecider {
    /// Asks whether `player` risks `accumulated` points on another roll.
    fn continue_rolling(&mut self, player: &Player, accumulated: u32) -> Result<bool>;
}

impl<D: ContinueDecider + ?Sized> ContinueDecider for &mut D {
    fn continue_rolling(&mut self, player: &Player, accumulated: u32) -> Result<bool> {
        (**self).continue_rolling(player, accumulated)
    }
}

/// Roll source that replays a fixed script of face lists.
///
/// Requested pool sizes are recorded so tests can assert on them; the script
/// itself is trusted to match the pool the game asks for.
pub struct ScriptedRolls {
    script: VecDeque<Vec<u8>>,
    requested: Vec<u8>,
}

impl ScriptedRolls {
    pub fn new(script: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            requested: Vec::new(),
        }
    }

    /// Pool sizes the game asked for, in order.
    pub fn requested(&self) -> &[u8] {
        &self.requested
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self, _player: &Player, dice: u8) -> Result<Roll> {
        self.requested.push(dice);
        let faces = self
            .script
            .pop_front()
            .ok_or_else(|| RuntimeError::roll_provider("roll script exhausted"))?;
        Ok(Roll::from_faces(&faces)?)
    }
}

/// Decider that replays a fixed script of yes/no answers.
pub struct ScriptedDecisions {
    answers: VecDeque<bool>,
}

impl ScriptedDecisions {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }
}

impl ContinueDecider for ScriptedDecisions {
    fn continue_rolling(&mut self, _player: &Player, _accumulated: u32) -> Result<bool> {
        self.answers
            .pop_front()
            .ok_or_else(|| RuntimeError::decision_provider("decision script exhausted"))
    }
}

/// Decider that banks at the first opportunity. Useful as a fallback and in
/// tests that only exercise the roll path.
pub struct AlwaysBank;

impl ContinueDecider for AlwaysBank {
    fn continue_rolling(&mut self, _player: &Player, _accumulated: u32) -> Result<bool> {
        Ok(false)
    }
}
