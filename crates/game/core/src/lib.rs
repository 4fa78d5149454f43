//! Deterministic rules for the Greed dice banking game.
//!
//! `game-core` defines the canonical rule set (dice, scoring, the per-turn
//! state machine, session bookkeeping) and exposes pure APIs reused by the
//! runtime and by test fixtures. Nothing in this crate performs I/O or owns a
//! randomness source: rolls arrive as values from the caller and decisions go
//! back out as values.
pub mod config;
pub mod dice;
pub mod scoring;
pub mod session;
pub mod turn;

pub use config::GameConfig;
pub use dice::{Face, Roll, RollError};
pub use scoring::{RollScore, score};
pub use session::{Player, Seat, SessionError, SessionState, Standing};
pub use turn::{RollVerdict, TurnOutcome, TurnState};
