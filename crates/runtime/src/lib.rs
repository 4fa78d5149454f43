//! Runtime orchestration for Greed matches.
//!
//! This crate wires the pure rules in `game-core` to pluggable providers for
//! dice rolls and banking decisions. Consumers embed [`MatchRunner`] to drive
//! a full match, or [`play_turn`] for a single turn, and observe progress
//! through [`EventSink`].
//!
//! Modules are organized by responsibility:
//! - [`providers`] defines the provider traits plus scripted fixtures
//! - [`rng`] hosts the deterministic PCG dice roller
//! - [`turn`] runs one turn's roll/decide loop
//! - [`session`] runs the round-robin match loop
//! - [`events`] carries progress reports to the embedding client
pub mod events;
pub mod providers;
pub mod rng;
pub mod session;
pub mod turn;

mod error;

pub use error::{Result, RuntimeError};
pub use events::{EventSink, MatchEvent, NullSink, RecordingSink};
pub use providers::{AlwaysBank, ContinueDecider, RollSource, ScriptedDecisions, ScriptedRolls};
pub use rng::PcgDice;
pub use session::MatchRunner;
pub use turn::{TurnSummary, play_turn};
