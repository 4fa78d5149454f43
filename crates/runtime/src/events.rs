//! Progress events emitted while a match runs.
//!
//! Events let the embedding client narrate the game without the runtime
//! knowing anything about presentation; tests assert on the same stream.
use game_core::{Roll, RollScore, Seat, Standing, TurnOutcome};

/// High-level happenings during a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    /// A new round began.
    RoundStarted { round: u32 },

    /// A player's turn began.
    TurnStarted { seat: Seat, name: String },

    /// A roll was thrown and scored. `accumulated` is the turn total after
    /// folding the roll in (zero when the roll busted the turn).
    RollResolved {
        seat: Seat,
        roll: Roll,
        score: RollScore,
        accumulated: u32,
    },

    /// Every die scored; the pool resets to the full six dice.
    HotDice { seat: Seat },

    /// Accumulation is below the banking minimum; the player must roll again.
    RerollForced { seat: Seat, accumulated: u32 },

    /// The turn ended. `net_points` is zero on a bust; `forfeited` is zero on
    /// a bank.
    TurnEnded {
        seat: Seat,
        name: String,
        outcome: TurnOutcome,
        net_points: u32,
        forfeited: u32,
        banked_total: u32,
    },

    /// The match is over.
    MatchFinished { standings: Vec<Standing> },
}

/// Receives match events; implemented by the client layer.
pub trait EventSink {
    fn publish(&mut self, event: MatchEvent);
}

impl<E: EventSink + ?Sized> EventSink for &mut E {
    fn publish(&mut self, event: MatchEvent) {
        (**self).publish(event);
    }
}

/// Sink that drops every event; for embedders that only want the result.
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: MatchEvent) {}
}

/// Sink that records events for assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<MatchEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn publish(&mut self, event: MatchEvent) {
        self.events.push(event);
    }
}
