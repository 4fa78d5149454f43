//! Drives a single player's turn.
//!
//! The loop mirrors the turn state machine: roll the remaining dice, score,
//! fold the result into [`TurnState`], and act on the verdict. Busts and
//! voluntary banks are the only exits.
use game_core::{Player, RollVerdict, Seat, TurnOutcome, TurnState, scoring};

use crate::error::Result;
use crate::events::{EventSink, MatchEvent};
use crate::providers::{ContinueDecider, RollSource};

/// Net result of one completed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub outcome: TurnOutcome,
    /// Points to credit to the player; zero on a bust.
    pub net_points: u32,
    /// Accumulation lost to a bust; zero on a bank.
    pub forfeited: u32,
    /// Rolls thrown during the turn.
    pub rolls: u32,
}

/// Runs one turn for `player`, starting with a pool of `initial_dice`.
///
/// `rolls` supplies the dice, `decider` answers the continue-or-bank question
/// once the banking minimum is reached, and per-roll events go to `sink`.
/// Below the minimum the decider is never consulted.
pub fn play_turn<R, D, E>(
    seat: Seat,
    player: &Player,
    initial_dice: u8,
    rolls: &mut R,
    decider: &mut D,
    sink: &mut E,
) -> Result<TurnSummary>
where
    R: RollSource + ?Sized,
    D: ContinueDecider + ?Sized,
    E: EventSink + ?Sized,
{
    let mut turn = TurnState::with_pool(initial_dice);
    let mut rolls_taken = 0u32;

    loop {
        let pool = turn.dice_remaining();
        let roll = rolls.roll(player, pool)?;
        rolls_taken += 1;

        let score = scoring::score(&roll);
        let before = turn.accumulated();
        let verdict = turn.apply_roll(&score);
        tracing::debug!(
            %seat,
            pool,
            points = score.points,
            non_scoring = score.non_scoring,
            %verdict,
            "roll scored"
        );

        sink.publish(MatchEvent::RollResolved {
            seat,
            roll,
            score,
            accumulated: turn.accumulated(),
        });
        if score.is_hot_dice() {
            sink.publish(MatchEvent::HotDice { seat });
        }

        match verdict {
            RollVerdict::Busted => {
                return Ok(TurnSummary {
                    outcome: TurnOutcome::Busted,
                    net_points: 0,
                    forfeited: before,
                    rolls: rolls_taken,
                });
            }
            RollVerdict::MustContinue => {
                sink.publish(MatchEvent::RerollForced {
                    seat,
                    accumulated: turn.accumulated(),
                });
            }
            RollVerdict::MayBank => {
                if !decider.continue_rolling(player, turn.accumulated())? {
                    let net_points = turn.bank();
                    return Ok(TurnSummary {
                        outcome: TurnOutcome::Banked,
                        net_points,
                        forfeited: 0,
                        rolls: rolls_taken,
                    });
                }
            }
        }
    }
}
