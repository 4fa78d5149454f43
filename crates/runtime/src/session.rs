//! Round-robin match loop.
use game_core::{GameConfig, SessionState, Standing};

use crate::error::Result;
use crate::events::{EventSink, MatchEvent};
use crate::providers::{ContinueDecider, RollSource};
use crate::turn::play_turn;

/// Drives a full match from providers to final standings.
///
/// End-of-game policy: once any player banks the target score, the round in
/// progress is played out so every seat gets the same number of turns; the
/// match then ends and standings rank by banked score.
pub struct MatchRunner<R, D, E> {
    session: SessionState,
    rolls: R,
    decider: D,
    sink: E,
}

impl<R, D, E> MatchRunner<R, D, E>
where
    R: RollSource,
    D: ContinueDecider,
    E: EventSink,
{
    pub fn new(session: SessionState, rolls: R, decider: D, sink: E) -> Self {
        Self {
            session,
            rolls,
            decider,
            sink,
        }
    }

    /// Runs rounds until the target score is reached, returning the final
    /// standings.
    pub fn run(mut self) -> Result<Vec<Standing>> {
        loop {
            let round = self.session.begin_round();
            tracing::info!(round, "round started");
            self.sink.publish(MatchEvent::RoundStarted { round });

            let seats: Vec<_> = self.session.seats().collect();
            for seat in seats {
                let player = self.session.player(seat)?;
                let name = player.name().to_owned();
                self.sink.publish(MatchEvent::TurnStarted {
                    seat,
                    name: name.clone(),
                });

                let summary = play_turn(
                    seat,
                    player,
                    GameConfig::STARTING_DICE,
                    &mut self.rolls,
                    &mut self.decider,
                    &mut self.sink,
                )?;

                let banked_total = self.session.commit_turn(seat, summary.net_points)?;
                tracing::info!(
                    %seat,
                    outcome = %summary.outcome,
                    net_points = summary.net_points,
                    banked_total,
                    "turn ended"
                );
                self.sink.publish(MatchEvent::TurnEnded {
                    seat,
                    name,
                    outcome: summary.outcome,
                    net_points: summary.net_points,
                    forfeited: summary.forfeited,
                    banked_total,
                });
            }

            if self.session.target_reached() {
                break;
            }
        }

        let standings = self.session.standings();
        if let Some(winner) = standings.first() {
            tracing::info!(
                rounds = self.session.round(),
                winner = %winner.name,
                "match finished"
            );
        }
        self.sink.publish(MatchEvent::MatchFinished {
            standings: standings.clone(),
        });
        Ok(standings)
    }
}
