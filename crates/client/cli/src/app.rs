//! Wires prompts, providers, and the match runner together.
use anyhow::Result;
use game_core::{GameConfig, Player, Roll, SessionState, TurnOutcome};
use runtime::{
    ContinueDecider, EventSink, MatchEvent, MatchRunner, PcgDice, RollSource, RuntimeError,
};

use crate::config::CliConfig;
use crate::input;

/// A banking game with fewer seats is not playable.
const MIN_PLAYERS: usize = 2;

/// Console application driving one match.
pub struct ConsoleApp {
    config: CliConfig,
}

impl ConsoleApp {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn run(self) -> Result<()> {
        let game_config = self.config.game_config();

        print_banner();
        let players = collect_players()?;
        print_roster(&players);

        let session = SessionState::new(players, &game_config)?;
        tracing::info!(
            seed = self.config.seed,
            target_score = game_config.target_score,
            "match starting"
        );

        let runner = MatchRunner::new(
            session,
            ConsoleRolls::new(PcgDice::from_seed(self.config.seed)),
            ConsoleDecider,
            ConsoleNarrator::new(),
        );
        runner.run()?;
        Ok(())
    }
}

fn print_banner() {
    println!("GREED GAME");
    println!("-----------------------------------------------------------------");
    println!();
}

fn collect_players() -> Result<Vec<Player>> {
    let count = input::stdio().prompt_count("Enter players amount: ", MIN_PLAYERS)?;
    input::stdio().say("Enter players names (leave empty for a default name):")?;

    let mut players = Vec::with_capacity(count);
    for index in 1..=count {
        let name = input::stdio().prompt_line(&format!("Player {index} name: "))?;
        let name = if name.is_empty() {
            format!("Player {index}")
        } else {
            name
        };
        players.push(Player::new(name));
    }
    Ok(players)
}

fn print_roster(players: &[Player]) {
    println!();
    for player in players {
        println!("{}: {}", player.name(), player.banked());
    }
}

/// Roll source that waits for an Enter keypress, then throws seeded dice.
struct ConsoleRolls {
    dice: PcgDice,
}

impl ConsoleRolls {
    fn new(dice: PcgDice) -> Self {
        Self { dice }
    }
}

impl RollSource for ConsoleRolls {
    fn roll(&mut self, player: &Player, dice: u8) -> runtime::Result<Roll> {
        input::stdio()
            .pause(&format!("{}, press Enter to roll...", player.name()))
            .map_err(|error| RuntimeError::roll_provider(error.to_string()))?;
        self.dice.roll(player, dice)
    }
}

/// Decider backed by the console yes/no prompt.
struct ConsoleDecider;

impl ContinueDecider for ConsoleDecider {
    fn continue_rolling(&mut self, player: &Player, accumulated: u32) -> runtime::Result<bool> {
        input::stdio()
            .prompt_yes_no(&format!(
                "{}, you accumulated {accumulated} points, do you want to continue rolling?",
                player.name()
            ))
            .map_err(|error| RuntimeError::decision_provider(error.to_string()))
    }
}

/// Narrates match events on stdout.
///
/// Remembers the name from the last `TurnStarted` so the per-roll lines can
/// address the player without every event carrying the name.
struct ConsoleNarrator {
    current_player: String,
}

impl ConsoleNarrator {
    fn new() -> Self {
        Self {
            current_player: String::new(),
        }
    }
}

impl EventSink for ConsoleNarrator {
    fn publish(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::RoundStarted { round } => {
                println!();
                println!("Round {round}!");
            }
            MatchEvent::TurnStarted { name, .. } => {
                println!();
                println!("{name}'s turn!");
                self.current_player = name;
            }
            MatchEvent::RollResolved { roll, score, .. } => {
                println!(
                    "{} rolled {roll}: {} points.",
                    self.current_player, score.points
                );
            }
            MatchEvent::HotDice { .. } => {
                println!("Hot dice! All six come back for the next throw.");
            }
            MatchEvent::RerollForced { accumulated, .. } => {
                println!(
                    "{}, you must roll again (turn points: {accumulated} < {}).",
                    self.current_player,
                    GameConfig::MINIMUM_BANK
                );
            }
            MatchEvent::TurnEnded {
                name,
                outcome,
                net_points,
                forfeited,
                banked_total,
                ..
            } => match outcome {
                TurnOutcome::Busted => {
                    println!("{name} lost the accumulated score: {forfeited} (rolled 0 points).");
                }
                TurnOutcome::Banked => {
                    println!("{name} earned {net_points}. {name} total score: {banked_total}.");
                }
            },
            MatchEvent::MatchFinished { standings } => {
                println!();
                println!("Final standings:");
                for standing in &standings {
                    println!("  {}: {}", standing.name, standing.banked);
                }
                if let Some(winner) = standings.first() {
                    println!();
                    println!("{} wins!", winner.name);
                }
            }
        }
    }
}
