//! Match bookkeeping: seats, banked scores, round progression.
//!
//! Banked totals are mutated only here, between turns; the turn machinery
//! hands back a net score and never touches a player record directly.
use core::fmt;

use crate::config::GameConfig;

/// Index of a player's seat. Turn order follows seat order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat(pub usize);

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// One participant and their committed score.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    banked: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            banked: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Committed score. Never decreases: a bust commits zero.
    pub fn banked(&self) -> u32 {
        self.banked
    }
}

/// Errors raised by session bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a game needs at least two players, got {count}")]
    NotEnoughPlayers { count: usize },
    #[error("unknown {seat}")]
    UnknownSeat { seat: Seat },
}

/// Ranked line in the final standings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    pub seat: Seat,
    pub name: String,
    pub banked: u32,
}

/// Bookkeeping for one match.
///
/// Terminal once any banked total reaches the target score and the round in
/// progress has been completed, so every seat plays the same number of turns.
#[derive(Clone, Debug)]
pub struct SessionState {
    players: Vec<Player>,
    target_score: u32,
    round: u32,
}

impl SessionState {
    /// Creates a session; a match needs at least two players.
    pub fn new(players: Vec<Player>, config: &GameConfig) -> Result<Self, SessionError> {
        if players.len() < 2 {
            return Err(SessionError::NotEnoughPlayers {
                count: players.len(),
            });
        }
        Ok(Self {
            players,
            target_score: config.target_score,
            round: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> Result<&Player, SessionError> {
        self.players
            .get(seat.0)
            .ok_or(SessionError::UnknownSeat { seat })
    }

    /// Seats in turn order.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + use<> {
        (0..self.players.len()).map(Seat)
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Rounds completed or in progress so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Starts the next round, returning its 1-based number.
    pub fn begin_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    /// Credits a finished turn to a seat, returning the new banked total.
    pub fn commit_turn(&mut self, seat: Seat, net_points: u32) -> Result<u32, SessionError> {
        let player = self
            .players
            .get_mut(seat.0)
            .ok_or(SessionError::UnknownSeat { seat })?;
        player.banked += net_points;
        Ok(player.banked)
    }

    /// True once any player has banked at least the target score.
    pub fn target_reached(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.banked >= self.target_score)
    }

    /// Players ranked by banked score, highest first; ties keep seat order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .enumerate()
            .map(|(index, player)| Standing {
                seat: Seat(index),
                name: player.name.clone(),
                banked: player.banked,
            })
            .collect();
        standings.sort_by(|a, b| b.banked.cmp(&a.banked).then(a.seat.cmp(&b.seat)));
        standings
    }
}
