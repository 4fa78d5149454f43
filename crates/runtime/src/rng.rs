//! Deterministic dice roller.
//!
//! PCG is a family of simple, fast, space-efficient RNGs with good
//! statistical quality. This implementation uses PCG-XSH-RR (32-bit output
//! from 64-bit state): fixing the seed replays a match die for die, which is
//! what makes `GREED_SEED` reproducible games possible.
//!
//! # References
//!
//! - PCG paper: <https://www.pcg-random.org/>
use game_core::{Face, Player, Roll};

use crate::error::Result;
use crate::providers::RollSource;

/// Seeded PCG-XSH-RR generator rolling six-sided dice.
#[derive(Clone, Copy, Debug)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a roller from a seed. The same seed produces the same dice.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: avalanche(seed),
        }
    }

    /// Advance the LCG state and permute it into 32 random bits.
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let state = self.state;

        // XSH-RR output function: xorshift high bits, then a random rotate.
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn roll_face(&mut self) -> u8 {
        (self.next_u32() % u32::from(Face::MAX)) as u8 + 1
    }
}

impl RollSource for PcgDice {
    fn roll(&mut self, _player: &Player, dice: u8) -> Result<Roll> {
        let mut faces = [0u8; 6];
        let count = usize::from(dice).min(faces.len());
        for face in faces.iter_mut().take(count) {
            *face = self.roll_face();
        }
        Ok(Roll::from_faces(&faces[..count])?)
    }
}

/// Avalanche mixer spreading seed entropy across all state bits.
///
/// Constants are the SplitMix64 finalizer multipliers.
fn avalanche(seed: u64) -> u64 {
    let mut hash = seed;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}
