//! Die faces and validated roll buffers.
//!
//! Validation happens once, at construction: a [`Roll`] that exists is
//! guaranteed to hold between one and six in-range faces, so scoring and the
//! turn machine never re-check their input.
use core::fmt;

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Errors produced when building dice values from raw input.
///
/// These indicate a caller bug (a roll source handing over garbage), not a
/// recoverable game situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("a roll must contain at least one die")]
    Empty,
    #[error("a roll holds at most {} dice, got {count}", GameConfig::MAX_DICE)]
    TooManyDice { count: usize },
    #[error("die face {value} is outside 1..=6")]
    FaceOutOfRange { value: u8 },
}

/// Single die face value in `[1, 6]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face(u8);

impl Face {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Validates and wraps a raw face value.
    pub const fn new(value: u8) -> Result<Self, RollError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RollError::FaceOutOfRange { value })
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable multiset of die faces produced by one throw.
///
/// Length is always in `[1, MAX_DICE]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    faces: ArrayVec<Face, { GameConfig::MAX_DICE }>,
}

impl Roll {
    /// Builds a roll from raw face values, rejecting empty input, more dice
    /// than the pool holds, and out-of-range faces.
    pub fn from_faces(values: &[u8]) -> Result<Self, RollError> {
        if values.is_empty() {
            return Err(RollError::Empty);
        }
        if values.len() > GameConfig::MAX_DICE {
            return Err(RollError::TooManyDice {
                count: values.len(),
            });
        }

        let mut faces = ArrayVec::new();
        for &value in values {
            faces.push(Face::new(value)?);
        }
        Ok(Self { faces })
    }

    /// The rolled faces, in throw order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of dice in the roll.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, face) in self.faces.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{face}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_accepts_valid_range() {
        for value in 1..=6 {
            assert_eq!(Face::new(value).map(Face::value), Ok(value));
        }
    }

    #[test]
    fn face_rejects_out_of_range() {
        assert_eq!(Face::new(0), Err(RollError::FaceOutOfRange { value: 0 }));
        assert_eq!(Face::new(7), Err(RollError::FaceOutOfRange { value: 7 }));
    }

    #[test]
    fn roll_rejects_empty_input() {
        assert_eq!(Roll::from_faces(&[]), Err(RollError::Empty));
    }

    #[test]
    fn roll_rejects_oversized_input() {
        assert_eq!(
            Roll::from_faces(&[1, 2, 3, 4, 5, 6, 1]),
            Err(RollError::TooManyDice { count: 7 })
        );
    }

    #[test]
    fn roll_rejects_bad_face() {
        assert_eq!(
            Roll::from_faces(&[1, 2, 9]),
            Err(RollError::FaceOutOfRange { value: 9 })
        );
    }

    #[test]
    fn roll_displays_faces_in_throw_order() {
        let roll = Roll::from_faces(&[3, 1, 5]).unwrap();
        assert_eq!(roll.to_string(), "[3, 1, 5]");
        assert_eq!(roll.len(), 3);
    }
}
