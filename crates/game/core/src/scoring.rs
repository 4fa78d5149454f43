//! Pure scoring rules for a single roll.
//!
//! A face appearing three or more times consumes exactly three dice as a
//! triple: 1000 points for 1s, `face * 100` for anything else. Leftover 1s
//! and 5s score individually (100 and 50 points); every other leftover die
//! is non-scoring and goes back to the pool.
use crate::dice::Roll;

/// Points awarded for a triple of 1s.
const TRIPLE_ONES: u32 = 1000;
/// Points for each 1 outside a triple.
const SINGLE_ONE: u32 = 100;
/// Points for each 5 outside a triple.
const SINGLE_FIVE: u32 = 50;
/// Dice consumed by a triple.
const TRIPLE_SIZE: u8 = 3;

/// Outcome of scoring one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollScore {
    /// Points the roll is worth.
    pub points: u32,
    /// Dice that contributed to no combination.
    pub non_scoring: u8,
}

impl RollScore {
    /// True when every die contributed points, granting a fresh full pool.
    #[inline]
    pub const fn is_hot_dice(self) -> bool {
        self.non_scoring == 0
    }
}

/// Scores a roll under the standard Greed rule set.
///
/// Deterministic and free of side effects; `non_scoring` is always at most
/// `roll.len()`.
pub fn score(roll: &Roll) -> RollScore {
    let mut counts = [0u8; 6];
    for face in roll.faces() {
        counts[usize::from(face.value() - 1)] += 1;
    }

    let mut points = 0u32;
    let mut non_scoring = 0u8;
    for (index, &count) in counts.iter().enumerate() {
        let value = index as u32 + 1;
        let mut remaining = count;

        if count >= TRIPLE_SIZE {
            points += if value == 1 { TRIPLE_ONES } else { value * 100 };
            remaining -= TRIPLE_SIZE;
        }

        match value {
            1 => points += u32::from(remaining) * SINGLE_ONE,
            5 => points += u32::from(remaining) * SINGLE_FIVE,
            _ => non_scoring += remaining,
        }
    }

    RollScore { points, non_scoring }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Roll;

    fn score_of(faces: &[u8]) -> RollScore {
        score(&Roll::from_faces(faces).unwrap())
    }

    #[test]
    fn single_one_scores_100() {
        assert_eq!(
            score_of(&[1]),
            RollScore {
                points: 100,
                non_scoring: 0
            }
        );
    }

    #[test]
    fn single_five_scores_50() {
        assert_eq!(
            score_of(&[5]),
            RollScore {
                points: 50,
                non_scoring: 0
            }
        );
    }

    #[test]
    fn junk_faces_score_nothing() {
        assert_eq!(
            score_of(&[2, 3, 4, 6]),
            RollScore {
                points: 0,
                non_scoring: 4
            }
        );
    }

    #[test]
    fn triple_ones_score_1000() {
        assert_eq!(
            score_of(&[1, 1, 1]),
            RollScore {
                points: 1000,
                non_scoring: 0
            }
        );
    }

    #[test]
    fn triple_of_other_faces_scores_face_times_100() {
        assert_eq!(
            score_of(&[2, 2, 2]),
            RollScore {
                points: 200,
                non_scoring: 0
            }
        );
        assert_eq!(
            score_of(&[6, 6, 6]),
            RollScore {
                points: 600,
                non_scoring: 0
            }
        );
    }

    #[test]
    fn singles_mix_with_junk() {
        assert_eq!(
            score_of(&[1, 5, 2]),
            RollScore {
                points: 150,
                non_scoring: 1
            }
        );
    }

    #[test]
    fn leftover_beyond_a_triple_scores_as_singles() {
        // Four 1s: triple plus one single.
        assert_eq!(
            score_of(&[1, 1, 1, 1]),
            RollScore {
                points: 1100,
                non_scoring: 0
            }
        );
        // Six 1s: triple plus three singles.
        assert_eq!(
            score_of(&[1, 1, 1, 1, 1, 1]),
            RollScore {
                points: 1300,
                non_scoring: 0
            }
        );
        // Six 5s: triple plus three singles.
        assert_eq!(
            score_of(&[5, 5, 5, 5, 5, 5]),
            RollScore {
                points: 650,
                non_scoring: 0
            }
        );
    }

    #[test]
    fn leftover_junk_beyond_a_triple_is_non_scoring() {
        assert_eq!(
            score_of(&[2, 2, 2, 2]),
            RollScore {
                points: 200,
                non_scoring: 1
            }
        );
        assert_eq!(
            score_of(&[2, 2, 2, 2, 2, 2]),
            RollScore {
                points: 200,
                non_scoring: 3
            }
        );
    }

    #[test]
    fn full_house_of_scoring_faces_is_hot_dice() {
        let result = score_of(&[1, 1, 1, 5, 5]);
        assert_eq!(result.points, 1100);
        assert!(result.is_hot_dice());
    }

    #[test]
    fn one_junk_die_spoils_hot_dice() {
        let result = score_of(&[1, 1, 1, 5, 5, 2]);
        assert_eq!(result.points, 1100);
        assert_eq!(result.non_scoring, 1);
        assert!(!result.is_hot_dice());
    }

    #[test]
    fn non_scoring_never_exceeds_roll_length() {
        let rolls: &[&[u8]] = &[
            &[1],
            &[2],
            &[2, 3, 4, 6],
            &[1, 1, 1, 1, 1, 1],
            &[6, 6, 6, 6, 6, 6],
            &[2, 2, 3, 3, 4, 4],
            &[1, 5, 2, 3, 4, 6],
        ];
        for faces in rolls {
            let roll = Roll::from_faces(faces).unwrap();
            let result = score(&roll);
            assert!(usize::from(result.non_scoring) <= roll.len());
        }
    }
}
