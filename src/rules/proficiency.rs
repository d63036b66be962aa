//! Proficiency bonus by character level

use crate::error::{DiceError, RangeError};

pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 20;

/// (first level, last level, bonus)
static PROFICIENCY_TIERS: [(i64, i64, i32); 5] = [
    (1, 4, 2),
    (5, 8, 3),
    (9, 12, 4),
    (13, 16, 5),
    (17, 20, 6),
];

/// Proficiency bonus for a character level in `1..=20`.
///
/// Levels outside that range are an error, not clamped.
pub fn proficiency_bonus(level: i64) -> Result<i32, DiceError> {
    PROFICIENCY_TIERS
        .iter()
        .find(|(first, last, _)| (*first..=*last).contains(&level))
        .map(|(_, _, bonus)| *bonus)
        .ok_or_else(|| RangeError::Level(level).into())
}
