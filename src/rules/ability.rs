//! Ability score generation: roll 4d6, drop the lowest die

use serde::Serialize;
use tracing::debug;

use crate::dice::{evaluate, DiceSpec, DieSource};
use crate::error::{DiceError, RangeError};

const ABILITY_DIE: DiceSpec = DiceSpec::unchecked(1, 6, 0);

/// Largest number of scores generated in one call
pub const MAX_ABILITY_SCORES: usize = 1_000;

/// One generated ability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbilityScore {
    /// The four d6 faces in roll order
    pub rolls: [u32; 4],
    /// The lowest face, not counted
    pub dropped: u32,
    /// Sum of the three highest faces, 3..=18
    pub score: u32,
    pub modifier: i32,
}

/// Modifier for an ability score.
///
/// `(score - 10) / 2` is rounded to two decimal places first and floored
/// afterwards, so 15 gives +2 and 8 gives -1.
pub fn ability_modifier(score: u32) -> i32 {
    let ratio = (f64::from(score) - 10.0) / 2.0;
    let rounded = (ratio * 100.0).round() / 100.0;
    rounded.floor() as i32
}

/// Roll a single ability score
pub fn roll_ability_score<S: DieSource + ?Sized>(source: &mut S) -> AbilityScore {
    let mut rolls = [0u32; 4];
    for face in rolls.iter_mut() {
        *face = evaluate(ABILITY_DIE, source).rolls[0];
    }

    let mut sorted = rolls;
    sorted.sort_unstable();
    let dropped = sorted[0];
    let score: u32 = sorted[1..].iter().sum();
    let modifier = ability_modifier(score);

    debug!(?rolls, score, modifier, "rolled ability score");

    AbilityScore {
        rolls,
        dropped,
        score,
        modifier,
    }
}

/// Roll `n` independent ability scores.
///
/// `n` above [`MAX_ABILITY_SCORES`] is rejected before anything is rolled.
pub fn roll_ability_scores<S: DieSource + ?Sized>(
    n: usize,
    source: &mut S,
) -> Result<Vec<AbilityScore>, DiceError> {
    if n > MAX_ABILITY_SCORES {
        return Err(RangeError::TooManyScores {
            count: n,
            max: MAX_ABILITY_SCORES,
        }
        .into());
    }

    Ok((0..n).map(|_| roll_ability_score(source)).collect())
}
