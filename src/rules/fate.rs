//! Fate/Fudge dice
//!
//! Four three-sided dice read as -1, 0, +1, summed and added to a rating.
//! A rating is either an integer or an adjective from the ladder.

use serde::Serialize;
use tracing::debug;

use crate::dice::{evaluate, DiceSpec, DieSource};
use crate::error::{DiceError, RangeError};

const FATE_DICE: DiceSpec = DiceSpec::unchecked(4, 3, 0);

/// The adjective ladder, best to worst
pub static FATE_LADDER: [(&str, i32); 12] = [
    ("legendary", 8),
    ("epic", 7),
    ("fantastic", 6),
    ("superb", 5),
    ("great", 4),
    ("good", 3),
    ("fair", 2),
    ("average", 1),
    ("mediocre", 0),
    ("poor", -1),
    ("terrible", -2),
    ("catastrophic", -3),
];

/// Parse a rating given as an integer ("3", "+2", "-1") or a ladder adjective
/// ("good", case-insensitive).
pub fn parse_fate_rating(text: &str) -> Result<i32, DiceError> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i32>() {
        return Ok(value);
    }

    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::FateRatingOverflow(text.to_string()).into());
    }

    let lowered = text.to_lowercase();
    FATE_LADDER
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, value)| *value)
        .ok_or_else(|| RangeError::FateRating(text.to_string()).into())
}

/// Ladder adjective for a value, if it is on the ladder
pub fn ladder_name(value: i64) -> Option<&'static str> {
    FATE_LADDER
        .iter()
        .find(|(_, rung)| i64::from(*rung) == value)
        .map(|(name, _)| *name)
}

/// Outcome of a Fate roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FateRoll {
    /// Each die as -1, 0 or +1
    pub faces: Vec<i32>,
    /// Sum of the faces, -4..=4
    pub dice: i32,
    pub rating: i32,
    pub total: i64,
    /// Adjective for `total`, when it falls on the ladder
    pub ladder: Option<&'static str>,
}

pub fn roll_fate<S: DieSource + ?Sized>(rating: i32, source: &mut S) -> FateRoll {
    let outcome = evaluate(FATE_DICE, source);
    let faces: Vec<i32> = outcome.rolls.iter().map(|&face| face as i32 - 2).collect();
    let dice: i32 = faces.iter().sum();
    let total = i64::from(rating) + i64::from(dice);

    debug!(?faces, rating, total, "rolled fate dice");

    FateRoll {
        faces,
        dice,
        rating,
        total,
        ladder: ladder_name(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{FixedSource, RngSource};

    #[test]
    fn test_parse_integer_rating() {
        assert_eq!(parse_fate_rating("3"), Ok(3));
        assert_eq!(parse_fate_rating("+2"), Ok(2));
        assert_eq!(parse_fate_rating("-1"), Ok(-1));
        assert_eq!(parse_fate_rating("12"), Ok(12));
    }

    #[test]
    fn test_parse_adjective_rating() {
        assert_eq!(parse_fate_rating("legendary"), Ok(8));
        assert_eq!(parse_fate_rating("Good"), Ok(3));
        assert_eq!(parse_fate_rating("MEDIOCRE"), Ok(0));
        assert_eq!(parse_fate_rating(" terrible "), Ok(-2));
        assert_eq!(parse_fate_rating("catastrophic"), Ok(-3));
    }

    #[test]
    fn test_parse_invalid_rating() {
        assert_eq!(
            parse_fate_rating("awesome"),
            Err(DiceError::Range(RangeError::FateRating("awesome".into())))
        );
        assert!(parse_fate_rating("").is_err());
        assert!(parse_fate_rating("+").is_err());
        assert!(parse_fate_rating("2.5").is_err());
    }

    #[test]
    fn test_parse_overflowing_rating() {
        assert_eq!(
            parse_fate_rating("99999999999"),
            Err(DiceError::Range(RangeError::FateRatingOverflow(
                "99999999999".into()
            )))
        );
        assert_eq!(
            parse_fate_rating("-2147483649"),
            Err(DiceError::Range(RangeError::FateRatingOverflow(
                "-2147483649".into()
            )))
        );
        assert_eq!(parse_fate_rating("-2147483648"), Ok(i32::MIN));
    }

    #[test]
    fn test_ladder_is_contiguous() {
        for pair in FATE_LADDER.windows(2) {
            assert_eq!(pair[0].1 - 1, pair[1].1);
        }
        assert_eq!(ladder_name(3), Some("good"));
        assert_eq!(ladder_name(9), None);
        assert_eq!(ladder_name(-4), None);
    }

    #[test]
    fn test_face_mapping() {
        let roll = roll_fate(2, &mut FixedSource::new([1, 2, 3, 3]));
        assert_eq!(roll.faces, vec![-1, 0, 1, 1]);
        assert_eq!(roll.dice, 1);
        assert_eq!(roll.rating, 2);
        assert_eq!(roll.total, 3);
        assert_eq!(roll.ladder, Some("good"));
    }

    #[test]
    fn test_extremes() {
        let low = roll_fate(0, &mut FixedSource::new([1]));
        assert_eq!(low.dice, -4);
        assert_eq!(low.ladder, None);

        let high = roll_fate(4, &mut FixedSource::new([3]));
        assert_eq!(high.total, 8);
        assert_eq!(high.ladder, Some("legendary"));
    }

    #[test]
    fn test_random_dice_in_range() {
        let mut source = RngSource::seeded(5);
        for _ in 0..200 {
            let roll = roll_fate(0, &mut source);
            assert_eq!(roll.faces.len(), 4);
            assert!((-4..=4).contains(&roll.dice));
            assert!(roll.faces.iter().all(|face| (-1..=1).contains(face)));
        }
    }
}
