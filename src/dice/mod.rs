//! Dice rolling system
//!
//! Implements the two pieces everything else is built on:
//! - Notation parsing ("2d6+4", "d20", "10d100-50") into a [`DiceSpec`]
//! - Evaluation of a [`DiceSpec`] into a [`RollOutcome`] with statistics
//!
//! Randomness is injected through [`DieSource`] so rolls can be replayed.

mod notation;
mod roller;
mod source;

pub use notation::parse_notation;
pub use roller::{evaluate, roll_total, Critical, RollOutcome};
pub use source::{DieSource, FixedSource, RngSource};

use serde::Serialize;
use std::fmt;

use crate::error::{DiceError, RangeError};

/// Largest accepted dice count
pub const MAX_DICE: u32 = 10_000;

/// Largest accepted number of sides per die
pub const MAX_SIDES: u32 = 1_000_000;

/// A validated dice roll specification: `count` dice of `sides` sides plus `modifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiceSpec {
    count: u32,
    sides: u32,
    modifier: i32,
}

impl DiceSpec {
    /// Create a dice spec, rejecting counts below 1 and sides below 2
    pub fn new(count: u32, sides: u32, modifier: i32) -> Result<Self, DiceError> {
        if count < 1 {
            return Err(RangeError::TooFewDice(count).into());
        }
        if count > MAX_DICE {
            return Err(RangeError::TooManyDice {
                count: count.to_string(),
                max: MAX_DICE,
            }
            .into());
        }
        if sides < 2 {
            return Err(RangeError::TooFewSides(sides).into());
        }
        if sides > MAX_SIDES {
            return Err(RangeError::TooManySides {
                sides: sides.to_string(),
                max: MAX_SIDES,
            }
            .into());
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// A single d20 with no modifier
    pub const D20: DiceSpec = DiceSpec::unchecked(1, 20, 0);

    /// Caller guarantees `1 <= count <= MAX_DICE` and `2 <= sides <= MAX_SIDES`
    pub(crate) const fn unchecked(count: u32, sides: u32, modifier: i32) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    /// Number of dice to roll
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of sides per die
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Modifier added to the sum of the dice
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Human-readable label, e.g. "2d6" or "2d6 + (4)".
    ///
    /// A negative modifier keeps the plus sign: "1d8 + (-5)".
    pub fn label(&self) -> String {
        if self.modifier != 0 {
            format!("{}d{} + ({})", self.count, self.sides, self.modifier)
        } else {
            format!("{}d{}", self.count, self.sides)
        }
    }

    /// Roll this spec with the given die source
    pub fn roll<S: DieSource + ?Sized>(&self, source: &mut S) -> RollOutcome {
        evaluate(*self, source)
    }
}

impl std::str::FromStr for DiceSpec {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notation(s)
    }
}

/// Canonical notation that parses back to the same spec
impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier > 0 {
            write!(f, "{}d{}+{}", self.count, self.sides, self.modifier)
        } else if self.modifier < 0 {
            write!(f, "{}d{}{}", self.count, self.sides, self.modifier)
        } else {
            write!(f, "{}d{}", self.count, self.sides)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let spec = DiceSpec::new(2, 6, -3).unwrap();
        assert_eq!(spec.count(), 2);
        assert_eq!(spec.sides(), 6);
        assert_eq!(spec.modifier(), -3);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            DiceSpec::new(0, 6, 0),
            Err(DiceError::Range(RangeError::TooFewDice(0)))
        );
        assert_eq!(
            DiceSpec::new(1, 1, 0),
            Err(DiceError::Range(RangeError::TooFewSides(1)))
        );
        assert!(DiceSpec::new(MAX_DICE + 1, 6, 0).is_err());
        assert!(DiceSpec::new(1, MAX_SIDES + 1, 0).is_err());
        assert!(DiceSpec::new(MAX_DICE, MAX_SIDES, i32::MAX).is_ok());
    }

    #[test]
    fn test_label() {
        assert_eq!(DiceSpec::new(2, 6, 0).unwrap().label(), "2d6");
        assert_eq!(DiceSpec::new(2, 6, 4).unwrap().label(), "2d6 + (4)");
        assert_eq!(DiceSpec::new(1, 8, -5).unwrap().label(), "1d8 + (-5)");
    }

    #[test]
    fn test_display_round_trips() {
        for spec in [
            DiceSpec::new(2, 6, 0).unwrap(),
            DiceSpec::new(1, 20, 5).unwrap(),
            DiceSpec::new(3, 8, -2).unwrap(),
        ] {
            let text = spec.to_string();
            assert_eq!(text.parse::<DiceSpec>().unwrap(), spec);
        }
        assert_eq!(DiceSpec::new(3, 8, -2).unwrap().to_string(), "3d8-2");
    }

    #[test]
    fn test_d20() {
        assert_eq!(DiceSpec::D20, DiceSpec::new(1, 20, 0).unwrap());
    }
}
