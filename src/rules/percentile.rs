//! Percentile roll (d100)

use serde::Serialize;
use std::fmt;

use crate::dice::{evaluate, DiceSpec, DieSource};

const PERCENTILE_DIE: DiceSpec = DiceSpec::unchecked(1, 100, 0);

/// A 1-100 result read as a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Percentile {
    pub value: u32,
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value)
    }
}

pub fn roll_percentile<S: DieSource + ?Sized>(source: &mut S) -> Percentile {
    Percentile {
        value: evaluate(PERCENTILE_DIE, source).rolls[0],
    }
}
