//! Roll evaluation and statistics

use serde::Serialize;
use tracing::{debug, trace};

use super::{DiceSpec, DieSource};

/// Natural 20 / natural 1 on a single d20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Critical {
    /// The d20 came up 20
    Success,
    /// The d20 came up 1
    Failure,
}

/// Result of evaluating a [`DiceSpec`]
///
/// `average`, `minimum` and `maximum` describe the spec, not this particular
/// draw. Everything else is derived from the faces rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    /// The spec that was rolled
    pub spec: DiceSpec,
    /// Faces in roll order
    pub rolls: Vec<u32>,
    /// Faces in ascending order
    pub sorted: Vec<u32>,
    /// Sum of faces plus modifier
    pub total: i64,
    /// `ceil((sides / 2 + 0.5) * count) + modifier`
    pub average: i64,
    pub minimum: i64,
    pub maximum: i64,
    /// `floor(total / 2)`
    pub half: i64,
    pub double: i64,
    /// e.g. "2d6 + (4)"
    pub label: String,
    /// Only set for a single d20
    pub critical: Option<Critical>,
}

/// Roll `spec` using `source` and compute its statistics
pub fn evaluate<S: DieSource + ?Sized>(spec: DiceSpec, source: &mut S) -> RollOutcome {
    let count = i64::from(spec.count());
    let sides = i64::from(spec.sides());
    let modifier = i64::from(spec.modifier());

    // pre-roll stats; ceil(((sides + 1) / 2) * count) in integers
    let average = ((sides + 1) * count + 1) / 2 + modifier;
    let minimum = count + modifier;
    let maximum = count * sides + modifier;

    let mut rolls = Vec::with_capacity(spec.count() as usize);
    for _ in 0..spec.count() {
        let face = source.draw(spec.sides());
        trace!(face, sides = spec.sides(), "die drawn");
        rolls.push(face);
    }

    let mut sorted = rolls.clone();
    sorted.sort_unstable();

    let total = rolls.iter().map(|&face| i64::from(face)).sum::<i64>() + modifier;
    let half = total.div_euclid(2);
    let double = total * 2;

    let critical = match (spec.count(), spec.sides(), rolls.first().copied()) {
        (1, 20, Some(20)) => Some(Critical::Success),
        (1, 20, Some(1)) => Some(Critical::Failure),
        _ => None,
    };

    debug!(spec = %spec, total, "evaluated roll");

    RollOutcome {
        spec,
        rolls,
        sorted,
        total,
        average,
        minimum,
        maximum,
        half,
        double,
        label: spec.label(),
        critical,
    }
}

/// Roll `spec` and return only the total
pub fn roll_total<S: DieSource + ?Sized>(spec: DiceSpec, source: &mut S) -> i64 {
    evaluate(spec, source).total
}
