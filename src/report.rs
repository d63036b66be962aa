//! Human-readable rendering of roll outcomes
//!
//! Every function returns the full text to print, without a trailing newline.

use crate::dice::{Critical, RollOutcome};
use crate::rules::{AbilityScore, EdgeRoll, FateRoll};

/// Statistics block for a roll, followed by a line for a natural 20 or 1
pub fn render_stats(outcome: &RollOutcome) -> String {
    let mut text = format!(
        "### Roll Statistics For: {} ###\n\
         Roll: ....... {:?}\n\
         Total: ...... {}\n\
         Average: .... {}\n\
         Minimum: .... {}\n\
         Maximum: .... {}\n\
         Dice: ....... {}\n\
         Sides/Die: .. {}\n\
         Half ........ {}\n\
         Double ...... {}",
        outcome.label,
        outcome.sorted,
        outcome.total,
        outcome.average,
        outcome.minimum,
        outcome.maximum,
        outcome.spec.count(),
        outcome.spec.sides(),
        outcome.half,
        outcome.double,
    );

    match outcome.critical {
        Some(Critical::Success) => text.push_str("\n\nGreat success!"),
        Some(Critical::Failure) => text.push_str("\n\nPathetic!"),
        None => {}
    }

    text
}

/// One line per score: "15 (+2)  rolled [6, 5, 4, 2], dropped 2"
pub fn render_abilities(scores: &[AbilityScore]) -> String {
    scores
        .iter()
        .map(|ability| {
            format!(
                "{:>2} ({:+})  rolled {:?}, dropped {}",
                ability.score, ability.modifier, ability.rolls, ability.dropped
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_edge(roll: &EdgeRoll) -> String {
    format!(
        "{}: rolled {} and {}, keeping {}",
        roll.edge, roll.first, roll.second, roll.result
    )
}

pub fn render_proficiency(level: i64, bonus: i32) -> String {
    format!("Level {} proficiency bonus: {:+}", level, bonus)
}

/// "[-, 0, +, +] = +1, rating +2 -> 3 (good)"
pub fn render_fate(roll: &FateRoll) -> String {
    let faces = roll
        .faces
        .iter()
        .map(|face| match face.signum() {
            1 => "+",
            -1 => "-",
            _ => "0",
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut text = format!(
        "[{}] = {:+}, rating {:+} -> {}",
        faces, roll.dice, roll.rating, roll.total
    );
    if let Some(name) = roll.ladder {
        text.push_str(&format!(" ({})", name));
    }
    text
}
