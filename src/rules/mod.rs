//! Tabletop rules built on top of the dice engine
//!
//! Each roller here only calls [`crate::dice::evaluate`]; none of them draws
//! randomness on its own.
//! - Ability scores (4d6, drop the lowest)
//! - Advantage and disadvantage (best or worst of two d20s)
//! - Proficiency bonus by character level
//! - Percentile (d100)
//! - Fate/Fudge dice against the adjective ladder

mod ability;
mod advantage;
mod fate;
mod percentile;
mod proficiency;

pub use ability::{
    ability_modifier, roll_ability_score, roll_ability_scores, AbilityScore, MAX_ABILITY_SCORES,
};
pub use advantage::{roll_advantage, roll_disadvantage, roll_with_edge, Edge, EdgeRoll};
pub use fate::{ladder_name, parse_fate_rating, roll_fate, FateRoll, FATE_LADDER};
pub use percentile::{roll_percentile, Percentile};
pub use proficiency::{proficiency_bonus, MAX_LEVEL, MIN_LEVEL};
