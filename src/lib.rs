//! dndroll - dice roller for tabletop role-playing games
//!
//! Parses dice notation like "2d6+4", rolls it with an injectable source of
//! randomness and reports the statistics of the roll. Ability scores,
//! advantage, proficiency, percentile and Fate rolls are built on top.
//!
//! ```
//! use dndroll::dice::{parse_notation, FixedSource};
//!
//! let spec = parse_notation("2d6+4").unwrap();
//! let outcome = spec.roll(&mut FixedSource::new([3, 5]));
//! assert_eq!(outcome.total, 12);
//! assert_eq!(outcome.average, 11);
//! assert_eq!(outcome.label, "2d6 + (4)");
//! ```

pub mod config;
pub mod dice;
pub mod error;
pub mod report;
pub mod rules;

#[cfg(test)]
mod test_strategies;

pub use config::{Config, ConfigError};
pub use dice::{evaluate, parse_notation, DiceSpec, DieSource, FixedSource, RngSource, RollOutcome};
pub use error::{DiceError, RangeError};
