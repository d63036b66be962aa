//! Dice notation parsing
//!
//! Grammar: `[count]d<sides>[{+|-}modifier]`, separator case-insensitive,
//! surrounding whitespace ignored.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::{DiceSpec, MAX_DICE, MAX_SIDES};
use crate::error::{DiceError, RangeError};

/// `[0-9]` rather than `\d` so only ASCII digits are accepted
static NOTATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<count>[0-9]*)[dD](?P<sides>[0-9]+)(?P<modifier>[+-][0-9]*)?$").unwrap()
});

/// Parse a dice notation string like "2d6+4" into a validated [`DiceSpec`].
///
/// # Rules
/// - `count` defaults to 1 when omitted ("d20")
/// - `modifier` defaults to 0 when omitted; a bare sign ("2d6+") is also 0
/// - sides below 2 or a count of 0 are rejected, never clamped
///
/// # Examples
/// ```
/// use dndroll::dice::parse_notation;
///
/// let spec = parse_notation("10d100-50").unwrap();
/// assert_eq!((spec.count(), spec.sides(), spec.modifier()), (10, 100, -50));
///
/// assert!(parse_notation("6").is_err());   // no separator
/// assert!(parse_notation("d1").is_err());  // fewer than 2 sides
/// ```
pub fn parse_notation(text: &str) -> Result<DiceSpec, DiceError> {
    let trimmed = text.trim();
    let caps = NOTATION_REGEX
        .captures(trimmed)
        .ok_or_else(|| DiceError::notation(trimmed))?;

    let count = match &caps["count"] {
        "" => 1,
        digits => digits.parse::<u32>().map_err(|_| RangeError::TooManyDice {
            count: digits.to_string(),
            max: MAX_DICE,
        })?,
    };

    let sides_str = &caps["sides"];
    let sides = sides_str
        .parse::<u32>()
        .map_err(|_| RangeError::TooManySides {
            sides: sides_str.to_string(),
            max: MAX_SIDES,
        })?;

    let modifier = match caps.name("modifier").map(|m| m.as_str()) {
        None | Some("+") | Some("-") => 0,
        Some(token) => token
            .parse::<i32>()
            .map_err(|_| RangeError::ModifierOverflow(token.to_string()))?,
    };

    let spec = DiceSpec::new(count, sides, modifier)?;
    debug!(count, sides, modifier, "parsed dice notation '{}'", trimmed);
    Ok(spec)
}
