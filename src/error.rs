//! Error types shared by the parser, the roller and the rules

use thiserror::Error;

/// Errors returned by the dice engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Input does not match `[count]d<sides>[+/-modifier]`
    #[error("invalid dice notation '{input}': expected [count]d<sides>[+/-modifier], e.g. 2d6+4")]
    Notation { input: String },

    /// A numeric value is outside its allowed domain
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl DiceError {
    pub(crate) fn notation(input: &str) -> Self {
        DiceError::Notation {
            input: input.to_string(),
        }
    }

    /// True if the input text itself was malformed
    pub fn is_notation(&self) -> bool {
        matches!(self, DiceError::Notation { .. })
    }
}

/// Out-of-domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("dice count must be at least 1 (got {0})")]
    TooFewDice(u32),

    #[error("dice count must be at most {max} (got {count})")]
    TooManyDice { count: String, max: u32 },

    #[error("die sides must be at least 2 (got {0})")]
    TooFewSides(u32),

    #[error("die sides must be at most {max} (got {sides})")]
    TooManySides { sides: String, max: u32 },

    #[error("modifier {0} is out of range")]
    ModifierOverflow(String),

    #[error("level must be between 1 and 20 (got {0})")]
    Level(i64),

    #[error("ability score count must be at most {max} (got {count})")]
    TooManyScores { count: usize, max: usize },

    #[error("fate rating {0} is out of range")]
    FateRatingOverflow(String),

    #[error("unrecognized fate rating '{0}': use an integer or a ladder adjective such as 'good' or 'poor'")]
    FateRating(String),
}
