//! Advantage and disadvantage: roll two d20s, keep one

use serde::Serialize;
use std::fmt;

use crate::dice::{evaluate, DiceSpec, DieSource};

/// Which of the two d20s is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Keep the higher roll
    Advantage,
    /// Keep the lower roll
    Disadvantage,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Advantage => write!(f, "Advantage"),
            Edge::Disadvantage => write!(f, "Disadvantage"),
        }
    }
}

/// Two d20 rolls and the one that was kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeRoll {
    pub edge: Edge,
    pub first: u32,
    pub second: u32,
    pub result: u32,
}

/// Roll two independent d20s and keep one according to `edge`
pub fn roll_with_edge<S: DieSource + ?Sized>(edge: Edge, source: &mut S) -> EdgeRoll {
    let first = evaluate(DiceSpec::D20, source).rolls[0];
    let second = evaluate(DiceSpec::D20, source).rolls[0];
    let result = match edge {
        Edge::Advantage => first.max(second),
        Edge::Disadvantage => first.min(second),
    };

    EdgeRoll {
        edge,
        first,
        second,
        result,
    }
}

pub fn roll_advantage<S: DieSource + ?Sized>(source: &mut S) -> EdgeRoll {
    roll_with_edge(Edge::Advantage, source)
}

pub fn roll_disadvantage<S: DieSource + ?Sized>(source: &mut S) -> EdgeRoll {
    roll_with_edge(Edge::Disadvantage, source)
}
