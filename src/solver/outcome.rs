use std::fmt;

use crate::encoding::StateKey;
use crate::expression::Expression;

/// An expression reaching the target, with the state it was found as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub target: u64,
    pub state: StateKey,
    pub expression: Expression,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.expression.render())
    }
}

/// Result of one target search; `NotFound` is an ordinary answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Solution),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct states recorded in the memo table
    pub states: usize,
    /// Frontier entries taken as a left operand
    pub expansions: usize,
    pub budget_exhausted: bool,
}
