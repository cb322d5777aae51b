//! Sacred Geometry - find an arithmetic expression over rolled dice that hits a target
//!
//! Each die may be used at most once and dice are combined with `+`, `-`, `×`
//! and `÷` over non-negative integers, with division only when it is exact.
//! The search is breadth-first over `(value, consumed dice)` states, so the
//! first derivation recorded for any state uses as few operations as possible.

pub mod encoding;
pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use encoding::{DieMask, StateKey};
pub use expression::{Expression, ExpressionError};
pub use solver::{ExpressionSolver, SearchOutcome, Solution, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_dice};

/// Find an expression over `dice` that evaluates to `target`
///
/// This is a convenience function that validates the dice, creates a default
/// solver and runs a single search.
///
/// # Errors
///
/// This function will return an error if:
/// * There are no dice, or more than `utils::MAX_DICE`
/// * Any die is zero
///
/// # Examples
///
/// ```
/// use sacred_geometry::{SearchOutcome, find_expression};
///
/// match find_expression(&[3, 5, 7], 15) {
///     Ok(SearchOutcome::Found(solution)) => println!("{}", solution),
///     Ok(SearchOutcome::NotFound) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression(dice: &[u64], target: i64) -> Result<SearchOutcome, SolverError> {
    validate_dice(dice)?;

    let solver = ExpressionSolver::new();
    solver.search(dice, target)
}
