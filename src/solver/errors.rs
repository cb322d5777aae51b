use thiserror::Error;

use crate::encoding::StateKey;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Cannot address {count} dice with a {max}-bit mask")]
    TooManyDice { count: usize, max: usize },
    #[error("State {0} is missing from the search trace")]
    MissingState(StateKey),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
