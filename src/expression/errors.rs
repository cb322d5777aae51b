use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Inexact division: {0} is not a multiple of {1}")]
    InexactDivision(u64, u64),
    #[error("Negative intermediate result: {0} - {1}")]
    NegativeResult(u64, u64),
    #[error("Arithmetic overflow")]
    Overflow,
}
