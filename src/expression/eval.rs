use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluate with the same exact unsigned arithmetic the search uses.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero or a division that leaves a remainder
    /// - A subtraction whose result would be negative
    /// - An addition or multiplication that overflows `u64`
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        let result = match self {
            Expression::Die(v) => Ok(*v),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_add(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left
                    .checked_sub(right)
                    .ok_or(ExpressionError::NegativeResult(left, right))
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_mul(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0 {
                    Err(ExpressionError::DivisionByZero)
                } else if left % right != 0 {
                    Err(ExpressionError::InexactDivision(left, right))
                } else {
                    Ok(left / right)
                }
            }
        };

        if let Err(e) = &result {
            debug!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}
