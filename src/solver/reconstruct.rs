use crate::encoding::StateKey;
use crate::expression::Expression;
use crate::solver::errors::SolverError;
use crate::solver::operator::Operator;
use crate::solver::provenance::Provenance;
use crate::solver::search::MemoTable;

/// Rebuild the expression that produced `key` by walking its provenance.
///
/// Recursion depth is bounded by the number of dice in the expression.
pub(crate) fn reconstruct(memo: &MemoTable, key: StateKey) -> Result<Expression, SolverError> {
    match memo.get(&key).ok_or(SolverError::MissingState(key))? {
        Provenance::Leaf(value) => Ok(Expression::Die(*value)),
        Provenance::Node { left, op, right } => {
            let left = reconstruct(memo, *left)?;
            let right = reconstruct(memo, *right)?;
            Ok(combine(*op, left, right))
        }
    }
}

/// Reversed operators were computed as `right op left`, so their operands swap back
fn combine(op: Operator, left: Expression, right: Expression) -> Expression {
    let (l, r) = if op.is_reversed() {
        (Box::new(right), Box::new(left))
    } else {
        (Box::new(left), Box::new(right))
    };

    match op {
        Operator::Add => Expression::Add(l, r),
        Operator::Sub | Operator::SubReversed => Expression::Sub(l, r),
        Operator::Mul => Expression::Mul(l, r),
        Operator::Div | Operator::DivReversed => Expression::Div(l, r),
    }
}
