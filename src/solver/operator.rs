use std::fmt;

/// The ways two disjoint states can be combined.
///
/// The reversed variants apply the operator as `right op left`, which lets a
/// fixed `(left, right)` pair cover both orderings of `-` and `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    SubReversed,
    Mul,
    Div,
    DivReversed,
}

impl Operator {
    /// Every operator, in the order the search tries them
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Sub,
        Operator::SubReversed,
        Operator::Mul,
        Operator::Div,
        Operator::DivReversed,
    ];

    /// Result of `left op right`, or `None` when it would be negative,
    /// fractional, a division by zero or out of `u64` range.
    pub fn apply(self, left: u64, right: u64) -> Option<u64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::SubReversed => right.checked_sub(left),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => exact_div(left, right),
            Operator::DivReversed => exact_div(right, left),
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Operator::SubReversed | Operator::DivReversed)
    }
}

#[inline]
fn exact_div(dividend: u64, divisor: u64) -> Option<u64> {
    if divisor != 0 && dividend % divisor == 0 {
        Some(dividend / divisor)
    } else {
        None
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::SubReversed => "-rev",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::DivReversed => "/rev",
        };
        write!(f, "{}", symbol)
    }
}
