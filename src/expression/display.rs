use std::fmt;

use crate::expression::ast::Expression;

const ADD: &str = "+";
const SUB: &str = "-";
const MUL: &str = "×";
const DIV: &str = "÷";

fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression, wrap: bool) -> fmt::Result {
    let (l, symbol, r) = match expr {
        Expression::Die(v) => return write!(f, "{}", v),
        Expression::Add(l, r) => (l, ADD, r),
        Expression::Sub(l, r) => (l, SUB, r),
        Expression::Mul(l, r) => (l, MUL, r),
        Expression::Div(l, r) => (l, DIV, r),
    };

    if wrap {
        write!(f, "(")?;
    }
    fmt_expression(f, l, true)?;
    write!(f, " {} ", symbol)?;
    fmt_expression(f, r, true)?;
    if wrap {
        write!(f, ")")?;
    }
    Ok(())
}

/// Expression with its outermost parentheses stripped
pub struct Rendered<'a>(&'a Expression);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_expression(f, self.0, false)
    }
}

impl Expression {
    /// Display form used for final output: every combination is parenthesized
    /// except the outermost one.
    pub fn render(&self) -> Rendered<'_> {
        Rendered(self)
    }
}

/// Fully parenthesized infix form
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_expression(f, self, true)
    }
}
