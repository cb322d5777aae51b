/// Arithmetic expression over dice, as rebuilt from a search trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Die(u64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Number of dice the expression consumes
    pub fn die_count(&self) -> usize {
        match self {
            Expression::Die(_) => 1,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => l.die_count() + r.die_count(),
        }
    }
}
