use crate::encoding::StateKey;
use crate::solver::operator::Operator;

/// How a state was first produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// A single die, taken as-is
    Leaf(u64),
    /// Two earlier states with disjoint masks, combined under `op`
    Node {
        left: StateKey,
        op: Operator,
        right: StateKey,
    },
}
