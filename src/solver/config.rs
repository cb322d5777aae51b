/// Configuration for a single target search
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Only accept expressions that consume every die
    pub require_all_dice: bool,
    /// Stop and report no solution once the memo table holds more states than this
    pub max_states: Option<usize>,
}
