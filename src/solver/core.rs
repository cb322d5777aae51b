use log::{debug, info};
use rayon::prelude::*;

use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::outcome::{SearchOutcome, Solution};
use crate::solver::reconstruct::reconstruct;
use crate::solver::search::Search;

/// Main solver for finding dice expressions that reach a target value
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    /// Create a solver with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for an expression over `dice`, each die used at most once,
    /// that evaluates to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more dice than a state mask can address.
    pub fn search(&self, dice: &[u64], target: i64) -> Result<SearchOutcome, SolverError> {
        let Ok(goal) = u64::try_from(target) else {
            debug!("Target {} is negative and cannot be reached", target);
            return Ok(SearchOutcome::NotFound);
        };

        info!("Searching for {} using dice {:?}", target, dice);
        let mut search = Search::new(dice, goal, &self.config)?;
        let found = search.run();
        let stats = search.stats();
        info!(
            "Search for {} finished: {} states, {} expansions{}",
            target,
            stats.states,
            stats.expansions,
            if stats.budget_exhausted {
                " (budget exhausted)"
            } else {
                ""
            }
        );

        let Some(state) = found else {
            return Ok(SearchOutcome::NotFound);
        };

        let expression = reconstruct(search.memo(), state)?;
        debug!(
            "Reconstructed {} evaluates to {:?}",
            expression,
            expression.evaluate()
        );

        Ok(SearchOutcome::Found(Solution {
            target: goal,
            state,
            expression,
        }))
    }

    /// Try each target and return the solution for the earliest one, in
    /// `targets` order, that can be reached.
    ///
    /// Targets are searched in parallel; each search owns its own state.
    ///
    /// # Errors
    ///
    /// Returns the first error, in `targets` order, from an individual search.
    pub fn solve_targets(
        &self,
        dice: &[u64],
        targets: &[i64],
    ) -> Result<Option<Solution>, SolverError> {
        targets
            .par_iter()
            .find_map_first(|&target| match self.search(dice, target) {
                Ok(SearchOutcome::Found(solution)) => Some(Ok(solution)),
                Ok(SearchOutcome::NotFound) => None,
                Err(e) => Some(Err(e)),
            })
            .transpose()
    }
}
