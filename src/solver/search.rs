use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use log::{debug, warn};

use crate::encoding::{DieMask, MAX_MASK_BITS, StateKey};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::operator::Operator;
use crate::solver::outcome::SearchStats;
use crate::solver::provenance::Provenance;

/// Memo table mapping every discovered state to how it was first built
pub(crate) type MemoTable = HashMap<StateKey, Provenance>;

/// The state that ends the search
#[derive(Debug, Clone, Copy)]
struct Goal {
    value: u64,
    mask: Option<DieMask>,
}

impl Goal {
    fn matches(self, key: StateKey) -> bool {
        key.value() == self.value && self.mask.is_none_or(|mask| key.mask() == mask)
    }
}

/// Breadth-first combination search for one `(dice, target)` pair.
///
/// Owns the memo table and the frontier; both live only as long as the search.
#[derive(Debug)]
pub(crate) struct Search<'a> {
    dice: &'a [u64],
    goal: Goal,
    max_states: Option<usize>,
    memo: MemoTable,
    /// Memo keys in insertion order, so snapshots are a length
    discovered: Vec<StateKey>,
    frontier: VecDeque<StateKey>,
    found: Option<StateKey>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    pub(crate) fn new(
        dice: &'a [u64],
        target: u64,
        config: &SolverConfig,
    ) -> Result<Self, SolverError> {
        let too_many = || SolverError::TooManyDice {
            count: dice.len(),
            max: MAX_MASK_BITS,
        };
        let all_dice = DieMask::full(dice.len()).ok_or_else(too_many)?;

        Ok(Self {
            dice,
            goal: Goal {
                value: target,
                mask: config.require_all_dice.then_some(all_dice),
            },
            max_states: config.max_states,
            memo: MemoTable::with_capacity(dice.len()),
            discovered: Vec::with_capacity(dice.len()),
            frontier: VecDeque::with_capacity(dice.len()),
            found: None,
            stats: SearchStats::default(),
        })
    }

    /// Run until the goal state is recorded or the frontier runs dry.
    ///
    /// Returns the key of the goal state when one was found.
    pub(crate) fn run(&mut self) -> Option<StateKey> {
        self.seed();

        while self.found.is_none() {
            if self.over_budget() {
                warn!(
                    "State budget exceeded ({} states), giving up on target {}",
                    self.memo.len(),
                    self.goal.value
                );
                self.stats.budget_exhausted = true;
                break;
            }
            let Some(left) = self.frontier.pop_front() else {
                break;
            };
            self.expand(left);
        }

        self.stats.states = self.memo.len();
        self.found
    }

    fn seed(&mut self) {
        let dice = self.dice;
        for (index, &value) in dice.iter().enumerate() {
            if let Some(mask) = DieMask::single(index) {
                self.record(StateKey::encode(value, mask), Provenance::Leaf(value));
            }
        }
    }

    /// Combine `left` with every disjoint state known before this step
    fn expand(&mut self, left: StateKey) {
        self.stats.expansions += 1;
        let (lv, lmask) = left.decode();
        let snapshot = self.discovered.len();
        debug!("Expanding {} against {} states", left, snapshot);

        for index in 0..snapshot {
            let Some(&right) = self.discovered.get(index) else {
                break;
            };
            let (rv, rmask) = right.decode();
            if !lmask.is_disjoint(rmask) {
                continue;
            }

            let mask = lmask.union(rmask);
            for op in Operator::ALL {
                if let Some(value) = op.apply(lv, rv) {
                    self.record(
                        StateKey::encode(value, mask),
                        Provenance::Node { left, op, right },
                    );
                }
            }

            if self.over_budget() {
                return;
            }
        }
    }

    /// Insert a state unless already known; the first derivation is kept
    fn record(&mut self, key: StateKey, provenance: Provenance) {
        if let Entry::Vacant(slot) = self.memo.entry(key) {
            slot.insert(provenance);
            self.discovered.push(key);
            self.frontier.push_back(key);
            if self.found.is_none() && self.goal.matches(key) {
                debug!("Target state {} reached via {:?}", key, provenance);
                self.found = Some(key);
            }
        }
    }

    fn over_budget(&self) -> bool {
        self.max_states.is_some_and(|max| self.memo.len() > max)
    }

    pub(crate) fn memo(&self) -> &MemoTable {
        &self.memo
    }

    pub(crate) fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Recorded states with their provenance, in discovery order
    #[cfg(test)]
    pub(crate) fn records(&self) -> impl Iterator<Item = (StateKey, Provenance)> + '_ {
        self.discovered
            .iter()
            .filter_map(|key| self.memo.get(key).map(|provenance| (*key, *provenance)))
    }
}
