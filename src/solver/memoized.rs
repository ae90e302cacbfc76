// src/solver/memoized.rs

use super::transition;
use super::{DecisionMap, Solution};
use crate::error::PlanResult;
use crate::model::config::Scenario;
use crate::model::cost::CostModel;
use crate::model::state::State;
use std::collections::HashMap;

/// Top-down solve: recursive evaluation of the value function with a
/// write-once cache keyed by `(period, state)`. Only reachable states are
/// ever evaluated, which keeps the cache far below the dense grid size for
/// lead-time scenarios. Recursion depth is bounded by the horizon.
pub(super) fn solve(scenario: &Scenario) -> PlanResult<Solution> {
    let mut solver = Memoized {
        scenario,
        costs: CostModel::new(scenario.costs),
        values: HashMap::new(),
        decisions: HashMap::new(),
    };

    let minimal_cost = solver.value(0, &State::initial(scenario));
    Ok(Solution {
        minimal_cost,
        decisions: DecisionMap::Memoized(solver.decisions),
    })
}

struct Memoized<'a> {
    scenario: &'a Scenario,
    costs: CostModel,
    values: HashMap<(usize, State), f64>,
    decisions: HashMap<(usize, State), u32>,
}

impl Memoized<'_> {
    /// Minimal remaining cost from `state` at period `t` to the horizon.
    ///
    /// Candidates are evaluated in ascending order with strict improvement,
    /// so ties resolve to the lowest order quantity. That rule is what
    /// makes reconstructed schedules reproducible across runs and across
    /// the two solve strategies.
    fn value(&mut self, t: usize, state: &State) -> f64 {
        if t == self.scenario.horizon {
            return 0.0;
        }
        let key = (t, state.clone());
        if let Some(&v) = self.values.get(&key) {
            return v;
        }

        let mut best = f64::INFINITY;
        let mut best_q = 0;
        for q in transition::candidates(self.scenario, t, state.on_hand) {
            let step = transition::apply(self.scenario, &self.costs, t, state, q);
            let total = step.cost.total() + self.value(t + 1, &step.next);
            if total < best {
                best = total;
                best_q = q;
            }
        }

        self.values.insert(key.clone(), best);
        self.decisions.insert(key, best_q);
        best
    }
}
