// src/solver/induction.rs

use super::transition;
use super::{DecisionMap, Solution};
use crate::error::PlanResult;
use crate::model::config::Scenario;
use crate::model::cost::CostModel;
use crate::model::state::{State, StateSpace};

/// Bottom-up solve: iterate `t` from the last period down to zero and fill
/// a dense value table per period from the one after it. Behaviorally
/// identical to the memoized recursion (same recurrence, same ascending
/// candidate order, same strict-improvement tie-break) with flat stack
/// usage regardless of horizon length.
pub(super) fn solve(scenario: &Scenario) -> PlanResult<Solution> {
    let costs = CostModel::new(scenario.costs);
    let space = StateSpace::new(scenario);
    // Admission ran before us; the per-period count fits a usize.
    let per_period = space.states_per_period() as usize;

    // Value row for t+1; the terminal row is all zeros.
    let mut future = vec![0.0f64; per_period];
    let mut best_order = vec![0u32; scenario.horizon * per_period];

    for t in (0..scenario.horizon).rev() {
        let mut current = vec![0.0f64; per_period];
        for code in 0..per_period {
            let state = space.decode(code);
            let mut best = f64::INFINITY;
            let mut best_q = 0;
            for q in transition::candidates(scenario, t, state.on_hand) {
                let step = transition::apply(scenario, &costs, t, &state, q);
                let next_code = space.encode(&step.next)?;
                let total = step.cost.total() + future[next_code];
                if total < best {
                    best = total;
                    best_q = q;
                }
            }
            current[code] = best;
            best_order[t * per_period + code] = best_q;
        }
        future = current;
    }

    let initial_code = space.encode(&State::initial(scenario))?;
    Ok(Solution {
        minimal_cost: future[initial_code],
        decisions: DecisionMap::Table {
            space,
            states_per_period: per_period,
            best_order,
        },
    })
}
