// src/solver/rollout.rs

use super::transition;
use crate::error::{PlanError, PlanResult};
use crate::model::config::Scenario;
use crate::model::cost::CostModel;
use crate::model::report::{PlanOutcome, ScheduleEntry};
use crate::model::state::State;
use crate::strategy::traits::OrderPolicy;

/// Forward walk of exactly `horizon` periods from the initial state,
/// applying one policy decision per period and emitting one schedule entry
/// each. This is both the backtracking step for the optimal policy (the
/// decision map replayed against the transition function) and the
/// simulator for baseline policies. Pure: the same policy and scenario
/// always reproduce the same schedule.
pub fn roll_forward(scenario: &Scenario, policy: &mut dyn OrderPolicy) -> PlanResult<PlanOutcome> {
    let costs = CostModel::new(scenario.costs);
    let mut state = State::initial(scenario);
    let mut schedule = Vec::with_capacity(scenario.horizon);

    for t in 0..scenario.horizon {
        let q = policy.order_quantity(t, &state, scenario)?;
        let step = transition::apply(scenario, &costs, t, &state, q);

        if step.end_inventory > scenario.max_storage {
            return Err(PlanError::InternalInvariantViolation(format!(
                "period {t} ended with {} units against capacity {}",
                step.end_inventory, scenario.max_storage
            )));
        }

        schedule.push(ScheduleEntry {
            period: t,
            start_inventory: step.start_inventory,
            order_qty: q,
            arrival_qty: step.arrival_qty,
            emergency_qty: step.emergency_qty,
            end_inventory: step.end_inventory,
            period_cost: step.cost.total(),
        });
        state = step.next;
    }

    // Accumulate back to front so the sum associates exactly like the
    // value-function recurrence does.
    let total_cost = schedule
        .iter()
        .rev()
        .fold(0.0, |acc, entry| entry.period_cost + acc);

    Ok(PlanOutcome {
        total_cost,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::CostRates;

    /// Fixed order every period, for exercising the rollout in isolation.
    struct FixedOrder(u32);

    impl OrderPolicy for FixedOrder {
        fn order_quantity(
            &mut self,
            _t: usize,
            _state: &State,
            _scenario: &Scenario,
        ) -> PlanResult<u32> {
            Ok(self.0)
        }
    }

    fn scenario() -> Scenario {
        Scenario {
            horizon: 3,
            demand: vec![4, 4, 4],
            initial_inventory: 2,
            max_storage: 10,
            lead_time: 0,
            decision_step: 1,
            costs: CostRates {
                order_fixed: 10.0,
                order_unit: 1.0,
                storage: 1.0,
                emergency_fixed: 50.0,
                emergency_unit: 5.0,
            },
        }
    }

    #[test]
    fn emits_one_entry_per_period_in_order() {
        let s = scenario();
        let outcome = roll_forward(&s, &mut FixedOrder(4)).unwrap();
        assert_eq!(outcome.schedule.len(), 3);
        for (t, entry) in outcome.schedule.iter().enumerate() {
            assert_eq!(entry.period, t);
        }
    }

    #[test]
    fn inventory_chains_across_periods() {
        let s = scenario();
        let outcome = roll_forward(&s, &mut FixedOrder(6)).unwrap();
        // 2+6-4=4, 4+6-4=6, 6+6-4=8
        let ends: Vec<u32> = outcome.schedule.iter().map(|e| e.end_inventory).collect();
        assert_eq!(ends, vec![4, 6, 8]);
        assert_eq!(outcome.schedule[1].start_inventory, 4);
    }

    #[test]
    fn total_matches_entry_sum() {
        let s = scenario();
        let outcome = roll_forward(&s, &mut FixedOrder(4)).unwrap();
        let sum: f64 = outcome.schedule.iter().rev().fold(0.0, |a, e| e.period_cost + a);
        assert_eq!(outcome.total_cost, sum);
    }

    #[test]
    fn rollout_is_restartable() {
        let s = scenario();
        let a = roll_forward(&s, &mut FixedOrder(5)).unwrap();
        let b = roll_forward(&s, &mut FixedOrder(5)).unwrap();
        assert_eq!(a.schedule, b.schedule);
        assert_eq!(a.total_cost, b.total_cost);
    }
}
