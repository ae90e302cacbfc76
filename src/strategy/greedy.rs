// src/strategy/greedy.rs

use super::traits::OrderPolicy;
use crate::error::PlanResult;
use crate::model::config::Scenario;
use crate::model::state::State;
use crate::solver::transition;

/// Non-optimizing reference policy: order exactly this period's net need,
/// `max(0, demand - (on hand + arriving))`, clamped to the same order cap
/// the enumerator uses. It never plans for emergencies; with a positive
/// lead time (or a binding capacity cap) the transition still produces
/// them, which is the honest cost of ordering greedily.
#[derive(Debug, Clone, Copy)]
pub struct GreedyPolicy;

impl OrderPolicy for GreedyPolicy {
    fn order_quantity(&mut self, t: usize, state: &State, scenario: &Scenario) -> PlanResult<u32> {
        let available = state.on_hand + state.arriving();
        let need = scenario.demand[t].saturating_sub(available);
        Ok(need.min(transition::max_order(scenario, t, state.on_hand)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::CostRates;

    fn scenario(lead_time: usize) -> Scenario {
        Scenario {
            horizon: 3,
            demand: vec![10, 4, 4],
            initial_inventory: 6,
            max_storage: 8,
            lead_time,
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
    fn orders_net_need_only() {
        let s = scenario(0);
        let mut policy = GreedyPolicy;
        let state = State {
            on_hand: 6,
            pipeline: vec![],
        };
        assert_eq!(policy.order_quantity(0, &state, &s).unwrap(), 4);
    }

    #[test]
    fn counts_arriving_pipeline_as_available() {
        let s = scenario(1);
        let mut policy = GreedyPolicy;
        let state = State {
            on_hand: 2,
            pipeline: vec![5],
        };
        // demand 10, available 7 => need 3
        assert_eq!(policy.order_quantity(0, &state, &s).unwrap(), 3);
    }

    #[test]
    fn respects_the_receiving_cap() {
        let mut s = scenario(0);
        s.demand[0] = 30;
        let mut policy = GreedyPolicy;
        let state = State {
            on_hand: 0,
            pipeline: vec![],
        };
        // wants 30, cap is max_storage = 8
        assert_eq!(policy.order_quantity(0, &state, &s).unwrap(), 8);
    }

    #[test]
    fn never_orders_past_the_horizon() {
        let s = scenario(2);
        let mut policy = GreedyPolicy;
        let state = State {
            on_hand: 0,
            pipeline: vec![0, 0],
        };
        // t=1 + lead 2 arrives after the horizon
        assert_eq!(policy.order_quantity(1, &state, &s).unwrap(), 0);
    }
}
