// src/model/state.rs

use crate::error::{PlanError, PlanResult};
use crate::model::config::Scenario;

/// A solver state within one period: stock on hand plus the in-transit
/// pipeline. `pipeline[0]` arrives this period, `pipeline[L-1]` is the most
/// recently placed order. Lead time zero means an empty pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub on_hand: u32,
    pub pipeline: Vec<u32>,
}

impl State {
    /// The state at the start of period 0: configured on-hand stock and an
    /// empty pipeline (no orders predate the horizon).
    pub fn initial(scenario: &Scenario) -> Self {
        Self {
            on_hand: scenario.initial_inventory,
            pipeline: vec![0; scenario.lead_time],
        }
    }

    /// Pipeline quantity arriving this period, zero without lead time.
    pub fn arriving(&self) -> u32 {
        self.pipeline.first().copied().unwrap_or(0)
    }
}

/// Dense encoding of the reachable state grid for one period.
///
/// Every component of a reachable state is at most `max_storage` (end
/// inventory is clamped there, orders are capped there), so a state is a
/// fixed-width number with `lead_time + 1` digits in base `max_storage + 1`.
/// The backward-induction tables index by this code.
#[derive(Debug, Clone, Copy)]
pub struct StateSpace {
    base: u64,
    lead_time: usize,
}

impl StateSpace {
    pub fn new(scenario: &Scenario) -> Self {
        Self {
            base: u64::from(scenario.max_storage) + 1,
            lead_time: scenario.lead_time,
        }
    }

    /// States per period. u128 so absurd configurations report their size
    /// instead of overflowing.
    pub fn states_per_period(&self) -> u128 {
        u128::from(self.base).pow(self.lead_time as u32 + 1)
    }

    /// True iff every component fits the grid.
    pub fn contains(&self, state: &State) -> bool {
        state.pipeline.len() == self.lead_time
            && u64::from(state.on_hand) < self.base
            && state.pipeline.iter().all(|&p| u64::from(p) < self.base)
    }

    pub fn encode(&self, state: &State) -> PlanResult<usize> {
        if !self.contains(state) {
            return Err(PlanError::InternalInvariantViolation(format!(
                "state {state:?} outside grid (base {})",
                self.base
            )));
        }
        let mut code = u64::from(state.on_hand);
        for &p in &state.pipeline {
            code = code * self.base + u64::from(p);
        }
        Ok(code as usize)
    }

    pub fn decode(&self, mut code: usize) -> State {
        let base = self.base as usize;
        let mut pipeline = vec![0u32; self.lead_time];
        for slot in pipeline.iter_mut().rev() {
            *slot = (code % base) as u32;
            code /= base;
        }
        State {
            on_hand: code as u32,
            pipeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{CostRates, Scenario};

    fn scenario(max_storage: u32, lead_time: usize) -> Scenario {
        Scenario {
            horizon: 4,
            demand: vec![1; 4],
            initial_inventory: 0,
            max_storage,
            lead_time,
            decision_step: 1,
            costs: CostRates {
                order_fixed: 1.0,
                order_unit: 1.0,
                storage: 1.0,
                emergency_fixed: 1.0,
                emergency_unit: 1.0,
            },
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        let space = StateSpace::new(&scenario(7, 2));
        let state = State {
            on_hand: 5,
            pipeline: vec![7, 3],
        };
        let code = space.encode(&state).unwrap();
        assert_eq!(space.decode(code), state);
    }

    #[test]
    fn codes_cover_the_grid_exactly_once() {
        let space = StateSpace::new(&scenario(2, 1));
        let total = space.states_per_period() as usize;
        assert_eq!(total, 9);
        for code in 0..total {
            assert_eq!(space.encode(&space.decode(code)).unwrap(), code);
        }
    }

    #[test]
    fn encode_rejects_out_of_grid_state() {
        let space = StateSpace::new(&scenario(4, 1));
        let bad = State {
            on_hand: 5,
            pipeline: vec![0],
        };
        assert!(space.encode(&bad).is_err());
    }

    #[test]
    fn initial_state_has_empty_pipeline_values() {
        let s = scenario(10, 3);
        let init = State::initial(&s);
        assert_eq!(init.on_hand, 0);
        assert_eq!(init.pipeline, vec![0, 0, 0]);
        assert_eq!(init.arriving(), 0);
    }
}
