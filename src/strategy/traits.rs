// src/strategy/traits.rs

use crate::error::PlanResult;
use crate::model::config::Scenario;
use crate::model::state::State;

/// Decides the regular order quantity for the current period.
///
/// The forward rollout drives implementations one period at a time; the
/// emergency quantity is never part of the decision, it falls out of the
/// transition as the residual shortfall.
pub trait OrderPolicy {
    fn order_quantity(&mut self, t: usize, state: &State, scenario: &Scenario) -> PlanResult<u32>;
}
