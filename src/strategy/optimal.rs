// src/strategy/optimal.rs

use super::traits::OrderPolicy;
use crate::error::PlanResult;
use crate::model::config::Scenario;
use crate::model::state::State;
use crate::solver::Solution;

/// Replays the decision map recorded by the solver. Rolling this policy
/// forward from the initial state is the backtracking step: it yields the
/// concrete schedule behind the minimal cost.
pub struct OptimalPolicy<'a> {
    solution: &'a Solution,
}

impl<'a> OptimalPolicy<'a> {
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }
}

impl OrderPolicy for OptimalPolicy<'_> {
    fn order_quantity(&mut self, t: usize, state: &State, _scenario: &Scenario) -> PlanResult<u32> {
        self.solution.decisions.decision(t, state)
    }
}
