// src/solver/mod.rs

pub mod induction;
pub mod memoized;
pub mod rollout;
pub mod transition;

use crate::error::{PlanError, PlanResult};
use crate::model::config::Scenario;
use crate::model::state::{State, StateSpace};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Hard ceiling on the number of DP states a configuration may imply.
/// Checked before any table or cache is allocated.
pub const MAX_STATES: u128 = 16_000_000;

/// The two equivalent solve strategies. Both produce the same minimal cost
/// and the same reconstructed schedule for a given scenario; the induction
/// form keeps stack usage flat for long horizons, the memoized form only
/// touches reachable states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStrategy {
    /// Top-down recursion with a write-once cache per `(period, state)`.
    Memoized,
    /// Bottom-up backward induction over the dense state grid.
    BackwardInduction,
}

/// Optimal decision per state, recorded during the solve and consumed by
/// the schedule reconstruction.
pub enum DecisionMap {
    Memoized(HashMap<(usize, State), u32>),
    Table {
        space: StateSpace,
        states_per_period: usize,
        best_order: Vec<u32>,
    },
}

impl DecisionMap {
    /// Looks up the recorded optimal order for a state reached during
    /// reconstruction. A miss means the forward walk produced a state the
    /// solve never saw, which is a logic defect.
    pub fn decision(&self, t: usize, state: &State) -> PlanResult<u32> {
        match self {
            DecisionMap::Memoized(map) => {
                map.get(&(t, state.clone())).copied().ok_or_else(|| {
                    PlanError::InternalInvariantViolation(format!(
                        "no recorded decision for period {t}, state {state:?}"
                    ))
                })
            }
            DecisionMap::Table {
                space,
                states_per_period,
                best_order,
            } => {
                let code = space.encode(state)?;
                best_order
                    .get(t * states_per_period + code)
                    .copied()
                    .ok_or_else(|| {
                        PlanError::InternalInvariantViolation(format!(
                            "decision table has no entry for period {t}, code {code}"
                        ))
                    })
            }
        }
    }
}

/// Result of a solve: the value at the initial state plus the decision map
/// needed to reconstruct the schedule.
pub struct Solution {
    pub minimal_cost: f64,
    pub decisions: DecisionMap,
}

/// Runs the DP for a validated scenario.
pub fn solve(scenario: &Scenario, strategy: SolveStrategy) -> PlanResult<Solution> {
    scenario.validate()?;
    admit(scenario)?;

    let solution = match strategy {
        SolveStrategy::Memoized => memoized::solve(scenario),
        SolveStrategy::BackwardInduction => induction::solve(scenario),
    }?;

    debug!(
        strategy = ?strategy,
        minimal_cost = solution.minimal_cost,
        "solve finished"
    );
    Ok(solution)
}

/// Rejects configurations whose state grid would exceed [`MAX_STATES`],
/// naming the dimension that dominates the blow-up. Runs before anything
/// is allocated.
fn admit(scenario: &Scenario) -> PlanResult<()> {
    let space = StateSpace::new(scenario);
    let states = (scenario.horizon as u128 + 1) * space.states_per_period();

    debug!(
        %states,
        horizon = scenario.horizon,
        max_storage = scenario.max_storage,
        lead_time = scenario.lead_time,
        "state space sized"
    );

    if states > MAX_STATES {
        return Err(PlanError::StateSpaceTooLarge {
            states,
            limit: MAX_STATES,
            dimension: dominant_dimension(scenario),
        });
    }
    if states > MAX_STATES / 2 {
        warn!(%states, limit = %MAX_STATES, "state space close to the ceiling");
    }
    Ok(())
}

/// Lead time multiplies the grid by `(max_storage + 1)` per period of delay,
/// so it dominates whenever present; otherwise the larger of capacity and
/// horizon does.
fn dominant_dimension(scenario: &Scenario) -> &'static str {
    if scenario.lead_time >= 1 {
        "lead_time"
    } else if scenario.max_storage as usize >= scenario.horizon {
        "max_storage"
    } else {
        "horizon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::CostRates;

    fn scenario(max_storage: u32, lead_time: usize, horizon: usize) -> Scenario {
        Scenario {
            horizon,
            demand: vec![1; horizon],
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
    fn oversized_lead_time_is_rejected_with_dimension() {
        let s = scenario(100, 4, 10);
        match solve(&s, SolveStrategy::Memoized) {
            Err(PlanError::StateSpaceTooLarge { dimension, .. }) => {
                assert_eq!(dimension, "lead_time");
            }
            other => panic!("expected StateSpaceTooLarge, got {:?}", other.err()),
        }
    }

    #[test]
    fn oversized_capacity_is_rejected_with_dimension() {
        let s = scenario(40_000_000, 0, 2);
        match solve(&s, SolveStrategy::BackwardInduction) {
            Err(PlanError::StateSpaceTooLarge { dimension, .. }) => {
                assert_eq!(dimension, "max_storage");
            }
            other => panic!("expected StateSpaceTooLarge, got {:?}", other.err()),
        }
    }

    #[test]
    fn modest_configuration_is_admitted() {
        let s = scenario(30, 3, 12);
        assert!(admit(&s).is_ok());
    }
}
