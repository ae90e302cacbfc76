// src/solver/transition.rs

use crate::model::config::Scenario;
use crate::model::cost::{CostBreakdown, CostModel};
use crate::model::state::State;

/// Everything that happens to one state in one period under one decision:
/// the realized quantities, the period cost and the successor state.
#[derive(Debug, Clone)]
pub struct Step {
    /// On-hand stock plus the pipeline quantity arriving this period.
    pub start_inventory: u32,
    /// Units received this period: the pipeline head, or the order itself
    /// when lead time is zero.
    pub arrival_qty: u32,
    /// Residual shortfall, covered at premium rates. Always fulfillable by
    /// modeling assumption.
    pub emergency_qty: u32,
    /// Stock carried into the next period, capped at storage capacity.
    pub end_inventory: u32,
    pub cost: CostBreakdown,
    pub next: State,
}

/// Applies the period recurrence to `(state, q)` for period `t`.
///
/// The capacity cap is enforced on end-of-period inventory only: goods that
/// arrive and are consumed within the period never touch the warehouse, so
/// the transient `available` quantity may exceed `max_storage`.
pub fn apply(scenario: &Scenario, costs: &CostModel, t: usize, state: &State, q: u32) -> Step {
    let demand = scenario.demand[t];
    let lead_free = scenario.lead_time == 0;

    let start_inventory = state.on_hand + state.arriving();
    let available = start_inventory + if lead_free { q } else { 0 };

    let emergency_qty = demand.saturating_sub(available);
    let end_inventory = available.saturating_sub(demand).min(scenario.max_storage);

    // Shift the pipeline one slot and append the fresh order at the tail.
    let mut pipeline = Vec::with_capacity(scenario.lead_time);
    pipeline.extend_from_slice(state.pipeline.get(1..).unwrap_or(&[]));
    if !lead_free {
        pipeline.push(q);
    }

    Step {
        start_inventory,
        arrival_qty: if lead_free { q } else { state.arriving() },
        emergency_qty,
        end_inventory,
        cost: costs.period(q, end_inventory, emergency_qty),
        next: State {
            on_hand: end_inventory,
            pipeline,
        },
    }
}

/// Upper bound on the regular order worth evaluating from a state.
///
/// An order placed at `t` arrives at `t + lead_time`; past the horizon it
/// can never be received, so nothing is enumerated. Within the horizon the
/// bound is the per-shipment receiving limit (one delivery cannot exceed
/// warehouse capacity), tightened for zero lead time by the theoretical
/// maximum of meeting this period's demand and filling storage.
pub fn max_order(scenario: &Scenario, t: usize, on_hand: u32) -> u32 {
    if t + scenario.lead_time >= scenario.horizon {
        return 0;
    }
    if scenario.lead_time == 0 {
        // on_hand never exceeds max_storage for a reachable state. Demand
        // can be any u32, so the sum saturates; the receiving limit caps
        // the result anyway.
        let theoretical = scenario.demand[t].saturating_add(scenario.max_storage - on_hand);
        theoretical.min(scenario.max_storage)
    } else {
        scenario.max_storage
    }
}

/// Candidate order quantities for a state: multiples of `decision_step`
/// from zero up to [`max_order`]. Emergency coverage is never a candidate;
/// it is the residual computed by [`apply`].
pub fn candidates(
    scenario: &Scenario,
    t: usize,
    on_hand: u32,
) -> impl Iterator<Item = u32> + '_ {
    let cap = max_order(scenario, t, on_hand);
    (0..=cap).step_by(scenario.decision_step as usize)
}
