// src/model/config.rs

use crate::error::{PlanError, PlanResult};
use serde::Serialize;

/// Cost rates for a scenario. All rates are per-period and non-negative.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostRates {
    /// Fixed fee charged once per regular order (admin, shipping).
    pub order_fixed: f64,
    /// Price per regular unit.
    pub order_unit: f64,
    /// Holding cost per unit left in storage at the end of a period.
    pub storage: f64,
    /// Fixed fee charged once per emergency order.
    pub emergency_fixed: f64,
    /// Price per emergency unit (premium supplier).
    pub emergency_unit: f64,
}

/// A complete planning problem: horizon, known demand, capacity, lead time
/// and cost rates.
///
/// Quantities are unsigned on purpose, so negative demand, capacity or
/// lead time are unrepresentable. Everything else is checked by [`validate`],
/// which must pass before any solve is attempted.
///
/// [`validate`]: Scenario::validate
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    /// Number of planning periods T.
    pub horizon: usize,
    /// Demand per period, `demand.len() == horizon`.
    pub demand: Vec<u32>,
    /// On-hand stock at the start of period 0.
    pub initial_inventory: u32,
    /// Warehouse capacity. End-of-period inventory never exceeds this.
    pub max_storage: u32,
    /// Periods between placing a regular order and its arrival. Zero means
    /// orders are received the same period they are placed.
    pub lead_time: usize,
    /// Granularity of the order-quantity grid. 1 = exact integer units.
    pub decision_step: u32,
    pub costs: CostRates,
}

impl Scenario {
    /// Checks the scenario before solving. Returns the first problem found
    /// as an [`PlanError::InvalidConfiguration`]; nothing is ever clamped.
    pub fn validate(&self) -> PlanResult<()> {
        if self.horizon == 0 {
            return Err(invalid("horizon must be at least 1 period"));
        }
        if self.demand.len() != self.horizon {
            return Err(invalid(format!(
                "demand has {} entries but horizon is {}",
                self.demand.len(),
                self.horizon
            )));
        }
        if self.decision_step == 0 {
            return Err(invalid("decision_step must be a positive integer"));
        }
        if self.initial_inventory > self.max_storage {
            return Err(invalid(format!(
                "initial inventory {} exceeds storage capacity {}",
                self.initial_inventory, self.max_storage
            )));
        }

        for (name, rate) in [
            ("order_fixed", self.costs.order_fixed),
            ("order_unit", self.costs.order_unit),
            ("storage", self.costs.storage),
            ("emergency_fixed", self.costs.emergency_fixed),
            ("emergency_unit", self.costs.emergency_unit),
        ] {
            if !rate.is_finite() {
                return Err(invalid(format!("cost rate {name} is not finite")));
            }
            if rate < 0.0 {
                return Err(invalid(format!("cost rate {name} is negative ({rate})")));
            }
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> PlanError {
    PlanError::InvalidConfiguration(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn base_scenario() -> Scenario {
        Scenario {
            horizon: 3,
            demand: vec![10, 10, 10],
            initial_inventory: 5,
            max_storage: 20,
            lead_time: 0,
            decision_step: 1,
            costs: CostRates {
                order_fixed: 50.0,
                order_unit: 0.0,
                storage: 2.0,
                emergency_fixed: 100.0,
                emergency_unit: 20.0,
            },
        }
    }

    #[test]
    fn valid_scenario_passes() {
        assert!(base_scenario().validate().is_ok());
    }

    #[test]
    fn rejects_zero_horizon() {
        let mut s = base_scenario();
        s.horizon = 0;
        s.demand.clear();
        assert!(matches!(
            s.validate(),
            Err(PlanError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_demand_length_mismatch() {
        let mut s = base_scenario();
        s.demand.push(4);
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("demand"));
    }

    #[test]
    fn rejects_zero_decision_step() {
        let mut s = base_scenario();
        s.decision_step = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_initial_inventory_over_capacity() {
        let mut s = base_scenario();
        s.initial_inventory = 21;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_negative_and_nan_rates() {
        let mut s = base_scenario();
        s.costs.storage = -1.0;
        assert!(s.validate().is_err());

        let mut s = base_scenario();
        s.costs.emergency_unit = f64::NAN;
        assert!(s.validate().is_err());
    }
}
