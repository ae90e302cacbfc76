// src/model/cost.rs

use super::config::CostRates;
use serde::Serialize;

/// Per-period cost split into its three sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub ordering: f64,
    pub holding: f64,
    pub emergency: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.ordering + self.holding + self.emergency
    }
}

/// Pure cost functions over the configured rates. Quantities are unsigned,
/// so callers cannot hand in negative amounts.
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    rates: CostRates,
}

impl CostModel {
    pub fn new(rates: CostRates) -> Self {
        Self { rates }
    }

    /// Regular order: fixed fee plus unit price, nothing when no order.
    pub fn ordering(&self, q: u32) -> f64 {
        if q == 0 {
            0.0
        } else {
            self.rates.order_fixed + self.rates.order_unit * f64::from(q)
        }
    }

    /// Emergency order: same shape as a regular order, premium rates.
    pub fn emergency(&self, e: u32) -> f64 {
        if e == 0 {
            0.0
        } else {
            self.rates.emergency_fixed + self.rates.emergency_unit * f64::from(e)
        }
    }

    /// Holding cost on what is left in storage at the end of the period.
    /// The transition guarantees `end_inventory` fits in storage.
    pub fn holding(&self, end_inventory: u32) -> f64 {
        self.rates.storage * f64::from(end_inventory)
    }

    pub fn period(&self, q: u32, end_inventory: u32, e: u32) -> CostBreakdown {
        CostBreakdown {
            ordering: self.ordering(q),
            holding: self.holding(end_inventory),
            emergency: self.emergency(e),
        }
    }
}
