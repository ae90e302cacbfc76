// src/error.rs

use thiserror::Error;

/// Errors produced by scenario validation and the solve pipeline.
///
/// None of these are retryable: the computation is deterministic, so the
/// same input fails the same way every time.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The scenario failed the pre-solve validation pass. The core never
    /// silently clamps bad configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The configured bounds imply more states than the solver is willing
    /// to allocate. Reported before any table is built, with the dimension
    /// that dominates the blow-up.
    #[error("state space too large: {states} states (limit {limit}), dominated by {dimension}")]
    StateSpaceTooLarge {
        states: u128,
        limit: u128,
        dimension: &'static str,
    },

    /// A transition or lookup produced a state that should be impossible.
    /// This is a logic defect, not a user error; aborting loudly beats
    /// returning a plausible-looking wrong schedule.
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}

/// Result alias used throughout the crate.
pub type PlanResult<T> = Result<T, PlanError>;
