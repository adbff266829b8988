use derive_more::{Display, Error};

use crate::quantity::power::Megawatts;

/// Failure of a production plan computation.
#[derive(Debug, Display, Error)]
pub enum PlanError {
    /// The request is malformed or lacks a price the fleet depends on.
    #[display("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// Even the whole fleet at full output cannot deliver the load.
    #[display(
        "no solution found for the given load and fleet: {load} requested, {capacity} available"
    )]
    Infeasible { load: Megawatts, capacity: Megawatts },

    /// The allocator reached a state its own loop condition should have ruled out.
    #[display("internal invariant violated: {reason}")]
    Invariant { reason: &'static str },
}

impl PlanError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration { reason: reason.into() }
    }

    /// Input errors are the caller's to fix, the rest are defects.
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Infeasible { .. })
    }
}
