//! Cost breakdown snapshot

use serde::{Deserialize, Serialize};

/// Computed price of one rental. Never changes after it is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// daily rate × days
    pub base_cost: f64,
    /// Extra-kilometer charge plus surcharge
    pub extra_cost: f64,
    /// Surcharge part of `extra_cost`
    pub surcharge: f64,
    pub total: f64,
    pub days: u32,
    /// Kilometers beyond the allowance
    pub extra_km: f64,
}
