//! Fleet plus rental requests, as fed in by a driver

use serde::{Deserialize, Serialize};

use super::rental::RentalRequest;
use super::vehicle::Vehicle;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    /// Processed in order
    #[serde(default)]
    pub rentals: Vec<RentalRequest>,
}
