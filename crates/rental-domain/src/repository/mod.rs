//! Repository trait definitions for scenario input

use rental_types::Error;

use crate::model::{Scenario, Vehicle};

/// Source of a fleet and the rentals to perform against it
pub trait ScenarioRepository {
    /// Load the whole scenario
    fn load_scenario(&self) -> Result<Scenario, Error>;

    /// Load only the fleet
    fn load_fleet(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.load_scenario()?.vehicles)
    }
}
