//! Built-in demo scenario: three vehicles, two rentals

use rental_domain::model::{RentalRequest, Scenario, Vehicle};
use rental_domain::repository::ScenarioRepository;
use rental_types::Error;

pub fn demo_scenario() -> Scenario {
    Scenario {
        vehicles: vec![
            Vehicle::car("Toyota", "Corolla", 2022, "ABC123", 50.0),
            Vehicle::motorcycle("Honda", "CBR600", 2021, "XYZ789", 30.0, 600),
            Vehicle::truck("Ford", "Ranger", 2023, "DEF456", 70.0, 1200.0),
        ],
        rentals: vec![
            RentalRequest::new("ABC123", "John Smith", 5, 1200.0),
            RentalRequest::new("XYZ789", "Mary Jones", 3, 600.0),
        ],
    }
}

/// Serves [`demo_scenario`]
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoScenarioRepository;

impl ScenarioRepository for DemoScenarioRepository {
    fn load_scenario(&self) -> Result<Scenario, Error> {
        Ok(demo_scenario())
    }
}
