//! Drive a scenario through a fresh registry

use rental_domain::model::{RentalRequest, Scenario};
use tracing::{info, warn};

use super::rental_system::RentalSystem;

/// Registry state after a scenario ran, plus the requests that were refused
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub system: RentalSystem,
    pub failed: Vec<RentalRequest>,
}

/// Register the fleet, then attempt every rental in order.
/// A refused rental is logged and skipped.
pub fn run_scenario(scenario: Scenario) -> ScenarioOutcome {
    let mut system = RentalSystem::with_fleet(scenario.vehicles);
    let mut failed = Vec::new();

    for request in scenario.rentals {
        if !system.rent(request.clone()) {
            warn!(
                plate = %request.plate,
                customer = %request.customer,
                "vehicle unknown or already rented"
            );
            failed.push(request);
        }
    }

    info!(
        rentals = system.rentals().len(),
        failed = failed.len(),
        "scenario complete"
    );
    ScenarioOutcome { system, failed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_domain::model::Vehicle;

    #[test]
    fn test_refused_rentals_are_collected() {
        let scenario = Scenario {
            vehicles: vec![Vehicle::car("Toyota", "Corolla", 2022, "ABC123", 50.0)],
            rentals: vec![
                RentalRequest::new("ABC123", "First", 1, 0.0),
                RentalRequest::new("ABC123", "Second", 1, 0.0),
                RentalRequest::new("ZZZ999", "Third", 1, 0.0),
            ],
        };

        let outcome = run_scenario(scenario);
        assert_eq!(outcome.system.rentals().len(), 1);
        assert_eq!(outcome.system.rentals()[0].customer(), "First");
        let refused: Vec<_> = outcome.failed.iter().map(|r| r.customer.as_str()).collect();
        assert_eq!(refused, ["Second", "Third"]);
    }

    #[test]
    fn test_empty_scenario() {
        let outcome = run_scenario(Scenario::default());
        assert!(outcome.system.vehicles().is_empty());
        assert!(outcome.failed.is_empty());
        assert_eq!(outcome.system.summary().total_revenue, 0.0);
    }
}
