//! Application use cases

mod rental_system;
mod scenario_runner;

pub use rental_system::RentalSystem;
pub use scenario_runner::{run_scenario, ScenarioOutcome};
