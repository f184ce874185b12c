//! Scenario loader from TOML files
//!
//! ```toml
//! [[vehicles]]
//! kind = "truck"
//! brand = "Ford"
//! model = "Ranger"
//! year = 2023
//! plate = "DEF456"
//! daily_rate = 70.0
//! cargo_capacity_kg = 1200.0
//!
//! [[rentals]]
//! plate = "DEF456"
//! customer = "Ana Ruiz"
//! days = 2
//! estimated_km = 300.0
//! ```

use std::fs;
use std::path::Path;

use rental_domain::model::Scenario;
use rental_types::{Error, Result};
use tracing::info;

/// Read and parse a scenario file
pub fn load_scenario_from_file(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path).map_err(|e| Error::Scenario {
        path: path.to_path_buf(),
        message: format!("failed to read file: {}", e),
    })?;

    let scenario = parse_scenario(&content, path)?;
    info!(
        path = %path.display(),
        vehicles = scenario.vehicles.len(),
        rentals = scenario.rentals.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

/// Parse scenario TOML. `origin` is only used in error messages.
pub fn parse_scenario(toml_content: &str, origin: &Path) -> Result<Scenario> {
    toml::from_str(toml_content).map_err(|e| Error::Scenario {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}
