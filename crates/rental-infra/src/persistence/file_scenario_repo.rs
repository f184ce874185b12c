//! File-based implementation of ScenarioRepository

use std::path::{Path, PathBuf};

use rental_domain::model::Scenario;
use rental_domain::repository::ScenarioRepository;
use rental_types::Error;

use crate::scenario_loader::load_scenario_from_file;

/// Scenario read from a TOML file on every load
pub struct FileScenarioRepository {
    toml_path: PathBuf,
}

impl FileScenarioRepository {
    pub fn new(toml_path: impl Into<PathBuf>) -> Self {
        Self {
            toml_path: toml_path.into(),
        }
    }

    pub fn toml_path(&self) -> &Path {
        &self.toml_path
    }
}

impl ScenarioRepository for FileScenarioRepository {
    fn load_scenario(&self) -> Result<Scenario, Error> {
        load_scenario_from_file(&self.toml_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_fleet_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        fs::write(
            &path,
            r#"
[[vehicles]]
kind = "truck"
brand = "Ford"
model = "Ranger"
year = 2023
plate = "DEF456"
daily_rate = 70.0
cargo_capacity_kg = 1200.0

[[rentals]]
plate = "DEF456"
customer = "Ana Ruiz"
days = 2
estimated_km = 300.0
"#,
        )
        .unwrap();

        let repo = FileScenarioRepository::new(&path);
        assert_eq!(repo.toml_path(), path.as_path());
        let fleet = repo.load_fleet().unwrap();
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet[0].to_string(), "Truck: Ford Ranger (2023), Plate: DEF456");
    }
}
