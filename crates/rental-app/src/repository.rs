//! Repository adapters for scenario input

use std::path::PathBuf;

use rental_domain::repository::ScenarioRepository;
use rental_infra::persistence::FileScenarioRepository;
use tracing::debug;

use crate::config::Config;
use crate::fixtures::DemoScenarioRepository;

/// Pick the scenario source: explicit path, then the configured path, then the demo
pub fn open_scenario_repo(config: &Config, scenario: Option<PathBuf>) -> Box<dyn ScenarioRepository> {
    match scenario.or_else(|| config.scenario_path.clone()) {
        Some(path) => {
            debug!(path = %path.display(), "using scenario file");
            Box::new(FileScenarioRepository::new(path))
        }
        None => {
            debug!("using built-in demo scenario");
            Box::new(DemoScenarioRepository)
        }
    }
}
