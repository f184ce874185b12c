//! Repository implementations
//!
//! File-based implementations of the domain repository traits.

mod file_scenario_repo;

pub use file_scenario_repo::FileScenarioRepository;
