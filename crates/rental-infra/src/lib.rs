//! Infrastructure layer - scenario loaders and repository implementations

pub mod persistence;
pub mod scenario_loader;
