//! Application service layer - rental registry, scenarios, config

pub mod app;
pub mod config;
pub mod fixtures;
pub mod repository;
