//! Domain layer for the vehicle rental agency
//!
//! Vehicles, tariffs, cost breakdowns and rental records live in [`model`].
//! Pure pricing, requirements and report logic lives in [`service`].

pub mod model;
pub mod repository;
pub mod service;
