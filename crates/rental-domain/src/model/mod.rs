//! Domain model types

pub mod cost;
pub mod rental;
pub mod scenario;
pub mod tariff;
pub mod vehicle;

pub use cost::CostBreakdown;
pub use rental::{RentalRecord, RentalRequest};
pub use scenario::Scenario;
pub use tariff::{Surcharge, Tariff, CAR_TARIFF, MOTORCYCLE_TARIFF, TRUCK_TARIFF};
pub use vehicle::{Vehicle, VehicleKind};
