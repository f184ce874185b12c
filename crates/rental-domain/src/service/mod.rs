//! Domain services

pub mod pricing;
pub mod report;
pub mod requirements;

pub use pricing::{calculate_cost, surcharge_for, RentalPricing};
pub use report::{generate_rental_report, summarize_rentals, RentalReport};
pub use requirements::rental_requirements;
