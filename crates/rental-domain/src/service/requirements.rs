//! Rental eligibility requirements per vehicle category

use crate::model::VehicleKind;

const CAR_REQUIREMENTS: &str = "Requirements to rent a car:\n\
- Class B driver's license\n\
- Identity document\n\
- Credit card";

const MOTORCYCLE_REQUIREMENTS: &str = "Requirements to rent a motorcycle:\n\
- Class A driver's license\n\
- Identity document\n\
- Own helmet or helmet rental fee";

const TRUCK_REQUIREMENTS: &str = "Requirements to rent a truck:\n\
- Class C driver's license\n\
- Identity document\n\
- Credit card\n\
- Driving record check";

/// Fixed list of documents required for the given category
pub fn rental_requirements(kind: &VehicleKind) -> &'static str {
    match kind {
        VehicleKind::Car => CAR_REQUIREMENTS,
        VehicleKind::Motorcycle { .. } => MOTORCYCLE_REQUIREMENTS,
        VehicleKind::Truck { .. } => TRUCK_REQUIREMENTS,
    }
}
