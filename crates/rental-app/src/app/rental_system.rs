//! In-memory rental registry

use rental_domain::model::{CostBreakdown, RentalRecord, RentalRequest, Vehicle};
use rental_domain::service::{generate_rental_report, summarize_rentals, RentalPricing, RentalReport};
use rental_types::{Error, Result};
use tracing::debug;

/// Vehicles and completed rentals, both kept in insertion order.
///
/// Plates are not checked for uniqueness. Renting picks the first available
/// vehicle with a matching plate.
#[derive(Debug, Default)]
pub struct RentalSystem {
    vehicles: Vec<Vehicle>,
    rentals: Vec<RentalRecord>,
}

impl RentalSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding `vehicles`
    pub fn with_fleet(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let mut system = Self::new();
        for vehicle in vehicles {
            system.add_vehicle(vehicle);
        }
        system
    }

    /// Append a vehicle to the catalog
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        debug!(vehicle = %vehicle, "adding vehicle");
        self.vehicles.push(vehicle);
    }

    /// Rent the first available vehicle registered under `plate`.
    ///
    /// Returns `false` without touching any state when no vehicle matches or
    /// every match is already rented.
    pub fn rent_vehicle(&mut self, plate: &str, customer: &str, days: u32, estimated_km: f64) -> bool {
        self.rent(RentalRequest::new(plate, customer, days, estimated_km))
    }

    pub fn rent(&mut self, request: RentalRequest) -> bool {
        let Some(vehicle) = self
            .vehicles
            .iter_mut()
            .find(|v| v.is_available_as(&request.plate))
        else {
            debug!(plate = %request.plate, "no available vehicle");
            return false;
        };

        let cost = vehicle.compute_rental_cost(request.days, request.estimated_km);
        vehicle.mark_rented();
        let record = RentalRecord::new(vehicle, request, cost);
        debug!(id = %record.id(), total = record.total(), "rental recorded");
        self.rentals.push(record);
        true
    }

    /// Price a rental without performing it. Returns the priced vehicle with its cost.
    pub fn quote(
        &self,
        plate: &str,
        days: u32,
        estimated_km: f64,
    ) -> Result<(&Vehicle, CostBreakdown)> {
        self.find_vehicle(plate)
            .map(|v| (v, v.compute_rental_cost(days, estimated_km)))
            .ok_or_else(|| Error::VehicleNotFound(plate.to_string()))
    }

    /// First vehicle registered under `plate`, rented or not
    pub fn find_vehicle(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.plate == plate)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn rentals(&self) -> &[RentalRecord] {
        &self.rentals
    }

    pub fn summary(&self) -> RentalReport {
        summarize_rentals(&self.rentals, &self.vehicles)
    }

    pub fn report(&self) -> String {
        generate_rental_report(&self.rentals, &self.vehicles)
    }

    /// Write the report to stdout
    pub fn print_report(&self) {
        print!("{}", self.report());
    }
}
