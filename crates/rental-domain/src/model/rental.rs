//! Rental requests and completed rental records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cost::CostBreakdown;
use super::vehicle::Vehicle;

/// A request to rent the vehicle registered under `plate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRequest {
    pub plate: String,
    pub customer: String,
    pub days: u32,
    pub estimated_km: f64,
}

impl RentalRequest {
    pub fn new(
        plate: impl Into<String>,
        customer: impl Into<String>,
        days: u32,
        estimated_km: f64,
    ) -> Self {
        Self {
            plate: plate.into(),
            customer: customer.into(),
            days,
            estimated_km,
        }
    }
}

/// Completed rental. Fields are read-only once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalRecord {
    id: Uuid,
    vehicle: Vehicle,
    customer: String,
    days: u32,
    estimated_km: f64,
    cost: CostBreakdown,
    rented_at: DateTime<Utc>,
}

impl RentalRecord {
    /// Bind a vehicle snapshot, the request and its computed cost
    pub fn new(vehicle: &Vehicle, request: RentalRequest, cost: CostBreakdown) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle: vehicle.clone(),
            customer: request.customer,
            days: request.days,
            estimated_km: request.estimated_km,
            cost,
            rented_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn cost(&self) -> &CostBreakdown {
        &self.cost
    }

    pub fn total(&self) -> f64 {
        self.cost.total
    }
}

impl std::fmt::Display for RentalRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rental of {}", self.vehicle)?;
        writeln!(f, "Customer: {}", self.customer)?;
        writeln!(
            f,
            "Rental days: {} (${:.2}/day)",
            self.days, self.vehicle.daily_rate
        )?;
        writeln!(f, "Daily cost: ${:.2}", self.cost.base_cost)?;
        writeln!(f, "Extra kilometers: {} km", self.cost.extra_km)?;
        writeln!(f, "Extra charges: ${:.2}", self.cost.extra_cost)?;
        write!(f, "TOTAL: ${:.2}", self.cost.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cost() -> CostBreakdown {
        CostBreakdown {
            base_cost: 250.0,
            extra_cost: 100.0,
            surcharge: 0.0,
            total: 350.0,
            days: 5,
            extra_km: 200.0,
        }
    }

    #[test]
    fn test_record_display() {
        let car = Vehicle::car("Toyota", "Corolla", 2022, "ABC123", 50.0);
        let request = RentalRequest::new("ABC123", "John Smith", 5, 1200.0);
        let record = RentalRecord::new(&car, request, sample_cost());

        let expected = "Rental of Car: Toyota Corolla (2022), Plate: ABC123\n\
                        Customer: John Smith\n\
                        Rental days: 5 ($50.00/day)\n\
                        Daily cost: $250.00\n\
                        Extra kilometers: 200 km\n\
                        Extra charges: $100.00\n\
                        TOTAL: $350.00";
        assert_eq!(record.to_string(), expected);
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let car = Vehicle::car("Toyota", "Corolla", 2022, "ABC123", 50.0);
        let a = RentalRecord::new(&car, RentalRequest::new("ABC123", "A", 1, 0.0), sample_cost());
        let b = RentalRecord::new(&car, RentalRequest::new("ABC123", "B", 1, 0.0), sample_cost());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.customer(), "A");
        assert_eq!(b.total(), 350.0);
    }
}
