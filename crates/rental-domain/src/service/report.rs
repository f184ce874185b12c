//! Rental report generation

use serde::Serialize;

use crate::model::{RentalRecord, Vehicle};

/// Totals over every rental in a registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalReport {
    pub rental_count: usize,
    pub total_revenue: f64,
    pub rented_vehicles: usize,
    pub total_vehicles: usize,
}

pub fn summarize_rentals(rentals: &[RentalRecord], vehicles: &[Vehicle]) -> RentalReport {
    RentalReport {
        rental_count: rentals.len(),
        // f64's Sum starts at -0.0, which would print as $-0.00
        total_revenue: rentals.iter().map(RentalRecord::total).fold(0.0, |acc, t| acc + t),
        rented_vehicles: vehicles.iter().filter(|v| v.is_rented()).count(),
        total_vehicles: vehicles.len(),
    }
}

/// Render every rental in order, followed by the revenue and occupancy summary
pub fn generate_rental_report(rentals: &[RentalRecord], vehicles: &[Vehicle]) -> String {
    let summary = summarize_rentals(rentals, vehicles);

    let mut report = String::new();
    report.push_str("\n=== RENTAL REPORT ===\n");
    for (i, rental) in rentals.iter().enumerate() {
        report.push_str(&format!("\nRental #{}:\n{}\n", i + 1, rental));
        report.push_str("----------------------------\n");
    }

    report.push_str(&format!(
        "\nTotal revenue: ${:.2}\n",
        summary.total_revenue
    ));
    report.push_str(&format!(
        "Vehicles currently rented: {}/{}\n",
        summary.rented_vehicles, summary.total_vehicles
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RentalRequest;
    use crate::service::pricing::RentalPricing;

    fn rent(vehicle: &mut Vehicle, customer: &str, days: u32, km: f64) -> RentalRecord {
        let cost = vehicle.compute_rental_cost(days, km);
        vehicle.mark_rented();
        RentalRecord::new(
            vehicle,
            RentalRequest::new(vehicle.plate.clone(), customer, days, km),
            cost,
        )
    }

    #[test]
    fn test_empty_report() {
        let vehicles = vec![Vehicle::car("Toyota", "Corolla", 2022, "ABC123", 50.0)];
        let report = generate_rental_report(&[], &vehicles);
        assert!(report.contains("=== RENTAL REPORT ==="));
        assert!(!report.contains("Rental #1"));
        assert!(report.contains("Total revenue: $0.00"));
        assert!(report.contains("Vehicles currently rented: 0/1"));
    }

    #[test]
    fn test_empty_summary_is_positive_zero() {
        let summary = summarize_rentals(&[], &[]);
        assert_eq!(summary.total_revenue, 0.0);
        assert!(!summary.total_revenue.is_sign_negative());
        assert_eq!(summary.rented_vehicles, 0);
        assert_eq!(summary.total_vehicles, 0);

        let report = generate_rental_report(&[], &[]);
        assert!(report.contains("Total revenue: $0.00\n"));
        assert!(!report.contains("-0.00"));
        assert!(report.ends_with("Vehicles currently rented: 0/0\n"));
    }

    #[test]
    fn test_report_numbers_rentals_in_order() {
        let mut vehicles = vec![
            Vehicle::car("Toyota", "Corolla", 2022, "ABC123", 50.0),
            Vehicle::motorcycle("Honda", "CBR600", 2021, "XYZ789", 30.0, 600),
            Vehicle::truck("Ford", "Ranger", 2023, "DEF456", 70.0, 1200.0),
        ];
        let rentals = vec![
            rent(&mut vehicles[0], "John Smith", 5, 1200.0),
            rent(&mut vehicles[1], "Mary Jones", 3, 600.0),
        ];

        let report = generate_rental_report(&rentals, &vehicles);
        let first = report.find("Rental #1:\nRental of Car").unwrap();
        let second = report.find("Rental #2:\nRental of Motorcycle").unwrap();
        assert!(first < second);
        assert!(report.contains("Total revenue: $494.00"));
        assert!(report.contains("Vehicles currently rented: 2/3"));
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut a = Vehicle::car("Toyota", "Corolla", 2022, "ABC123", 50.0);
        let mut b = Vehicle::truck("Ford", "Ranger", 2023, "DEF456", 70.0, 1200.0);
        let forward = vec![rent(&mut a, "A", 5, 1200.0), rent(&mut b, "B", 2, 900.0)];
        let backward: Vec<_> = forward.iter().rev().cloned().collect();
        let vehicles = vec![a, b];

        let expected: f64 = forward.iter().map(|r| r.cost().total).sum();
        let s1 = summarize_rentals(&forward, &vehicles);
        let s2 = summarize_rentals(&backward, &vehicles);
        assert!((s1.total_revenue - expected).abs() < 1e-9);
        assert!((s1.total_revenue - s2.total_revenue).abs() < 1e-9);
        assert_eq!(s1.rental_count, 2);
        assert_eq!(s1.rented_vehicles, 2);
    }
}
