//! Rental cost calculation

use tracing::debug;

use crate::model::{CostBreakdown, Tariff, Vehicle, VehicleKind};
use crate::service::requirements::rental_requirements;

/// Pricing and eligibility capability shared by every vehicle category
pub trait RentalPricing {
    /// Price a rental of `days` days with `estimated_km` expected kilometers
    fn compute_rental_cost(&self, days: u32, estimated_km: f64) -> CostBreakdown;

    /// Documents a customer must present
    fn rental_requirements(&self) -> &'static str;
}

impl RentalPricing for Vehicle {
    fn compute_rental_cost(&self, days: u32, estimated_km: f64) -> CostBreakdown {
        let base = self.daily_rate * f64::from(days);
        let surcharge = surcharge_for(&self.kind, base);
        let cost = calculate_cost(
            self.daily_rate,
            days,
            estimated_km,
            self.kind.tariff(),
            surcharge,
        );
        debug!(
            plate = %self.plate,
            days,
            estimated_km,
            total = cost.total,
            "priced rental"
        );
        cost
    }

    fn rental_requirements(&self) -> &'static str {
        rental_requirements(&self.kind)
    }
}

/// Surcharge owed on `base` when the category attribute exceeds its threshold
pub fn surcharge_for(kind: &VehicleKind, base: f64) -> f64 {
    match (kind.tariff().surcharge, kind.surcharge_attribute()) {
        (Some(rule), Some(value)) if value > rule.threshold => base * rule.rate,
        _ => 0.0,
    }
}

/// Shared cost formula. Negative mileage is not rejected; it just yields no extra km.
pub fn calculate_cost(
    daily_rate: f64,
    days: u32,
    estimated_km: f64,
    tariff: &Tariff,
    surcharge: f64,
) -> CostBreakdown {
    let base_cost = daily_rate * f64::from(days);
    let extra_km = (estimated_km - tariff.allowed_km(days)).max(0.0);
    let extra_cost = extra_km * tariff.extra_km_rate + surcharge;

    CostBreakdown {
        base_cost,
        extra_cost,
        surcharge,
        total: base_cost + extra_cost,
        days,
        extra_km,
    }
}
