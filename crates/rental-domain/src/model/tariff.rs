//! Per-category pricing constants

use serde::Serialize;

/// Percentage-of-base fee applied when a vehicle attribute exceeds a threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Surcharge {
    /// Attribute value above which the surcharge applies (cc or kg)
    pub threshold: f64,
    /// Fraction of the base cost, e.g. 0.10 for 10%
    pub rate: f64,
}

/// Mileage allowance and extra-kilometer pricing for one vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tariff {
    /// Free kilometers per rental day
    pub km_per_day: f64,
    /// Price per kilometer beyond the allowance
    pub extra_km_rate: f64,
    pub surcharge: Option<Surcharge>,
}

pub const CAR_TARIFF: Tariff = Tariff {
    km_per_day: 200.0,
    extra_km_rate: 0.5,
    surcharge: None,
};

/// Displacement above 500cc adds 10% of the base cost
pub const MOTORCYCLE_TARIFF: Tariff = Tariff {
    km_per_day: 150.0,
    extra_km_rate: 0.3,
    surcharge: Some(Surcharge {
        threshold: 500.0,
        rate: 0.10,
    }),
};

/// Cargo capacity above 1000kg adds 15% of the base cost
pub const TRUCK_TARIFF: Tariff = Tariff {
    km_per_day: 180.0,
    extra_km_rate: 0.7,
    surcharge: Some(Surcharge {
        threshold: 1000.0,
        rate: 0.15,
    }),
};

impl Tariff {
    /// Kilometers included for a rental of `days`
    pub fn allowed_km(&self, days: u32) -> f64 {
        self.km_per_day * f64::from(days)
    }
}
