//! Rentable vehicle definitions

use serde::{Deserialize, Serialize};

use super::tariff::{Tariff, CAR_TARIFF, MOTORCYCLE_TARIFF, TRUCK_TARIFF};

/// Vehicle category with its category-specific attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Motorcycle {
        /// Engine displacement in cc
        displacement_cc: u32,
    },
    Truck {
        /// Cargo capacity in kg
        cargo_capacity_kg: f64,
    },
}

impl VehicleKind {
    /// Pricing constants for this category
    pub fn tariff(&self) -> &'static Tariff {
        match self {
            VehicleKind::Car => &CAR_TARIFF,
            VehicleKind::Motorcycle { .. } => &MOTORCYCLE_TARIFF,
            VehicleKind::Truck { .. } => &TRUCK_TARIFF,
        }
    }

    /// Attribute compared against the tariff's surcharge threshold
    pub fn surcharge_attribute(&self) -> Option<f64> {
        match self {
            VehicleKind::Car => None,
            VehicleKind::Motorcycle { displacement_cc } => Some(f64::from(*displacement_cc)),
            VehicleKind::Truck { cargo_capacity_kg } => Some(*cargo_capacity_kg),
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle { .. } => "Motorcycle",
            VehicleKind::Truck { .. } => "Truck",
        }
    }
}

/// A vehicle in the rental catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    pub year: u16,
    /// License plate, used to look the vehicle up when renting
    pub plate: String,
    /// Price per rental day
    pub daily_rate: f64,
    #[serde(flatten)]
    pub kind: VehicleKind,
    /// Output only. Every loaded vehicle starts available.
    #[serde(skip_deserializing)]
    rented: bool,
}

impl Vehicle {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        plate: impl Into<String>,
        daily_rate: f64,
        kind: VehicleKind,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            plate: plate.into(),
            daily_rate,
            kind,
            rented: false,
        }
    }

    pub fn car(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        plate: impl Into<String>,
        daily_rate: f64,
    ) -> Self {
        Self::new(brand, model, year, plate, daily_rate, VehicleKind::Car)
    }

    pub fn motorcycle(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        plate: impl Into<String>,
        daily_rate: f64,
        displacement_cc: u32,
    ) -> Self {
        Self::new(
            brand,
            model,
            year,
            plate,
            daily_rate,
            VehicleKind::Motorcycle { displacement_cc },
        )
    }

    pub fn truck(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        plate: impl Into<String>,
        daily_rate: f64,
        cargo_capacity_kg: f64,
    ) -> Self {
        Self::new(
            brand,
            model,
            year,
            plate,
            daily_rate,
            VehicleKind::Truck { cargo_capacity_kg },
        )
    }

    pub fn is_rented(&self) -> bool {
        self.rented
    }

    /// Whether this vehicle can be rented under `plate`
    pub fn is_available_as(&self, plate: &str) -> bool {
        !self.rented && self.plate == plate
    }

    /// Flip the vehicle to rented. There is no way back.
    pub fn mark_rented(&mut self) {
        self.rented = true;
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} ({}), Plate: {}",
            self.kind.label(),
            self.brand,
            self.model,
            self.year,
            self.plate
        )
    }
}
