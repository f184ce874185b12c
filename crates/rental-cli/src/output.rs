//! Output formatting module

use rental_app::app::ScenarioOutcome;
use rental_domain::model::{CostBreakdown, RentalRecord, RentalRequest, Vehicle};
use rental_domain::service::{RentalPricing, RentalReport};
use rental_types::{OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct RunOutput<'a> {
    rentals: &'a [RentalRecord],
    summary: RentalReport,
    failed: &'a [RentalRequest],
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    vehicle: &'a Vehicle,
    cost: &'a CostBreakdown,
}

#[derive(Serialize)]
struct RequirementsOutput<'a> {
    plate: &'a str,
    vehicle: String,
    requirements: Vec<&'static str>,
}

/// Report, refused rentals, then requirements for every vehicle
pub fn output_scenario_run(output_format: OutputFormat, outcome: &ScenarioOutcome) -> Result<()> {
    let system = &outcome.system;
    if output_format == OutputFormat::Json {
        let out = RunOutput {
            rentals: system.rentals(),
            summary: system.summary(),
            failed: &outcome.failed,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for request in &outcome.failed {
        eprintln!(
            "Warning: could not rent {} to {} (unknown plate or already rented)",
            request.plate, request.customer
        );
    }
    system.print_report();
    for vehicle in system.vehicles() {
        println!("\n{}", vehicle.rental_requirements());
    }
    Ok(())
}

pub fn output_fleet(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
    } else {
        print!("{}", render_fleet_table(vehicles));
    }
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, vehicle: &Vehicle, cost: &CostBreakdown) -> Result<()> {
    if output_format == OutputFormat::Json {
        let out = QuoteOutput { vehicle, cost };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_quote(vehicle, cost));
    }
    Ok(())
}

pub fn output_requirements(output_format: OutputFormat, vehicles: &[&Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let out: Vec<_> = vehicles
            .iter()
            .map(|&v| RequirementsOutput {
                plate: &v.plate,
                vehicle: v.to_string(),
                requirements: v
                    .rental_requirements()
                    .lines()
                    .skip(1)
                    .map(|line| line.trim_start_matches("- "))
                    .collect(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for vehicle in vehicles {
            println!("\n{}", vehicle.rental_requirements());
        }
    }
    Ok(())
}

fn render_fleet_table(vehicles: &[Vehicle]) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:<10} {:<11} {:<22} {:>5} {:>10} {}\n",
        "Plate", "Kind", "Vehicle", "Year", "Daily", "Status"
    ));
    table.push_str(&"-".repeat(71));
    table.push('\n');
    for v in vehicles {
        table.push_str(&format!(
            "{:<10} {:<11} {:<22} {:>5} {:>10} {}\n",
            v.plate,
            v.kind.label(),
            format!("{} {}", v.brand, v.model),
            v.year,
            format!("${:.2}", v.daily_rate),
            if v.is_rented() { "rented" } else { "free" }
        ));
    }
    table.push_str(&format!("\n{} vehicle(s)\n", vehicles.len()));
    table
}

fn render_quote(vehicle: &Vehicle, cost: &CostBreakdown) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nQuote for {}\n", vehicle));
    out.push_str("===============\n");
    out.push_str(&format!(
        "Rental days:      {} (${:.2}/day)\n",
        cost.days, vehicle.daily_rate
    ));
    out.push_str(&format!("Daily cost:       ${:.2}\n", cost.base_cost));
    out.push_str(&format!("Extra kilometers: {} km\n", cost.extra_km));
    if cost.surcharge > 0.0 {
        out.push_str(&format!("Surcharge:        ${:.2}\n", cost.surcharge));
    }
    out.push_str(&format!("Extra charges:    ${:.2}\n", cost.extra_cost));
    out.push_str(&format!("TOTAL:            ${:.2}\n", cost.total));
    out
}
