//! Command handlers

use std::path::PathBuf;

use rental_app::app::{run_scenario, RentalSystem};
use rental_app::config::Config;
use rental_app::fixtures::DemoScenarioRepository;
use rental_app::repository::open_scenario_repo;
use rental_domain::repository::ScenarioRepository;
use rental_types::{Error, OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::logging;
use crate::output::{output_fleet, output_quote, output_requirements, output_scenario_run};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    logging::init(&config.log_filter, cli.verbose);

    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Demo => cmd_run(&DemoScenarioRepository, output_format),

        Commands::Run { scenario } => {
            let repo = open_scenario_repo(&config, Some(scenario));
            cmd_run(repo.as_ref(), output_format)
        }

        Commands::Fleet { scenario } => cmd_fleet(&config, scenario, output_format),

        Commands::Quote {
            plate,
            days,
            km,
            scenario,
        } => cmd_quote(&config, scenario, &plate, days, km, output_format),

        Commands::Requirements { plate, scenario } => {
            cmd_requirements(&config, scenario, plate.as_deref(), output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_scenario,
            clear_scenario,
            set_log_filter,
            reset,
        } => {
            if reset {
                config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults.");
                return Ok(());
            }

            let mut changed = false;
            if let Some(format) = set_output {
                config.output_format = format;
                changed = true;
            }
            if let Some(path) = set_scenario {
                config.scenario_path = Some(path);
                changed = true;
            }
            if clear_scenario {
                config.scenario_path = None;
                changed = true;
            }
            if let Some(filter) = set_log_filter {
                config.log_filter = filter;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("Configuration saved.");
            }
            if show || !changed {
                print!("{}", config);
            }
            Ok(())
        }
    }
}

fn cmd_run(repo: &dyn ScenarioRepository, output_format: OutputFormat) -> Result<()> {
    let scenario = repo.load_scenario()?;
    debug!(
        vehicles = scenario.vehicles.len(),
        rentals = scenario.rentals.len(),
        "running scenario"
    );
    let outcome = run_scenario(scenario);
    output_scenario_run(output_format, &outcome)
}

fn cmd_fleet(config: &Config, scenario: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let fleet = open_scenario_repo(config, scenario).load_fleet()?;
    output_fleet(output_format, &fleet)
}

fn cmd_quote(
    config: &Config,
    scenario: Option<PathBuf>,
    plate: &str,
    days: u32,
    km: f64,
    output_format: OutputFormat,
) -> Result<()> {
    let system = RentalSystem::with_fleet(open_scenario_repo(config, scenario).load_fleet()?);
    let (vehicle, cost) = system.quote(plate, days, km)?;
    output_quote(output_format, vehicle, &cost)
}

fn cmd_requirements(
    config: &Config,
    scenario: Option<PathBuf>,
    plate: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    let fleet = open_scenario_repo(config, scenario).load_fleet()?;
    let selected: Vec<_> = match plate {
        Some(plate) => {
            let vehicle = fleet
                .iter()
                .find(|v| v.plate == plate)
                .ok_or_else(|| Error::VehicleNotFound(plate.to_string()))?;
            vec![vehicle]
        }
        None => fleet.iter().collect(),
    };
    output_requirements(output_format, &selected)
}
