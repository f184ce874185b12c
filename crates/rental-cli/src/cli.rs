//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use rental_types::OutputFormat;

#[derive(Parser)]
#[command(name = "vehicle-rental")]
#[command(version)]
#[command(about = "Vehicle rental agency: fleet pricing, rentals and reports")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demo: three vehicles, two rentals
    Demo,

    /// Run a scenario file
    Run {
        /// Path to scenario TOML
        scenario: PathBuf,
    },

    /// List the fleet
    Fleet {
        /// Scenario file to read the fleet from
        #[arg(long, short = 's')]
        scenario: Option<PathBuf>,
    },

    /// Price a rental without performing it
    Quote {
        /// License plate
        #[arg(long, short = 'p')]
        plate: String,

        /// Rental days
        #[arg(long, short = 'd')]
        days: u32,

        /// Estimated kilometers
        #[arg(long, short = 'k', default_value = "0", allow_negative_numbers = true)]
        km: f64,

        /// Scenario file to read the fleet from
        #[arg(long, short = 's')]
        scenario: Option<PathBuf>,
    },

    /// Show documents required to rent
    Requirements {
        /// Only this plate (default: every vehicle)
        #[arg(long, short = 'p')]
        plate: Option<String>,

        /// Scenario file to read the fleet from
        #[arg(long, short = 's')]
        scenario: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default scenario file
        #[arg(long)]
        set_scenario: Option<PathBuf>,

        /// Forget the default scenario file
        #[arg(long)]
        clear_scenario: bool,

        /// Set default log filter (e.g. "info", "rental_app=debug")
        #[arg(long)]
        set_log_filter: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote() {
        let cli = Cli::parse_from([
            "vehicle-rental", "-f", "json", "quote", "-p", "ABC123", "-d", "5", "-k", "1200",
        ]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Quote { plate, days, km, scenario } => {
                assert_eq!(plate, "ABC123");
                assert_eq!(days, 5);
                assert_eq!(km, 1200.0);
                assert!(scenario.is_none());
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from(["vehicle-rental", "run", "fleet.toml", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Run { ref scenario } if scenario == &PathBuf::from("fleet.toml")));
    }

    #[test]
    fn test_negative_days_rejected_by_type() {
        let parsed = Cli::try_parse_from(["vehicle-rental", "quote", "-p", "ABC123", "-d", "-1"]);
        assert!(parsed.is_err());
    }
}
