//! Vehicle Rental - rental agency catalog, pricing and reports
//!
//! A CLI tool that runs rental scenarios against an in-memory fleet.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
