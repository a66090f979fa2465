//! smartpark binary
//!
//! Interactive console for the reference parking facility.

use std::io;

use smartpark_cli::{args::USAGE, Command, Shell};
use smartpark_core::{Facility, FacilityConfig};
use smartpark_pricing::FixedClock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = match Command::parse(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let config = match &options.config {
        Some(path) => FacilityConfig::from_file(path)?,
        None => FacilityConfig::from_env()?,
    };

    let mut facility = Facility::from_config(&config)?;
    if let Some(hour) = options.hour {
        tracing::info!(hour, "Pricing clock pinned");
        facility = facility.with_clock(FixedClock(hour));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(facility, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
