//! hexgrid CLI
//!
//! Runs one grid operation per invocation and prints the result on stdout.
//! Logs go to stderr.
//!
//! Usage:
//!   hexgrid distance 16 41
//!   hexgrid ring 33 1
//!   hexgrid circumscribe 13 32 44
//!   HEXGRID_OUTPUT=json hexgrid enclose 13 32 45 18

mod command;
mod config;
mod error;

use command::{print_usage, Command};
use config::{CliConfig, OutputFormat};
use error::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexgrid=info,hexgrid_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e @ Error::Usage(_)) => {
            eprintln!("{e}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let report = command.run(&config)?;
    match config.output {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
    }

    Ok(())
}
