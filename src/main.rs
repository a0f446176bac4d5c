use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command};
use crate::config::AppConfig;
use crate::error::AppError;

mod args;
mod config;
mod error;
mod model;
mod routing;
#[cfg(test)]
mod test_support;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            error.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Command::Route(args) => {
            let settings = config.route_settings(cli.graph.as_deref(), args)?;
            routing::run_route(&settings, &mut stdout)?;
        }
        Command::Map(args) => {
            let settings = config.map_settings(cli.graph.as_deref(), args)?;
            model::run_map(&settings, &mut stdout)?;
        }
        Command::Streets(args) => {
            let graph = config.graph_path(cli.graph.as_deref())?;
            model::run_streets(&graph, args.limit, &mut stdout)?;
        }
    }
    Ok(())
}

fn report(error: &AppError) {
    eprintln!("{error}");
    if let AppError::Core(streetpath_core::Error::StreetNotFound { samples, .. }) = error {
        eprintln!("Some street names in the network:");
        for name in samples {
            eprintln!("  {name}");
        }
    }
}
