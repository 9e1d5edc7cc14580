// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clamp::{app, cli, logging};

fn main() -> ExitCode {
    let args = cli::Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<()> {
    let config = cli::build_config(args)?;
    let _logger = logging::init(config.verbosity).context("failed to start logger")?;

    let report = app::run(&config);
    app::render(&report, config.format, &mut io::stdout().lock())?;
    Ok(())
}
