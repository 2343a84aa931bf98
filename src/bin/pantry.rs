//! Pantry CLI Binary
//!
//! Interactive console session over the product catalog.

use anyhow::Context;
use clap::Parser;
use pantry::facade::ProductFacade;
use pantry::logging;
use pantry::tooling::cli::{run_session, Cli, CliContext};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(&cli).context("initializing configuration")?;
    logging::init_logging(&context.config.logging).context("initializing logging")?;

    if let Some(command) = &cli.command {
        let output = context.execute(command)?;
        println!("{}", output);
        return Ok(());
    }

    context
        .config
        .validate()
        .context("validating image directories")?;

    let mut facade = ProductFacade::new(&context.config);
    run_session(&mut facade).context("running catalog session")?;
    Ok(())
}
