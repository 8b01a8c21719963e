//! Showcase CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use showcase_cli::{Args, CliError, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    info!(command:? = args.command; "Starting showcase");
    debug!(config:? = args.config; "Configuration override");

    match showcase_cli::run(&args) {
        Ok(()) => info!("Completed successfully"),
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    }
}

/// Installs `env_logger`; an unparsable level falls back to `warn`.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

fn report(err: &CliError) {
    let handler = miette::GraphicalReportHandler::new();
    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, &reportable) {
            Ok(()) => error!("{rendered}"),
            Err(_) => error!("{err}"),
        }
    }
}
