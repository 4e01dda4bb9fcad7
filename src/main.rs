// Regionsplit - Export audio regions as separate tracks
// Copyright (c) 2025 Regionsplit Contributors
// Licensed under the MIT License

use clap::Parser;
use regionsplit::cli::{load_configuration, Cli, Commands};
use regionsplit::config::LoggingConfig;
use regionsplit::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the configuration when it loads; the command
    // itself reports configuration errors.
    let config = load_configuration(cli.config.as_deref()).ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = config
        .map(|c| c.logging)
        .unwrap_or_else(LoggingConfig::default);

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Regionsplit - Export audio regions as separate tracks"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Flush the file writer before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Export(args) => args.execute(config),
        Commands::Plan(args) => args.execute(config),
        Commands::Verify(args) => args.execute(config),
        Commands::ValidateConfig(args) => args.execute(config),
        Commands::Init(args) => args.execute(),
    }
}
