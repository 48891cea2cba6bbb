// Cosmos Bootstrap - Cosmos DB database and collection bootstrapper
// Copyright (c) 2025 Cosmos Bootstrap Contributors
// Licensed under the MIT License

use cosmos_bootstrap::cli::commands::exit_code;
use cosmos_bootstrap::cli::{Cli, Commands};
use cosmos_bootstrap::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // File logging follows the [logging] section when the config loads
    let (log_level, logging_config) = cli.logging_settings();
    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(exit_code::FATAL);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Cosmos Bootstrap");

    let code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            exit_code::FATAL
        }
    };

    process::exit(code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Ensure(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
