// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rakko-diag - connectivity and browser diagnostic
//!
//! Entry point for the rakko-diag CLI application.

use clap::Parser;

use rakko_diag::cli::{Cli, Commands, RunArgs};
use rakko_diag::commands;
use rakko_diag::config::Settings;
use rakko_diag::error::Result;
use rakko_diag::utils;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` enables run diagnostics without knowing target names.
    // `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        for directive in [
            "rakko_diag.orchestrator=debug",
            "rakko_diag.tui=debug",
            "rakko_diag.config=debug",
        ] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", utils::format_error(&e));
            std::process::exit(2);
        }
    };

    // Dispatch to appropriate command
    let code = match cli.command {
        None => commands::run::execute(&RunArgs::default(), &cli.format, &settings).await?,
        Some(Commands::Run(args)) => commands::run::execute(&args, &cli.format, &settings).await?,
        Some(Commands::Classify(args)) => {
            commands::classify::execute(&args, &cli.format, &settings)?;
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
