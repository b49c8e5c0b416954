// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for rakko-diag.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use url::Url;

use crate::i18n::Language;

/// rakko-diag - find out why a Rakko page failed to load
#[derive(Parser, Debug)]
#[command(name = "rakko-diag")]
#[command(version, about = "Connectivity and browser diagnostic for Rakko")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for non-interactive runs
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the diagnostic (default when no command given)
    Run(RunArgs),

    /// Classify a user-agent string and print the result
    Classify(ClassifyArgs),
}

/// Arguments for the run subcommand
#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// User-agent string to classify (defaults to this tool's own)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Host application name, used when the user agent matches no browser
    #[arg(long)]
    pub app_name: Option<String>,

    /// Host application version, used alongside --app-name
    #[arg(long)]
    pub app_version: Option<String>,

    /// Display language (detected from the locale when omitted)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// URL of the page that failed; its `return_to` parameter drives reconnect
    #[arg(long)]
    pub page_url: Option<Url>,

    /// Print progress as plain lines instead of the interactive view
    #[arg(long)]
    pub no_tui: bool,

    /// Skip presentation pauses between checks
    #[arg(long)]
    pub fast: bool,

    /// Override the per-probe timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// Arguments for the classify subcommand
#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// User-agent string
    pub user_agent: String,

    /// Host application name fallback
    #[arg(long)]
    pub app_name: Option<String>,

    /// Host application version fallback
    #[arg(long)]
    pub app_version: Option<String>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
