// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Diagnostic run command
//!
//! Builds the environment and orchestrator from settings and flags, then
//! runs either the interactive view or a plain progress printer.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::style::Stylize;

use crate::browser::Environment;
use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::{Settings, MAX_PROBE_TIMEOUT_MS};
use crate::diagnostic::{
    reconnect_target_for, CheckStatus, Navigation, Orchestrator, Pacing, RunState,
};
use crate::error::{DiagError, Result};
use crate::i18n::{check_text, Language};
use crate::probe::HttpProbe;
use crate::report::Report;
use crate::utils;

/// Execute the run command, returning the process exit code
pub async fn execute(args: &RunArgs, format: &OutputFormat, settings: &Settings) -> Result<i32> {
    let env = environment_for(args, settings);
    let lang = args.lang.unwrap_or_else(|| settings.language_for(&env));
    let navigation = args
        .page_url
        .as_ref()
        .map(reconnect_target_for)
        .unwrap_or(Navigation::HistoryBack);
    let orchestrator = orchestrator_for(args, settings)?;

    tracing::debug!(
        target: "rakko_diag.orchestrator",
        user_agent = %env.user_agent,
        %lang,
        "starting run"
    );

    let interactive =
        matches!(format, OutputFormat::Text) && !args.no_tui && io::stdout().is_terminal();

    if interactive {
        let outcome = crate::tui::run_tui(orchestrator, env, lang, navigation).await?;
        if let Some(target) = outcome.navigation {
            println!("{}", describe_navigation(&target));
        }
        return Ok(outcome.state.aggregate().exit_code());
    }

    let session_id = utils::current_session_id();
    let state = match format {
        OutputFormat::Json => orchestrator.run(&env).await?,
        OutputFormat::Text => {
            let mut printer = ProgressPrinter::new(lang, io::stdout().is_terminal());
            let mut stdout = io::stdout();
            orchestrator
                .run_observed(&env, |state| {
                    for line in printer.observe(state) {
                        let _ = writeln!(stdout, "{}", line);
                    }
                })
                .await?
        }
    };

    let report = Report::new(&state, lang, session_id, navigation);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!();
            print!("{}", report.to_text());
        }
    }

    Ok(report.aggregate.exit_code())
}

/// Environment to classify: flags over settings over detection
///
/// An explicit user agent discards the detected application name so the
/// fallback descriptor does not describe this tool instead of the client.
pub fn environment_for(args: &RunArgs, settings: &Settings) -> Environment {
    let mut env = settings.environment();

    if let Some(ua) = &args.user_agent {
        env.user_agent = ua.clone();
        env.app_name = settings.environment.app_name.clone();
        env.app_version = settings.environment.app_version.clone();
    }
    if let Some(name) = &args.app_name {
        env.app_name = Some(name.clone());
    }
    if let Some(version) = &args.app_version {
        env.app_version = Some(version.clone());
    }
    env
}

/// Orchestrator wired to the HTTP probe with the effective timeout and pacing
pub fn orchestrator_for(args: &RunArgs, settings: &Settings) -> Result<Orchestrator> {
    let timeout = match args.timeout_ms {
        Some(ms) if ms == 0 || ms > MAX_PROBE_TIMEOUT_MS => {
            return Err(DiagError::InvalidInput(format!(
                "--timeout-ms must be between 1 and {}, got {}",
                MAX_PROBE_TIMEOUT_MS, ms
            )))
        }
        Some(ms) => Duration::from_millis(ms),
        None => settings.probe_timeout(),
    };
    let pacing = if args.fast {
        Pacing::none()
    } else {
        settings.pacing
    };

    let probe = HttpProbe::new(timeout)?;
    Ok(Orchestrator::new(Arc::new(probe))
        .with_pacing(pacing)
        .with_policy(settings.modernity))
}

/// Human-readable description of where reconnect goes
pub fn describe_navigation(navigation: &Navigation) -> String {
    match navigation {
        Navigation::To(target) => format!("Reconnect: {}", target),
        Navigation::HistoryBack => "Reconnect: history back".to_string(),
    }
}

/// Turns successive snapshots into one line per check as it settles
pub struct ProgressPrinter {
    lang: Language,
    color: bool,
    seen: Vec<CheckStatus>,
}

impl ProgressPrinter {
    pub fn new(lang: Language, color: bool) -> Self {
        Self {
            lang,
            color,
            seen: Vec::new(),
        }
    }

    /// Lines for checks that reached a terminal status since the last call
    pub fn observe(&mut self, state: &RunState) -> Vec<String> {
        let mut lines = Vec::new();

        for (i, item) in state.checks().iter().enumerate() {
            let previous = self.seen.get(i).copied().unwrap_or_default();
            if item.status.is_terminal() && !previous.is_terminal() {
                let text = check_text(item.id, item.status, self.lang);
                let symbol = utils::status_symbol(item.status);
                let symbol = if self.color {
                    symbol.with(utils::status_term_color(item.status)).to_string()
                } else {
                    symbol.to_string()
                };
                let mut line = format!("{} {}", symbol, text.label);
                if let Some(detail) = text.detail {
                    line.push_str(&format!(" - {}", detail));
                }
                lines.push(line);
            }
        }

        self.seen = state.checks().iter().map(|c| c.status).collect();
        lines
    }
}
