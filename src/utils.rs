// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Utility functions for rakko-diag
//!
//! Small pure helpers shared by the text and terminal UI front ends.

use crossterm::style::Color;

use crate::diagnostic::CheckStatus;
use crate::error::DiagError;

/// Number of hex digits in a session id
const SESSION_ID_LEN: usize = 6;

/// Support reference shown in the footer: the last six upper-case hex
/// digits of a millisecond timestamp.
pub fn session_id(now_millis: i64) -> String {
    let hex = format!("{:X}", now_millis.max(0));
    let start = hex.len().saturating_sub(SESSION_ID_LEN);
    hex[start..].to_string()
}

/// Session id for the current moment
pub fn current_session_id() -> String {
    session_id(chrono::Utc::now().timestamp_millis())
}

/// "Checking..." animation: cycles through "", ".", "..", "..."
pub fn loading_dots(tick: usize) -> &'static str {
    match tick % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

/// Single-character marker for a check status
pub fn status_symbol(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pending => "·",
        CheckStatus::Running => "…",
        CheckStatus::Success => "✓",
        CheckStatus::Error => "✗",
        CheckStatus::Warning => "!",
    }
}

/// Crossterm color for a check status in plain terminal output
///
/// The interactive view keeps the same palette in ratatui colors
/// (`tui::ui::status_tui_color`).
pub fn status_term_color(status: CheckStatus) -> Color {
    match status {
        CheckStatus::Pending => Color::DarkGrey,
        CheckStatus::Running => Color::White,
        CheckStatus::Success => Color::Green,
        CheckStatus::Error => Color::Red,
        CheckStatus::Warning => Color::Yellow,
    }
}

/// Format an error for display to the user
pub fn format_error(error: &DiagError) -> String {
    match error {
        DiagError::Config(msg) => format!(
            "Configuration error: {}\nFix or remove the settings file and retry.",
            msg
        ),
        _ => format!("Error: {}", error),
    }
}
