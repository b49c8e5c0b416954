// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input handling for the TUI
//!
//! Polls crossterm for key presses and maps them to application actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use super::app::{App, AppResult};
use crate::error::Result;

/// How long to wait for a key before redrawing
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handle user input
pub fn handle_input(app: &mut App) -> Result<AppResult> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind != KeyEventKind::Press {
                return Ok(AppResult::Continue);
            }
            return Ok(app.handle_key(key));
        }
    }

    Ok(AppResult::Continue)
}
