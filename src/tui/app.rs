// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application state and logic
//!
//! Holds the latest run snapshot plus purely presentational state: the
//! language, the dots animation, whether the check list has collapsed into
//! the summary view, and whether system details are shown.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::diagnostic::{AggregateStatus, Navigation, Remediation, RunState};
use crate::i18n::Language;
use crate::utils;

/// Interval between steps of the "checking..." animation
pub const DOTS_INTERVAL: Duration = Duration::from_millis(500);

/// Result of input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Discard the current run and start a new one
    Reload,
    /// Leave the diagnostic towards the given target
    Reconnect(Navigation),
}

/// TUI application state
pub struct App {
    /// Latest snapshot published by the orchestrator
    pub state: RunState,
    pub lang: Language,
    pub show_detail: bool,
    /// Summary view has replaced the check list
    pub collapsed: bool,
    pub session_id: String,
    /// Reconnect target resolved from the failed page's URL
    pub navigation: Navigation,
    /// Error raised by the run task, shown in the footer
    pub run_error: Option<String>,
    collapse_after: Duration,
    started_at: Instant,
    completed_at: Option<Instant>,
    dots_tick: usize,
}

impl App {
    pub fn new(lang: Language, navigation: Navigation, collapse_after: Duration) -> Self {
        Self::new_at(lang, navigation, collapse_after, Instant::now())
    }

    pub fn new_at(
        lang: Language,
        navigation: Navigation,
        collapse_after: Duration,
        now: Instant,
    ) -> Self {
        Self {
            state: RunState::new(),
            lang,
            show_detail: true,
            collapsed: false,
            session_id: utils::current_session_id(),
            navigation,
            run_error: None,
            collapse_after,
            started_at: now,
            completed_at: None,
            dots_tick: 0,
        }
    }

    /// Replace the snapshot with a newer one from the run task
    pub fn update(&mut self, state: RunState, now: Instant) {
        if state.is_completed() && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
        self.state = state;
        self.on_tick(now);
    }

    /// Advance time-driven presentation state
    pub fn on_tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.dots_tick = (elapsed.as_millis() / DOTS_INTERVAL.as_millis()) as usize;

        if let Some(done) = self.completed_at {
            if now.saturating_duration_since(done) >= self.collapse_after {
                self.collapsed = true;
            }
        }
    }

    pub fn dots(&self) -> &'static str {
        utils::loading_dots(self.dots_tick)
    }

    /// Aggregate outcome, only once the summary view is showing
    pub fn outcome(&self) -> Option<AggregateStatus> {
        (self.state.is_completed() && self.collapsed).then(|| self.state.aggregate())
    }

    /// Action offered by the summary view
    pub fn remediation(&self) -> Option<Remediation> {
        self.outcome().map(Remediation::for_aggregate)
    }

    pub fn set_language(&mut self, lang: Language) {
        self.lang = lang;
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    /// Start over with a fresh run, as a page reload would
    pub fn reset(&mut self, now: Instant) {
        self.state = RunState::new();
        self.collapsed = false;
        self.completed_at = None;
        self.run_error = None;
        self.started_at = now;
        self.dots_tick = 0;
        self.session_id = utils::current_session_id();
    }

    /// Map a key press to an action
    pub fn handle_key(&mut self, key: KeyEvent) -> AppResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppResult::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppResult::Quit,

            KeyCode::Char('1') => self.set_language(Language::Zh),
            KeyCode::Char('2') => self.set_language(Language::En),
            KeyCode::Char('3') => self.set_language(Language::Ja),

            KeyCode::Char('d') if self.remediation() == Some(Remediation::Reconnect) => {
                self.toggle_detail()
            }

            KeyCode::Char('r') | KeyCode::Enter
                if self.remediation() == Some(Remediation::Reload) =>
            {
                return AppResult::Reload;
            }

            KeyCode::Char('c') | KeyCode::Enter
                if self.remediation() == Some(Remediation::Reconnect) =>
            {
                return AppResult::Reconnect(self.navigation.clone());
            }

            _ => {}
        }

        AppResult::Continue
    }
}
