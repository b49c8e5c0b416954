// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Interactive diagnostic view
//!
//! The run executes as a tokio task that publishes every state snapshot over
//! an unbounded channel. The render loop keeps only the latest snapshot.
//! Reload aborts the task and starts a fresh run.

pub mod app;
pub mod input;
pub mod ui;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

use crate::browser::Environment;
use crate::diagnostic::{Navigation, Orchestrator, RunState};
use crate::error::{DiagError, Result};
use crate::i18n::Language;
use app::{App, AppResult};

/// Message from the run task to the render loop
#[derive(Debug)]
pub enum RunUpdate {
    Snapshot(RunState),
    Failed(String),
}

/// How the interactive session ended
#[derive(Debug)]
pub struct TuiOutcome {
    /// Last snapshot seen
    pub state: RunState,
    /// Set when the user chose to reconnect
    pub navigation: Option<Navigation>,
}

/// A running diagnostic task and the receiving end of its snapshots
struct RunHandle {
    task: JoinHandle<()>,
    updates: UnboundedReceiver<RunUpdate>,
}

impl RunHandle {
    fn spawn(orchestrator: &Orchestrator, env: &Environment) -> Self {
        let (tx, updates) = mpsc::unbounded_channel();
        let orchestrator = orchestrator.clone();
        let env = env.clone();

        let task = tokio::spawn(async move {
            let snapshots = tx.clone();
            let result = orchestrator
                .run_observed(&env, move |state| {
                    let _ = snapshots.send(RunUpdate::Snapshot(state.clone()));
                })
                .await;
            if let Err(e) = result {
                tracing::warn!(target: "rakko_diag.tui", error = %e, "diagnostic run failed");
                let _ = tx.send(RunUpdate::Failed(e.to_string()));
            }
        });

        Self { task, updates }
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run the diagnostic in the interactive terminal view
pub async fn run_tui(
    orchestrator: Orchestrator,
    env: Environment,
    lang: Language,
    navigation: Navigation,
) -> Result<TuiOutcome> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(lang, navigation, orchestrator.pacing().collapse);
    let result = run_app(&mut terminal, &mut app, &orchestrator, &env);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let navigation = result?;
    Ok(TuiOutcome {
        state: app.state,
        navigation,
    })
}

/// Main application loop
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    orchestrator: &Orchestrator,
    env: &Environment,
) -> Result<Option<Navigation>> {
    let mut run = RunHandle::spawn(orchestrator, env);

    loop {
        drain_updates(app, &mut run.updates, Instant::now());
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| DiagError::Tui(e.to_string()))?;

        match input::handle_input(app)? {
            AppResult::Continue => {}
            AppResult::Quit => return Ok(None),
            AppResult::Reload => {
                tracing::debug!(target: "rakko_diag.tui", "reloading diagnostic");
                app.reset(Instant::now());
                run = RunHandle::spawn(orchestrator, env);
            }
            AppResult::Reconnect(navigation) => return Ok(Some(navigation)),
        }
    }
}

/// Apply every pending update, then advance the animation clock
fn drain_updates(app: &mut App, updates: &mut UnboundedReceiver<RunUpdate>, now: Instant) {
    while let Ok(update) = updates.try_recv() {
        match update {
            RunUpdate::Snapshot(state) => app.update(state, now),
            RunUpdate::Failed(message) => app.run_error = Some(message),
        }
    }
    app.on_tick(now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{Pacing, RunEvent, Stage};
    use crate::probe::{Probe, Reachability};
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use std::time::Duration;
    use url::Url;

    struct AlwaysReachable;

    #[async_trait]
    impl Probe for AlwaysReachable {
        async fn probe(&self, _url: &Url) -> Reachability {
            Reachability::Reachable
        }
    }

    fn test_app() -> App {
        App::new(Language::En, Navigation::HistoryBack, Duration::ZERO)
    }

    #[test]
    fn test_draw_renders_without_panic() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let result = terminal.draw(|f| ui::draw(f, &app));
        assert!(result.is_ok());
    }

    #[test]
    fn test_draw_in_small_terminal() {
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        assert!(terminal.draw(|f| ui::draw(f, &app)).is_ok());
    }

    #[test]
    fn test_drain_keeps_latest_snapshot() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = RunState::new().apply(RunEvent::Start).unwrap();
        tx.send(RunUpdate::Snapshot(RunState::new())).unwrap();
        tx.send(RunUpdate::Snapshot(started)).unwrap();

        let mut app = test_app();
        drain_updates(&mut app, &mut rx, Instant::now());
        assert_eq!(app.state.stage(), Stage::Running);
        assert!(app.run_error.is_none());
    }

    #[test]
    fn test_drain_records_failure() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(RunUpdate::Failed("bad transition".to_string()))
            .unwrap();

        let mut app = test_app();
        drain_updates(&mut app, &mut rx, Instant::now());
        assert_eq!(app.run_error.as_deref(), Some("bad transition"));
    }

    #[tokio::test]
    async fn test_spawned_run_publishes_completion() {
        let orchestrator = Orchestrator::new(Arc::new(AlwaysReachable)).with_pacing(Pacing::none());
        let env = Environment::new("Mozilla/5.0 (Windows NT 10.0) Chrome/120.0.0.0");
        let mut run = RunHandle::spawn(&orchestrator, &env);

        let mut last = None;
        while let Some(update) = run.updates.recv().await {
            if let RunUpdate::Snapshot(state) = update {
                last = Some(state);
            }
        }
        let last = last.unwrap();
        assert!(last.is_completed());
        assert_eq!(last.aggregate(), crate::diagnostic::AggregateStatus::Success);
    }
}
