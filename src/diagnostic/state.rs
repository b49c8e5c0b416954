// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Run state and its reducer
//!
//! [`RunState`] is a value. Every transition goes through
//! [`RunState::apply`], which returns the next state or rejects the event;
//! the previous state is never modified. The reducer enforces:
//!
//! - the stage only moves initializing → running → completed
//! - a check starts only after every earlier check is terminal
//! - a check status only moves pending → running → terminal
//! - network checks never end in `warning`

use serde::Serialize;

use super::aggregate::AggregateStatus;
use super::check::{CheckId, CheckItem, CheckStatus};
use crate::browser::BrowserDescriptor;
use crate::error::TransitionError;

/// Run lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Initializing,
    Running,
    Completed,
}

/// Events fed to the reducer by the orchestrator
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Initial pause is over, checks begin
    Start,
    /// A check moves to `running`
    CheckStarted(CheckId),
    /// A check reaches its terminal status
    CheckFinished { id: CheckId, status: CheckStatus },
    /// The browser descriptor was produced
    BrowserClassified(BrowserDescriptor),
    /// All checks are terminal
    Complete,
}

impl RunEvent {
    fn name(&self) -> &'static str {
        match self {
            RunEvent::Start => "start",
            RunEvent::CheckStarted(_) => "check-started",
            RunEvent::CheckFinished { .. } => "check-finished",
            RunEvent::BrowserClassified(_) => "browser-classified",
            RunEvent::Complete => "complete",
        }
    }
}

/// State of one diagnostic run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunState {
    stage: Stage,
    checks: Vec<CheckItem>,
    browser: Option<BrowserDescriptor>,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunState {
    /// Fresh state: initializing, every check pending
    pub fn new() -> Self {
        Self {
            stage: Stage::Initializing,
            checks: CheckId::all().iter().copied().map(CheckItem::pending).collect(),
            browser: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Checks in run order
    pub fn checks(&self) -> &[CheckItem] {
        &self.checks
    }

    pub fn status(&self, id: CheckId) -> CheckStatus {
        self.checks[id.index()].status
    }

    pub fn browser(&self) -> Option<&BrowserDescriptor> {
        self.browser.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.stage == Stage::Completed
    }

    /// Any check ended in `error`
    pub fn has_error(&self) -> bool {
        self.checks.iter().any(|c| c.status == CheckStatus::Error)
    }

    /// Any check ended in `warning`
    pub fn has_warning(&self) -> bool {
        self.checks.iter().any(|c| c.status == CheckStatus::Warning)
    }

    /// Fold of the current statuses; error beats warning beats success
    pub fn aggregate(&self) -> AggregateStatus {
        AggregateStatus::fold(&self.checks)
    }

    /// Checks currently holding a given status, in run order
    pub fn with_status(&self, status: CheckStatus) -> impl Iterator<Item = &CheckItem> {
        self.checks.iter().filter(move |c| c.status == status)
    }

    /// Compute the state that follows `event`
    pub fn apply(&self, event: RunEvent) -> Result<RunState, TransitionError> {
        let expected_stage = match event {
            RunEvent::Start => Stage::Initializing,
            _ => Stage::Running,
        };
        if self.stage != expected_stage {
            return Err(TransitionError::Stage {
                stage: self.stage,
                event: event.name(),
            });
        }

        let mut next = self.clone();
        match event {
            RunEvent::Start => {
                next.stage = Stage::Running;
            }
            RunEvent::CheckStarted(id) => {
                if self.status(id) != CheckStatus::Pending {
                    return Err(TransitionError::CheckStart {
                        id,
                        reason: "check already started",
                    });
                }
                let predecessors_done = self.checks[..id.index()]
                    .iter()
                    .all(|c| c.status.is_terminal());
                if !predecessors_done {
                    return Err(TransitionError::CheckStart {
                        id,
                        reason: "an earlier check has not finished",
                    });
                }
                next.checks[id.index()].status = CheckStatus::Running;
            }
            RunEvent::CheckFinished { id, status } => {
                let reject = |reason| TransitionError::CheckFinish { id, status, reason };
                if !status.is_terminal() {
                    return Err(reject("status is not terminal"));
                }
                if id.is_network() && status == CheckStatus::Warning {
                    return Err(reject("network checks cannot warn"));
                }
                if self.status(id) != CheckStatus::Running {
                    return Err(reject("check is not running"));
                }
                next.checks[id.index()].status = status;
            }
            RunEvent::BrowserClassified(descriptor) => {
                if self.browser.is_some() {
                    return Err(TransitionError::BrowserAlreadyClassified);
                }
                next.browser = Some(descriptor);
            }
            RunEvent::Complete => {
                let outstanding = self
                    .checks
                    .iter()
                    .filter(|c| !c.status.is_terminal())
                    .count();
                if outstanding > 0 {
                    return Err(TransitionError::ChecksOutstanding(outstanding));
                }
                next.stage = Stage::Completed;
            }
        }

        Ok(next)
    }
}
