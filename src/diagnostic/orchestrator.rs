// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sequential driver for a diagnostic run
//!
//! The orchestrator walks the fixed check list one step at a time. Its only
//! suspension points are the probe call and the pacing sleeps; every state
//! change goes through [`RunState::apply`] and is published to the observer
//! before the next step begins.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::check::{CheckId, CheckStatus};
use super::state::{RunEvent, RunState};
use crate::browser::{classify_with, Environment, ModernityPolicy};
use crate::error::Result;
use crate::probe::{cache_busted, Probe, ProbeTargets};

/// Presentation pacing between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Pause before the first check so the initial message can be read
    #[serde(with = "millis", default = "default_initial")]
    pub initial: Duration,

    /// Pause after each network check
    #[serde(with = "millis", default = "default_between_checks")]
    pub between_checks: Duration,

    /// Pause between classifying the browser and reporting its status
    #[serde(with = "millis", default = "default_browser_processing")]
    pub browser_processing: Duration,

    /// Delay after completion before the summary view replaces the check list
    #[serde(with = "millis", default = "default_collapse")]
    pub collapse: Duration,
}

fn default_initial() -> Duration {
    Duration::from_millis(1500)
}

fn default_between_checks() -> Duration {
    Duration::from_millis(600)
}

fn default_browser_processing() -> Duration {
    Duration::from_millis(800)
}

fn default_collapse() -> Duration {
    Duration::from_millis(1500)
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            between_checks: default_between_checks(),
            browser_processing: default_browser_processing(),
            collapse: default_collapse(),
        }
    }
}

impl Pacing {
    /// No pauses at all
    pub fn none() -> Self {
        Self {
            initial: Duration::ZERO,
            between_checks: Duration::ZERO,
            browser_processing: Duration::ZERO,
            collapse: Duration::ZERO,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

/// Runs the four checks in order
#[derive(Clone)]
pub struct Orchestrator {
    probe: Arc<dyn Probe>,
    targets: ProbeTargets,
    pacing: Pacing,
    policy: ModernityPolicy,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("targets", &self.targets)
            .field("pacing", &self.pacing)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    pub fn new(probe: Arc<dyn Probe>) -> Self {
        Self {
            probe,
            targets: ProbeTargets::default(),
            pacing: Pacing::default(),
            policy: ModernityPolicy::default(),
        }
    }

    pub fn with_targets(mut self, targets: ProbeTargets) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_policy(mut self, policy: ModernityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Run to completion and return the final state
    pub async fn run(&self, env: &Environment) -> Result<RunState> {
        self.run_observed(env, |_| {}).await
    }

    /// Run to completion, handing every intermediate state to `observer`
    pub async fn run_observed<F>(&self, env: &Environment, mut observer: F) -> Result<RunState>
    where
        F: FnMut(&RunState) + Send,
    {
        let mut state = RunState::new();
        observer(&state);

        pause(self.pacing.initial).await;
        state = advance(&state, RunEvent::Start, &mut observer)?;
        tracing::debug!(target: "rakko_diag.orchestrator", "diagnostic run started");

        for &id in CheckId::all() {
            state = advance(&state, RunEvent::CheckStarted(id), &mut observer)?;

            let status = match self.targets.for_check(id) {
                Some(target) => {
                    let url = cache_busted(target, Utc::now().timestamp_millis());
                    let reachability = self.probe.probe(&url).await;
                    CheckStatus::from_reachability(reachability)
                }
                None => {
                    let descriptor = classify_with(env, &self.policy);
                    tracing::debug!(
                        target: "rakko_diag.orchestrator",
                        browser = %descriptor.summary(),
                        modern = descriptor.is_modern,
                        "browser classified"
                    );
                    let status = CheckStatus::from_browser(&descriptor);
                    state = advance(&state, RunEvent::BrowserClassified(descriptor), &mut observer)?;
                    pause(self.pacing.browser_processing).await;
                    status
                }
            };

            state = advance(&state, RunEvent::CheckFinished { id, status }, &mut observer)?;
            tracing::debug!(target: "rakko_diag.orchestrator", check = %id, %status, "check finished");

            if id.is_network() {
                pause(self.pacing.between_checks).await;
            }
        }

        state = advance(&state, RunEvent::Complete, &mut observer)?;
        tracing::info!(
            target: "rakko_diag.orchestrator",
            aggregate = %state.aggregate(),
            "diagnostic run completed"
        );
        Ok(state)
    }
}

fn advance<F>(state: &RunState, event: RunEvent, observer: &mut F) -> Result<RunState>
where
    F: FnMut(&RunState),
{
    let next = state.apply(event)?;
    observer(&next);
    Ok(next)
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
