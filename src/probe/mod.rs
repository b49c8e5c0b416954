// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Reachability probes
//!
//! A probe answers one question: did the network stack let a request to
//! this URL complete before the timeout? Status codes, bodies and headers
//! are ignored, and every failure cause (DNS, TCP, TLS, timeout, a
//! middlebox resetting the connection) collapses into
//! [`Reachability::Unreachable`].

pub mod http;
pub mod targets;

pub use http::*;
pub use targets::*;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

/// Default upper bound on a single probe
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

/// Outcome of a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reachability {
    Reachable,
    Unreachable,
}

impl Reachability {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Reachability::Reachable)
    }
}

impl From<bool> for Reachability {
    fn from(reachable: bool) -> Self {
        if reachable {
            Reachability::Reachable
        } else {
            Reachability::Unreachable
        }
    }
}

/// Single-shot, timeout-bounded reachability check
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probe a URL once. Never retries, never errors.
    async fn probe(&self, url: &Url) -> Reachability;
}
