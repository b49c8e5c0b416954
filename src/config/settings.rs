// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for rakko-diag
//!
//! Handles loading settings from ~/.rakko-diag/settings.json. The file is
//! optional; every section falls back to built-in defaults. Probe targets
//! are intentionally absent.

use serde::{Deserialize, Serialize};

use crate::browser::ModernityPolicy;
use crate::diagnostic::Pacing;
use crate::i18n::Language;
use crate::probe::DEFAULT_PROBE_TIMEOUT_MS;

mod io;
mod validation;

pub use validation::MAX_PROBE_TIMEOUT_MS;

/// Main settings structure, stored in ~/.rakko-diag/settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Probe behaviour
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Presentation pacing, in milliseconds
    #[serde(default)]
    pub pacing: Pacing,

    /// Browser modernity cutoffs
    #[serde(default)]
    pub modernity: ModernityPolicy,

    /// Defaults for the classified environment
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Display language; detected from the locale when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

/// Probe configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Upper bound on each probe, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_PROBE_TIMEOUT_MS
}

/// Environment defaults, used when the command line does not supply them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EnvironmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}
