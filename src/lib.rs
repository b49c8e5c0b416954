// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rakko-diag - find out why a Rakko page failed to load.
//!
//! This crate exposes the diagnostic used by the `rakko-diag` CLI
//! (`src/main.rs`):
//! - `probe`: timeout-bounded, content-blind reachability checks
//! - `browser`: user-agent classification and modernity cutoffs
//! - `diagnostic`: check list, run state reducer, sequential orchestrator,
//!   aggregate status and remediation
//! - `i18n`: zh/en/ja strings keyed by check and status
//! - `report`, `tui`: plain/JSON output and the interactive view

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod i18n;
pub mod probe;
pub mod report;
pub mod tui;
pub mod utils;

pub use error::{DiagError, Result};
