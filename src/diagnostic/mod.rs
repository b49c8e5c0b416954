// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Diagnostic run: checks, run state, orchestration and remediation

pub mod aggregate;
pub mod check;
pub mod orchestrator;
pub mod remediation;
pub mod state;

pub use aggregate::*;
pub use check::*;
pub use orchestrator::*;
pub use remediation::*;
pub use state::*;
