// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! - `run`: the diagnostic itself (default when no command is given)
//! - `classify`: classify a user-agent string without probing

pub mod classify;
pub mod run;
