// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for rakko-diag
//!
//! Handles loading and validating the optional settings file.

pub mod settings;

pub use settings::*;
