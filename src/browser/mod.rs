// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Browser classification
//!
//! Turns a user-agent string (plus the host-reported application name and
//! version) into a [`BrowserDescriptor`]. Everything here is pure.

pub mod classifier;
pub mod descriptor;
pub mod environment;

pub use classifier::*;
pub use descriptor::*;
pub use environment::*;
