// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Aggregate status of a run

use std::fmt;

use serde::Serialize;

use super::check::{CheckItem, CheckStatus};
use crate::i18n::StringId;

/// Headline outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateStatus {
    Success,
    Warning,
    Error,
}

impl AggregateStatus {
    /// Fold check statuses. Error has the highest precedence, then warning.
    pub fn fold(checks: &[CheckItem]) -> Self {
        let has = |status| checks.iter().any(|c: &CheckItem| c.status == status);
        if has(CheckStatus::Error) {
            AggregateStatus::Error
        } else if has(CheckStatus::Warning) {
            AggregateStatus::Warning
        } else {
            AggregateStatus::Success
        }
    }

    pub fn header(&self) -> StringId {
        match self {
            AggregateStatus::Success => StringId::HeaderSuccess,
            AggregateStatus::Warning => StringId::HeaderWarning,
            AggregateStatus::Error => StringId::HeaderError,
        }
    }

    /// Subtitle under the header; success has none
    pub fn subtitle(&self) -> Option<StringId> {
        match self {
            AggregateStatus::Success => None,
            AggregateStatus::Warning => Some(StringId::SubWarning),
            AggregateStatus::Error => Some(StringId::SubError),
        }
    }

    /// Process exit code for scripted runs
    pub fn exit_code(&self) -> i32 {
        match self {
            AggregateStatus::Error => 1,
            AggregateStatus::Success | AggregateStatus::Warning => 0,
        }
    }
}

impl fmt::Display for AggregateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AggregateStatus::Success => "success",
            AggregateStatus::Warning => "warning",
            AggregateStatus::Error => "error",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::CheckId;

    fn items(statuses: [CheckStatus; 4]) -> Vec<CheckItem> {
        CheckId::all()
            .iter()
            .zip(statuses)
            .map(|(id, status)| CheckItem { id: *id, status })
            .collect()
    }

    #[test]
    fn test_all_success() {
        let checks = items([CheckStatus::Success; 4]);
        assert_eq!(AggregateStatus::fold(&checks), AggregateStatus::Success);
    }

    #[test]
    fn test_warning_without_error() {
        let checks = items([
            CheckStatus::Success,
            CheckStatus::Success,
            CheckStatus::Success,
            CheckStatus::Warning,
        ]);
        assert_eq!(AggregateStatus::fold(&checks), AggregateStatus::Warning);
    }

    #[test]
    fn test_error_overrides_warning() {
        let checks = items([
            CheckStatus::Success,
            CheckStatus::Error,
            CheckStatus::Success,
            CheckStatus::Warning,
        ]);
        assert_eq!(AggregateStatus::fold(&checks), AggregateStatus::Error);
    }

    #[test]
    fn test_fold_of_unfinished_run_ignores_open_checks() {
        let checks = items([
            CheckStatus::Success,
            CheckStatus::Running,
            CheckStatus::Pending,
            CheckStatus::Pending,
        ]);
        assert_eq!(AggregateStatus::fold(&checks), AggregateStatus::Success);
    }

    #[test]
    fn test_header_and_subtitle() {
        assert_eq!(AggregateStatus::Error.header(), StringId::HeaderError);
        assert_eq!(AggregateStatus::Success.subtitle(), None);
        assert_eq!(
            AggregateStatus::Warning.subtitle(),
            Some(StringId::SubWarning)
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AggregateStatus::Error.exit_code(), 1);
        assert_eq!(AggregateStatus::Warning.exit_code(), 0);
        assert_eq!(AggregateStatus::Success.exit_code(), 0);
    }
}
