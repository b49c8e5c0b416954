// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Check items

use std::fmt;

use serde::Serialize;

use crate::browser::BrowserDescriptor;
use crate::probe::Reachability;

/// Identifier of a diagnostic check, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    GlobalReachability,
    PrimarySite,
    CdnEdge,
    BrowserEnv,
}

impl CheckId {
    /// All checks in the order they run
    pub fn all() -> &'static [CheckId] {
        &[
            CheckId::GlobalReachability,
            CheckId::PrimarySite,
            CheckId::CdnEdge,
            CheckId::BrowserEnv,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::GlobalReachability => "global-reachability",
            CheckId::PrimarySite => "primary-site",
            CheckId::CdnEdge => "cdn-edge",
            CheckId::BrowserEnv => "browser-env",
        }
    }

    /// Network checks resolve from a probe; they can never warn.
    pub fn is_network(&self) -> bool {
        !matches!(self, CheckId::BrowserEnv)
    }

    /// Position in the run order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a check. Moves forward only: pending, running, then one terminal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    #[default]
    Pending,
    Running,
    Success,
    Error,
    Warning,
}

impl CheckStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CheckStatus::Success | CheckStatus::Error | CheckStatus::Warning
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pending => "pending",
            CheckStatus::Running => "running",
            CheckStatus::Success => "success",
            CheckStatus::Error => "error",
            CheckStatus::Warning => "warning",
        }
    }

    /// Terminal status of a network check
    pub fn from_reachability(reachability: Reachability) -> Self {
        if reachability.is_reachable() {
            CheckStatus::Success
        } else {
            CheckStatus::Error
        }
    }

    /// Terminal status of the browser check
    pub fn from_browser(descriptor: &BrowserDescriptor) -> Self {
        if !descriptor.is_modern {
            CheckStatus::Error
        } else if descriptor.is_warned_vendor() {
            CheckStatus::Warning
        } else {
            CheckStatus::Success
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic unit. Text is derived at render time, see [`crate::i18n`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckItem {
    pub id: CheckId,
    pub status: CheckStatus,
}

impl CheckItem {
    pub fn pending(id: CheckId) -> Self {
        Self {
            id,
            status: CheckStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowserName, OsName};

    fn descriptor(name: BrowserName, is_modern: bool) -> BrowserDescriptor {
        BrowserDescriptor {
            name,
            version: "100".to_string(),
            os: OsName::Windows,
            raw_identity: String::new(),
            is_modern,
        }
    }

    #[test]
    fn test_check_order_matches_index() {
        for (i, id) in CheckId::all().iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_check_id_serializes_kebab_case() {
        let json = serde_json::to_string(&CheckId::GlobalReachability).unwrap();
        assert_eq!(json, "\"global-reachability\"");
        assert_eq!(CheckId::CdnEdge.to_string(), "cdn-edge");
    }

    #[test]
    fn test_only_browser_check_is_not_network() {
        assert!(CheckId::GlobalReachability.is_network());
        assert!(CheckId::CdnEdge.is_network());
        assert!(!CheckId::BrowserEnv.is_network());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!CheckStatus::Pending.is_terminal());
        assert!(!CheckStatus::Running.is_terminal());
        assert!(CheckStatus::Success.is_terminal());
        assert!(CheckStatus::Error.is_terminal());
        assert!(CheckStatus::Warning.is_terminal());
    }

    #[test]
    fn test_status_from_reachability() {
        assert_eq!(
            CheckStatus::from_reachability(Reachability::Reachable),
            CheckStatus::Success
        );
        assert_eq!(
            CheckStatus::from_reachability(Reachability::Unreachable),
            CheckStatus::Error
        );
    }

    #[test]
    fn test_status_from_browser() {
        assert_eq!(
            CheckStatus::from_browser(&descriptor(BrowserName::InternetExplorer, false)),
            CheckStatus::Error
        );
        assert_eq!(
            CheckStatus::from_browser(&descriptor(BrowserName::Firefox, true)),
            CheckStatus::Warning
        );
        assert_eq!(
            CheckStatus::from_browser(&descriptor(BrowserName::Safari, true)),
            CheckStatus::Warning
        );
        assert_eq!(
            CheckStatus::from_browser(&descriptor(BrowserName::Chrome, true)),
            CheckStatus::Success
        );
    }

    #[test]
    fn test_old_firefox_is_error_not_warning() {
        assert_eq!(
            CheckStatus::from_browser(&descriptor(BrowserName::Firefox, false)),
            CheckStatus::Error
        );
    }
}
