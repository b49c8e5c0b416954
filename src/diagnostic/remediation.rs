// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Remediation actions offered after a run

use serde::Serialize;
use url::Url;

use super::aggregate::AggregateStatus;
use crate::i18n::StringId;

/// Query parameter naming where "reconnect" should go
pub const RETURN_TO_PARAM: &str = "return_to";

/// Action offered in the summary view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Remediation {
    /// Reload and run the diagnostic again
    Reload,
    /// Go back to where the user came from
    Reconnect,
}

impl Remediation {
    pub fn for_aggregate(aggregate: AggregateStatus) -> Self {
        match aggregate {
            AggregateStatus::Error => Remediation::Reload,
            AggregateStatus::Warning | AggregateStatus::Success => Remediation::Reconnect,
        }
    }

    pub fn button(&self) -> StringId {
        match self {
            Remediation::Reload => StringId::BtnReload,
            Remediation::Reconnect => StringId::BtnReconnect,
        }
    }
}

/// Where the reconnect action navigates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "target")]
pub enum Navigation {
    /// Caller-supplied `return_to` target, passed through verbatim
    To(String),
    /// No target supplied: one step back in history
    HistoryBack,
}

/// Resolve the reconnect target from a query string (leading `?` optional)
///
/// The target is not validated. Any value, including other origins, is
/// returned as is.
pub fn reconnect_target(query: &str) -> Navigation {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == RETURN_TO_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .map(Navigation::To)
        .unwrap_or(Navigation::HistoryBack)
}

/// Resolve the reconnect target from the full URL of the failed page
pub fn reconnect_target_for(page: &Url) -> Navigation {
    reconnect_target(page.query().unwrap_or(""))
}
