// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Run report
//!
//! A serializable summary of a finished (or in-progress) run, rendered for
//! `--format json` and as plain text for non-interactive terminals.

use serde::Serialize;

use crate::browser::BrowserDescriptor;
use crate::diagnostic::{
    AggregateStatus, CheckId, CheckStatus, Navigation, Remediation, RunState, Stage,
};
use crate::i18n::{check_text, Language, StringId};

/// One check row of the report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub id: CheckId,
    pub status: CheckStatus,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Summary of a diagnostic run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub session_id: String,
    pub language: Language,
    pub stage: Stage,
    pub aggregate: AggregateStatus,
    pub header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub remediation: Remediation,
    pub checks: Vec<CheckReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<BrowserDescriptor>,
    /// Only present when the offered action is reconnect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
}

impl Report {
    pub fn new(
        state: &RunState,
        lang: Language,
        session_id: impl Into<String>,
        navigation: Navigation,
    ) -> Self {
        let aggregate = state.aggregate();
        let remediation = Remediation::for_aggregate(aggregate);

        let header = if state.is_completed() {
            lang.text(aggregate.header())
        } else {
            lang.text(StringId::HeaderInitial)
        };

        let checks = state
            .checks()
            .iter()
            .map(|item| {
                let text = check_text(item.id, item.status, lang);
                CheckReport {
                    id: item.id,
                    status: item.status,
                    label: text.label.to_string(),
                    detail: text.detail.map(str::to_string),
                }
            })
            .collect();

        Self {
            session_id: session_id.into(),
            language: lang,
            stage: state.stage(),
            aggregate,
            header: header.to_string(),
            subtitle: aggregate.subtitle().map(|id| lang.text(id).to_string()),
            remediation,
            checks,
            browser: state.browser().cloned(),
            navigation: match remediation {
                Remediation::Reconnect => Some(navigation),
                Remediation::Reload => None,
            },
        }
    }

    /// Plain-text rendering, one check per line
    pub fn to_text(&self) -> String {
        let lang = self.language;
        let mut out = String::new();

        out.push_str(&self.header);
        out.push('\n');
        if let Some(subtitle) = &self.subtitle {
            out.push_str(subtitle);
            out.push('\n');
        }
        out.push('\n');

        for check in &self.checks {
            out.push_str(&format!(
                "  [{:<7}] {}\n",
                check.status.as_str(),
                check.label
            ));
            if let Some(detail) = &check.detail {
                out.push_str(&format!("            {}\n", detail));
            }
        }

        match self.aggregate {
            AggregateStatus::Error => {
                if let Some(browser) = self.browser.as_ref().filter(|b| !b.is_modern) {
                    out.push('\n');
                    out.push_str(&format!(
                        "{}: {}\n",
                        lang.text(StringId::CurrBrowser),
                        browser.summary()
                    ));
                }
            }
            AggregateStatus::Warning | AggregateStatus::Success => {
                out.push('\n');
                let desc = if self.aggregate == AggregateStatus::Warning {
                    out.push_str(lang.text(StringId::NoticeTitle));
                    out.push('\n');
                    StringId::NoticeWarnDesc
                } else {
                    StringId::NoticeSuccessDesc
                };
                out.push_str(lang.text(desc));
                out.push('\n');

                if let Some(browser) = &self.browser {
                    out.push('\n');
                    out.push_str(&format!(
                        "{}: {}: {}\n",
                        lang.text(StringId::SysInfo),
                        lang.text(StringId::CurrBrowser),
                        browser.summary()
                    ));
                }
            }
        }

        out.push('\n');
        out.push_str(&format!("-> {}", lang.text(self.remediation.button())));
        match &self.navigation {
            Some(Navigation::To(target)) => out.push_str(&format!(" ({})", target)),
            Some(Navigation::HistoryBack) => out.push_str(" (history back)"),
            None => {}
        }
        out.push('\n');
        out.push_str(&format!("ID: {}\n", self.session_id));
        out
    }
}
