// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Localization
//!
//! Check items carry no text of their own. Labels and failure messages are
//! looked up here from the check id, its status and the active language.

mod strings;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::diagnostic::{CheckId, CheckStatus};
use crate::error::DiagError;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    #[default]
    En,
    Ja,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::Zh, Language::En, Language::Ja]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Short label used on the language toggles
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::Zh => "中",
            Language::En => "En",
            Language::Ja => "日",
        }
    }

    /// Best-effort match of a reported locale (`ja_JP.UTF-8`, `zh-CN`, ...)
    /// on its first two letters. Anything else is English.
    pub fn from_locale(locale: &str) -> Self {
        let prefix: String = locale.chars().take(2).collect::<String>().to_lowercase();
        match prefix.as_str() {
            "zh" => Language::Zh,
            "ja" => Language::Ja,
            _ => Language::En,
        }
    }

    /// Look up a string in this language
    pub fn text(&self, id: StringId) -> &'static str {
        strings::lookup(*self, id)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DiagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            "ja" => Ok(Language::Ja),
            other => Err(DiagError::InvalidInput(format!(
                "unsupported language '{}', expected one of zh, en, ja",
                other
            ))),
        }
    }
}

/// Identifiers of every localized string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringId {
    CheckGlobal,
    CheckGlobalFail,
    CheckPrimary,
    CheckPrimaryFail,
    CheckCdn,
    CheckCdnFail,
    CheckBrowser,
    CheckBrowserFail,
    CheckBrowserWarn,
    HeaderError,
    HeaderWarning,
    HeaderSuccess,
    HeaderInitial,
    SubChecking,
    SubError,
    SubWarning,
    NoticeTitle,
    NoticeWarnDesc,
    NoticeSuccessDesc,
    BtnReload,
    BtnReconnect,
    BtnDetails,
    SysInfo,
    CurrBrowser,
}

/// Rendered text for one check row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckText {
    pub label: &'static str,
    /// Present only for `error` and `warning` statuses
    pub detail: Option<&'static str>,
}

/// Derive the label and failure/warning text of a check
pub fn check_text(id: CheckId, status: CheckStatus, lang: Language) -> CheckText {
    let (label, fail) = match id {
        CheckId::GlobalReachability => (StringId::CheckGlobal, StringId::CheckGlobalFail),
        CheckId::PrimarySite => (StringId::CheckPrimary, StringId::CheckPrimaryFail),
        CheckId::CdnEdge => (StringId::CheckCdn, StringId::CheckCdnFail),
        CheckId::BrowserEnv => (StringId::CheckBrowser, StringId::CheckBrowserFail),
    };

    let detail = match status {
        CheckStatus::Error => Some(lang.text(fail)),
        CheckStatus::Warning if id == CheckId::BrowserEnv => {
            Some(lang.text(StringId::CheckBrowserWarn))
        }
        CheckStatus::Warning => Some(lang.text(fail)),
        _ => None,
    };

    CheckText {
        label: lang.text(label),
        detail,
    }
}
