// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host environment as seen by the classifier

use serde::{Deserialize, Serialize};

/// Locale variables consulted, highest precedence first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Identity data the classifier works from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// User-agent string
    pub user_agent: String,
    /// Host-reported application name, used when no browser token matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    /// Host-reported application version, used alongside `app_name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    /// Reported locale (e.g. `ja_JP.UTF-8`, `zh-CN`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Environment {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            app_name: None,
            app_version: None,
            locale: None,
        }
    }

    pub fn with_app(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self.app_version = Some(version.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Environment describing this process when no browser identity is supplied
    pub fn detect() -> Self {
        let mut env = Self::new(default_user_agent())
            .with_app(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        env.locale = detect_locale();
        env
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}

/// User agent this tool reports for itself
pub fn default_user_agent() -> String {
    format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// First non-empty locale variable from the process environment
pub fn detect_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_builder() {
        let env = Environment::new("Mozilla/5.0")
            .with_app("Netscape", "5.0")
            .with_locale("ja_JP.UTF-8");
        assert_eq!(env.user_agent, "Mozilla/5.0");
        assert_eq!(env.app_name.as_deref(), Some("Netscape"));
        assert_eq!(env.app_version.as_deref(), Some("5.0"));
        assert_eq!(env.locale.as_deref(), Some("ja_JP.UTF-8"));
    }

    #[test]
    fn test_default_user_agent_names_the_tool() {
        let ua = default_user_agent();
        assert!(ua.starts_with("rakko-diag/"));
        assert!(ua.contains(std::env::consts::OS));
    }

    #[test]
    fn test_detect_reports_package_as_app() {
        let env = Environment::detect();
        assert_eq!(env.app_name.as_deref(), Some("rakko-diag"));
        assert_eq!(env.app_version.as_deref(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_environment_json_skips_missing_fields() {
        let env = Environment::new("ua");
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, "{\"user_agent\":\"ua\"}");
    }
}
