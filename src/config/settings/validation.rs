// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::time::Duration;

use crate::browser::{detect_locale, Environment};
use crate::error::{DiagError, Result};
use crate::i18n::Language;

use super::Settings;

/// Longest probe timeout accepted from configuration
pub const MAX_PROBE_TIMEOUT_MS: u64 = 60_000;

impl Settings {
    /// Reject values that would make a run meaningless.
    pub fn validate(&self) -> Result<()> {
        let timeout = self.probe.timeout_ms;
        if timeout == 0 || timeout > MAX_PROBE_TIMEOUT_MS {
            return Err(DiagError::Config(format!(
                "probe.timeout_ms must be between 1 and {}, got {}",
                MAX_PROBE_TIMEOUT_MS, timeout
            )));
        }
        Ok(())
    }

    /// Probe timeout as a duration.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe.timeout_ms)
    }

    /// Environment to classify: configured values over detected ones.
    ///
    /// A configured user agent replaces the detected one together with its
    /// application name and version, so only configured app fields remain.
    pub fn environment(&self) -> Environment {
        let mut env = Environment::detect();
        let configured = &self.environment;

        if let Some(ua) = &configured.user_agent {
            env.user_agent = ua.clone();
            env.app_name = None;
            env.app_version = None;
        }
        if let Some(name) = &configured.app_name {
            env.app_name = Some(name.clone());
        }
        if let Some(version) = &configured.app_version {
            env.app_version = Some(version.clone());
        }
        env.locale = configured.locale.clone().or_else(detect_locale);
        env
    }

    /// Effective language: explicit setting, then the locale, then English.
    pub fn language_for(&self, env: &Environment) -> Language {
        self.language
            .or_else(|| env.locale.as_deref().map(Language::from_locale))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut settings = Settings::default();
        settings.probe.timeout_ms = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("probe.timeout_ms"));
    }

    #[test]
    fn test_huge_timeout_rejected() {
        let mut settings = Settings::default();
        settings.probe.timeout_ms = MAX_PROBE_TIMEOUT_MS + 1;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_probe_timeout_duration() {
        assert_eq!(
            Settings::default().probe_timeout(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn test_environment_prefers_configured_values() {
        let mut settings = Settings::default();
        settings.environment.user_agent = Some("Mozilla/5.0 Firefox/120.0".to_string());
        settings.environment.locale = Some("ja_JP".to_string());

        let env = settings.environment();
        assert_eq!(env.user_agent, "Mozilla/5.0 Firefox/120.0");
        assert_eq!(env.locale.as_deref(), Some("ja_JP"));
        assert!(env.app_name.is_none());
        assert!(env.app_version.is_none());
    }

    #[test]
    fn test_configured_user_agent_fallback_does_not_describe_this_tool() {
        let mut settings = Settings::default();
        settings.environment.user_agent = Some("curl/8.4.0".to_string());

        let desc = crate::browser::classify(&settings.environment());
        assert_eq!(desc.name, crate::browser::BrowserName::Unknown);
        assert_eq!(desc.version, "-?");
    }

    #[test]
    fn test_configured_user_agent_keeps_configured_app_fields() {
        let mut settings = Settings::default();
        settings.environment.user_agent = Some("curl/8.4.0".to_string());
        settings.environment.app_name = Some("Host".to_string());

        let env = settings.environment();
        assert_eq!(env.app_name.as_deref(), Some("Host"));
        assert!(env.app_version.is_none());
    }

    #[test]
    fn test_detected_app_kept_without_configured_user_agent() {
        let env = Settings::default().environment();
        assert_eq!(env.app_name.as_deref(), Some("rakko-diag"));
    }

    #[test]
    fn test_language_setting_overrides_locale() {
        let mut settings = Settings::default();
        settings.language = Some(Language::Zh);
        let env = Environment::new("ua").with_locale("ja_JP");
        assert_eq!(settings.language_for(&env), Language::Zh);
    }

    #[test]
    fn test_language_from_locale_then_english() {
        let settings = Settings::default();
        let env = Environment::new("ua").with_locale("ja_JP");
        assert_eq!(settings.language_for(&env), Language::Ja);
        assert_eq!(
            settings.language_for(&Environment::new("ua")),
            Language::En
        );
    }
}
