// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! User-agent classification
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. Trident engine: always `IE`, never modern, version from `rv:N`.
//! 2. Chrome token carrying an `OPR/N` or `Edge/N` marker: reported as that
//!    vendor with its own version, modern when that version is above
//!    [`CHROMIUM_VENDOR_MODERN_AFTER`].
//! 3. Generic token/version, with `Version/N` overriding the version.
//!    Unmatched strings fall back to the host application name/version.
//!
//! The OS is derived independently, see [`OsName::detect`].
//!
//! The cutoffs in rule 2 and rule 3 are not consistent with each other
//! (Opera numbers its releases independently of Chrome). They are kept as
//! they are and exposed through [`ModernityPolicy`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::descriptor::{BrowserDescriptor, BrowserName, OsName};
use super::environment::Environment;

/// Chrome-engine vendors (Opera, legacy Edge) count as modern above this version
pub const CHROMIUM_VENDOR_MODERN_AFTER: u32 = 80;

/// Oldest Chrome major version considered modern
pub const CHROME_MIN_MODERN: u32 = 90;

/// Oldest Firefox major version considered modern
pub const FIREFOX_MIN_MODERN: u32 = 90;

/// Oldest Safari major version considered modern
pub const SAFARI_MIN_MODERN: u32 = 14;

/// Version reported when neither a token nor the host supplies one
pub const PLACEHOLDER_VERSION: &str = "-?";

static ENGINE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:(opera|chrome|safari|firefox|msie)/?|(trident)/)\s*(\d+)")
        .expect("engine token pattern is valid")
});

static TRIDENT_REVISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brv[ :]+(\d+)").expect("revision pattern is valid"));

static CHROMIUM_VENDOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(OPR|Edge)/(\d+)").expect("vendor pattern is valid"));

static VERSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)version/(\d+)").expect("version pattern is valid"));

/// Per-vendor modernity cutoffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModernityPolicy {
    /// Opera/Edge on the Chrome engine are modern when their version is above this
    #[serde(default = "default_chromium_vendor_modern_after")]
    pub chromium_vendor_modern_after: u32,

    #[serde(default = "default_chrome_min")]
    pub chrome_min: u32,

    #[serde(default = "default_firefox_min")]
    pub firefox_min: u32,

    #[serde(default = "default_safari_min")]
    pub safari_min: u32,
}

fn default_chromium_vendor_modern_after() -> u32 {
    CHROMIUM_VENDOR_MODERN_AFTER
}

fn default_chrome_min() -> u32 {
    CHROME_MIN_MODERN
}

fn default_firefox_min() -> u32 {
    FIREFOX_MIN_MODERN
}

fn default_safari_min() -> u32 {
    SAFARI_MIN_MODERN
}

impl Default for ModernityPolicy {
    fn default() -> Self {
        Self {
            chromium_vendor_modern_after: CHROMIUM_VENDOR_MODERN_AFTER,
            chrome_min: CHROME_MIN_MODERN,
            firefox_min: FIREFOX_MIN_MODERN,
            safari_min: SAFARI_MIN_MODERN,
        }
    }
}

impl ModernityPolicy {
    /// Modernity for descriptors produced by the generic rule
    fn generic_is_modern(&self, name: &BrowserName, version: &str) -> bool {
        let major = leading_int(version);
        let below = |min: u32| major.is_some_and(|v| v < min);

        match name {
            BrowserName::InternetExplorer => false,
            BrowserName::Chrome => !below(self.chrome_min),
            BrowserName::Firefox => !below(self.firefox_min),
            BrowserName::Safari => !below(self.safari_min),
            _ => true,
        }
    }
}

/// Classify with the default cutoffs
pub fn classify(env: &Environment) -> BrowserDescriptor {
    classify_with(env, &ModernityPolicy::default())
}

/// Classify a host environment into a [`BrowserDescriptor`]
pub fn classify_with(env: &Environment, policy: &ModernityPolicy) -> BrowserDescriptor {
    let ua = env.user_agent.as_str();
    let os = OsName::detect(ua);
    let descriptor = |name: BrowserName, version: String, is_modern: bool| BrowserDescriptor {
        name,
        version,
        os,
        raw_identity: ua.to_string(),
        is_modern,
    };

    let token = ENGINE_TOKEN.captures(ua).map(|caps| {
        let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        let version = caps.get(3).map_or("", |m| m.as_str());
        (name, version.to_string())
    });

    if let Some((name, _)) = &token {
        if name.eq_ignore_ascii_case("trident") {
            let version = TRIDENT_REVISION
                .captures(ua)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            return descriptor(BrowserName::InternetExplorer, version, false);
        }

        if BrowserName::from_token(name) == BrowserName::Chrome {
            if let Some(caps) = CHROMIUM_VENDOR.captures(ua) {
                let vendor = BrowserName::from_token(&caps[1]);
                let version = caps[2].to_string();
                let is_modern =
                    leading_int(&version).is_some_and(|v| v > policy.chromium_vendor_modern_after);
                return descriptor(vendor, version, is_modern);
            }
        }
    }

    let (name, mut version) = match token {
        Some((name, version)) => (BrowserName::from_token(name), version),
        None => (
            env.app_name
                .clone()
                .map(BrowserName::Other)
                .unwrap_or(BrowserName::Unknown),
            env.app_version
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_VERSION.to_string()),
        ),
    };

    if let Some(caps) = VERSION_MARKER.captures(ua) {
        version = caps[1].to_string();
    }

    let is_modern = policy.generic_is_modern(&name, &version);
    descriptor(name, version, is_modern)
}

/// Leading integer of a version string, ignoring leading whitespace
///
/// Digit runs too long for `u32` saturate, so they stay above every cutoff.
fn leading_int(version: &str) -> Option<u32> {
    let trimmed = version.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}
