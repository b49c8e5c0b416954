// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Browser descriptor types

use std::fmt;

use serde::{Serialize, Serializer};

/// Canonical browser identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrowserName {
    Chrome,
    Firefox,
    Safari,
    Opera,
    Edge,
    /// Trident engine or an `MSIE` token
    InternetExplorer,
    /// Host-reported application name when no browser token matched
    Other(String),
    Unknown,
}

impl BrowserName {
    /// Map a matched user-agent token (any case) to a browser name
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "chrome" => BrowserName::Chrome,
            "firefox" => BrowserName::Firefox,
            "safari" => BrowserName::Safari,
            "opera" | "opr" => BrowserName::Opera,
            "edge" => BrowserName::Edge,
            "msie" | "trident" => BrowserName::InternetExplorer,
            _ => BrowserName::Other(token.to_string()),
        }
    }

    /// Display label, as shown in the system details panel
    pub fn label(&self) -> &str {
        match self {
            BrowserName::Chrome => "Chrome",
            BrowserName::Firefox => "Firefox",
            BrowserName::Safari => "Safari",
            BrowserName::Opera => "Opera",
            BrowserName::Edge => "Edge",
            BrowserName::InternetExplorer => "IE",
            BrowserName::Other(name) => name,
            BrowserName::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BrowserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for BrowserName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Canonical operating system identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsName {
    Windows,
    MacOs,
    Unix,
    Linux,
    Android,
    Ios,
    Unknown,
}

impl OsName {
    /// Substring markers checked in order; first hit wins.
    ///
    /// `Mac` precedes `like Mac`, so iOS user agents (which also carry
    /// `Mac OS X`) report MacOS.
    const MARKERS: [(&'static str, OsName); 6] = [
        ("Win", OsName::Windows),
        ("Mac", OsName::MacOs),
        ("X11", OsName::Unix),
        ("Linux", OsName::Linux),
        ("Android", OsName::Android),
        ("like Mac", OsName::Ios),
    ];

    /// Derive the OS from substring markers in a user-agent string
    pub fn detect(user_agent: &str) -> Self {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| user_agent.contains(marker))
            .map(|(_, os)| *os)
            .unwrap_or(OsName::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OsName::Windows => "Windows",
            OsName::MacOs => "MacOS",
            OsName::Unix => "UNIX",
            OsName::Linux => "Linux",
            OsName::Android => "Android",
            OsName::Ios => "iOS",
            OsName::Unknown => "Unknown OS",
        }
    }
}

impl fmt::Display for OsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for OsName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Result of classifying a user agent. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserDescriptor {
    pub name: BrowserName,
    /// Numeric-ish version string; precision depends on the matching rule
    pub version: String,
    pub os: OsName,
    /// Unprocessed identity string, kept for the details panel only
    pub raw_identity: String,
    pub is_modern: bool,
}

impl BrowserDescriptor {
    /// Firefox and Safari pass the modernity check but still get a
    /// compatibility warning.
    pub fn is_warned_vendor(&self) -> bool {
        matches!(self.name, BrowserName::Firefox | BrowserName::Safari)
    }

    /// One-line summary, e.g. `Chrome 120 (Windows)`
    pub fn summary(&self) -> String {
        format!("{} {} ({})", self.name, self.version, self.os)
    }
}
