// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Fixed probe targets

use url::Url;

use crate::diagnostic::CheckId;

/// Global reachability reference
pub const GLOBAL_TARGET: &str = "https://www.google.com/favicon.ico";

/// The product's own primary domain
pub const PRIMARY_TARGET: &str = "https://rakko.cn/favicon.ico";

/// CDN edge trace endpoint
pub const CDN_TARGET: &str = "https://www.cloudflare.com/cdn-cgi/trace";

/// Query parameter carrying the cache-busting token
pub const CACHE_BUST_PARAM: &str = "t";

/// The three URLs the network checks probe
///
/// Not user configurable. [`ProbeTargets::new`] exists so tests can point
/// the run at a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTargets {
    pub global: Url,
    pub primary: Url,
    pub cdn: Url,
}

impl ProbeTargets {
    pub fn new(global: Url, primary: Url, cdn: Url) -> Self {
        Self {
            global,
            primary,
            cdn,
        }
    }

    /// Target probed by a check; `None` for the browser check
    pub fn for_check(&self, id: CheckId) -> Option<&Url> {
        match id {
            CheckId::GlobalReachability => Some(&self.global),
            CheckId::PrimarySite => Some(&self.primary),
            CheckId::CdnEdge => Some(&self.cdn),
            CheckId::BrowserEnv => None,
        }
    }
}

impl Default for ProbeTargets {
    fn default() -> Self {
        let parse = |raw: &str| Url::parse(raw).expect("built-in probe target is a valid URL");
        Self::new(parse(GLOBAL_TARGET), parse(PRIMARY_TARGET), parse(CDN_TARGET))
    }
}

/// Append a uniqueness token so intermediate caches cannot answer for the target
pub fn cache_busted(url: &Url, token: i64) -> Url {
    let mut busted = url.clone();
    busted
        .query_pairs_mut()
        .append_pair(CACHE_BUST_PARAM, &token.to_string());
    busted
}
