// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP reachability probe

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::redirect::Policy;
use url::Url;

use super::{Probe, Reachability};
use crate::browser::default_user_agent;
use crate::error::Result;

/// Probe backed by a `reqwest` client
///
/// The client keeps no cookies and does not follow redirects: a redirect is
/// itself a completed response. The timeout covers the whole exchange up to
/// the response head; the body is never read.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .user_agent(default_user_agent())
            .default_headers(headers)
            .redirect(Policy::none())
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, url: &Url) -> Reachability {
        let request = self.client.get(url.clone()).send();
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(_response)) => Reachability::Reachable,
            Ok(Err(_)) | Err(_) => Reachability::Unreachable,
        }
    }
}
