// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Full runs against local HTTP targets

use std::sync::Arc;
use std::time::{Duration, Instant};

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rakko_diag::browser::{BrowserName, Environment};
use rakko_diag::diagnostic::{
    reconnect_target_for, AggregateStatus, CheckId, CheckStatus, Navigation, Orchestrator,
    Pacing, Remediation, RunState, Stage,
};
use rakko_diag::i18n::Language;
use rakko_diag::probe::{HttpProbe, Probe, ProbeTargets, Reachability};
use rakko_diag::report::Report;

const CHROME_120: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FIREFOX_95: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:95.0) Gecko/20100101 Firefox/95.0";

/// Nothing listens here, so connections are refused
const DEAD_TARGET: &str = "http://127.0.0.1:1/favicon.ico";

async fn mock_targets() -> MockServer {
    let server = MockServer::start().await;
    for p in ["/global.ico", "/primary.ico", "/cdn-cgi/trace"] {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
    }
    server
}

fn targets(server: &MockServer) -> ProbeTargets {
    let url = |p: &str| Url::parse(&format!("{}{}", server.uri(), p)).unwrap();
    ProbeTargets::new(url("/global.ico"), url("/primary.ico"), url("/cdn-cgi/trace"))
}

fn orchestrator(targets: ProbeTargets) -> Orchestrator {
    let probe = HttpProbe::new(Duration::from_millis(500)).unwrap();
    Orchestrator::new(Arc::new(probe))
        .with_targets(targets)
        .with_pacing(Pacing::none())
}

async fn run(targets: ProbeTargets, ua: &str) -> RunState {
    orchestrator(targets)
        .run(&Environment::new(ua))
        .await
        .unwrap()
}

// ==================== Outcomes ====================

#[tokio::test]
async fn test_every_check_ends_terminal() {
    let server = mock_targets().await;
    let state = run(targets(&server), CHROME_120).await;

    assert_eq!(state.stage(), Stage::Completed);
    assert!(state.checks().iter().all(|c| c.status.is_terminal()));
    assert_eq!(state.aggregate(), AggregateStatus::Success);
    assert_eq!(state.aggregate().exit_code(), 0);
}

#[tokio::test]
async fn test_firefox_95_with_reachable_targets_is_warning() {
    let server = mock_targets().await;
    let state = run(targets(&server), FIREFOX_95).await;

    assert_eq!(state.status(CheckId::BrowserEnv), CheckStatus::Warning);
    assert_eq!(state.aggregate(), AggregateStatus::Warning);
    assert_eq!(
        Remediation::for_aggregate(state.aggregate()),
        Remediation::Reconnect
    );
    assert_eq!(state.browser().unwrap().name, BrowserName::Firefox);
}

#[tokio::test]
async fn test_unreachable_target_beats_browser_warning() {
    let server = mock_targets().await;
    let good = targets(&server);
    let broken = ProbeTargets::new(
        good.global.clone(),
        Url::parse(DEAD_TARGET).unwrap(),
        good.cdn.clone(),
    );
    let state = run(broken, FIREFOX_95).await;

    assert_eq!(state.status(CheckId::PrimarySite), CheckStatus::Error);
    assert_eq!(state.status(CheckId::BrowserEnv), CheckStatus::Warning);
    assert_eq!(state.aggregate(), AggregateStatus::Error);
    assert_eq!(state.aggregate().exit_code(), 1);
    assert_eq!(
        Remediation::for_aggregate(state.aggregate()),
        Remediation::Reload
    );
}

#[tokio::test]
async fn test_slow_target_times_out_as_error() {
    let server = mock_targets().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let good = targets(&server);
    let slow = ProbeTargets::new(
        good.global.clone(),
        good.primary.clone(),
        Url::parse(&format!("{}/slow", server.uri())).unwrap(),
    );

    let started = Instant::now();
    let state = run(slow, CHROME_120).await;

    assert_eq!(state.status(CheckId::CdnEdge), CheckStatus::Error);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_probe_timeout_bound() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let timeout = Duration::from_millis(300);
    let probe = HttpProbe::new(timeout).unwrap();
    let url = Url::parse(&server.uri()).unwrap();

    let started = Instant::now();
    let result = probe.probe(&url).await;
    let elapsed = started.elapsed();

    assert_eq!(result, Reachability::Unreachable);
    assert!(elapsed >= timeout);
    assert!(elapsed < Duration::from_secs(3));
}

// ==================== Reporting ====================

#[tokio::test]
async fn test_report_carries_return_to() {
    let server = mock_targets().await;
    let state = run(targets(&server), CHROME_120).await;

    let page = Url::parse("https://rakko.cn/offline?return_to=/dashboard").unwrap();
    let report = Report::new(&state, Language::En, "ABC123", reconnect_target_for(&page));
    assert_eq!(
        report.navigation,
        Some(Navigation::To("/dashboard".to_string()))
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["aggregate"], "success");
    assert_eq!(json["checks"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_report_without_return_to_goes_back() {
    let server = mock_targets().await;
    let state = run(targets(&server), CHROME_120).await;

    let page = Url::parse("https://rakko.cn/offline").unwrap();
    let report = Report::new(&state, Language::Zh, "ABC123", reconnect_target_for(&page));
    assert_eq!(report.navigation, Some(Navigation::HistoryBack));
}

#[tokio::test]
async fn test_observer_sees_monotonic_progress() {
    let server = mock_targets().await;
    let mut snapshots = Vec::new();
    orchestrator(targets(&server))
        .run_observed(&Environment::new(CHROME_120), |s| snapshots.push(s.clone()))
        .await
        .unwrap();

    for pair in snapshots.windows(2) {
        assert!(pair[0].stage() <= pair[1].stage());
        let settled_before = pair[0].checks().iter().filter(|c| c.status.is_terminal()).count();
        let settled_after = pair[1].checks().iter().filter(|c| c.status.is_terminal()).count();
        assert!(settled_before <= settled_after);
    }
}
