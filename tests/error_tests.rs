// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;

use rakko_diag::diagnostic::{CheckId, CheckStatus, RunEvent, RunState, Stage};
use rakko_diag::error::{DiagError, TransitionError};

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error: DiagError = io_error.into();

    match error {
        DiagError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: DiagError = json_error.into();
    assert!(matches!(error, DiagError::Json(_)));
    assert!(error.to_string().starts_with("JSON error:"));
}

#[test]
fn test_config_error_display() {
    let error = DiagError::Config("probe.timeout_ms must be positive".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: probe.timeout_ms must be positive"
    );
}

#[test]
fn test_invalid_input_display() {
    let error = DiagError::InvalidInput("unsupported language 'de'".to_string());
    assert_eq!(error.to_string(), "Invalid input: unsupported language 'de'");
}

#[test]
fn test_tui_error_display() {
    let error = DiagError::Tui("terminal too small".to_string());
    assert_eq!(error.to_string(), "TUI error: terminal too small");
}

#[test]
fn test_transition_error_from_reducer() {
    let err = RunState::new()
        .apply(RunEvent::CheckStarted(CheckId::GlobalReachability))
        .unwrap_err();
    assert_eq!(
        err,
        TransitionError::Stage {
            stage: Stage::Initializing,
            event: "check-started",
        }
    );

    let error: DiagError = err.into();
    assert!(error.to_string().starts_with("Invalid transition:"));
}

#[test]
fn test_check_finish_error_display() {
    let error = TransitionError::CheckFinish {
        id: CheckId::CdnEdge,
        status: CheckStatus::Warning,
        reason: "network checks cannot warn",
    };
    assert_eq!(
        error.to_string(),
        "check cdn-edge cannot finish as warning: network checks cannot warn"
    );
}

#[test]
fn test_outstanding_checks_display() {
    let error = TransitionError::ChecksOutstanding(3);
    assert_eq!(error.to_string(), "3 check(s) have not finished");
}
