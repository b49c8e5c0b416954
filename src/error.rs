// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for rakko-diag
//!
//! Probe failures are not errors: they collapse into
//! [`Reachability::Unreachable`](crate::probe::Reachability). The variants
//! here cover the ambient failures around a run (settings, terminal, state
//! machine misuse).

use thiserror::Error;

use crate::diagnostic::{CheckId, CheckStatus, Stage};

/// Main error type for rakko-diag operations
#[derive(Error, Debug)]
pub enum DiagError {
    /// A run-state event that would break stage or check ordering
    #[error("Invalid transition: {0}")]
    Transition(#[from] TransitionError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Terminal UI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// Reducer rejections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Event not accepted in the current stage
    #[error("event {event} not allowed in stage {stage:?}")]
    Stage { stage: Stage, event: &'static str },

    /// A check was started out of order or twice
    #[error("check {id} cannot start: {reason}")]
    CheckStart { id: CheckId, reason: &'static str },

    /// A check was finished without running, or with a status it cannot hold
    #[error("check {id} cannot finish as {status}: {reason}")]
    CheckFinish {
        id: CheckId,
        status: CheckStatus,
        reason: &'static str,
    },

    /// Browser descriptor already recorded for this run
    #[error("browser already classified for this run")]
    BrowserAlreadyClassified,

    /// Run completion requested while checks are still open
    #[error("{0} check(s) have not finished")]
    ChecksOutstanding(usize),
}

/// Result type alias for rakko-diag operations
pub type Result<T> = std::result::Result<T, DiagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diag_error_config() {
        let err = DiagError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_diag_error_invalid_input() {
        let err = DiagError::InvalidInput("bad input".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_diag_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DiagError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_diag_error_from_transition() {
        let err: DiagError = TransitionError::BrowserAlreadyClassified.into();
        assert!(err.to_string().contains("Invalid transition"));
        assert!(err.to_string().contains("already classified"));
    }

    #[test]
    fn test_transition_error_check_start_message() {
        let err = TransitionError::CheckStart {
            id: CheckId::PrimarySite,
            reason: "predecessor not finished",
        };
        let msg = err.to_string();
        assert!(msg.contains("primary-site"));
        assert!(msg.contains("predecessor not finished"));
    }

    #[test]
    fn test_transition_error_check_finish_message() {
        let err = TransitionError::CheckFinish {
            id: CheckId::CdnEdge,
            status: CheckStatus::Warning,
            reason: "probe checks cannot warn",
        };
        let msg = err.to_string();
        assert!(msg.contains("cdn-edge"));
        assert!(msg.contains("warning"));
    }

    #[test]
    fn test_diag_error_debug() {
        let err = DiagError::Tui("draw failed".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Tui"));
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(DiagError::InvalidInput("test".to_string()))
        }

        assert!(test_fn().is_err());
    }
}
