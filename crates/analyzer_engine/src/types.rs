use std::fmt;
use std::path::PathBuf;

use analyzer_core::{AnalysisResult, SubmissionId};
use thiserror::Error;

/// Everything needed to build one multipart submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub resume_name: String,
    pub resume_path: PathBuf,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisCompleted {
        submission_id: SubmissionId,
        result: Result<AnalysisResult, AnalysisError>,
    },
}

/// Failure of a single submission. `message` is what the user gets to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalysisError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The service's own body text wins over the generic status message.
    pub(crate) fn http_status(status: u16, body: String) -> Self {
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        };
        Self::new(FailureKind::HttpStatus(status), message)
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

impl std::error::Error for AnalysisError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Network,
    Decode,
    FileRead,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "invalid response body"),
            FailureKind::FileRead => write!(f, "resume not readable"),
        }
    }
}

/// Errors while setting up the engine itself, before any submission runs.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid service url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("service url {0:?} cannot be used as a base")]
    NotABase(String),
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
