//! Error types for status computation.

use compact_str::CompactString;
use thiserror::Error;

use crate::probe::ProbeKind;

/// Errors that abort a status computation.
///
/// An unchanged target is not an error; see [`crate::Outcome::Unchanged`].
#[derive(Debug, Error)]
pub enum StatusError {
    /// The probe process could not be started or waited on.
    #[error("Failed to run {kind} probe for {path}: {source}")]
    ProbeSpawn {
        kind: ProbeKind,
        path: CompactString,
        #[source]
        source: std::io::Error,
    },

    /// The probe exited with a status that is not a boolean answer.
    #[error("Unexpected exit from {kind} probe for {path} ({})", describe_exit(.code))]
    ProbeFailed {
        kind: ProbeKind,
        path: CompactString,
        code: Option<i32>,
    },

    /// The task driving a probe panicked or was cancelled.
    #[error("Task for {kind} probe of {path} did not complete: {message}")]
    ProbeTask {
        kind: ProbeKind,
        path: CompactString,
        message: String,
    },

    /// A previous-status argument that is neither a code nor a sentinel.
    #[error("Invalid status code: {value:?}")]
    InvalidStatusCode { value: String },

    /// A listing without the target's entry.
    #[error("Status listing is empty")]
    EmptyListing,
}

impl StatusError {
    /// Create a spawn error with probe context.
    pub fn spawn(kind: ProbeKind, path: impl Into<CompactString>, source: std::io::Error) -> Self {
        Self::ProbeSpawn {
            kind,
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by the caller's input rather than the
    /// probe environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidStatusCode { .. })
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
