//! Ordered path/status listings.

use std::fmt::Write;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::StatusError;
use crate::status::StatusCode;

/// One entry of a propagation listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStatus {
    /// Path as supplied by the caller.
    pub path: CompactString,
    /// Status assigned to the path.
    pub status: StatusCode,
}

impl PathStatus {
    /// Create a new entry.
    pub fn new(path: impl Into<CompactString>, status: StatusCode) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Target status followed by one entry per ancestor, in caller order.
///
/// Never empty: the first entry is always the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<PathStatus>", try_from = "Vec<PathStatus>")]
pub struct PropagationResult {
    entries: Vec<PathStatus>,
}

impl PropagationResult {
    /// Start a listing with the target's entry.
    pub fn new(target: impl Into<CompactString>, status: StatusCode) -> Self {
        Self::with_capacity(target, status, 0)
    }

    /// Start a listing with room for `ancestors` more entries.
    pub fn with_capacity(
        target: impl Into<CompactString>,
        status: StatusCode,
        ancestors: usize,
    ) -> Self {
        let mut entries = Vec::with_capacity(ancestors + 1);
        entries.push(PathStatus::new(target, status));
        Self { entries }
    }

    /// Append the next ancestor.
    pub fn push(&mut self, path: impl Into<CompactString>, status: StatusCode) {
        self.entries.push(PathStatus::new(path, status));
    }

    /// The target's entry.
    pub fn target(&self) -> &PathStatus {
        &self.entries[0]
    }

    /// Ancestor entries, nearest first.
    pub fn ancestors(&self) -> &[PathStatus] {
        &self.entries[1..]
    }

    pub fn entries(&self) -> &[PathStatus] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathStatus> {
        self.entries.iter()
    }

    /// Look up the status recorded for a path (first occurrence).
    pub fn status_of(&self, path: &str) -> Option<StatusCode> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.status)
    }

    /// Render as an Emacs-Lisp association list of `("path" . "code")` conses.
    pub fn to_elisp_alist(&self) -> String {
        let mut out = String::with_capacity(self.entries.len() * 32);
        out.push('(');
        for entry in &self.entries {
            out.push_str("(\"");
            push_lisp_escaped(&mut out, &entry.path);
            let _ = write!(out, "\" . \"{}\")", entry.status);
        }
        out.push(')');
        out
    }
}

impl TryFrom<Vec<PathStatus>> for PropagationResult {
    type Error = StatusError;

    fn try_from(entries: Vec<PathStatus>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            return Err(StatusError::EmptyListing);
        }
        Ok(Self { entries })
    }
}

impl From<PropagationResult> for Vec<PathStatus> {
    fn from(result: PropagationResult) -> Self {
        result.entries
    }
}

impl<'a> IntoIterator for &'a PropagationResult {
    type Item = &'a PathStatus;
    type IntoIter = std::slice::Iter<'a, PathStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn push_lisp_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Result of one status computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target's status differs from the previous one (or there was none).
    Changed(PropagationResult),
    /// The target's status equals the previous one; nothing to render.
    Unchanged,
}

impl Outcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// The listing, if there is one.
    pub fn into_result(self) -> Option<PropagationResult> {
        match self {
            Self::Changed(result) => Some(result),
            Self::Unchanged => None,
        }
    }
}
