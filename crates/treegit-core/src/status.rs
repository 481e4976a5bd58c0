//! Status codes and the probe priority rule.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::StatusError;
use crate::probe::ProbeOutcome;

/// Version-control status of a single path.
///
/// Variants are ordered by propagation severity: `Ignored` and `Untracked`
/// are dominant and override whatever ancestors further up the chain would
/// report on their own.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum StatusCode {
    /// Tracked and identical to the index.
    #[default]
    #[strum(to_string = "0")]
    #[serde(rename = "0")]
    Unmodified,
    /// Tracked with uncommitted changes.
    #[strum(to_string = "M")]
    #[serde(rename = "M")]
    Modified,
    /// Not known to the repository.
    #[strum(to_string = "?")]
    #[serde(rename = "?")]
    Untracked,
    /// Matched by an ignore rule.
    #[strum(to_string = "!")]
    #[serde(rename = "!")]
    Ignored,
}

impl StatusCode {
    /// Single-character wire encoding.
    pub fn as_char(self) -> char {
        match self {
            Self::Unmodified => '0',
            Self::Modified => 'M',
            Self::Untracked => '?',
            Self::Ignored => '!',
        }
    }

    /// Decode a wire character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Unmodified),
            'M' => Some(Self::Modified),
            '?' => Some(Self::Untracked),
            '!' => Some(Self::Ignored),
            _ => None,
        }
    }

    /// Whether this code is propagated unchanged to every farther ancestor.
    pub fn is_dominant(self) -> bool {
        matches!(self, Self::Ignored | Self::Untracked)
    }
}

impl FromStr for StatusCode {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Self::from_char), chars.next()) {
            (Some(code), None) => Ok(code),
            _ => Err(StatusError::InvalidStatusCode {
                value: s.to_string(),
            }),
        }
    }
}

/// Status previously recorded for the target path by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviousStatus {
    /// The caller has no record for this path yet.
    #[default]
    NoPrior,
    /// The last code the caller displayed.
    Known(StatusCode),
}

impl PreviousStatus {
    /// Wire sentinels accepted for "no prior record".
    pub const NO_PRIOR_SENTINELS: &'static [&'static str] = &["", "-", "nil"];

    /// Whether a freshly resolved code is identical to the recorded one.
    ///
    /// `NoPrior` never matches.
    pub fn matches(self, code: StatusCode) -> bool {
        self == Self::Known(code)
    }
}

impl From<StatusCode> for PreviousStatus {
    fn from(code: StatusCode) -> Self {
        Self::Known(code)
    }
}

impl From<Option<StatusCode>> for PreviousStatus {
    fn from(code: Option<StatusCode>) -> Self {
        code.map_or(Self::NoPrior, Self::Known)
    }
}

impl FromStr for PreviousStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::NO_PRIOR_SENTINELS.contains(&s) {
            return Ok(Self::NoPrior);
        }
        s.parse().map(Self::Known)
    }
}

/// Combine the three probe outcomes of one path into a single status.
///
/// First match wins: ignored, then untracked, then modified.
pub fn resolve(ignored: ProbeOutcome, tracked: ProbeOutcome, changed: ProbeOutcome) -> StatusCode {
    if ignored.is_success() {
        StatusCode::Ignored
    } else if tracked.is_failure() {
        StatusCode::Untracked
    } else if changed.is_failure() {
        StatusCode::Modified
    } else {
        StatusCode::Unmodified
    }
}
