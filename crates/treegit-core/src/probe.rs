//! Probe kinds and outcomes.

use strum::{Display, EnumIter};

/// One of the three boolean queries run against every path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ProbeKind {
    /// Does an ignore rule match the path?
    Ignored,
    /// Is the path known to the index?
    Tracked,
    /// Does the working tree differ from the index?
    Changed,
}

/// Success/failure result of one probe.
///
/// The polarity follows the exit status of the underlying query, not the
/// meaning of the question: for `Changed`, a reported difference is a
/// `Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    Success,
    Failure,
}

impl ProbeOutcome {
    /// Interpret a process exit code. Anything other than 0 or 1 is not a
    /// boolean answer.
    pub fn from_exit_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::Failure),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    pub fn is_failure(self) -> bool {
        self == Self::Failure
    }
}

impl From<bool> for ProbeOutcome {
    fn from(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}
