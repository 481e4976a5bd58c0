//! Per-path probe sets.

use compact_str::CompactString;
use tokio::task::JoinHandle;
use tracing::debug;

use treegit_core::{ProbeKind, ProbeOutcome, StatusCode, StatusError, resolve};

use crate::probe::StatusProbe;

type ProbeHandle = JoinHandle<Result<ProbeOutcome, StatusError>>;

/// The three running probes of one path.
///
/// Dropping a set whose outcome is no longer needed aborts its remaining
/// tasks when `abort_on_drop` is set; otherwise they finish unobserved.
#[derive(Debug)]
pub struct PendingProbes {
    path: CompactString,
    ignored: ProbeHandle,
    tracked: ProbeHandle,
    changed: ProbeHandle,
    abort_on_drop: bool,
}

impl PendingProbes {
    /// Spawn all three probes for `path` without waiting on any of them.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch<P>(probe: &P, path: impl Into<CompactString>, abort_on_drop: bool) -> Self
    where
        P: StatusProbe + ?Sized,
    {
        let path = path.into();
        let spawn = |kind: ProbeKind| tokio::spawn(probe.launch(kind, &path));

        let ignored = spawn(ProbeKind::Ignored);
        let tracked = spawn(ProbeKind::Tracked);
        let changed = spawn(ProbeKind::Changed);

        debug!(%path, "launched probes");

        Self {
            path,
            ignored,
            tracked,
            changed,
            abort_on_drop,
        }
    }

    pub fn path(&self) -> &CompactString {
        &self.path
    }

    /// Await the probes in priority order and resolve the path's status.
    ///
    /// Stops at the first deciding probe; the rest are never awaited.
    pub async fn resolve(mut self) -> Result<StatusCode, StatusError> {
        let ignored = self.outcome(ProbeKind::Ignored).await?;
        if ignored.is_success() {
            return Ok(StatusCode::Ignored);
        }

        let tracked = self.outcome(ProbeKind::Tracked).await?;
        if tracked.is_failure() {
            return Ok(StatusCode::Untracked);
        }

        let changed = self.outcome(ProbeKind::Changed).await?;
        Ok(resolve(ignored, tracked, changed))
    }

    async fn outcome(&mut self, kind: ProbeKind) -> Result<ProbeOutcome, StatusError> {
        let handle = match kind {
            ProbeKind::Ignored => &mut self.ignored,
            ProbeKind::Tracked => &mut self.tracked,
            ProbeKind::Changed => &mut self.changed,
        };

        handle.await.map_err(|e| StatusError::ProbeTask {
            kind,
            path: self.path.clone(),
            message: e.to_string(),
        })?
    }

    /// Abort all three probe tasks. Finished tasks are unaffected.
    pub fn abort(&self) {
        self.ignored.abort();
        self.tracked.abort();
        self.changed.abort();
    }
}

impl Drop for PendingProbes {
    fn drop(&mut self) {
        if self.abort_on_drop {
            self.abort();
        }
    }
}
