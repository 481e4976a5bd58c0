//! Status computation and ancestor propagation.

use tracing::debug;

use treegit_core::{Outcome, PreviousStatus, PropagationConfig, PropagationResult, StatusError};

use crate::probe::StatusProbe;
use crate::resolver::PendingProbes;

/// Computes a target's status and propagates it up its ancestor chain.
#[derive(Debug, Clone, Default)]
pub struct PropagationEngine<P> {
    probe: P,
    config: PropagationConfig,
}

impl<P: StatusProbe> PropagationEngine<P> {
    /// Create an engine with default settings.
    pub fn new(probe: P) -> Self {
        Self::with_config(probe, PropagationConfig::default())
    }

    /// Create an engine with custom settings.
    pub fn with_config(probe: P, config: PropagationConfig) -> Self {
        Self { probe, config }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn config(&self) -> &PropagationConfig {
        &self.config
    }

    /// Resolve `target` and its `ancestors` (nearest first).
    ///
    /// Probes for every path are started before any is awaited. Returns
    /// [`Outcome::Unchanged`] when the target still has `previous` status.
    /// Once an ancestor resolves to a dominant code, every farther ancestor
    /// gets the same code and its own probes are dropped.
    pub async fn compute<S>(
        &self,
        target: &str,
        previous: PreviousStatus,
        ancestors: &[S],
    ) -> Result<Outcome, StatusError>
    where
        S: AsRef<str>,
    {
        let abort = self.config.abort_abandoned;
        let target_probes = PendingProbes::launch(&self.probe, target, abort);
        let pending: Vec<_> = ancestors
            .iter()
            .map(|path| PendingProbes::launch(&self.probe, path.as_ref(), abort))
            .collect();

        let target_status = target_probes.resolve().await?;
        debug!(path = target, status = %target_status, "resolved target");

        if previous.matches(target_status) {
            debug!(path = target, "status unchanged, skipping ancestors");
            return Ok(Outcome::Unchanged);
        }

        let mut result = PropagationResult::with_capacity(target, target_status, pending.len());
        let mut dominant = None;

        for probes in pending {
            let path = probes.path().clone();
            let status = match dominant {
                Some(code) => code,
                None => {
                    let status = probes.resolve().await?;
                    if status.is_dominant() {
                        debug!(%path, %status, "propagating dominant status");
                        dominant = Some(status);
                    }
                    status
                }
            };
            result.push(path, status);
        }

        Ok(Outcome::Changed(result))
    }
}
