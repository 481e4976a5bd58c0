//! Probe launching.

use std::process::Stdio;
use std::sync::Arc;

use compact_str::CompactString;
use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::process::Command;
use tracing::trace;

use treegit_core::{ProbeConfig, ProbeKind, ProbeOutcome, StatusError};

/// Future resolving to the outcome of one launched probe.
pub type ProbeFuture = BoxFuture<'static, Result<ProbeOutcome, StatusError>>;

/// Source of the three boolean queries the engine combines.
pub trait StatusProbe: Send + Sync {
    /// Start a probe for `path`.
    ///
    /// Implementations should start the underlying work before returning;
    /// the engine spawns the future right away but may never poll its result.
    fn launch(&self, kind: ProbeKind, path: &str) -> ProbeFuture;
}

impl<P: StatusProbe + ?Sized> StatusProbe for Arc<P> {
    fn launch(&self, kind: ProbeKind, path: &str) -> ProbeFuture {
        (**self).launch(kind, path)
    }
}

/// Probes backed by `git` subprocesses.
///
/// | kind      | command                                 |
/// |-----------|-----------------------------------------|
/// | `Ignored` | `git check-ignore -q -- <path>`         |
/// | `Tracked` | `git ls-files --error-unmatch -- <path>` |
/// | `Changed` | `git diff --quiet --exit-code -- <path>` |
///
/// Exit code 0 is a success and 1 a failure; anything else means git could
/// not answer (for example 128 outside a repository) and is reported as
/// [`StatusError::ProbeFailed`].
#[derive(Debug, Clone, Default)]
pub struct GitProbe {
    config: ProbeConfig,
}

impl GitProbe {
    /// Create a probe running `git` from `PATH` in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe with custom configuration.
    pub fn with_config(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Git arguments preceding the path for a probe kind.
    pub fn args(kind: ProbeKind) -> &'static [&'static str] {
        match kind {
            ProbeKind::Ignored => &["check-ignore", "-q", "--"],
            ProbeKind::Tracked => &["ls-files", "--error-unmatch", "--"],
            ProbeKind::Changed => &["diff", "--quiet", "--exit-code", "--"],
        }
    }

    /// Build the command for one probe. Output is discarded; only the exit
    /// status matters.
    pub fn command(&self, kind: ProbeKind, path: &str) -> Command {
        let mut cmd = Command::new(&self.config.git_program);
        cmd.args(Self::args(kind))
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &self.config.work_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl StatusProbe for GitProbe {
    fn launch(&self, kind: ProbeKind, path: &str) -> ProbeFuture {
        // Spawn eagerly so the process runs even if the future is never polled.
        let spawned = self.command(kind, path).spawn();
        let path = CompactString::from(path);

        async move {
            let mut child = spawned.map_err(|e| StatusError::spawn(kind, path.clone(), e))?;
            let status = child
                .wait()
                .await
                .map_err(|e| StatusError::spawn(kind, path.clone(), e))?;

            trace!(%kind, %path, code = ?status.code(), "probe exited");

            status
                .code()
                .and_then(ProbeOutcome::from_exit_code)
                .ok_or(StatusError::ProbeFailed {
                    kind,
                    path,
                    code: status.code(),
                })
        }
        .boxed()
    }
}
