//! Probe and propagation configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// How git probe processes are launched.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ProbeConfig {
    /// Git executable to run.
    #[builder(default = "Self::default_git_program()")]
    #[serde(default = "default_git_program")]
    pub git_program: PathBuf,

    /// Directory probes run in (None = inherit the current directory).
    #[builder(default)]
    #[serde(default)]
    pub work_dir: Option<PathBuf>,
}

fn default_git_program() -> PathBuf {
    PathBuf::from("git")
}

impl ProbeConfigBuilder {
    fn default_git_program() -> PathBuf {
        default_git_program()
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(ref program) = self.git_program {
            if program.as_os_str().is_empty() {
                return Err("Git program cannot be empty".to_string());
            }
        }
        if let Some(Some(ref dir)) = self.work_dir {
            if dir.as_os_str().is_empty() {
                return Err("Working directory cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl ProbeConfig {
    /// Create a new probe config builder.
    pub fn builder() -> ProbeConfigBuilder {
        ProbeConfigBuilder::default()
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            git_program: default_git_program(),
            work_dir: None,
        }
    }
}

/// Engine behaviour that does not affect results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationConfig {
    /// Abort probes whose outcome will never be consulted.
    pub abort_abandoned: bool,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            abort_abandoned: true,
        }
    }
}

impl PropagationConfig {
    /// Set whether abandoned probes are aborted.
    pub fn with_abort_abandoned(mut self, abort: bool) -> Self {
        self.abort_abandoned = abort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ProbeConfig::builder().build().unwrap();
        assert_eq!(config.git_program, PathBuf::from("git"));
        assert!(config.work_dir.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ProbeConfig::builder()
            .git_program("/usr/local/bin/git")
            .work_dir(Some(PathBuf::from("/repo")))
            .build()
            .unwrap();
        assert_eq!(config.git_program, PathBuf::from("/usr/local/bin/git"));
        assert_eq!(config.work_dir, Some(PathBuf::from("/repo")));
    }

    #[test]
    fn test_builder_rejects_empty_program() {
        assert!(ProbeConfig::builder().git_program("").build().is_err());
    }

    #[test]
    fn test_propagation_defaults() {
        assert!(PropagationConfig::default().abort_abandoned);
        assert!(!PropagationConfig::default().with_abort_abandoned(false).abort_abandoned);
    }
}
