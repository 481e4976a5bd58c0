//! Git status probing and ancestor propagation for treegit.
//!
//! # Overview
//!
//! Every path gets three boolean probes (ignored, tracked, changed). The
//! [`PropagationEngine`] starts the probes for the target and its whole
//! ancestor chain at once, then consumes them in chain order:
//!
//! - If the target's status equals the previously known one, the result is
//!   [`Outcome::Unchanged`] and no listing is produced.
//! - Ancestors are resolved nearest first until one is `Ignored` or
//!   `Untracked`; that code is then copied to every farther ancestor without
//!   waiting on their probes.
//!
//! # Example
//!
//! ```rust,no_run
//! use treegit_status::{GitProbe, PreviousStatus, PropagationEngine};
//!
//! # async fn run() -> Result<(), treegit_status::StatusError> {
//! let engine = PropagationEngine::new(GitProbe::new());
//! let outcome = engine
//!     .compute("/repo/src/main.rs", PreviousStatus::NoPrior, &["/repo/src", "/repo"])
//!     .await?;
//!
//! if let Some(listing) = outcome.into_result() {
//!     println!("{}", listing.to_elisp_alist());
//! }
//! # Ok(())
//! # }
//! ```

mod engine;
mod probe;
mod resolver;

pub use engine::PropagationEngine;
pub use probe::{GitProbe, ProbeFuture, StatusProbe};
pub use resolver::PendingProbes;

// Re-export core types for convenience
pub use treegit_core::{
    Outcome, PathStatus, PreviousStatus, ProbeConfig, ProbeKind, ProbeOutcome, PropagationConfig,
    PropagationResult, StatusCode, StatusError, resolve,
};
