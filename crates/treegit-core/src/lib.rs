//! Core types for treegit.
//!
//! This crate provides the data model shared by the status engine and the
//! command line front end: status codes and their wire encoding, probe
//! outcomes, the ordered path/status listing, errors and configuration.

mod config;
mod error;
mod listing;
mod probe;
mod status;

pub use config::{ProbeConfig, ProbeConfigBuilder, PropagationConfig};
pub use error::StatusError;
pub use listing::{Outcome, PathStatus, PropagationResult};
pub use probe::{ProbeKind, ProbeOutcome};
pub use status::{PreviousStatus, StatusCode, resolve};
