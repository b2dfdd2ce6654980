//! Observation intake for Malmo agent environments.
//!
//! Sits between the raw observation feed and the agent control layer. Each
//! reported entity is resolved against the mob and item vocabularies from
//! `malmoext-types`, validated, and collected into a [`Snapshot`]. What
//! happens to observations that do not resolve is a configuration choice
//! (see [`InvalidPolicy`]).
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration with environment overrides
//! - [`intake`] -- The [`Intake`] pipeline and [`Snapshot`] queries
//! - [`error`] -- Errors raised under the reject policy

pub mod config;
pub mod error;
pub mod intake;

pub use config::{CategoryConfig, ConfigError, IntakeConfig, InvalidPolicy, ON_INVALID_ENV};
pub use error::ObserveError;
pub use intake::{Intake, RawEntity, SkipReason, Skipped, Snapshot};
