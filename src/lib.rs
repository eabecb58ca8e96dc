//! ssc-approver crate
//!
//! This crate is an implementation detail of the `ssc-approver` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.
//!
//! # Module Organization
//!
//! - [`config`]: Connection settings resolved from flags, environment, and dotenv files
//! - [`models`]: Typed projections of the remote projects, versions, and artifacts
//! - [`ssc`]: API gateway and resource repository for the SSC REST API
//! - [`approval`]: Organization-wide scan for artifacts pending approval
//! - [`messages`]: Folding of artifact messages into display text
//! - [`reports`]: Table, JSON, and CSV renderers
//! - [`commands`]: Command-line interface and orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod approval;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod messages;

#[doc(hidden)]
pub mod models;

#[doc(hidden)]
pub mod reports;

#[doc(hidden)]
pub mod ssc;

pub use crate::commands::{Host, run};
