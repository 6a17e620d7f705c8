//! Configuration and run orchestration for droplet preset resolution.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `droplet-config.yaml` into
//!   strongly-typed structs, including user-defined presets.
//! - [`run`] -- Registry construction from configuration and resolution
//!   of the requested cases into a [`CaseReport`].
//!
//! [`CaseReport`]: run::CaseReport

pub mod config;
pub mod run;
