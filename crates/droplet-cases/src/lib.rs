//! Named initial droplet-distribution presets for collision-coalescence runs.
//!
//! A case name such as `shima_golo` or `bott_hydro2` selects the end time,
//! output interval, number density, base droplet radius, volume and mass,
//! and the analytic total liquid-water mass of a reference experiment.
//!
//! # Modules
//!
//! - [`catalog`] -- The builtin table of literature presets.
//! - [`error`] -- [`CaseError`], including the unknown-case error.
//! - [`estimator`] -- [`NumberDensityEstimator`] trait and the default
//!   [`ExponentialMassEstimator`].
//! - [`registry`] -- [`CaseRegistry`] and the [`resolve`] shortcut.
//!
//! ```
//! let params = droplet_cases::resolve("simmel_golo3")?;
//! assert!((params.m_tot_ana - 3.0).abs() < f64::EPSILON);
//! # Ok::<(), droplet_cases::CaseError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod estimator;
pub mod registry;

// Re-export primary types at crate root.
pub use catalog::{builtin_cases, find_builtin};
pub use error::CaseError;
pub use estimator::{ExponentialMassEstimator, NumberDensityEstimator};
pub use registry::{CaseRegistry, derive_parameters, resolve};
