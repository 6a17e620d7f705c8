//! Shared type definitions for the droplet collision-coalescence presets.
//!
//! This crate is the single source of truth for the values that flow
//! between the case catalog, the configuration layer and the engine.
//!
//! # Modules
//!
//! - [`enums`] -- Collision kernel families.
//! - [`physics`] -- Water density, kernel constants, and the radius to
//!   volume to mass derivation.
//! - [`structs`] -- Catalog rows ([`CaseEntry`]) and resolved
//!   [`CaseParameters`].

pub mod enums;
pub mod physics;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::CollisionKernel;
pub use physics::{GOLOVIN_B, GRAMS_PER_KILOGRAM, RHO_WATER, droplet_mass, droplet_volume};
pub use structs::{CaseEntry, CaseInputs, CaseParameters, NumberDensity};
