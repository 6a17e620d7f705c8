//! Physical constants and the droplet geometry used by every preset.
//!
//! A preset only ever supplies a base radius `R_0`. The base volume and
//! mass are always derived from it:
//!
//! - `X_0 = (4π/3)·R_0³`
//! - `M_0 = X_0 · ρ_water`

use core::f64::consts::PI;

/// Density of liquid water in kg/m³.
pub const RHO_WATER: f64 = 1e3;

/// Golovin kernel coefficient `b` in s⁻¹.
///
/// The Golovin (sum-of-volumes) kernel is `K(x, y) = b · (x + y)` with
/// `x`, `y` droplet volumes in m³.
pub const GOLOVIN_B: f64 = 1.5e3;

/// Conversion factor from kilograms to grams.
pub const GRAMS_PER_KILOGRAM: f64 = 1e3;

/// Volume of a spherical droplet with the given radius.
///
/// Radius in meters, result in m³.
pub fn droplet_volume(radius: f64) -> f64 {
    (4.0 * PI / 3.0) * radius.powi(3)
}

/// Mass of a liquid-water droplet with the given volume.
///
/// Volume in m³, result in kg.
pub const fn droplet_mass(volume: f64) -> f64 {
    volume * RHO_WATER
}
