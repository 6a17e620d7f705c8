//! Preset records: the catalog row and the resolved case parameters.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::enums::CollisionKernel;
use crate::physics::{GRAMS_PER_KILOGRAM, droplet_mass, droplet_volume};

// ---------------------------------------------------------------------------
// Catalog inputs
// ---------------------------------------------------------------------------

/// Initial number density of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberDensity {
    /// A fixed number density in m⁻³.
    Literal(f64),
    /// Computed from `R_0` and `m_tot_ana` by a number-density estimator.
    Derived,
}

/// Literal inputs for one preset, before derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseInputs {
    /// Simulation end time in seconds.
    pub t_end: f64,
    /// Output sampling interval in seconds.
    pub plot_dt: f64,
    /// Initial number density, literal or derived.
    pub n_0: NumberDensity,
    /// Base droplet radius in meters.
    pub r_0: f64,
    /// Analytic total liquid-water mass in g/m³.
    pub m_tot_ana: f64,
}

impl CaseInputs {
    /// Name of the first literal input that is not finite and positive.
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        let n_0 = match self.n_0 {
            NumberDensity::Literal(n) => n,
            NumberDensity::Derived => 1.0,
        };
        [
            ("t_end", self.t_end),
            ("plot_dt", self.plot_dt),
            ("n_0", n_0),
            ("r_0", self.r_0),
            ("m_tot_ana", self.m_tot_ana),
        ]
        .into_iter()
        .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        .map(|(field, _)| field)
    }
}

/// One row of the case catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseEntry {
    /// Case name used for lookup.
    pub name: Cow<'static, str>,
    /// Collision kernel the preset is meant to be run with.
    pub kernel: CollisionKernel,
    /// Literature figure the preset reproduces, when there is one.
    pub reference: Option<Cow<'static, str>>,
    /// Literal inputs.
    pub inputs: CaseInputs,
}

impl CaseEntry {
    /// Case name as a string slice.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Resolved parameters
// ---------------------------------------------------------------------------

/// Initial conditions for an exponential droplet-size distribution.
///
/// `x_0` and `m_0` are always derived from `r_0`; use
/// [`CaseParameters::from_radius`] to build one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseParameters {
    /// Simulation end time in seconds.
    pub t_end: f64,
    /// Output sampling interval in seconds.
    pub plot_dt: f64,
    /// Initial number density in m⁻³.
    pub n_0: f64,
    /// Base droplet radius in meters.
    #[serde(rename = "R_0")]
    pub r_0: f64,
    /// Base droplet volume in m³.
    #[serde(rename = "X_0")]
    pub x_0: f64,
    /// Base droplet mass in kg.
    #[serde(rename = "M_0")]
    pub m_0: f64,
    /// Analytic total liquid-water mass in g/m³.
    pub m_tot_ana: f64,
}

impl CaseParameters {
    /// Build the record, deriving base volume and mass from `r_0`.
    pub fn from_radius(t_end: f64, plot_dt: f64, n_0: f64, r_0: f64, m_tot_ana: f64) -> Self {
        let x_0 = droplet_volume(r_0);
        Self {
            t_end,
            plot_dt,
            n_0,
            r_0,
            x_0,
            m_0: droplet_mass(x_0),
            m_tot_ana,
        }
    }

    /// Total liquid-water mass in g/m³ implied by `n_0` and `M_0`.
    ///
    /// For an exponential distribution in mass the mean droplet mass is
    /// `M_0`, so this should be close to `m_tot_ana`.
    pub fn implied_total_mass(&self) -> f64 {
        self.n_0 * self.m_0 * GRAMS_PER_KILOGRAM
    }
}
