//! Number-density estimation for presets without a literal `n_0`.
//!
//! Some presets specify the target liquid-water content instead of a
//! droplet count. The [`NumberDensityEstimator`] trait abstracts how the
//! count is recovered from `(R_0, m_tot_ana)`, so the registry can be
//! given a different estimator, or a test double.

use droplet_types::{GRAMS_PER_KILOGRAM, droplet_mass, droplet_volume};

/// A source of initial number densities.
pub trait NumberDensityEstimator {
    /// Estimate `n_0` in m⁻³ from the base radius (m) and the analytic
    /// total liquid-water mass (g/m³).
    fn estimate_n0(&self, r_0: f64, m_tot_ana: f64) -> f64;
}

impl<F> NumberDensityEstimator for F
where
    F: Fn(f64, f64) -> f64,
{
    fn estimate_n0(&self, r_0: f64, m_tot_ana: f64) -> f64 {
        self(r_0, m_tot_ana)
    }
}

/// Estimator for an exponential distribution in droplet mass.
///
/// The mean droplet mass of the distribution is `M_0`, so the total
/// mass is `n_0 · M_0` and `n_0 = m_tot_ana / M_0` after converting
/// grams to kilograms.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialMassEstimator;

impl ExponentialMassEstimator {
    /// Create a new exponential-distribution estimator.
    pub const fn new() -> Self {
        Self
    }
}

impl NumberDensityEstimator for ExponentialMassEstimator {
    fn estimate_n0(&self, r_0: f64, m_tot_ana: f64) -> f64 {
        let m_0 = droplet_mass(droplet_volume(r_0));
        (m_tot_ana / GRAMS_PER_KILOGRAM) / m_0
    }
}
