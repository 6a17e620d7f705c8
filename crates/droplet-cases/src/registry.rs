//! Case-name resolution.
//!
//! [`CaseRegistry`] maps a case name to its [`CaseParameters`]. The
//! builtin presets live in a static table; a registry may be extended
//! with custom presets at construction time and is immutable afterwards,
//! so it can be shared across threads without locking.
//!
//! Resolution is a pure function of the name, the table and the
//! estimator: the same name always yields an equal record.

use droplet_types::{CaseEntry, CaseInputs, CaseParameters, NumberDensity};
use tracing::trace;

use crate::catalog::{builtin_cases, find_builtin};
use crate::error::CaseError;
use crate::estimator::{ExponentialMassEstimator, NumberDensityEstimator};

/// Resolves case names to fully populated [`CaseParameters`].
#[derive(Debug, Clone, Default)]
pub struct CaseRegistry<E = ExponentialMassEstimator> {
    custom: Vec<CaseEntry>,
    estimator: E,
}

impl CaseRegistry<ExponentialMassEstimator> {
    /// Registry over the builtin catalog with the default estimator.
    pub const fn new() -> Self {
        Self::with_estimator(ExponentialMassEstimator::new())
    }
}

impl<E: NumberDensityEstimator> CaseRegistry<E> {
    /// Registry over the builtin catalog with the given estimator for
    /// presets whose `n_0` is derived.
    pub const fn with_estimator(estimator: E) -> Self {
        Self {
            custom: Vec::new(),
            estimator,
        }
    }

    /// Extend the registry with custom presets.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::EmptyName`] for an empty name,
    /// [`CaseError::DuplicateCase`] if a name is already registered, or
    /// [`CaseError::InvalidInput`] if a literal input is not finite and
    /// positive. The registry is consumed either way.
    pub fn with_custom_cases<I>(mut self, entries: I) -> Result<Self, CaseError>
    where
        I: IntoIterator<Item = CaseEntry>,
    {
        for entry in entries {
            if entry.name.is_empty() {
                return Err(CaseError::EmptyName);
            }
            if self.entry(&entry.name).is_some() {
                return Err(CaseError::DuplicateCase {
                    name: entry.name.into_owned(),
                });
            }
            if let Some(field) = entry.inputs.first_invalid_field() {
                return Err(CaseError::InvalidInput {
                    name: entry.name.into_owned(),
                    field,
                });
            }
            self.custom.push(entry);
        }
        Ok(self)
    }

    /// The catalog row for `name`, if registered.
    pub fn entry(&self, name: &str) -> Option<&CaseEntry> {
        find_builtin(name).or_else(|| self.custom.iter().find(|e| e.name == name))
    }

    /// All registered case names, builtin presets first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let builtin: &[CaseEntry] = builtin_cases();
        builtin
            .iter()
            .chain(&self.custom)
            .map(CaseEntry::name)
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        builtin_cases().len().saturating_add(self.custom.len())
    }

    /// Whether the registry has no cases. Never true, the builtin
    /// catalog is always present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The estimator used for derived number densities.
    pub const fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Resolve a case name to its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::UnknownCase`] if `name` is not registered.
    /// No partial record is produced.
    pub fn resolve(&self, name: &str) -> Result<CaseParameters, CaseError> {
        let entry = self.entry(name).ok_or_else(|| CaseError::UnknownCase {
            name: name.to_owned(),
        })?;
        let params = derive_parameters(&entry.inputs, &self.estimator);
        trace!(
            case = name,
            n_0 = params.n_0,
            r_0 = params.r_0,
            m_tot_ana = params.m_tot_ana,
            "case resolved"
        );
        Ok(params)
    }
}

/// Build [`CaseParameters`] from literal inputs.
///
/// Derived number densities are taken from `estimator` with
/// `(R_0, m_tot_ana)`; volume and mass always come from `R_0`.
pub fn derive_parameters<E>(inputs: &CaseInputs, estimator: &E) -> CaseParameters
where
    E: NumberDensityEstimator + ?Sized,
{
    let n_0 = match inputs.n_0 {
        NumberDensity::Literal(n) => n,
        NumberDensity::Derived => estimator.estimate_n0(inputs.r_0, inputs.m_tot_ana),
    };
    CaseParameters::from_radius(inputs.t_end, inputs.plot_dt, n_0, inputs.r_0, inputs.m_tot_ana)
}

/// Resolve a builtin case with the default estimator.
///
/// # Errors
///
/// Returns [`CaseError::UnknownCase`] if `name` is not a builtin preset.
pub fn resolve(name: &str) -> Result<CaseParameters, CaseError> {
    CaseRegistry::new().resolve(name)
}
