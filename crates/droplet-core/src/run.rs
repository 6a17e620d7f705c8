//! Resolution of a configured case list into a report.
//!
//! [`build_registry`] combines the builtin catalog with the custom presets
//! from [`RunConfig`]; [`resolve_cases`] resolves the configured names in
//! order and stops at the first unknown one.

use chrono::{DateTime, Utc};
use droplet_cases::{CaseError, CaseRegistry, NumberDensityEstimator};
use droplet_types::{CaseParameters, CollisionKernel};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::RunConfig;

/// One resolved case with its catalog metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCase {
    /// Case name.
    pub name: String,
    /// Collision kernel the preset is meant for.
    pub kernel: CollisionKernel,
    /// Literature reference, when known.
    pub reference: Option<String>,
    /// Resolved initial conditions.
    pub parameters: CaseParameters,
}

/// Output of a run: every requested case, tagged with a run id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    /// Time-ordered identifier of this run.
    pub run_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Resolved cases in request order.
    pub cases: Vec<ResolvedCase>,
}

impl CaseReport {
    /// Wrap resolved cases in a new report.
    pub fn new(cases: Vec<ResolvedCase>) -> Self {
        Self {
            run_id: Uuid::now_v7(),
            generated_at: Utc::now(),
            cases,
        }
    }
}

/// Build a registry from the builtin catalog and the configured custom
/// presets.
///
/// # Errors
///
/// Returns [`CaseError`] if a custom preset is invalid or collides with
/// an existing name.
pub fn build_registry(config: &RunConfig) -> Result<CaseRegistry, CaseError> {
    let custom = config.custom_entries();
    debug!(custom_cases = custom.len(), "building case registry");
    CaseRegistry::new().with_custom_cases(custom)
}

/// Resolve `names` in order against `registry`.
///
/// # Errors
///
/// Returns [`CaseError::UnknownCase`] for the first name that is not
/// registered. Nothing is returned for the names before it.
pub fn resolve_cases<E, S>(
    registry: &CaseRegistry<E>,
    names: &[S],
) -> Result<Vec<ResolvedCase>, CaseError>
where
    E: NumberDensityEstimator,
    S: AsRef<str>,
{
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let parameters = registry.resolve(name)?;
            let entry = registry.entry(name);
            info!(
                case = name,
                t_end = parameters.t_end,
                plot_dt = parameters.plot_dt,
                n_0 = parameters.n_0,
                r_0 = parameters.r_0,
                m_tot_ana = parameters.m_tot_ana,
                "case resolved"
            );
            Ok::<_, CaseError>(ResolvedCase {
                name: name.to_owned(),
                kernel: entry.map_or(CollisionKernel::Unspecified, |e| e.kernel),
                reference: entry
                    .and_then(|e| e.reference.as_deref())
                    .map(str::to_owned),
                parameters,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn resolves_in_request_order() {
        let registry = CaseRegistry::new();
        let cases = resolve_cases(&registry, &["bott_hydro2", "shima_golo"]).unwrap();
        let names: Vec<&str> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["bott_hydro2", "shima_golo"]);
        assert_eq!(cases.first().map(|c| c.kernel), Some(CollisionKernel::Hydrodynamic));
        assert_eq!(
            cases.first().and_then(|c| c.reference.clone()).as_deref(),
            Some("Bott (1998), Figure 5")
        );
    }

    #[test]
    fn unknown_name_aborts_whole_list() {
        let registry = CaseRegistry::new();
        let result = resolve_cases(&registry, &["shima_golo", "nope"]);
        assert_eq!(
            result,
            Err(CaseError::UnknownCase {
                name: "nope".to_owned()
            })
        );
    }

    #[test]
    fn registry_includes_configured_custom_cases() {
        let yaml = r"
custom_cases:
  lab_golo:
    t_end: 1801
    plot_dt: 600
    n_0: 1.0e8
    r_0: 12.0e-6
    m_tot_ana: 1.0
";
        let config = serde_yml::from_str::<RunConfig>(yaml).unwrap();
        let registry = build_registry(&config).unwrap();
        let cases = resolve_cases(&registry, &[String::from("lab_golo")]).unwrap();
        assert_eq!(cases.first().map(|c| c.parameters.n_0), Some(1.0e8));
        assert_eq!(cases.first().map(|c| c.kernel), Some(CollisionKernel::Golovin));
    }

    #[test]
    fn custom_case_colliding_with_builtin_is_rejected() {
        let yaml = r"
custom_cases:
  bott_golo:
    t_end: 1801
    plot_dt: 600
    r_0: 12.0e-6
    m_tot_ana: 1.0
";
        let config = serde_yml::from_str::<RunConfig>(yaml).unwrap();
        assert!(matches!(
            build_registry(&config),
            Err(CaseError::DuplicateCase { .. })
        ));
    }

    #[test]
    fn report_serializes_cases() {
        let registry = CaseRegistry::new();
        let report = CaseReport::new(resolve_cases(&registry, &["simmel_long1"]).unwrap());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("run_id").is_some());
        assert!(json.get("generated_at").is_some());
        let first = json
            .get("cases")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("parameters"))
            .and_then(|p| p.get("R_0"))
            .and_then(serde_json::Value::as_f64);
        assert_eq!(first, Some(9.3e-6));
    }
}
