//! Builtin catalog of droplet-distribution presets.
//!
//! Each preset describes an initial exponential droplet-size distribution
//! from the collision-coalescence literature: Shima et al. (2009),
//! Simmel et al. (2002) and Bott (1998). The table only holds literal
//! inputs; volume and mass are derived at lookup time, and the Bott
//! family derives its number density from the target liquid-water mass.

use std::borrow::Cow;

use droplet_types::{CaseEntry, CaseInputs, CollisionKernel, NumberDensity};

/// `2^23`, the Shima et al. (2009) reference number density in m⁻³.
const SHIMA_N0: f64 = 8_388_608.0;

/// Shima et al. (2009) base radius in meters.
const SHIMA_R0: f64 = 30.531e-6;

/// Bott (1998) base radius in meters.
const BOTT_R0: f64 = 10.0e-6;

const fn minutes(m: f64) -> f64 {
    m * 60.0
}

/// Helper to build a [`CaseEntry`] from literal values.
#[allow(clippy::too_many_arguments)]
const fn entry(
    name: &'static str,
    kernel: CollisionKernel,
    reference: Option<&'static str>,
    t_end: f64,
    plot_dt: f64,
    n_0: NumberDensity,
    r_0: f64,
    m_tot_ana: f64,
) -> CaseEntry {
    let reference = match reference {
        Some(r) => Some(Cow::Borrowed(r)),
        None => None,
    };
    CaseEntry {
        name: Cow::Borrowed(name),
        kernel,
        reference,
        inputs: CaseInputs {
            t_end,
            plot_dt,
            n_0,
            r_0,
            m_tot_ana,
        },
    }
}

// End times carry one extra second so the last output step is included.
static BUILTIN_CASES: [CaseEntry; 11] = [
    entry(
        "shima_golo",
        CollisionKernel::Golovin,
        None,
        minutes(60.0) + 1.0,
        minutes(20.0),
        NumberDensity::Literal(SHIMA_N0),
        SHIMA_R0,
        1.0,
    ),
    entry(
        "shima_hydro1",
        CollisionKernel::Hydrodynamic,
        None,
        minutes(30.0) + 1.0,
        minutes(10.0),
        NumberDensity::Literal(SHIMA_N0),
        SHIMA_R0,
        1.0,
    ),
    entry(
        "shima_hydro2",
        CollisionKernel::Hydrodynamic,
        None,
        minutes(60.0) + 1.0,
        minutes(20.0),
        NumberDensity::Literal(27.0 * SHIMA_N0),
        SHIMA_R0 / 3.0,
        1.0,
    ),
    entry(
        "simmel_golo1",
        CollisionKernel::Golovin,
        None,
        minutes(40.0) + 1.0,
        minutes(10.0),
        NumberDensity::Literal(3e8),
        9.3e-6,
        1.0,
    ),
    entry(
        "simmel_golo3",
        CollisionKernel::Golovin,
        None,
        minutes(15.0) + 1.0,
        minutes(5.0),
        NumberDensity::Literal(3e8),
        13.4e-6,
        3.0,
    ),
    entry(
        "simmel_long1",
        CollisionKernel::Long,
        Some("Simmel et al. (2002), Figure 6"),
        minutes(40.0) + 1.0,
        minutes(10.0),
        NumberDensity::Literal(3e8),
        9.3e-6,
        1.0,
    ),
    entry(
        "simmel_long2",
        CollisionKernel::Long,
        Some("Simmel et al. (2002), Figure 7"),
        minutes(15.0) + 1.0,
        minutes(5.0),
        NumberDensity::Literal(1.84e8),
        13.0e-6,
        2.0,
    ),
    entry(
        "bott_golo",
        CollisionKernel::Golovin,
        Some("Bott (1998), Figure 2"),
        minutes(60.0) + 1.0,
        minutes(15.0),
        NumberDensity::Derived,
        BOTT_R0,
        1.0,
    ),
    entry(
        "bott_hydro1",
        CollisionKernel::Hydrodynamic,
        Some("Bott (1998), Figure 3"),
        minutes(60.0) + 1.0,
        minutes(15.0),
        NumberDensity::Derived,
        BOTT_R0,
        1.0,
    ),
    entry(
        "bott_hydro2",
        CollisionKernel::Hydrodynamic,
        Some("Bott (1998), Figure 5"),
        minutes(20.0) + 1.0,
        minutes(5.0),
        NumberDensity::Derived,
        BOTT_R0,
        2.0,
    ),
    // Figure 5 setup with L = 0.5 g/m³
    entry(
        "bott_hydro2.5",
        CollisionKernel::Hydrodynamic,
        Some("Bott (1998), Figure 6"),
        minutes(60.0) + 1.0,
        minutes(20.0),
        NumberDensity::Derived,
        BOTT_R0,
        0.5,
    ),
];

/// All builtin presets, in catalog order.
pub fn builtin_cases() -> &'static [CaseEntry] {
    &BUILTIN_CASES
}

/// Look up a builtin preset by name.
pub fn find_builtin(name: &str) -> Option<&'static CaseEntry> {
    BUILTIN_CASES.iter().find(|e| e.name == name)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn catalog_has_eleven_presets() {
        assert_eq!(builtin_cases().len(), 11);
    }

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<&str> = builtin_cases().iter().map(CaseEntry::name).collect();
        assert_eq!(names.len(), builtin_cases().len());
    }

    #[test]
    fn kernels_match_name_family() {
        for e in builtin_cases() {
            assert_eq!(e.kernel, CollisionKernel::infer(&e.name), "kernel for {}", e.name);
        }
    }

    #[test]
    fn literal_inputs_are_positive() {
        for e in builtin_cases() {
            assert_eq!(e.inputs.first_invalid_field(), None, "inputs of {}", e.name);
        }
    }

    #[test]
    fn only_bott_family_is_derived() {
        for e in builtin_cases() {
            let derived = e.inputs.n_0 == NumberDensity::Derived;
            assert_eq!(derived, e.name.starts_with("bott_"), "n_0 of {}", e.name);
        }
    }

    #[test]
    fn minute_helper_matches_table_values() {
        let golo3 = find_builtin("simmel_golo3");
        assert!(golo3.is_some());
        let inputs = golo3.map(|e| e.inputs);
        assert_eq!(inputs.map(|i| i.t_end), Some(901.0));
        assert_eq!(inputs.map(|i| i.plot_dt), Some(300.0));
    }

    #[test]
    fn find_builtin_rejects_unknown_and_empty() {
        assert!(find_builtin("not_a_case").is_none());
        assert!(find_builtin("").is_none());
        assert!(find_builtin("SHIMA_GOLO").is_none());
    }
}
