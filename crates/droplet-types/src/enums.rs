//! Enumeration types for the droplet presets.

use serde::{Deserialize, Serialize};

use crate::physics::GOLOVIN_B;

/// Collision kernel a preset was designed to be run with.
///
/// Preset names encode the kernel family: `*_golo*` for Golovin,
/// `*_hydro*` for the hydrodynamic (gravitational) kernel and `*_long*`
/// for the Long kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionKernel {
    /// Golovin sum-of-volumes kernel, which has an analytic solution.
    Golovin,
    /// Hydrodynamic (gravitational settling) kernel.
    Hydrodynamic,
    /// Long (1974) polynomial kernel.
    Long,
    /// No kernel could be inferred from the case name.
    Unspecified,
}

impl CollisionKernel {
    /// Infer the kernel family from a case name.
    pub fn infer(name: &str) -> Self {
        if name.contains("golo") {
            Self::Golovin
        } else if name.contains("hydro") {
            Self::Hydrodynamic
        } else if name.contains("long") {
            Self::Long
        } else {
            Self::Unspecified
        }
    }

    /// Kernel coefficient, for kernels that have a single scalar one.
    pub const fn coefficient(self) -> Option<f64> {
        match self {
            Self::Golovin => Some(GOLOVIN_B),
            Self::Hydrodynamic | Self::Long | Self::Unspecified => None,
        }
    }
}

impl core::fmt::Display for CollisionKernel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Golovin => "golovin",
            Self::Hydrodynamic => "hydrodynamic",
            Self::Long => "long",
            Self::Unspecified => "unspecified",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_from_name_family() {
        assert_eq!(CollisionKernel::infer("shima_golo"), CollisionKernel::Golovin);
        assert_eq!(CollisionKernel::infer("simmel_golo3"), CollisionKernel::Golovin);
        assert_eq!(CollisionKernel::infer("bott_hydro2.5"), CollisionKernel::Hydrodynamic);
        assert_eq!(CollisionKernel::infer("simmel_long2"), CollisionKernel::Long);
        assert_eq!(CollisionKernel::infer("my_case"), CollisionKernel::Unspecified);
    }

    #[test]
    fn only_golovin_has_coefficient() {
        assert!(CollisionKernel::Golovin.coefficient().is_some());
        assert!(CollisionKernel::Hydrodynamic.coefficient().is_none());
        assert!(CollisionKernel::Long.coefficient().is_none());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&CollisionKernel::Hydrodynamic).unwrap_or_default();
        assert_eq!(json, "\"hydrodynamic\"");
        assert_eq!(CollisionKernel::Long.to_string(), "long");
    }
}
