//! Configuration loading and typed config structures for a preset run.
//!
//! The configuration lives in `droplet-config.yaml`. This module defines
//! strongly-typed structs that mirror the YAML structure and a loader
//! that reads the file. Every field has a default, so an empty file is a
//! valid configuration.
//!
//! ```yaml
//! cases: [shima_golo, bott_hydro2]
//! logging:
//!   level: debug
//!   json: false
//! custom_cases:
//!   lab_golo:
//!     t_end: 1801
//!     plot_dt: 600
//!     n_0: 1.0e8        # omit to derive from r_0 and m_tot_ana
//!     r_0: 12.0e-6
//!     m_tot_ana: 1.0
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use droplet_types::{CaseEntry, CaseInputs, CollisionKernel, NumberDensity};
use serde::Deserialize;
use tracing::debug;

/// Environment variable that replaces the configured case list.
pub const CASES_ENV: &str = "DROPLET_CASES";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    /// Case names to resolve, in output order.
    #[serde(default = "default_cases")]
    pub cases: Vec<String>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// User-defined presets, keyed by case name.
    #[serde(default)]
    pub custom_cases: BTreeMap<String, CustomCaseConfig>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cases: default_cases(),
            logging: LoggingConfig::default(),
            custom_cases: BTreeMap::new(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `DROPLET_CASES` (comma-separated) overrides the `cases` list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.override_cases(std::env::var(CASES_ENV).ok().as_deref());
    }

    /// Replace the case list with a comma-separated override.
    ///
    /// Blank entries are skipped; an override with no names is ignored.
    pub fn override_cases(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        let cases: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        if !cases.is_empty() {
            debug!(cases = ?cases, "case list overridden");
            self.cases = cases;
        }
    }

    /// Convert the custom presets into catalog rows.
    ///
    /// The kernel is inferred from the case name.
    pub fn custom_entries(&self) -> Vec<CaseEntry> {
        self.custom_cases
            .iter()
            .map(|(name, c)| CaseEntry {
                name: Cow::Owned(name.clone()),
                kernel: CollisionKernel::infer(name),
                reference: c.reference.clone().map(Cow::Owned),
                inputs: c.inputs(),
            })
            .collect()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON-formatted log lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// A user-defined preset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomCaseConfig {
    /// Simulation end time in seconds.
    pub t_end: f64,
    /// Output sampling interval in seconds.
    pub plot_dt: f64,
    /// Initial number density in m⁻³. Derived when absent.
    #[serde(default)]
    pub n_0: Option<f64>,
    /// Base droplet radius in meters.
    pub r_0: f64,
    /// Analytic total liquid-water mass in g/m³.
    pub m_tot_ana: f64,
    /// Free-form literature reference.
    #[serde(default)]
    pub reference: Option<String>,
}

impl CustomCaseConfig {
    /// The literal inputs of this preset.
    pub fn inputs(&self) -> CaseInputs {
        CaseInputs {
            t_end: self.t_end,
            plot_dt: self.plot_dt,
            n_0: self.n_0.map_or(NumberDensity::Derived, NumberDensity::Literal),
            r_0: self.r_0,
            m_tot_ana: self.m_tot_ana,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_cases() -> Vec<String> {
    vec!["shima_golo".to_owned()]
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RunConfig::default();
        assert_eq!(config.cases, vec!["shima_golo".to_owned()]);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.custom_cases.is_empty());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
cases:
  - simmel_golo3
  - lab_golo
logging:
  level: debug
  json: true
custom_cases:
  lab_golo:
    t_end: 1801
    plot_dt: 600
    n_0: 1.0e8
    r_0: 12.0e-6
    m_tot_ana: 1.0
    reference: Bench run 7
  lab_hydro:
    t_end: 901
    plot_dt: 300
    r_0: 10.0e-6
    m_tot_ana: 0.5
";
        let mut config = serde_yml::from_str::<RunConfig>(yaml).unwrap();
        config.override_cases(None);

        assert_eq!(config.cases, vec!["simmel_golo3", "lab_golo"]);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);

        let lab = config.custom_cases.get("lab_golo").unwrap();
        assert_eq!(lab.n_0, Some(1.0e8));
        assert_eq!(lab.inputs().n_0, NumberDensity::Literal(1.0e8));

        let hydro = config.custom_cases.get("lab_hydro").unwrap();
        assert_eq!(hydro.inputs().n_0, NumberDensity::Derived);
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = serde_yml::from_str::<RunConfig>("logging:\n  level: warn\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        // Everything else uses defaults
        assert_eq!(config.cases, default_cases());
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(RunConfig::parse("").is_ok());
        assert!(RunConfig::parse("   \n").is_ok());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = RunConfig::parse("cases: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = RunConfig::from_file(Path::new("/nonexistent/droplet-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn case_override_replaces_list() {
        let mut config = RunConfig::default();
        config.override_cases(Some(" bott_golo , ,bott_hydro2 "));
        assert_eq!(config.cases, vec!["bott_golo", "bott_hydro2"]);
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = RunConfig::default();
        config.override_cases(Some(" , "));
        assert_eq!(config.cases, default_cases());
    }

    #[test]
    fn custom_entries_infer_kernel_and_keep_reference() {
        let yaml = r"
custom_cases:
  lab_long:
    t_end: 601
    plot_dt: 200
    r_0: 9.0e-6
    m_tot_ana: 1.0
    reference: Notebook 3
";
        let config = serde_yml::from_str::<RunConfig>(yaml).unwrap();
        let entries = config.custom_entries();
        assert_eq!(entries.len(), 1);
        let entry = entries.first().unwrap();
        assert_eq!(entry.name, "lab_long");
        assert_eq!(entry.kernel, CollisionKernel::Long);
        assert_eq!(entry.reference.as_deref(), Some("Notebook 3"));
        assert_eq!(entry.inputs.t_end, 601.0);
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("droplet-config.yaml");
        if path.exists() {
            let config = RunConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
