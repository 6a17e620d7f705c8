//! Error types for the droplet engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and case resolution.

/// Top-level error for the droplet engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: droplet_core::config::ConfigError,
    },

    /// Registry construction or case resolution failed.
    #[error("case error: {source}")]
    Case {
        /// The underlying case error.
        #[from]
        source: droplet_cases::CaseError,
    },

    /// The report could not be serialized.
    #[error("output error: {source}")]
    Output {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
