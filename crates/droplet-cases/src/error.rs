//! Error types for the `droplet-cases` crate.
//!
//! All fallible operations in this crate return [`CaseError`].

/// Errors that can occur when building a registry or resolving a case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// The requested case name is not in the catalog.
    #[error("unknown case '{name}'")]
    UnknownCase {
        /// The name that was looked up.
        name: String,
    },

    /// A custom case reuses a name already in the registry.
    #[error("duplicate case name '{name}'")]
    DuplicateCase {
        /// The colliding name.
        name: String,
    },

    /// A custom case has an input that is not finite and positive.
    #[error("case '{name}' has invalid {field}: must be finite and positive")]
    InvalidInput {
        /// The offending case.
        name: String,
        /// The offending input field.
        field: &'static str,
    },

    /// A custom case was given an empty name.
    #[error("case name must not be empty")]
    EmptyName,
}
