//! Errors for vehicle specs supplied from outside the model (command line).
//!
//! The model's own mutators never fail: adding an absent value is a no-op and
//! removal reports success as a `bool`. Only textual input can be rejected.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecParseError {
    /// No `kind:` prefix in front of the field list
    #[error("missing vehicle kind in '{0}', expected 'car:...' or 'moto:...'")]
    MissingKind(String),

    /// Prefix is neither a car nor a motorcycle
    #[error("unknown vehicle kind '{0}'")]
    UnknownKind(String),

    #[error("{kind} spec needs {expected} comma-separated fields, got {found}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("invalid {field} '{value}': {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid topbox flag '{0}', expected yes/no")]
    InvalidTopBox(String),
}

/// Result alias for spec parsing.
pub type Result<T> = std::result::Result<T, SpecParseError>;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
