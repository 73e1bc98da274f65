//! Error types for the Fracas system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Fracas operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A dice expression could not be parsed.
    #[error("{reason}: {expr:?}")]
    MalformedFormula {
        /// The offending expression text.
        expr: String,
        /// What the parser objected to.
        reason: &'static str,
    },

    /// An action carried the wrong number of values for an attribute.
    #[error("{attribute} expects 1 value or {expected}, got {actual}")]
    ArityMismatch {
        /// The attribute whose values were counted.
        attribute: String,
        /// Number of values the verb calls for.
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// A value had the wrong type for the requested operation.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// The expected type name.
        expected: &'static str,
        /// The type name actually encountered.
        found: &'static str,
    },

    /// An actor tried to act without a current context.
    #[error("{name} has no current context")]
    MissingContext {
        /// Name of the context-less actor.
        name: String,
    },

    /// A party or NPC operation targeted a non-context entity.
    #[error("{name} is not a context")]
    NotAContext {
        /// Name of the entity that was expected to be a context.
        name: String,
    },

    /// An entity definition file could not be read.
    #[error("cannot read entity definition {path:?}")]
    DefinitionIo {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a malformed formula error.
    #[must_use]
    pub fn malformed_formula(expr: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedFormula {
            expr: expr.into(),
            reason,
        }
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(attribute: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            attribute: attribute.into(),
            expected,
            actual,
        }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Creates a missing context error.
    #[must_use]
    pub fn missing_context(name: impl Into<String>) -> Self {
        Self::MissingContext { name: name.into() }
    }

    /// Creates a not-a-context error.
    #[must_use]
    pub fn not_a_context(name: impl Into<String>) -> Self {
        Self::NotAContext { name: name.into() }
    }

    /// Creates a definition I/O error.
    #[must_use]
    pub fn definition_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DefinitionIo {
            path: path.into(),
            source,
        }
    }
}
