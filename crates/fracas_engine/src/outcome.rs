//! Action outcomes.

use std::fmt;

/// What an action (or one delivery within it) amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the action took effect.
    pub success: bool,
    /// Human-readable account of what happened, newline-joined for
    /// compound actions.
    pub description: String,
}

impl Outcome {
    /// Bundles a flag and description.
    #[must_use]
    pub fn new(success: bool, description: impl Into<String>) -> Self {
        Self {
            success,
            description: description.into(),
        }
    }

    /// An outcome that took effect.
    #[must_use]
    pub fn success(description: impl Into<String>) -> Self {
        Self::new(true, description)
    }

    /// An outcome that was evaded, absorbed, or resisted.
    #[must_use]
    pub fn failure(description: impl Into<String>) -> Self {
        Self::new(false, description)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// What one defense handler decided about a delivery.
#[derive(Debug)]
pub(crate) enum Disposition {
    /// The handler resolved the delivery; stop walking the chain.
    Resolved(Outcome),
    /// Not this handler's verb; try the next handler.
    Delegate,
}
