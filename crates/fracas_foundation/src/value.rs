//! The attribute value type.
//!
//! Every attribute on an entity or action holds a [`Value`]. The variant
//! records what the value is rather than leaving callers to guess from
//! string contents: integers stay integers, dice expressions become
//! formulas only at the moment they are rolled, and comma-joined text
//! becomes an explicit list.

use std::fmt;
use std::sync::Arc;

use crate::dice::Formula;
use crate::error::{Error, Result};

/// A single attribute value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// Immutable text. Also the resting form of an unparsed dice
    /// expression, which is only parsed when something rolls it.
    Text(Arc<str>),
    /// A parsed dice formula.
    Formula(Formula),
    /// An ordered list of values, one per consuming sub-verb.
    List(Vec<Value>),
}

impl Value {
    /// Parses loaded text into a typed value.
    ///
    /// Integers become [`Value::Int`], comma-joined text becomes a
    /// [`Value::List`] of parsed scalars, everything else stays text.
    /// Dice expressions are deliberately left as text here; they are
    /// parsed when rolled so that a bad formula surfaces as an error
    /// from the action that consumes it.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.contains(',') {
            return Self::List(text.split(',').map(Self::parse_scalar).collect());
        }
        Self::parse_scalar(text)
    }

    /// Parses one comma-free token: integer or text.
    fn parse_scalar(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(value) => Self::Int(value),
            Err(_) => Self::Text(Arc::from(token)),
        }
    }

    /// A short name for the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Formula(_) => "formula",
            Self::List(_) => "list",
        }
    }

    /// Returns the integer if this is an [`Value::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text if this is a [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the list contents if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Coerces this value to a rollable formula.
    ///
    /// Integers become constants and text is parsed as a dice
    /// expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFormula`] for unparseable text and
    /// [`Error::TypeMismatch`] for lists, which never roll as a unit.
    pub fn to_formula(&self) -> Result<Formula> {
        match self {
            Self::Int(value) => Ok(Formula::constant(*value)),
            Self::Text(text) => Formula::parse(text),
            Self::Formula(formula) => Ok(formula.clone()),
            Self::List(_) => Err(Error::type_mismatch("formula", self.type_name())),
        }
    }

    /// Iterates the value as a sequence: a list yields its elements,
    /// any scalar yields itself exactly once.
    pub fn items(&self) -> std::slice::Iter<'_, Value> {
        match self {
            Self::List(items) => items.iter(),
            scalar => std::slice::from_ref(scalar).iter(),
        }
    }
}

impl fmt::Display for Value {
    /// Lists render comma-joined, matching the definition file syntax
    /// they were parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Formula(formula) => write!(f, "{formula}"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// Convenience From implementations
// =============================================================================

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    /// Wraps the text verbatim. Use [`Value::parse`] for the typed
    /// reading applied to definition files.
    fn from(value: &str) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl From<Arc<str>> for Value {
    fn from(value: Arc<str>) -> Self {
        Self::Text(value)
    }
}

impl From<Formula> for Value {
    fn from(value: Formula) -> Self {
        Self::Formula(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
