//! Core types, dice formulas, and attribute storage for Fracas.
//!
//! This crate provides:
//! - [`Value`] - The attribute value type for all Fracas data
//! - [`Formula`] - Parsed dice expressions (`2D6+3`, `3-9`, constants)
//! - [`AttributeStore`] - Named attribute maps attached to entities and actions
//! - [`Error`] - Error types shared by every layer
//! - [`keys`] - Well-known attribute and verb names

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attrs;
pub mod dice;
pub mod error;
pub mod keys;
pub mod value;

pub use attrs::AttributeStore;
pub use dice::Formula;
pub use error::{Error, Result};
pub use value::Value;
