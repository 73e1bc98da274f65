//! Fracas - Attribute-driven skirmish engine
//!
//! This crate re-exports all layers of the Fracas system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: fracas_engine     — Action resolution, defenses, NPC turns
//! Layer 1: fracas_world      — Entity arena, contexts, definition files
//! Layer 0: fracas_foundation — Core types (Value, Formula, Error)
//! ```

pub use fracas_engine as engine;
pub use fracas_foundation as foundation;
pub use fracas_world as world;
