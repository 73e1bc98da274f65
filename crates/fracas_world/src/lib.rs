//! Entity arena, hierarchical contexts, and definition files for Fracas.
//!
//! This crate provides:
//! - [`World`] - Arena owning every entity, with hierarchical attribute lookup
//! - [`Entity`] - Named attribute carriers: props, actors, guards, contexts
//! - [`EntityId`] - Copyable handles into the arena
//! - Definition file loading (`World::load`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod loader;
pub mod world;

pub use entity::{ContextState, Entity, EntityId, GuardState, Kind};
pub use world::World;
