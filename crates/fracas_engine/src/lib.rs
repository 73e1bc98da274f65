//! Action resolution, capability discovery, and defense chains for Fracas.
//!
//! This crate provides:
//! - [`Action`] - A verb plus modifier attributes, resolved sub-verb by sub-verb
//! - [`possible_actions`] - The actions an object currently offers
//! - [`accept_action`] - Kind-keyed defense chains on the receiving side
//! - [`take_turn`] - NPC turn taking
//! - [`interact`] - Conversational action discovery against NPCs
//!
//! Every function that rolls dice takes the random number generator
//! explicitly, so callers own reproducibility.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod capability;
pub mod defense;
pub mod guard;
pub mod outcome;
pub mod turn;
pub mod verb;

pub use action::{Action, Delivery, Payload, take_action};
pub use capability::{interact, possible_actions};
pub use defense::accept_action;
pub use guard::spawn_guard;
pub use outcome::Outcome;
pub use turn::take_turn;
pub use verb::{SubVerb, Verb};
