//! Per-entity turn dispatch.

use rand::Rng;

use fracas_foundation::Result;
use fracas_world::{EntityId, World};

use crate::guard::guard_turn;
use crate::outcome::Outcome;

/// Lets `entity` spend its turn.
///
/// A guard with a marked target retaliates with its weapon; everyone
/// else, guards included, stands down.
///
/// # Errors
///
/// Propagates resolution errors from the guard's retaliation.
pub fn take_turn(world: &mut World, entity: EntityId, rng: &mut impl Rng) -> Result<Outcome> {
    let marked = world
        .entity(entity)
        .guard_state()
        .and_then(|state| state.target);
    match marked {
        Some(target) => guard_turn(world, entity, target, rng),
        None => Ok(no_action(world, entity)),
    }
}

/// The idle turn every entity falls back to.
pub(crate) fn no_action(world: &World, entity: EntityId) -> Outcome {
    Outcome::success(format!(
        "{name} takes no action",
        name = world.name(entity)
    ))
}
