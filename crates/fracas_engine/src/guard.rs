//! The stock guard NPC.
//!
//! Guards are the engine's reference combatant: modest accuracy, good
//! evasion against slashes, a sword, and an optional reinforcement
//! pool. Everything here layers on ordinary entities and attributes;
//! nothing about a guard is special-cased in resolution beyond its
//! [`Kind`](fracas_world::Kind).

use rand::Rng;

use fracas_foundation::keys::{
    ACCURACY, ACTIONS, EVASION, HP, LIFE, PROTECTION, REINFORCEMENTS,
};
use fracas_foundation::Result;
use fracas_world::{Entity, EntityId, GuardState, Kind, World};

use crate::action::take_action;
use crate::capability::possible_actions;
use crate::outcome::Outcome;
use crate::turn::no_action;

/// Spawns a guard with the stock loadout and a sword to swing.
pub fn spawn_guard(
    world: &mut World,
    name: impl Into<String>,
    description: impl Into<String>,
) -> EntityId {
    let guard = world.spawn(
        Entity::new(name, Kind::Guard(GuardState::new())).with_description(description),
    );
    world.set_attr(guard, HP, 16);
    world.set_attr(guard, LIFE, 16);
    world.set_attr(guard, ACCURACY, 10);
    world.set_attr(guard, EVASION, 40);
    world.set_attr(guard, "EVASION.slash", 20);
    world.set_attr(guard, PROTECTION, 2);
    world.set_attr(guard, REINFORCEMENTS, 0);

    let sword = world.spawn(Entity::new("sword", Kind::Prop));
    world.set_attr(sword, ACTIONS, "ATTACK.slash");
    world.set_attr(sword, "DAMAGE.slash", "D6");
    world.add_object(guard, sword);
    if let Some(state) = world.entity_mut(guard).guard_state_mut() {
        state.weapon = Some(sword);
    }
    guard
}

/// One combat turn: pick one of the weapon's actions at random and
/// deliver it to the marked target. A guard with no usable weapon
/// stands idle.
pub(crate) fn guard_turn(
    world: &mut World,
    guard: EntityId,
    target: EntityId,
    rng: &mut impl Rng,
) -> Result<Outcome> {
    let Some(weapon) = world.entity(guard).guard_state().and_then(|state| state.weapon) else {
        return Ok(no_action(world, guard));
    };
    let actions = possible_actions(world, weapon)?;
    if actions.is_empty() {
        return Ok(no_action(world, guard));
    }

    let action = &actions[rng.gen_range(0..actions.len())];
    let inner = take_action(world, guard, action, target, rng)?;
    Ok(Outcome::new(
        inner.success,
        format!(
            "{guard} uses {weapon} to {verb} {target}\n    {report}",
            guard = world.name(guard),
            weapon = world.name(weapon),
            verb = action.verb(),
            target = world.name(target),
            report = inner.description,
        ),
    ))
}
