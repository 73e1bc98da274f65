//! What an object lets its wielder do.
//!
//! Objects advertise verb expressions through their `ACTIONS`
//! attribute. [`possible_actions`] turns each expression into a ready
//! [`Action`] whose modifier slots are pre-filled from the provider's
//! own attributes, one slot per sub-verb. [`interact`] builds the
//! conversational equivalent for an NPC: a throwaway object offering
//! one `VERBAL` action per advertised topic.

use fracas_foundation::keys::{
    ACCURACY, ACTIONS, DAMAGE, INTERACTIONS, POWER, STACKS, VERBAL,
};
use fracas_foundation::{Error, Result, Value};
use fracas_world::{Entity, EntityId, Kind, World};

use crate::action::Action;

/// Builds the actions `provider` offers, one per `ACTIONS` entry.
///
/// Attack sub-verbs read the provider's `ACCURACY` (plus sub-type
/// bonus) and its most specific `DAMAGE`; condition sub-verbs read
/// `POWER` (plus per-verb bonus) and the most specific `STACKS`.
/// Missing damage falls back to 0, missing stacks to 1.
///
/// # Errors
///
/// Returns a type error when an `ACTIONS` entry is not text, and
/// anything attribute lookups can raise.
pub fn possible_actions(world: &World, provider: EntityId) -> Result<Vec<Action>> {
    let Some(advertised) = world.attr(provider, ACTIONS) else {
        return Ok(Vec::new());
    };

    let mut actions = Vec::new();
    for entry in advertised.items() {
        let Some(expression) = entry.as_str() else {
            return Err(Error::type_mismatch("text", entry.type_name()));
        };
        actions.push(offered_action(world, provider, expression)?);
    }
    Ok(actions)
}

/// One ready-to-use action for one advertised verb expression.
fn offered_action(world: &World, provider: EntityId, expression: &str) -> Result<Action> {
    let mut action = Action::new(provider, expression);

    let mut accuracies = Vec::new();
    let mut damages = Vec::new();
    let mut powers = Vec::new();
    let mut stacks = Vec::new();
    for sub in action.verb().sub_verbs() {
        if sub.is_attack() {
            let mut accuracy = world.attr_int(provider, ACCURACY)?;
            if let Some(subtype) = sub.subtype() {
                accuracy += world.attr_int(provider, &format!("{ACCURACY}.{subtype}"))?;
            }
            accuracies.push(Value::Int(accuracy));

            let specific = sub
                .subtype()
                .and_then(|subtype| world.attr(provider, &format!("{DAMAGE}.{subtype}")));
            let damage = specific
                .or_else(|| world.attr(provider, DAMAGE))
                .cloned()
                .unwrap_or(Value::Int(0));
            damages.push(damage);
        } else {
            let power = world.attr_int(provider, POWER)?
                + world.attr_int(provider, &format!("{POWER}.{full}", full = sub.full()))?;
            powers.push(Value::Int(power));

            let per_verb = world.attr(provider, &format!("{STACKS}.{full}", full = sub.full()));
            let stack = per_verb
                .or_else(|| world.attr(provider, STACKS))
                .cloned()
                .unwrap_or(Value::Int(1));
            stacks.push(stack);
        }
    }

    if !accuracies.is_empty() {
        action.set(ACCURACY, Value::List(accuracies));
    }
    if !damages.is_empty() {
        action.set(DAMAGE, Value::List(damages));
    }
    if !powers.is_empty() {
        action.set(POWER, Value::List(powers));
    }
    if !stacks.is_empty() {
        action.set(STACKS, Value::List(stacks));
    }
    Ok(action)
}

/// Opens a conversation with `npc` on behalf of `requester`.
///
/// Spawns a transient object advertising one `VERBAL.<topic>` action
/// per entry in the NPC's `INTERACTIONS`. An NPC with nothing to say
/// yields an object with no actions at all.
pub fn interact(world: &mut World, npc: EntityId, requester: EntityId) -> EntityId {
    let name = format!("interactions w/{}", world.name(requester));
    let topics = world.attr(npc, INTERACTIONS).map(|value| {
        value
            .items()
            .map(|topic| Value::from(format!("{VERBAL}.{topic}")))
            .collect::<Vec<Value>>()
    });

    let container = world.spawn(Entity::new(name, Kind::Prop));
    if let Some(topics) = topics {
        world.set_attr(container, ACTIONS, Value::List(topics));
    }
    container
}
