//! The receiving side of action resolution.
//!
//! Every delivery lands through [`accept_action`]. The target's kind
//! picks a chain of specialized handlers that may resolve the delivery
//! outright or wave it through: contexts intercept `SEARCH`, actors
//! and guards intercept plain `ATTACK`. Whatever reaches the end of
//! the chain falls into per-verb resistance, the handler of last
//! resort shared by every entity. Guards additionally run a follow-up
//! after resolution to pick their retaliation target and call for
//! reinforcements.

use rand::Rng;

use fracas_foundation::keys::{
    ATTACK, EVASION, HP, LIFE, PROTECTION, REINFORCEMENTS, RESISTANCE, SEARCH,
};
use fracas_foundation::Result;
use fracas_world::{EntityId, Kind, World};

use crate::action::Delivery;
use crate::guard::spawn_guard;
use crate::outcome::{Disposition, Outcome};

/// Resolves one delivered sub-verb against `target`.
///
/// Runs the target's specialized handlers in order, falls back to
/// resistance when none of them claims the delivery, then lets guard
/// targets react. The returned outcome's description is the
/// human-readable account of what happened.
///
/// # Errors
///
/// Returns a type error when a numeric defense attribute holds
/// something other than an integer, and a formula error when a
/// stored modifier fails to parse during recursive resolution.
pub fn accept_action(
    world: &mut World,
    target: EntityId,
    delivery: &Delivery<'_>,
    initiator: EntityId,
    context: EntityId,
    rng: &mut impl Rng,
) -> Result<Outcome> {
    let chain: &[Handler] = match &world.entity(target).kind {
        Kind::Context(_) => &[Handler::Search],
        Kind::Actor | Kind::Guard(_) => &[Handler::Mitigate],
        Kind::Prop => &[],
    };

    let mut resolved = None;
    for handler in chain {
        match handler.handle(world, target, delivery, initiator, context, rng)? {
            Disposition::Resolved(outcome) => {
                resolved = Some(outcome);
                break;
            }
            Disposition::Delegate => {}
        }
    }
    let mut outcome = match resolved {
        Some(outcome) => outcome,
        None => resist(world, target, delivery, initiator, context, rng)?,
    };

    if world.entity(target).guard_state().is_some() {
        guard_followup(world, target, delivery, initiator, context, rng, &mut outcome)?;
    }
    Ok(outcome)
}

// =============================================================================
// Specialized handlers
// =============================================================================

/// A defense specialization ahead of resistance in a target's chain.
#[derive(Clone, Copy, Debug)]
enum Handler {
    /// Context sweep for concealed objects.
    Search,
    /// Actor evasion and protection against plain attacks.
    Mitigate,
}

impl Handler {
    fn handle(
        self,
        world: &mut World,
        target: EntityId,
        delivery: &Delivery<'_>,
        initiator: EntityId,
        context: EntityId,
        rng: &mut impl Rng,
    ) -> Result<Disposition> {
        match self {
            Self::Search => search(world, target, delivery, initiator, context, rng),
            Self::Mitigate => mitigate(world, target, delivery, initiator, context, rng),
        }
    }
}

/// Sweeps the context's concealable objects, re-delivering the search
/// to each one so its own `RESISTANCE.SEARCH` decides whether it turns
/// up. Claims only the exact `SEARCH` verb.
fn search(
    world: &mut World,
    target: EntityId,
    delivery: &Delivery<'_>,
    initiator: EntityId,
    context: EntityId,
    rng: &mut impl Rng,
) -> Result<Disposition> {
    if delivery.verb.full() != SEARCH {
        return Ok(Disposition::Delegate);
    }

    let concealment = format!("{RESISTANCE}.{SEARCH}");
    let owned = world.objects(target).to_vec();
    let mut found = false;
    let mut description = String::new();
    for object in owned {
        if world.attr_int(object, &concealment)? <= 0 {
            continue;
        }
        let inner = accept_action(world, object, delivery, initiator, context, rng)?;
        found = found || inner.success;
        if !description.is_empty() {
            description.push_str("\n    ");
        }
        description.push_str(&inner.description);
    }
    Ok(Disposition::Resolved(Outcome::new(found, description)))
}

/// Evasion then protection against the plain `ATTACK` verb. Compound
/// attack bases such as `COUNTERATTACK` skip this and resolve by
/// resistance instead.
fn mitigate(
    world: &mut World,
    target: EntityId,
    delivery: &Delivery<'_>,
    initiator: EntityId,
    context: EntityId,
    rng: &mut impl Rng,
) -> Result<Disposition> {
    if delivery.verb.base() != ATTACK {
        return Ok(Disposition::Delegate);
    }
    let to_hit = delivery.payload.to_hit();
    let damage = delivery.payload.total();

    let mut evasion = world.attr_int(target, EVASION)?;
    if let Some(subtype) = delivery.verb.subtype() {
        evasion += world.attr_int(target, &format!("{EVASION}.{subtype}"))?;
    }
    let adjusted = to_hit - evasion;
    if adjusted < 100 {
        let roll: i64 = rng.gen_range(1..=100);
        if roll > adjusted {
            return Ok(Disposition::Resolved(Outcome::failure(format!(
                "{target} evades {source} {verb}",
                target = world.name(target),
                source = world.name(delivery.source),
                verb = delivery.verb,
            ))));
        }
    }

    let mut protection = world.attr_int(target, PROTECTION)?;
    if let Some(subtype) = delivery.verb.subtype() {
        protection += world.attr_int(target, &format!("{PROTECTION}.{subtype}"))?;
    }
    if protection >= damage {
        return Ok(Disposition::Resolved(Outcome::failure(format!(
            "{target}'s protection absorbs all damage from {verb}",
            target = world.name(target),
            verb = delivery.verb,
        ))));
    }

    let delivered = damage - protection;
    let before = world.attr_int(target, LIFE)?;
    let after = before - delivered;
    world.set_attr(target, LIFE, after);
    let mut description = format!(
        "{target} hit by {verb} (TO_HIT={to_hit}) from {initiator} using {source} \
         for {damage}-{protection} life-points in {context}\n    \
         {target} life: {before} - {delivered} = {after}",
        target = world.name(target),
        verb = delivery.verb,
        initiator = world.name(initiator),
        source = world.name(delivery.source),
        context = world.name(context),
    );
    if after <= 0 {
        let entity = world.entity_mut(target);
        entity.alive = false;
        entity.incapacitated = true;
        description.push_str(", and is killed");
    }
    Ok(Disposition::Resolved(Outcome::success(description)))
}

// =============================================================================
// Resistance
// =============================================================================

/// The handler of last resort: per-verb resistance.
///
/// Resistance for the delivered verb is subtracted from the payload's
/// chance; what remains is rolled once per stack and the stacks that
/// get through accumulate on the target under the full verb name, with
/// `LIFE` capped at `HP`. Negative totals lift stacks instead.
fn resist(
    world: &mut World,
    target: EntityId,
    delivery: &Delivery<'_>,
    initiator: EntityId,
    context: EntityId,
    rng: &mut impl Rng,
) -> Result<Outcome> {
    let full = delivery.verb.full();
    let base = delivery.verb.base();
    let mut resistance = world.attr_int(target, RESISTANCE)?;
    resistance += world.attr_int(target, &format!("{RESISTANCE}.{base}"))?;
    if let Some(subtype) = delivery.verb.subtype() {
        resistance += world.attr_int(target, &format!("{RESISTANCE}.{base}.{subtype}"))?;
    }

    let to_hit = delivery.payload.to_hit();
    let power = to_hit - resistance;
    if power <= 0 {
        return Ok(Outcome::failure(format!(
            "{target} resists {source} {verb}",
            target = world.name(target),
            source = world.name(delivery.source),
            verb = delivery.verb,
        )));
    }

    let total = delivery.payload.total();
    let incoming = total.abs();
    let sign = if total > 0 { 1 } else { -1 };
    let mut received = 0;
    for _ in 0..incoming {
        let roll: i64 = rng.gen_range(1..=100);
        if roll <= power {
            received += 1;
        }
    }

    let mut updated = world.attr_int(target, full)? + sign * received;
    if full == LIFE {
        updated = updated.min(world.attr_int(target, HP)?);
    }
    world.set_attr(target, full, updated);

    let blocked = incoming - received;
    let label = if sign > 0 {
        full.to_owned()
    } else {
        format!("(negative) {full}")
    };
    Ok(Outcome::new(
        received > 0,
        format!(
            "{target} resists {blocked}/{incoming} stacks of {label} (TO_HIT={to_hit}) \
             from {initiator} in {context}",
            target = world.name(target),
            initiator = world.name(initiator),
            context = world.name(context),
        ),
    ))
}

// =============================================================================
// Guard reaction
// =============================================================================

/// After any delivery a guard joins the context, and a surviving
/// attacked guard marks the initiator for retaliation and may call
/// reinforcements. One helper at most ever arrives.
fn guard_followup(
    world: &mut World,
    guard: EntityId,
    delivery: &Delivery<'_>,
    initiator: EntityId,
    context: EntityId,
    rng: &mut impl Rng,
    outcome: &mut Outcome,
) -> Result<()> {
    world.set_context(guard, context);
    if delivery.verb.base() != ATTACK || world.attr_int(guard, LIFE)? <= 0 {
        return Ok(());
    }

    if let Some(state) = world.entity_mut(guard).guard_state_mut() {
        state.target = Some(initiator);
    }

    let already_summoned = world
        .entity(guard)
        .guard_state()
        .is_some_and(|state| state.help_summoned);
    let reinforcements = world.attr_int(guard, REINFORCEMENTS)?;
    if reinforcements > 0 && !already_summoned {
        outcome.description.push_str(&format!(
            "\n    {name} calls for help",
            name = world.name(guard)
        ));
        let roll: i64 = rng.gen_range(1..=100);
        if roll <= reinforcements {
            let helper = spawn_guard(world, "Guard #2", "reinforcement");
            world.set_context(helper, context);
            world.add_npc(context, helper)?;
            if let Some(state) = world.entity_mut(helper).guard_state_mut() {
                state.target = Some(initiator);
            }
            if let Some(state) = world.entity_mut(guard).guard_state_mut() {
                state.help_summoned = true;
            }
            outcome.description.push_str(&format!(
                ", and {name} arrives",
                name = world.name(helper)
            ));
        }
    }
    Ok(())
}
