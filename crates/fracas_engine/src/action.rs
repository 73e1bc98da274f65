//! Action descriptors and the resolution pipeline.
//!
//! An [`Action`] pairs a verb expression with modifier attributes
//! (`ACCURACY`, `DAMAGE`, `POWER`, `STACKS`). Resolution walks the
//! sub-verbs in declaration order: for each one the initiator-side
//! numbers are aggregated into an immutable [`Payload`], wrapped in a
//! [`Delivery`], and handed to the target's defense chain. The first
//! failed delivery halts the rest; effects already applied stay
//! applied.
//!
//! Attacks and conditions consume modifier slots independently: the
//! n-th attack sub-verb takes the n-th `ACCURACY`/`DAMAGE` slot, the
//! n-th condition takes the n-th `POWER`/`STACKS` slot. A slot list
//! must hold either one value (broadcast) or exactly as many as that
//! category has sub-verbs; anything else is an arity error, raised
//! before anything is delivered.

use rand::Rng;

use fracas_foundation::keys::{ACCURACY, DAMAGE, POWER, STACKS};
use fracas_foundation::{AttributeStore, Error, Result, Value};
use fracas_world::{EntityId, World};

use crate::defense::accept_action;
use crate::outcome::Outcome;
use crate::verb::{SubVerb, Verb};

/// Initiator-side numbers for one sub-verb, computed once and then
/// read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    /// An attack: resolved against evasion and protection.
    Attack {
        /// Chance to land, before the target's defenses.
        to_hit: i64,
        /// Life-points carried, before protection.
        damage: i64,
    },
    /// A condition: resolved against resistance.
    Condition {
        /// Chance to take hold, before the target's resistance.
        to_hit: i64,
        /// Stack units carried. May be negative to lift a condition.
        stacks: i64,
    },
}

impl Payload {
    /// The pre-defense chance to land.
    #[must_use]
    pub const fn to_hit(&self) -> i64 {
        match self {
            Self::Attack { to_hit, .. } | Self::Condition { to_hit, .. } => *to_hit,
        }
    }

    /// The units delivered: damage for attacks, stacks for conditions.
    #[must_use]
    pub const fn total(&self) -> i64 {
        match self {
            Self::Attack { damage, .. } => *damage,
            Self::Condition { stacks, .. } => *stacks,
        }
    }
}

/// One sub-verb's worth of action, as seen by the receiving side.
#[derive(Clone, Copy, Debug)]
pub struct Delivery<'a> {
    /// The object enabling the action (weapon, scroll, the context).
    pub source: EntityId,
    /// The sub-verb being delivered.
    pub verb: SubVerb<'a>,
    /// The initiator-side numbers.
    pub payload: Payload,
}

/// An action a character can attempt: a verb plus modifiers.
#[derive(Clone, Debug)]
pub struct Action {
    source: EntityId,
    verb: Verb,
    attributes: AttributeStore,
}

impl Action {
    /// Creates an action enabled by `source`.
    ///
    /// Verbs that never mention `ATTACK` start with `STACKS` = 1, so a
    /// bare condition delivers one stack by default.
    #[must_use]
    pub fn new(source: EntityId, verb: impl Into<Verb>) -> Self {
        let verb = verb.into();
        let mut attributes = AttributeStore::new();
        if !verb.mentions_attack() {
            attributes.set(STACKS, 1);
        }
        Self {
            source,
            verb,
            attributes,
        }
    }

    /// The enabling object.
    #[must_use]
    pub const fn source(&self) -> EntityId {
        self.source
    }

    /// The verb expression.
    #[must_use]
    pub const fn verb(&self) -> &Verb {
        &self.verb
    }

    /// Looks up a modifier attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Sets a modifier attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.set(name, value);
    }

    /// Resolves the action against `target`.
    ///
    /// Sub-verbs are delivered strictly in declaration order and the
    /// first failure halts delivery of the rest; descriptions
    /// accumulate newline-joined either way. Numbers for a sub-verb
    /// are only computed when its turn comes, so a malformed formula
    /// behind a never-reached sub-verb goes unnoticed.
    ///
    /// # Errors
    ///
    /// Returns an arity error when a modifier list length matches
    /// neither 1 nor its category's sub-verb count, a type error when
    /// a flat modifier is not an integer, and a formula error when a
    /// rollable modifier fails to parse.
    pub fn act(
        &self,
        world: &mut World,
        initiator: EntityId,
        target: EntityId,
        context: EntityId,
        rng: &mut impl Rng,
    ) -> Result<Outcome> {
        let subs: Vec<SubVerb<'_>> = self.verb.sub_verbs().collect();
        let attack_count = subs.iter().filter(|sub| sub.is_attack()).count();
        let condition_count = subs.len() - attack_count;

        let accuracies = expand_slots(self.get(ACCURACY), ACCURACY, attack_count)?;
        let damages = expand_slots(self.get(DAMAGE), DAMAGE, attack_count)?;
        let powers = expand_slots(self.get(POWER), POWER, condition_count)?;
        let stack_slots = expand_slots(self.get(STACKS), STACKS, condition_count)?;

        let mut description = String::new();
        let mut attacks = 0;
        let mut conditions = 0;
        for sub in &subs {
            let payload = if sub.is_attack() {
                let accuracy =
                    aggregate_accuracy(world, initiator, *sub, accuracies[attacks].as_ref())?;
                let damage =
                    aggregate_damage(world, initiator, *sub, damages[attacks].as_ref(), rng)?;
                attacks += 1;
                Payload::Attack {
                    to_hit: 100 + accuracy,
                    damage,
                }
            } else {
                let power = aggregate_power(world, initiator, *sub, powers[conditions].as_ref())?;
                let stacks =
                    aggregate_stacks(world, initiator, *sub, stack_slots[conditions].as_ref(), rng)?;
                conditions += 1;
                Payload::Condition {
                    to_hit: 100 + power,
                    stacks,
                }
            };

            let delivery = Delivery {
                source: self.source,
                verb: *sub,
                payload,
            };
            let outcome = accept_action(world, target, &delivery, initiator, context, rng)?;
            if !description.is_empty() {
                description.push('\n');
            }
            description.push_str(&outcome.description);
            if !outcome.success {
                return Ok(Outcome::failure(description));
            }
        }
        Ok(Outcome::success(description))
    }
}

/// Initiates `action` against `target` from within the actor's
/// current context.
///
/// # Errors
///
/// Returns [`Error::MissingContext`] when the actor has never been
/// placed in a context, plus anything [`Action::act`] can return.
pub fn take_action(
    world: &mut World,
    actor: EntityId,
    action: &Action,
    target: EntityId,
    rng: &mut impl Rng,
) -> Result<Outcome> {
    let Some(context) = world.entity(actor).context else {
        return Err(Error::missing_context(world.name(actor)));
    };
    action.act(world, actor, target, context, rng)
}

/// Expands a stored modifier into per-slot values for one category.
///
/// A category with no sub-verbs reads nothing, absent attributes
/// expand to sentinel slots, scalars and one-element lists broadcast,
/// and a full-length list maps positionally.
fn expand_slots(
    stored: Option<&Value>,
    attribute: &str,
    count: usize,
) -> Result<Vec<Option<Value>>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    match stored {
        None => Ok(vec![None; count]),
        Some(Value::List(items)) => {
            if items.len() == count {
                Ok(items.iter().cloned().map(Some).collect())
            } else if items.len() == 1 {
                Ok(vec![Some(items[0].clone()); count])
            } else {
                Err(Error::arity_mismatch(attribute, count, items.len()))
            }
        }
        Some(scalar) => Ok(vec![Some(scalar.clone()); count]),
    }
}

/// A flat integer slot; the sentinel reads as 0.
fn slot_int(slot: Option<&Value>) -> Result<i64> {
    match slot {
        None => Ok(0),
        Some(value) => value
            .as_int()
            .ok_or_else(|| Error::type_mismatch("int", value.type_name())),
    }
}

/// Slot accuracy + initiator `ACCURACY` + sub-type bonus.
fn aggregate_accuracy(
    world: &World,
    initiator: EntityId,
    sub: SubVerb<'_>,
    slot: Option<&Value>,
) -> Result<i64> {
    let mut total = slot_int(slot)?;
    total += world.attr_int(initiator, ACCURACY)?;
    if let Some(subtype) = sub.subtype() {
        total += world.attr_int(initiator, &format!("{ACCURACY}.{subtype}"))?;
    }
    Ok(total)
}

/// Rolled slot damage + rolled initiator `DAMAGE` + rolled sub-type
/// bonus. An empty slot deals nothing.
fn aggregate_damage(
    world: &World,
    initiator: EntityId,
    sub: SubVerb<'_>,
    slot: Option<&Value>,
    rng: &mut impl Rng,
) -> Result<i64> {
    let mut total = match slot {
        None => 0,
        Some(value) => value.to_formula()?.roll(rng),
    };
    if let Some(base) = world.attr(initiator, DAMAGE) {
        total += base.to_formula()?.roll(rng);
    }
    if let Some(subtype) = sub.subtype() {
        if let Some(bonus) = world.attr(initiator, &format!("{DAMAGE}.{subtype}")) {
            total += bonus.to_formula()?.roll(rng);
        }
    }
    Ok(total)
}

/// Slot power + initiator `POWER.<base>` + sub-type bonus. The
/// initiator's bare `POWER` never applies to deliveries; it is an
/// offering-side input only.
fn aggregate_power(
    world: &World,
    initiator: EntityId,
    sub: SubVerb<'_>,
    slot: Option<&Value>,
) -> Result<i64> {
    let mut total = slot_int(slot)?;
    total += world.attr_int(initiator, &format!("{POWER}.{}", sub.base()))?;
    if let Some(subtype) = sub.subtype() {
        total += world.attr_int(initiator, &format!("{POWER}.{}.{subtype}", sub.base()))?;
    }
    Ok(total)
}

/// Rolled slot stacks + rolled initiator `STACKS.<base>` + rolled
/// sub-type bonus. An empty slot delivers one stack.
fn aggregate_stacks(
    world: &World,
    initiator: EntityId,
    sub: SubVerb<'_>,
    slot: Option<&Value>,
    rng: &mut impl Rng,
) -> Result<i64> {
    let mut total = match slot {
        None => 1,
        Some(value) => value.to_formula()?.roll(rng),
    };
    if let Some(base) = world.attr(initiator, &format!("{STACKS}.{}", sub.base())) {
        total += base.to_formula()?.roll(rng);
    }
    if let Some(subtype) = sub.subtype() {
        if let Some(bonus) = world.attr(initiator, &format!("{STACKS}.{}.{subtype}", sub.base())) {
            total += bonus.to_formula()?.roll(rng);
        }
    }
    Ok(total)
}
