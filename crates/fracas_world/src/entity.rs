//! Entities and their role-specific state.
//!
//! Every inhabitant of a [`World`](crate::World) is an [`Entity`]: a
//! named bag of attributes plus a [`Kind`] that selects how incoming
//! actions are defended. Kind-specific state (a guard's target, a
//! context's membership) lives inside the kind variant itself, so it
//! cannot exist on the wrong sort of entity.

use std::fmt;

use fracas_foundation::{AttributeStore, Value};

/// Handle to an entity inside a [`World`](crate::World) arena.
///
/// Entities are never deallocated (death is a flag), so a handle stays
/// valid for the life of the world that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(u32);

impl EntityId {
    /// Creates an id from an arena index.
    #[must_use]
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// The arena index this id points at.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What sort of entity this is, with role-specific state inline.
///
/// The kind decides the defense chain an incoming delivery walks:
/// contexts try a search sweep, actor-class entities try attack
/// mitigation, and everything falls back to generic resistance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Inert object: weapons, loot, scenery. Defends with resistance only.
    Prop,
    /// A player-directed character.
    Actor,
    /// An NPC fighter that remembers who attacked it.
    Guard(GuardState),
    /// A location or region. Delegates attribute lookups to its parent.
    Context(ContextState),
}

impl Kind {
    /// True for entities that mitigate attacks (actors and guards).
    #[must_use]
    pub const fn is_actor_class(&self) -> bool {
        matches!(self, Self::Actor | Self::Guard(_))
    }
}

/// Mutable combat state for a [`Kind::Guard`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardState {
    /// Who the guard will swing at on its next turn.
    pub target: Option<EntityId>,
    /// Set once reinforcements have actually arrived.
    pub help_summoned: bool,
    /// The object whose actions the guard fights with.
    pub weapon: Option<EntityId>,
}

impl GuardState {
    /// A guard with no target, no help, and no weapon yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hierarchy and membership for a [`Kind::Context`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextState {
    /// Enclosing context consulted when an attribute is not set locally.
    pub parent: Option<EntityId>,
    party: Vec<EntityId>,
    npcs: Vec<EntityId>,
}

impl ContextState {
    /// A top-level context with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context nested inside `parent`.
    #[must_use]
    pub fn with_parent(parent: EntityId) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    /// Player-controlled members present in this context.
    #[must_use]
    pub fn party(&self) -> &[EntityId] {
        &self.party
    }

    /// NPCs registered in this context.
    #[must_use]
    pub fn npcs(&self) -> &[EntityId] {
        &self.npcs
    }

    /// Adds a party member. Returns false if already present.
    pub fn add_member(&mut self, member: EntityId) -> bool {
        if self.party.contains(&member) {
            return false;
        }
        self.party.push(member);
        true
    }

    /// Registers an NPC. Returns false if already present.
    pub fn add_npc(&mut self, npc: EntityId) -> bool {
        if self.npcs.contains(&npc) {
            return false;
        }
        self.npcs.push(npc);
        true
    }
}

/// A named inhabitant of the world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// Display name, also used for substring lookups.
    pub name: String,
    /// Optional flavor text.
    pub description: Option<String>,
    /// Role of this entity, with role-specific state inline.
    pub kind: Kind,
    /// Context the entity currently acts in.
    pub context: Option<EntityId>,
    /// Cleared when the entity is killed.
    pub alive: bool,
    /// Set when the entity can no longer take turns.
    pub incapacitated: bool,
    attributes: AttributeStore,
    objects: Vec<EntityId>,
}

impl Entity {
    /// Creates a live, empty-handed entity.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            context: None,
            alive: true,
            incapacitated: false,
            attributes: AttributeStore::new(),
            objects: Vec::new(),
        }
    }

    /// Builder-style description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Looks up a local attribute. Use
    /// [`World::attr`](crate::World::attr) for hierarchical lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Sets a local attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.set(name, value);
    }

    /// Read access to the whole attribute store.
    #[must_use]
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Objects this entity owns, in acquisition order.
    #[must_use]
    pub fn objects(&self) -> &[EntityId] {
        &self.objects
    }

    /// Takes ownership of an object. Returns false if already owned.
    pub(crate) fn add_object(&mut self, object: EntityId) -> bool {
        if self.objects.contains(&object) {
            return false;
        }
        self.objects.push(object);
        true
    }

    /// Guard state, when this entity is a guard.
    #[must_use]
    pub fn guard_state(&self) -> Option<&GuardState> {
        match &self.kind {
            Kind::Guard(state) => Some(state),
            _ => None,
        }
    }

    /// Mutable guard state, when this entity is a guard.
    pub fn guard_state_mut(&mut self) -> Option<&mut GuardState> {
        match &mut self.kind {
            Kind::Guard(state) => Some(state),
            _ => None,
        }
    }

    /// Context state, when this entity is a context.
    #[must_use]
    pub fn context_state(&self) -> Option<&ContextState> {
        match &self.kind {
            Kind::Context(state) => Some(state),
            _ => None,
        }
    }

    /// Mutable context state, when this entity is a context.
    pub fn context_state_mut(&mut self) -> Option<&mut ContextState> {
        match &mut self.kind {
            Kind::Context(state) => Some(state),
            _ => None,
        }
    }
}
