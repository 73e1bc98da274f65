//! The entity arena and hierarchical attribute lookup.
//!
//! A [`World`] owns every entity behind stable [`EntityId`] handles.
//! Attribute lookup walks the context parent chain: an attribute not
//! set on a context is fetched from its enclosing context, so a region
//! can establish a default that rooms inside it inherit or shadow.
//! Non-context entities never delegate.

use fracas_foundation::keys::{RESISTANCE, SEARCH};
use fracas_foundation::{Error, Result, Value};

use crate::entity::{ContextState, Entity, EntityId, Kind};

/// Arena owning every entity in play.
///
/// Entities are spawned and never removed; death and incapacitation
/// are flags on the entity. Handles from one world must not be used
/// with another.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    entities: Vec<Entity>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity and returns its handle.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        EntityId::new(self.entities.len() - 1)
    }

    /// Borrows an entity.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }

    /// Mutably borrows an entity.
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.index()]
    }

    /// An entity's display name.
    #[must_use]
    pub fn name(&self, id: EntityId) -> &str {
        &self.entity(id).name
    }

    /// Number of entities ever spawned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when nothing has been spawned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates every handle in spawn order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        (0..self.entities.len()).map(EntityId::new)
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Hierarchical attribute lookup.
    ///
    /// Returns the entity's own value when set. Contexts that lack the
    /// attribute ask their parent, transitively; other entities do not
    /// delegate.
    #[must_use]
    pub fn attr(&self, id: EntityId, name: &str) -> Option<&Value> {
        let mut current = id;
        loop {
            let entity = self.entity(current);
            if let Some(value) = entity.get(name) {
                return Some(value);
            }
            match &entity.kind {
                Kind::Context(ContextState {
                    parent: Some(parent),
                    ..
                }) => current = *parent,
                _ => return None,
            }
        }
    }

    /// Hierarchical integer lookup. An unset attribute reads as 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when the attribute is set but
    /// not an integer.
    pub fn attr_int(&self, id: EntityId, name: &str) -> Result<i64> {
        match self.attr(id, name) {
            None => Ok(0),
            Some(value) => value
                .as_int()
                .ok_or_else(|| Error::type_mismatch("int", value.type_name())),
        }
    }

    /// Sets an attribute directly on the entity, shadowing any
    /// inherited value.
    pub fn set_attr(&mut self, id: EntityId, name: impl Into<String>, value: impl Into<Value>) {
        self.entity_mut(id).set(name, value);
    }

    // =========================================================================
    // Ownership
    // =========================================================================

    /// Gives `object` to `owner`. Returns false if already owned.
    pub fn add_object(&mut self, owner: EntityId, object: EntityId) -> bool {
        self.entity_mut(owner).add_object(object)
    }

    /// Objects owned by an entity, in acquisition order.
    #[must_use]
    pub fn objects(&self, owner: EntityId) -> &[EntityId] {
        self.entity(owner).objects()
    }

    /// First owned object whose name contains `fragment`.
    #[must_use]
    pub fn object_named(&self, owner: EntityId, fragment: &str) -> Option<EntityId> {
        self.objects(owner)
            .iter()
            .copied()
            .find(|object| self.entity(*object).name.contains(fragment))
    }

    /// Owned objects that can currently be seen: everything that is
    /// not concealed, plus concealed objects that have been found.
    #[must_use]
    pub fn visible_objects(&self, owner: EntityId) -> Vec<EntityId> {
        self.objects(owner)
            .iter()
            .copied()
            .filter(|object| self.is_found(*object) || !self.is_concealed(*object))
            .collect()
    }

    /// Owned objects still hidden: concealed and not yet found.
    #[must_use]
    pub fn hidden_objects(&self, owner: EntityId) -> Vec<EntityId> {
        self.objects(owner)
            .iter()
            .copied()
            .filter(|object| self.is_concealed(*object) && !self.is_found(*object))
            .collect()
    }

    /// Concealment is a positive search resistance.
    fn is_concealed(&self, id: EntityId) -> bool {
        self.attr_flag(id, &format!("{RESISTANCE}.{SEARCH}"))
    }

    /// A successful search leaves positive stacks on the verb
    /// attribute.
    fn is_found(&self, id: EntityId) -> bool {
        self.attr_flag(id, SEARCH)
    }

    fn attr_flag(&self, id: EntityId, name: &str) -> bool {
        self.attr(id, name)
            .and_then(Value::as_int)
            .is_some_and(|value| value > 0)
    }

    // =========================================================================
    // Contexts
    // =========================================================================

    /// Moves an entity into a context.
    pub fn set_context(&mut self, entity: EntityId, context: EntityId) {
        self.entity_mut(entity).context = Some(context);
    }

    /// Adds a party member to a context. Returns false if already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAContext`] when `context` is not a context.
    pub fn add_member(&mut self, context: EntityId, member: EntityId) -> Result<bool> {
        if let Some(state) = self.entity_mut(context).context_state_mut() {
            return Ok(state.add_member(member));
        }
        Err(Error::not_a_context(self.name(context)))
    }

    /// Registers an NPC in a context. Returns false if already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAContext`] when `context` is not a context.
    pub fn add_npc(&mut self, context: EntityId, npc: EntityId) -> Result<bool> {
        if let Some(state) = self.entity_mut(context).context_state_mut() {
            return Ok(state.add_npc(npc));
        }
        Err(Error::not_a_context(self.name(context)))
    }

    /// Party members of a context. Empty for non-contexts.
    #[must_use]
    pub fn party(&self, context: EntityId) -> &[EntityId] {
        self.entity(context)
            .context_state()
            .map_or(&[], ContextState::party)
    }

    /// NPCs registered in a context. Empty for non-contexts.
    #[must_use]
    pub fn npcs(&self, context: EntityId) -> &[EntityId] {
        self.entity(context)
            .context_state()
            .map_or(&[], ContextState::npcs)
    }
}
