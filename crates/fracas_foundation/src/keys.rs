//! Well-known attribute and verb names.
//!
//! Dotted keys are built at the call site, e.g. `RESISTANCE.FIRE` or
//! `DAMAGE.slash`, by joining a base name here with a verb's base or
//! subtype segment.

/// Flat bonus added to an attack's chance to hit.
pub const ACCURACY: &str = "ACCURACY";
/// Comma-joined verb expressions an object offers to its wielder.
pub const ACTIONS: &str = "ACTIONS";
/// Rollable life-point damage carried by an attack.
pub const DAMAGE: &str = "DAMAGE";
/// Attack avoidance threshold for actors.
pub const EVASION: &str = "EVASION";
/// Maximum life an entity can be healed up to.
pub const HP: &str = "HP";
/// Comma-joined verbal topics an NPC will respond to.
pub const INTERACTIONS: &str = "INTERACTIONS";
/// Current life. Doubles as the verb token for direct life deltas.
pub const LIFE: &str = "LIFE";
/// Flat bonus added to a condition's chance to take hold.
pub const POWER: &str = "POWER";
/// Damage soaked off every landed attack.
pub const PROTECTION: &str = "PROTECTION";
/// Percent chance that a guard's call for help is answered.
pub const REINFORCEMENTS: &str = "reinforcements";
/// Per-verb immunity subtracted from incoming deliveries.
pub const RESISTANCE: &str = "RESISTANCE";
/// Rollable stack count carried by a condition.
pub const STACKS: &str = "STACKS";

// =============================================================================
// Verb tokens
// =============================================================================

/// Base verb resolved by the attack mitigation chain.
pub const ATTACK: &str = "ATTACK";
/// Full verb that sweeps a context for concealed objects.
pub const SEARCH: &str = "SEARCH";
/// Prefix for conversational verbs offered by [`INTERACTIONS`].
pub const VERBAL: &str = "VERBAL";
