//! End-to-end fixture scenarios
//!
//! Longer journeys through the town square fixtures: duels, guard
//! retaliation, reinforcements, healing, poisoning, and searching.
//! Probabilistic stretches run under generous bounded loops; every
//! final assertion is still exact.

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fracas_engine::{possible_actions, spawn_guard, take_action, take_turn};
use fracas_world::{ContextState, Entity, EntityId, Kind, World};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0xCA55)
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn village() -> (World, EntityId, EntityId, EntityId) {
    let mut world = World::new();
    let square = world.spawn(Entity::new(
        "placeholder",
        Kind::Context(ContextState::new()),
    ));
    world.load(square, fixture("context.dat")).unwrap();

    let hero = world.spawn(Entity::new("placeholder", Kind::Actor));
    world.load(hero, fixture("hero.dat")).unwrap();
    world.set_context(hero, square);
    world.add_member(square, hero).unwrap();

    let guard = spawn_guard(&mut world, "placeholder", "stationed at the gate");
    world.load(guard, fixture("guard.dat")).unwrap();
    world.set_context(guard, square);
    world.add_npc(square, guard).unwrap();

    (world, square, hero, guard)
}

// =============================================================================
// Duels
// =============================================================================

#[test]
fn first_blood_marks_the_attacker() {
    let (mut world, square, hero, guard) = village();
    let sword = world.object_named(hero, "long sword").unwrap();
    let slash = possible_actions(&world, sword).unwrap().remove(0);

    let mut rng = rng();
    // hit or miss, the guard notices
    take_action(&mut world, hero, &slash, guard, &mut rng).unwrap();
    let state = world.entity(guard).guard_state().unwrap();
    assert_eq!(state.target, Some(hero));
    assert_eq!(world.entity(guard).context, Some(square));
}

#[test]
fn a_long_duel_fells_the_gate_guard() {
    let (mut world, _, hero, guard) = village();
    let sword = world.object_named(hero, "long sword").unwrap();
    let slash = possible_actions(&world, sword).unwrap().remove(0);

    let mut rng = rng();
    let mut last = String::new();
    for _ in 0..400 {
        let outcome = take_action(&mut world, hero, &slash, guard, &mut rng).unwrap();
        last = outcome.description;
        if !world.entity(guard).alive {
            break;
        }
    }
    assert!(!world.entity(guard).alive);
    assert!(world.entity(guard).incapacitated);
    assert!(last.ends_with(", and is killed"));
    assert!(world.attr_int(guard, "LIFE").unwrap() <= 0);
}

#[test]
fn the_guard_answers_in_kind() {
    let (mut world, _, hero, guard) = village();
    if let Some(state) = world.entity_mut(guard).guard_state_mut() {
        state.target = Some(hero);
    }

    let mut rng = rng();
    let outcome = take_turn(&mut world, guard, &mut rng).unwrap();
    assert!(outcome.success);
    assert!(outcome
        .description
        .starts_with("Guard #1 uses sword to ATTACK.slash Hero\n    "));
    // TO_HIT 110 against an unguarded hero never misses
    assert!(outcome
        .description
        .contains("Hero hit by ATTACK.slash (TO_HIT=110) from Guard #1 using sword"));
    let life = world.attr_int(hero, "LIFE").unwrap();
    assert!((16..=21).contains(&life), "hero life out of range: {life}");
}

#[test]
fn idle_guards_stand_their_post() {
    let (mut world, _, _, guard) = village();
    let mut rng = rng();
    let outcome = take_turn(&mut world, guard, &mut rng).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.description, "Guard #1 takes no action");
}

#[test]
fn reinforcements_arrive_exactly_once() {
    let (mut world, square, hero, guard) = village();
    world.set_attr(guard, "reinforcements", 100);
    let sword = world.object_named(hero, "long sword").unwrap();
    let slash = possible_actions(&world, sword).unwrap().remove(0);

    let mut rng = rng();
    let outcome = take_action(&mut world, hero, &slash, guard, &mut rng).unwrap();
    assert!(outcome.description.contains("Guard #1 calls for help"));
    assert!(outcome.description.contains(", and Guard #2 arrives"));
    assert_eq!(world.npcs(square).len(), 2);

    let helper = world.npcs(square)[1];
    assert_eq!(world.name(helper), "Guard #2");
    assert_eq!(world.entity(helper).context, Some(square));
    assert_eq!(
        world.entity(helper).guard_state().unwrap().target,
        Some(hero)
    );

    let again = take_action(&mut world, hero, &slash, guard, &mut rng).unwrap();
    assert!(!again.description.contains("calls for help"));
    assert_eq!(world.npcs(square).len(), 2);
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn the_scroll_restores_the_hero_to_full() {
    let (mut world, _, hero, _) = village();
    world.set_attr(hero, "LIFE", 20);
    let scroll = world.object_named(hero, "Scroll").unwrap();
    let heal = possible_actions(&world, scroll).unwrap().remove(0);

    let mut rng = rng();
    let outcome = take_action(&mut world, hero, &heal, hero, &mut rng).unwrap();
    assert!(outcome.success);
    assert!(outcome.description.starts_with("Hero resists 0/"));
    assert!(outcome
        .description
        .ends_with(" stacks of LIFE (TO_HIT=200) from Hero in town square"));
    assert_eq!(world.attr_int(hero, "LIFE").unwrap(), 22);
}

#[test]
fn the_poison_dagger_bites_and_festers() {
    let (mut world, square, hero, _) = village();
    let bandit = world.spawn(Entity::new("bandit", Kind::Actor));
    world.set_context(bandit, square);
    world.set_attr(bandit, "HP", 30);
    world.set_attr(bandit, "LIFE", 30);

    let dagger = world.object_named(hero, "Dagger").unwrap();
    let strike = possible_actions(&world, dagger).unwrap().remove(0);
    let mut rng = rng();
    let outcome = take_action(&mut world, hero, &strike, bandit, &mut rng).unwrap();
    assert!(outcome.success);
    assert!(outcome
        .description
        .contains("bandit hit by ATTACK.slash (TO_HIT=100) from Hero using Poison Dagger"));
    assert!(outcome
        .description
        .contains("stacks of PHYSICAL.POISON (TO_HIT=115)"));

    let poison = world.attr_int(bandit, "PHYSICAL.POISON").unwrap();
    assert!((1..=4).contains(&poison), "poison out of range: {poison}");
    let life = world.attr_int(bandit, "LIFE").unwrap();
    assert!((26..=29).contains(&life), "bandit life out of range: {life}");
}

// =============================================================================
// Searching
// =============================================================================

#[test]
fn patient_searching_turns_up_the_loot() {
    let (mut world, square, hero, _) = village();
    assert_eq!(world.hidden_objects(square).len(), 2);
    let sweep = possible_actions(&world, square).unwrap().remove(0);

    let mut rng = rng();
    for _ in 0..300 {
        take_action(&mut world, hero, &sweep, square, &mut rng).unwrap();
        if world.hidden_objects(square).is_empty() {
            break;
        }
    }
    assert_eq!(world.hidden_objects(square), Vec::new());
    assert_eq!(world.visible_objects(square).len(), 3);

    let trap = world.object_named(square, "trap-door").unwrap();
    assert!(world.attr_int(trap, "SEARCH").unwrap() >= 1);
}
