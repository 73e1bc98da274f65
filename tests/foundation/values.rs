//! Integration tests for Value types
//!
//! Tests parsing, accessors, iteration, formula coercion, and display.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fracas_foundation::{AttributeStore, Formula, Value};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn integers_parse_as_ints() {
    assert_eq!(Value::parse("42"), Value::Int(42));
    assert_eq!(Value::parse("-7"), Value::Int(-7));
    assert_eq!(Value::parse("0"), Value::Int(0));
}

#[test]
fn text_stays_text() {
    assert_eq!(Value::parse("ATTACK.slash"), Value::from("ATTACK.slash"));
    // dice expressions stay unparsed until rolled
    assert_eq!(Value::parse("2D6+3"), Value::from("2D6+3"));
}

#[test]
fn commas_make_lists_of_typed_scalars() {
    let value = Value::parse("15,D6,3");
    assert_eq!(
        value,
        Value::List(vec![Value::Int(15), Value::from("D6"), Value::Int(3)])
    );
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn as_int_is_strict() {
    assert_eq!(Value::Int(9).as_int(), Some(9));
    assert_eq!(Value::from("9").as_int(), None);
    assert_eq!(Value::parse("1,2").as_int(), None);
}

#[test]
fn as_str_and_as_list() {
    assert_eq!(Value::from("hello").as_str(), Some("hello"));
    assert_eq!(Value::Int(1).as_str(), None);
    let list = Value::parse("1,2");
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));
    assert_eq!(Value::Int(1).as_list(), None);
}

#[test]
fn items_yields_scalars_once_and_lists_elementwise() {
    assert_eq!(Value::Int(5).items().count(), 1);
    assert_eq!(Value::parse("a,b,c").items().count(), 3);
    let names: Vec<String> = Value::parse("ATTACK,SEARCH")
        .items()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, vec!["ATTACK", "SEARCH"]);
}

// =============================================================================
// Formula Coercion
// =============================================================================

#[test]
fn ints_and_text_coerce_to_formulas() {
    assert_eq!(Value::Int(4).to_formula().unwrap(), Formula::constant(4));
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let rolled = Value::from("2D4").to_formula().unwrap().roll(&mut rng);
    assert!((2..=8).contains(&rolled));
}

#[test]
fn bad_formula_text_surfaces_on_coercion() {
    assert!(Value::from("not dice").to_formula().is_err());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_round_trips_the_file_syntax() {
    assert_eq!(Value::parse("15,D6,3").to_string(), "15,D6,3");
    assert_eq!(Value::Int(-2).to_string(), "-2");
    assert_eq!(Value::from("town square").to_string(), "town square");
}

// =============================================================================
// AttributeStore
// =============================================================================

#[test]
fn store_set_get_remove() {
    let mut store = AttributeStore::new();
    assert!(store.is_empty());
    store.set("LIFE", 16);
    store.set("DAMAGE", "D6");
    assert_eq!(store.get("LIFE"), Some(&Value::Int(16)));
    assert_eq!(store.get("DAMAGE"), Some(&Value::from("D6")));
    assert_eq!(store.len(), 2);

    store.set("LIFE", 12);
    assert_eq!(store.get("LIFE"), Some(&Value::Int(12)));
    assert_eq!(store.len(), 2);

    assert_eq!(store.remove("LIFE"), Some(Value::Int(12)));
    assert_eq!(store.get("LIFE"), None);
}

#[test]
fn store_names_cover_every_attribute() {
    let mut store = AttributeStore::new();
    store.set("A", 1);
    store.set("B", 2);
    let mut names: Vec<&str> = store.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["A", "B"]);
}
