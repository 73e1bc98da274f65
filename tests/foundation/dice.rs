//! Integration tests for dice formulas
//!
//! Tests parsing of every recognized shape, rejection reasons, roll
//! bounds, and display canonicalization.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fracas_foundation::{Error, Formula};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_bare_constants() {
    assert_eq!(Formula::parse("47").unwrap(), Formula::constant(47));
    assert_eq!(Formula::parse("0").unwrap(), Formula::constant(0));
    assert_eq!(Formula::parse("-5").unwrap(), Formula::constant(-5));
}

#[test]
fn parse_dice_shapes() {
    assert_eq!(
        Formula::parse("D6").unwrap(),
        Formula::Dice {
            count: 1,
            faces: 6,
            plus: 0
        }
    );
    assert_eq!(
        Formula::parse("2D6+3").unwrap(),
        Formula::Dice {
            count: 2,
            faces: 6,
            plus: 3
        }
    );
    assert_eq!(
        Formula::parse("3d8").unwrap(),
        Formula::Dice {
            count: 3,
            faces: 8,
            plus: 0
        }
    );
    assert_eq!(
        Formula::parse("D%").unwrap(),
        Formula::Dice {
            count: 1,
            faces: 100,
            plus: 0
        }
    );
}

#[test]
fn parse_ranges() {
    assert_eq!(Formula::parse("3-9").unwrap(), Formula::Range { min: 3, max: 9 });
    assert_eq!(
        Formula::parse("10-20").unwrap(),
        Formula::Range { min: 10, max: 20 }
    );
}

#[test]
fn negative_range_bounds_do_not_parse() {
    // the leading dash is taken as the range delimiter
    assert!(Formula::parse("-3-9").is_err());
}

#[test]
fn uppercase_dice_delimiter_wins_over_range() {
    // the D binds before the dash, so this is a die with a bad bonus
    assert!(Formula::parse("3D-9").is_err());
}

#[test]
fn parse_rejections_name_the_reason() {
    let err = Formula::parse("7to9").unwrap_err();
    assert!(err.to_string().contains("unrecognized"));

    let err = Formula::parse("xD6").unwrap_err();
    assert!(err.to_string().contains("non-numeric"));

    let err = Formula::parse("9-3").unwrap_err();
    assert!(err.to_string().contains("illegal range"));

    let err = Formula::parse("2D0").unwrap_err();
    assert!(err.to_string().contains("zero-faced"));

    let err = Formula::parse("+3").unwrap_err();
    assert!(matches!(err, Error::MalformedFormula { .. }));
}

#[test]
fn faceless_dice_do_not_parse() {
    for expr in ["2D", "D", "d"] {
        let err = Formula::parse(expr).unwrap_err();
        assert!(err.to_string().contains("non-numeric"), "{expr:?}: {err}");
    }
}

#[test]
fn parse_rejects_the_empty_string() {
    assert!(Formula::parse("").is_err());
}

// =============================================================================
// Rolling
// =============================================================================

#[test]
fn constants_always_roll_themselves() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let formula = Formula::constant(12);
    for _ in 0..32 {
        assert_eq!(formula.roll(&mut rng), 12);
    }
}

#[test]
fn dice_rolls_stay_in_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let formula = Formula::parse("2D6+3").unwrap();
    assert_eq!(formula.min_value(), 5);
    assert_eq!(formula.max_value(), 15);
    for _ in 0..256 {
        let roll = formula.roll(&mut rng);
        assert!((5..=15).contains(&roll), "rolled {roll}");
    }
}

#[test]
fn range_rolls_stay_in_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let formula = Formula::parse("3-9").unwrap();
    assert_eq!(formula.min_value(), 3);
    assert_eq!(formula.max_value(), 9);
    for _ in 0..256 {
        let roll = formula.roll(&mut rng);
        assert!((3..=9).contains(&roll), "rolled {roll}");
    }
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_is_canonical() {
    assert_eq!(Formula::parse("2D6+3").unwrap().to_string(), "2D6+3");
    assert_eq!(Formula::parse("d6").unwrap().to_string(), "1D6");
    assert_eq!(Formula::parse("D%").unwrap().to_string(), "1D100");
    assert_eq!(Formula::parse("3-9").unwrap().to_string(), "3-9");
    assert_eq!(Formula::parse("47").unwrap().to_string(), "47");
}

#[test]
fn from_str_round_trips() {
    let formula: Formula = "2D8+1".parse().unwrap();
    assert_eq!(formula.to_string().parse::<Formula>().unwrap(), formula);
}
