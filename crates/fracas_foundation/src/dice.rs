//! Dice formula parsing and rolling.
//!
//! A formula is one of three shapes:
//! - `NdM+K` dice: roll `N` dice with `M` faces each and add `K`
//!   (`N` defaults to 1, `M` may be `%` for 100, `+K` is optional)
//! - `A-B` range: one uniform draw between `A` and `B` inclusive
//! - a bare integer constant
//!
//! Parsing is strict: anything that does not match one of the three
//! shapes is a [`MalformedFormula`](crate::Error::MalformedFormula) error
//! rather than a silent zero.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{Error, Result};

/// Unrecognized overall shape (no dice or range delimiter found).
const UNRECOGNIZED: &str = "unrecognized dice expression";
/// A count, face, bonus, or bound failed to parse as a number.
const NON_NUMERIC: &str = "non-numeric value in dice expression";
/// Range lower bound at or above the upper bound.
const ILLEGAL_RANGE: &str = "illegal range in dice expression";
/// A die with no faces cannot be rolled.
const ZERO_FACES: &str = "zero-faced die in dice expression";

/// A parsed dice expression, ready to roll.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Formula {
    /// `count` dice of `faces` faces each, summed, plus a flat bonus.
    Dice {
        /// Number of dice to roll.
        count: u32,
        /// Faces per die.
        faces: u32,
        /// Flat bonus added to the sum.
        plus: i64,
    },
    /// One uniform draw from `min..=max`.
    Range {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// A fixed value that always rolls the same.
    Constant(i64),
}

impl Formula {
    /// Wraps a fixed integer as a formula.
    #[must_use]
    pub const fn constant(value: i64) -> Self {
        Self::Constant(value)
    }

    /// Parses a dice expression.
    ///
    /// Delimiter precedence is `D`, then `d`, then `-`, so `3-9` is a
    /// range but `3d-9` is a (rejected) die. A leading `+` is not
    /// accepted on constants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFormula`] when the expression matches
    /// none of the recognized shapes, contains a non-numeric operand,
    /// names a zero-faced die, or orders a range backwards.
    pub fn parse(expr: &str) -> Result<Self> {
        if !expr.starts_with('+') {
            if let Ok(value) = expr.parse::<i64>() {
                return Ok(Self::Constant(value));
            }
        }

        let delimiter = if expr.contains('D') {
            'D'
        } else if expr.contains('d') {
            'd'
        } else if expr.contains('-') {
            '-'
        } else {
            return Err(Error::malformed_formula(expr, UNRECOGNIZED));
        };

        let mut parts = expr.splitn(2, delimiter);
        let head = parts.next().unwrap_or("");
        let Some(tail) = parts.next() else {
            return Err(Error::malformed_formula(expr, UNRECOGNIZED));
        };

        if delimiter == '-' {
            return Self::parse_range(expr, head, tail);
        }
        Self::parse_dice(expr, head, tail)
    }

    /// Parses the `A-B` shape after the delimiter has been found.
    fn parse_range(expr: &str, head: &str, tail: &str) -> Result<Self> {
        let min = head
            .parse::<i64>()
            .map_err(|_| Error::malformed_formula(expr, NON_NUMERIC))?;
        let max = tail
            .parse::<i64>()
            .map_err(|_| Error::malformed_formula(expr, NON_NUMERIC))?;
        if min >= max {
            return Err(Error::malformed_formula(expr, ILLEGAL_RANGE));
        }
        Ok(Self::Range { min, max })
    }

    /// Parses the `NdM+K` shape after the delimiter has been found.
    fn parse_dice(expr: &str, head: &str, tail: &str) -> Result<Self> {
        let count = if head.is_empty() {
            1
        } else {
            head.parse::<u32>()
                .map_err(|_| Error::malformed_formula(expr, NON_NUMERIC))?
        };

        let (face_text, plus) = match tail.split_once('+') {
            Some((faces, bonus)) => {
                let plus = bonus
                    .parse::<i64>()
                    .map_err(|_| Error::malformed_formula(expr, NON_NUMERIC))?;
                (faces, plus)
            }
            None => (tail, 0),
        };

        let faces = if face_text == "%" {
            100
        } else {
            face_text
                .parse::<u32>()
                .map_err(|_| Error::malformed_formula(expr, NON_NUMERIC))?
        };
        if faces == 0 {
            return Err(Error::malformed_formula(expr, ZERO_FACES));
        }

        Ok(Self::Dice { count, faces, plus })
    }

    /// Rolls the formula once.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        match self {
            Self::Dice { count, faces, plus } => {
                let mut total = *plus;
                for _ in 0..*count {
                    total += rng.gen_range(1..=i64::from(*faces));
                }
                total
            }
            Self::Range { min, max } => rng.gen_range(*min..=*max),
            Self::Constant(value) => *value,
        }
    }

    /// The smallest value a roll can produce.
    #[must_use]
    pub fn min_value(&self) -> i64 {
        match self {
            Self::Dice { count, plus, .. } => i64::from(*count) + plus,
            Self::Range { min, .. } => *min,
            Self::Constant(value) => *value,
        }
    }

    /// The largest value a roll can produce.
    #[must_use]
    pub fn max_value(&self) -> i64 {
        match self {
            Self::Dice { count, faces, plus } => {
                i64::from(*count) * i64::from(*faces) + plus
            }
            Self::Range { max, .. } => *max,
            Self::Constant(value) => *value,
        }
    }
}

impl fmt::Display for Formula {
    /// Canonical form: `2D6+3`, `3-9`, or `47`. A non-positive bonus is
    /// not printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice { count, faces, plus } => {
                write!(f, "{count}D{faces}")?;
                if *plus > 0 {
                    write!(f, "+{plus}")?;
                }
                Ok(())
            }
            Self::Range { min, max } => write!(f, "{min}-{max}"),
            Self::Constant(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
