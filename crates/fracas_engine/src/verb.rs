//! Verb expressions and their sub-verb views.
//!
//! A verb names what an action does. It may be a single token
//! (`SEARCH`), a sub-typed token (`ATTACK.slash`), or a `+`-joined
//! compound (`ATTACK.slash+PHYSICAL.POISON`) whose sub-verbs resolve
//! one at a time, in order.

use std::fmt;
use std::sync::Arc;

use fracas_foundation::keys::ATTACK;

/// An action's verb expression, possibly compound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verb {
    text: Arc<str>,
}

impl Verb {
    /// Wraps a verb expression.
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    /// The whole expression as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the expression joins more than one sub-verb.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.text.contains('+')
    }

    /// True when any part of the expression mentions `ATTACK`.
    ///
    /// This is the coarse test used at construction time; per-sub-verb
    /// classification uses [`SubVerb::is_attack`].
    #[must_use]
    pub fn mentions_attack(&self) -> bool {
        self.text.contains(ATTACK)
    }

    /// Iterates the sub-verbs in declaration order.
    pub fn sub_verbs(&self) -> impl Iterator<Item = SubVerb<'_>> {
        self.text.split('+').map(SubVerb::new)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Verb {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// One sub-verb of a verb expression, split into its segments.
///
/// The base is everything up to the first `.`; the subtype is the
/// second segment, when present and non-empty. Further segments are
/// carried in `full` but never interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubVerb<'a> {
    full: &'a str,
    base: &'a str,
    subtype: Option<&'a str>,
}

impl<'a> SubVerb<'a> {
    /// Splits one sub-verb token into base and subtype.
    #[must_use]
    pub fn new(token: &'a str) -> Self {
        let mut segments = token.split('.');
        let base = segments.next().unwrap_or(token);
        let subtype = segments.next().filter(|segment| !segment.is_empty());
        Self {
            full: token,
            base,
            subtype,
        }
    }

    /// The whole token, e.g. `ATTACK.slash`.
    #[must_use]
    pub const fn full(&self) -> &'a str {
        self.full
    }

    /// The segment before the first dot, e.g. `ATTACK`.
    #[must_use]
    pub const fn base(&self) -> &'a str {
        self.base
    }

    /// The second segment, e.g. `slash`, when present.
    #[must_use]
    pub const fn subtype(&self) -> Option<&'a str> {
        self.subtype
    }

    /// Attack classification: the base segment mentions `ATTACK`.
    ///
    /// Attacks consume `ACCURACY`/`DAMAGE` slots and resolve against
    /// evasion and protection; everything else is a condition.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.base.contains(ATTACK)
    }
}

impl fmt::Display for SubVerb<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}
