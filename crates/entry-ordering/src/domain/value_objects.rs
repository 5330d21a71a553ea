//! Value objects for entry ordering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordering constraint attached to one entry.
///
/// `after` names entries that must be sequenced strictly before this one;
/// `before` names entries that must be sequenced strictly after it. Both sets
/// may be populated at once, and both empty means the entry may sit anywhere
/// a valid order allows.
///
/// Sets collapse duplicate references and iterate in lexicographic order,
/// which keeps every downstream walk deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Names this entry must follow.
    #[serde(default)]
    pub after: BTreeSet<String>,
    /// Names this entry must precede.
    #[serde(default)]
    pub before: BTreeSet<String>,
}

impl Placement {
    /// No constraint in either direction.
    pub fn anywhere() -> Self {
        Self::default()
    }

    /// Strictly after every name in `names`.
    pub fn after<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            after: names.into_iter().map(Into::into).collect(),
            before: BTreeSet::new(),
        }
    }

    /// Strictly before every name in `names`.
    pub fn before<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            after: BTreeSet::new(),
            before: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Constrained in both directions at once.
    pub fn between<I, J, S, R>(after: I, before: J) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            after: after.into_iter().map(Into::into).collect(),
            before: before.into_iter().map(Into::into).collect(),
        }
    }

    /// True when neither set names another entry.
    pub fn is_anywhere(&self) -> bool {
        self.after.is_empty() && self.before.is_empty()
    }

    /// Number of names referenced by this placement.
    pub fn reference_count(&self) -> usize {
        self.after.len() + self.before.len()
    }

    /// Every referenced name: the after-set first, then the before-set,
    /// each in lexicographic order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.after
            .iter()
            .chain(self.before.iter())
            .map(String::as_str)
    }
}
