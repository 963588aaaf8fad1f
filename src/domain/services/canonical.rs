//! Deterministic presentation ordering for generated collections
//!
//! The generators return skills, feats, and ability maps in whatever order
//! their tables produced them, which differs from call to call. Every such
//! collection is sorted with one shared comparator before it leaves the
//! gateway, so two identical results always render identically.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::entities::{Feat, Skill};

/// A sub-entity that sorts by name and then by optional focus.
pub trait NamedEntity {
    fn name(&self) -> &str;

    fn focus(&self) -> Option<&str> {
        None
    }
}

/// The one comparator every canonicalized collection uses: name ascending,
/// then focus ascending. Comparison is byte-wise, so ordering never depends
/// on locale, and an absent focus sorts before any present one.
pub fn canonical_order<T: NamedEntity>(a: &T, b: &T) -> Ordering {
    a.name()
        .cmp(b.name())
        .then_with(|| a.focus().cmp(&b.focus()))
}

/// Sort a collection of named entities into canonical order.
///
/// The sort is stable: entries equal on (name, focus) keep their input order.
/// Feeding an already-canonical collection back through is a no-op.
pub fn canonicalize<T: NamedEntity>(entities: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut ordered: Vec<T> = entities.into_iter().collect();
    ordered.sort_by(canonical_order);
    ordered
}

/// Flatten a name-keyed map into a sequence of entries in ascending key
/// order. The map stays the internal representation right up to this call;
/// nothing may depend on its native iteration order.
pub fn canonicalize_map<V>(map: HashMap<String, V>) -> Vec<(String, V)> {
    let mut entries: Vec<(String, V)> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

impl NamedEntity for Skill {
    fn name(&self) -> &str {
        &self.name
    }

    fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }
}

impl NamedEntity for Feat {
    fn name(&self) -> &str {
        &self.name
    }

    fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }
}
