//! Core entities for entry ordering.

use std::collections::{btree_map, BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::errors::RegistryError;
use super::value_objects::Placement;

/// A named unit of caller data plus its placement constraint.
///
/// The payload is opaque: the engine never inspects it, only carries it from
/// registration through to the resolved order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<T> {
    /// Unique name within one registry.
    pub name: String,
    /// Opaque caller data.
    pub payload: T,
    /// Ordering constraint relative to other named entries.
    #[serde(default)]
    pub placement: Placement,
}

impl<T> Entry<T> {
    /// Entry with no ordering constraint.
    pub fn anywhere(name: impl Into<String>, payload: T) -> Self {
        Self {
            name: name.into(),
            payload,
            placement: Placement::anywhere(),
        }
    }

    /// Entry sequenced strictly after every name in `names`.
    pub fn after<I, S>(name: impl Into<String>, payload: T, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            payload,
            placement: Placement::after(names),
        }
    }

    /// Entry sequenced strictly before every name in `names`.
    pub fn before<I, S>(name: impl Into<String>, payload: T, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            payload,
            placement: Placement::before(names),
        }
    }

    /// Entry constrained in both directions at once.
    pub fn between<I, J, S, R>(name: impl Into<String>, payload: T, after: I, before: J) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            payload,
            placement: Placement::between(after, before),
        }
    }
}

/// The collection of entries being assembled before resolution.
///
/// Names are unique within one registry. Entries iterate in lexicographic
/// name order, which backs every determinism guarantee downstream. Placements
/// may reference names not inserted yet; references are only checked when the
/// registry is resolved or verified.
#[derive(Clone, Debug)]
pub struct Registry<T> {
    entries: BTreeMap<String, Entry<T>>,
    /// Provenance label reported on merge collisions.
    source: Option<String>,
}

impl<T> Registry<T> {
    /// Empty registry with no provenance label.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            source: None,
        }
    }

    /// Empty registry tagged with the declaration site that builds it.
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            entries: BTreeMap::new(),
            source: Some(source.into()),
        }
    }

    /// Provenance label, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when `name` is taken.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The entry registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Entry<T>> {
        self.entries.get(name)
    }

    /// Entry names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.values()
    }

    /// Total number of names referenced across all placements. Duplicates
    /// within one placement set are already collapsed, so this is an upper
    /// bound on the constraint edges resolution will build.
    pub fn reference_count(&self) -> usize {
        self.entries
            .values()
            .map(|entry| entry.placement.reference_count())
            .sum()
    }

    /// Record one entry under its name.
    ///
    /// Fails with [`RegistryError::DuplicateName`] when the name is taken;
    /// the registry is left exactly as it was.
    pub fn insert(&mut self, entry: Entry<T>) -> Result<(), RegistryError> {
        if self.entries.contains_key(&entry.name) {
            return Err(RegistryError::DuplicateName(entry.name));
        }
        self.entries.insert(entry.name.clone(), entry);
        Ok(())
    }

    /// Insert every entry in iteration order.
    ///
    /// Stops at the first duplicate name; entries inserted before the failure
    /// stay registered.
    pub fn insert_all<I>(&mut self, entries: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Entry<T>>,
    {
        for entry in entries {
            self.insert(entry)?;
        }
        Ok(())
    }

    /// Insert a run of payloads as a chain of entries named `{tag}.0`,
    /// `{tag}.1`, and so on, each link constrained strictly after the one
    /// before it.
    ///
    /// The caller's `after` set lands on the first link and the `before` set
    /// on the last, so the whole chain sits between them as one block while
    /// keeping its internal order. A single payload carries both sets; an
    /// empty run inserts nothing.
    pub fn insert_chain<P, A, B, S, R>(
        &mut self,
        tag: &str,
        payloads: P,
        after: A,
        before: B,
    ) -> Result<(), RegistryError>
    where
        P: IntoIterator<Item = T>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
        B: IntoIterator<Item = R>,
        R: Into<String>,
    {
        let payloads: Vec<T> = payloads.into_iter().collect();
        let last = payloads.len().checked_sub(1);
        let after: BTreeSet<String> = after.into_iter().map(Into::into).collect();
        let before: BTreeSet<String> = before.into_iter().map(Into::into).collect();

        for (index, payload) in payloads.into_iter().enumerate() {
            let mut placement = Placement::anywhere();
            if index == 0 {
                placement.after = after.clone();
            } else {
                placement.after.insert(format!("{tag}.{}", index - 1));
            }
            if Some(index) == last {
                placement.before = before.clone();
            }
            self.insert(Entry {
                name: format!("{tag}.{index}"),
                payload,
                placement,
            })?;
        }
        Ok(())
    }

    /// Transform every payload, preserving names, placements, and the
    /// provenance label.
    pub fn map_payloads<U, F>(self, mut transform: F) -> Registry<U>
    where
        F: FnMut(T) -> U,
    {
        Registry {
            entries: self
                .entries
                .into_iter()
                .map(|(name, entry)| {
                    (
                        name,
                        Entry {
                            name: entry.name,
                            payload: transform(entry.payload),
                            placement: entry.placement,
                        },
                    )
                })
                .collect(),
            source: self.source,
        }
    }

    /// Disjoint union with `other`.
    ///
    /// Fails on the lexicographically smallest colliding name; when both
    /// registries carry source labels the error names both declaration
    /// sites. The merged registry keeps a label only when both halves agree
    /// on it.
    pub fn merge(mut self, other: Self) -> Result<Self, RegistryError> {
        let Registry {
            entries: other_entries,
            source: other_source,
        } = other;

        for (name, entry) in other_entries {
            if self.entries.contains_key(&name) {
                return Err(match (self.source.as_ref(), other_source.as_ref()) {
                    (Some(left), Some(right)) => RegistryError::DuplicateNameAcrossSources {
                        name,
                        left: left.clone(),
                        right: right.clone(),
                    },
                    _ => RegistryError::DuplicateName(name),
                });
            }
            self.entries.insert(name, entry);
        }

        if self.source != other_source {
            self.source = None;
        }
        Ok(self)
    }

    /// Fold [`Registry::merge`] over any number of registries.
    pub fn merge_all<I>(registries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut merged = Self::new();
        for registry in registries {
            merged = merged.merge(registry)?;
        }
        Ok(merged)
    }

    /// Consume the registry into its entry map, keyed by name.
    pub(crate) fn into_entries(self) -> BTreeMap<String, Entry<T>> {
        self.entries
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a Entry<T>;
    type IntoIter = btree_map::Values<'a, String, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Directed constraint graph derived from a registry.
///
/// Nodes are entry names; an edge `u -> v` means `u` must come strictly
/// before `v`. Successor sets collapse duplicate constraints, and every
/// iteration order is lexicographic.
#[derive(Clone, Debug, Default)]
pub(crate) struct ConstraintGraph {
    /// Name to direct successors.
    adjacency: BTreeMap<String, BTreeSet<String>>,
    /// Name to number of distinct predecessors.
    in_degree: BTreeMap<String, usize>,
}

impl ConstraintGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a node; idempotent.
    pub(crate) fn add_node(&mut self, name: &str) {
        if !self.adjacency.contains_key(name) {
            self.adjacency.insert(name.to_string(), BTreeSet::new());
            self.in_degree.insert(name.to_string(), 0);
        }
    }

    /// Add the edge `from -> to`. Duplicate edges collapse; both endpoints
    /// must already be nodes.
    pub(crate) fn add_edge(&mut self, from: &str, to: &str) {
        let inserted = self
            .adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
        if inserted {
            *self.in_degree.entry(to.to_string()).or_insert(0) += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn has_edge(&self, from: &str, to: &str) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|successors| successors.contains(to))
    }

    pub(crate) fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Nodes in lexicographic order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Direct successors of `name` in lexicographic order.
    pub(crate) fn successors(&self, name: &str) -> std::collections::btree_set::Iter<'_, String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.adjacency.get(name).unwrap_or(&EMPTY).iter()
    }

    /// Snapshot of every node's in-degree, for elimination to consume.
    pub(crate) fn in_degrees(&self) -> BTreeMap<String, usize> {
        self.in_degree.clone()
    }
}

/// One element of a resolved order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEntry<T> {
    /// The entry's unique name.
    pub name: String,
    /// The payload it was registered with.
    pub payload: T,
}

/// The deterministic total order produced by resolution.
///
/// Holds exactly the entries of the registry it came from, arranged so that
/// every placement constraint is satisfied. The same registry always resolves
/// to the same order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOrder<T> {
    entries: Vec<ResolvedEntry<T>>,
}

impl<T> ResolvedOrder<T> {
    pub(crate) fn new(entries: Vec<ResolvedEntry<T>>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the order holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in resolved order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedEntry<T>> {
        self.entries.iter()
    }

    /// The resolved sequence as a slice.
    pub fn as_slice(&self) -> &[ResolvedEntry<T>] {
        &self.entries
    }

    /// The entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&ResolvedEntry<T>> {
        self.entries.get(index)
    }

    /// Entry names in resolved order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Position of `name` in the order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Consume into `(name, payload)` pairs in resolved order.
    pub fn into_pairs(self) -> Vec<(String, T)> {
        self.entries
            .into_iter()
            .map(|entry| (entry.name, entry.payload))
            .collect()
    }
}

impl<T> IntoIterator for ResolvedOrder<T> {
    type Item = ResolvedEntry<T>;
    type IntoIter = std::vec::IntoIter<ResolvedEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResolvedOrder<T> {
    type Item = &'a ResolvedEntry<T>;
    type IntoIter = std::slice::Iter<'a, ResolvedEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
