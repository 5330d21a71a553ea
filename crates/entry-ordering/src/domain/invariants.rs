//! Domain invariants for entry ordering.
//!
//! Each checker takes the public types and answers whether a resolved order
//! actually delivers what resolution promises. They back the property tests
//! and double as executable documentation of the guarantees.

use std::collections::{BTreeMap, BTreeSet};

use super::entities::{Registry, ResolvedOrder};
use crate::algorithms::{build_constraint_graph, find_cycle};

/// INVARIANT-1: Permutation
/// A resolved order holds exactly the entries of its registry: same names,
/// same count, nothing repeated.
pub fn invariant_permutation<T>(registry: &Registry<T>, order: &ResolvedOrder<T>) -> bool {
    let names: BTreeSet<&str> = order.names().collect();

    names.len() == order.len()
        && order.len() == registry.len()
        && names.iter().all(|name| registry.contains(name))
}

/// INVARIANT-2: Constraints Respected
/// Every `after` reference sits strictly earlier and every `before` reference
/// strictly later than the entry that declared it.
pub fn invariant_constraints_respected<T>(registry: &Registry<T>, order: &ResolvedOrder<T>) -> bool {
    let position: BTreeMap<&str, usize> = order
        .names()
        .enumerate()
        .map(|(index, name)| (name, index))
        .collect();

    for entry in registry.iter() {
        let Some(&at) = position.get(entry.name.as_str()) else {
            return false;
        };
        for predecessor in &entry.placement.after {
            match position.get(predecessor.as_str()) {
                Some(&found) if found < at => {}
                _ => return false,
            }
        }
        for successor in &entry.placement.before {
            match position.get(successor.as_str()) {
                Some(&found) if at < found => {}
                _ => return false,
            }
        }
    }

    true
}

/// INVARIANT-3: No Cycles
/// The constraint graph derived from the registry is a DAG. False as well
/// when a placement references a name the registry does not hold, since no
/// well-formed graph exists then.
pub fn invariant_no_cycles<T>(registry: &Registry<T>) -> bool {
    match build_constraint_graph(registry) {
        Ok(graph) => find_cycle(&graph).is_none(),
        Err(_) => false,
    }
}

/// INVARIANT-4: Lexicographic Tie-Break
/// Replays the elimination: at every step the emitted name must be the
/// lexicographically smallest of the names that were ready at that step.
/// This is what pins the order down to one unique answer.
pub fn invariant_lexicographic_tie_break<T>(registry: &Registry<T>, order: &ResolvedOrder<T>) -> bool {
    let Ok(graph) = build_constraint_graph(registry) else {
        return false;
    };

    let mut in_degree = graph.in_degrees();
    let mut ready: BTreeSet<String> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(name, _)| name.clone())
        .collect();

    for name in order.names() {
        match ready.first() {
            Some(smallest) if smallest == name => {}
            _ => return false,
        }
        ready.remove(name);

        for successor in graph.successors(name) {
            if let Some(degree) = in_degree.get_mut(successor.as_str()) {
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    ready.insert(successor.clone());
                }
            }
        }
    }

    ready.is_empty()
}
