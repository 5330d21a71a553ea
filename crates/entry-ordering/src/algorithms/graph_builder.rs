//! Constraint Graph Builder
//!
//! Derives a directed constraint graph from a registry, validating every
//! placement reference on the way.

use std::collections::BTreeSet;

use crate::domain::entities::{ConstraintGraph, Registry};
use crate::domain::errors::{OrderingError, UnknownReference};

/// Build the constraint graph for `registry`.
///
/// Every entry becomes a node, so unconstrained entries still appear in the
/// order. Constraints become edges pointing from predecessor to successor:
/// `after = {a}` contributes `a -> entry`, `before = {b}` contributes
/// `entry -> b`.
///
/// References are checked against the registry as edges are added. Nothing
/// short-circuits: every dangling reference across the whole registry is
/// collected and reported in one error, sorted by (entry, referenced).
pub fn build_constraint_graph<T>(registry: &Registry<T>) -> Result<ConstraintGraph, OrderingError> {
    let mut graph = ConstraintGraph::new();

    // 1. Every entry is a node, constrained or not.
    for entry in registry.iter() {
        graph.add_node(&entry.name);
    }

    // 2. Walk every placement, adding edges and collecting dangling
    //    references. The set collapses the case where one entry names the
    //    same missing entry in both directions.
    let mut unknown: BTreeSet<(String, String)> = BTreeSet::new();

    for entry in registry.iter() {
        for predecessor in &entry.placement.after {
            if registry.contains(predecessor) {
                graph.add_edge(predecessor, &entry.name);
            } else {
                unknown.insert((entry.name.clone(), predecessor.clone()));
            }
        }
        for successor in &entry.placement.before {
            if registry.contains(successor) {
                graph.add_edge(&entry.name, successor);
            } else {
                unknown.insert((entry.name.clone(), successor.clone()));
            }
        }
    }

    // 3. All or nothing: a graph only exists when every reference resolves.
    if !unknown.is_empty() {
        return Err(OrderingError::UnknownReferences(
            unknown
                .into_iter()
                .map(|(entry, referenced)| UnknownReference { entry, referenced })
                .collect(),
        ));
    }

    Ok(graph)
}
