//! Application module for entry ordering.
//!
//! Holds the resolution pipeline shared by [`Registry::resolve`] and the
//! configured [`service::OrderingService`].

pub mod service;

use tracing::debug;

use crate::algorithms::{build_constraint_graph, find_cycle, kahns_topological_sort};
use crate::domain::entities::{Registry, ResolvedEntry, ResolvedOrder};
use crate::domain::errors::OrderingError;

/// Resolve `registry` into one deterministic total order.
///
/// Pipeline:
/// 1. Build the constraint graph, validating every placement reference.
/// 2. Prove the graph acyclic, or report the contradiction as a closed path.
/// 3. Run the deterministic elimination.
/// 4. Pair the ordered names back with their payloads.
pub(crate) fn resolve_registry<T>(registry: Registry<T>) -> Result<ResolvedOrder<T>, OrderingError> {
    let graph = build_constraint_graph(&registry)?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "constraint graph built"
    );

    if let Some(path) = find_cycle(&graph) {
        return Err(OrderingError::CycleDetected { path });
    }

    let order = kahns_topological_sort(&graph);
    debug!(entries = order.len(), "elimination complete");

    let mut entries = registry.into_entries();
    let mut resolved: Vec<ResolvedEntry<T>> = Vec::with_capacity(order.len());
    for name in order {
        if let Some(entry) = entries.remove(&name) {
            resolved.push(ResolvedEntry {
                name,
                payload: entry.payload,
            });
        }
    }
    assert!(
        entries.is_empty(),
        "elimination dropped {} entries; this is a bug in the ordering engine",
        entries.len()
    );

    Ok(ResolvedOrder::new(resolved))
}

/// Validate `registry` without producing an order: every placement reference
/// must resolve and no constraint cycle may exist.
pub(crate) fn verify_registry<T>(registry: &Registry<T>) -> Result<(), OrderingError> {
    let graph = build_constraint_graph(registry)?;
    if let Some(path) = find_cycle(&graph) {
        return Err(OrderingError::CycleDetected { path });
    }
    Ok(())
}

impl<T> Registry<T> {
    /// Resolve this registry into one deterministic total order.
    ///
    /// Every placement constraint is honored; among all constraint-respecting
    /// arrangements the engine always picks the same one, emitting the
    /// lexicographically smallest ready name at each step. Resolving the same
    /// registry twice yields identical output.
    ///
    /// Fails with [`OrderingError::UnknownReferences`] when placements name
    /// entries the registry does not hold (all of them reported together),
    /// or [`OrderingError::CycleDetected`] when the constraints contradict
    /// each other.
    pub fn resolve(self) -> Result<ResolvedOrder<T>, OrderingError> {
        resolve_registry(self)
    }

    /// Check that this registry would resolve, without resolving it.
    ///
    /// Useful for validating incrementally assembled registries early, while
    /// the declaration site that introduced a bad reference is still in
    /// scope.
    pub fn verify(&self) -> Result<(), OrderingError> {
        verify_registry(self)
    }
}
