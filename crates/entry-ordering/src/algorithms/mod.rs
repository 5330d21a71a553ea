//! Algorithms module for entry ordering.
//!
//! Contains:
//! - Constraint graph builder
//! - Cycle detector with closed-path reconstruction
//! - Kahn's topological sort with lexicographic tie-breaking

pub mod cycle_detector;
pub mod graph_builder;
pub mod kahns;

pub use cycle_detector::find_cycle;
pub use graph_builder::build_constraint_graph;
pub use kahns::kahns_topological_sort;
