//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{Registry, ResolvedOrder};
use crate::domain::errors::OrderingError;

/// Primary entry ordering API.
///
/// Callers that assemble registries from declarative sources depend on this
/// trait rather than on the concrete service, which keeps the engine
/// swappable behind the seam.
pub trait EntryOrdering<T>: Send + Sync {
    /// Resolve `registry` into one deterministic total order.
    ///
    /// This is the main entry point. It:
    /// 1. Builds the constraint graph from every placement
    /// 2. Rejects dangling references and constraint cycles
    /// 3. Performs the deterministic topological sort
    /// 4. Returns names paired back with their payloads
    fn resolve(&self, registry: Registry<T>) -> Result<ResolvedOrder<T>, OrderingError>;

    /// Validate every placement in `registry` without producing an order.
    fn verify(&self, registry: &Registry<T>) -> Result<(), OrderingError>;
}
