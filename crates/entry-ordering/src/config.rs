//! Configuration for the entry ordering service.

use serde::{Deserialize, Serialize};

/// Guard-rail budgets enforced by the ordering service.
///
/// Both checks run before any graph work, so an oversized registry is
/// rejected at constant cost. The unbudgeted `Registry::resolve` path
/// ignores this configuration entirely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Maximum entries a single resolution accepts
    pub max_entries: usize,
    /// Maximum placement references across the registry (anti-DoS; an upper
    /// bound on constraint edges)
    pub max_references: usize,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            max_references: 100_000,
        }
    }
}
