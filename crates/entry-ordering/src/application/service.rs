//! Entry Ordering Service
//!
//! Main service implementing the EntryOrdering port.

use crate::config::OrderingConfig;
use crate::domain::entities::{Registry, ResolvedOrder};
use crate::domain::errors::OrderingError;
use crate::ports::inbound::EntryOrdering;

use tracing::{debug, info, warn};

/// Configured front door for resolution.
///
/// Wraps the resolution pipeline with guard-rail budgets for callers that
/// feed it registries assembled from untrusted or unbounded declarations.
/// [`Registry::resolve`] runs the same pipeline without budgets.
pub struct OrderingService {
    config: OrderingConfig,
}

impl OrderingService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: OrderingConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: OrderingConfig) -> Self {
        Self { config }
    }

    /// The budgets this service enforces.
    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Validate entry and reference budgets before any graph work starts.
    fn validate_budgets<T>(&self, registry: &Registry<T>) -> Result<(), OrderingError> {
        if registry.len() > self.config.max_entries {
            warn!(
                count = registry.len(),
                max = self.config.max_entries,
                "registry exceeds entry budget"
            );
            return Err(OrderingError::TooManyEntries {
                count: registry.len(),
                max: self.config.max_entries,
            });
        }

        let references = registry.reference_count();
        if references > self.config.max_references {
            warn!(
                count = references,
                max = self.config.max_references,
                "registry exceeds reference budget"
            );
            return Err(OrderingError::TooManyReferences {
                count: references,
                max: self.config.max_references,
            });
        }

        Ok(())
    }
}

impl Default for OrderingService {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntryOrdering<T> for OrderingService {
    fn resolve(&self, registry: Registry<T>) -> Result<ResolvedOrder<T>, OrderingError> {
        // 1. Validate budgets
        self.validate_budgets(&registry)?;

        let entry_count = registry.len();
        debug!(
            entries = entry_count,
            references = registry.reference_count(),
            "resolving entry order"
        );

        // 2. Run the shared pipeline
        let order = crate::application::resolve_registry(registry)?;

        info!(entries = entry_count, "entry order resolved");
        Ok(order)
    }

    fn verify(&self, registry: &Registry<T>) -> Result<(), OrderingError> {
        self.validate_budgets(registry)?;
        crate::application::verify_registry(registry)
    }
}
