//! Error types for entry ordering.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while building or combining registries.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An entry name is already taken. The registry is left untouched.
    #[error("duplicate entry name: {0}")]
    DuplicateName(String),

    /// A merge found the same name in both inputs, and both inputs carried
    /// source labels.
    #[error("duplicate entry name: {name} (declared by both {left} and {right})")]
    DuplicateNameAcrossSources {
        name: String,
        left: String,
        right: String,
    },
}

/// One placement reference to a name absent from the registry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnknownReference {
    /// Entry whose placement holds the reference.
    pub entry: String,
    /// The name that does not exist.
    pub referenced: String,
}

impl fmt::Display for UnknownReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry '{}' references unknown entry '{}'",
            self.entry, self.referenced
        )
    }
}

/// Errors raised while resolving a registry into a total order.
#[derive(Debug, Error)]
pub enum OrderingError {
    /// One or more placements reference names absent from the registry.
    /// Every dangling reference is collected before this is returned, in
    /// lexicographic order of (entry, referenced).
    #[error("unresolved placement references: {}", format_references(.0))]
    UnknownReferences(Vec<UnknownReference>),

    /// The placement constraints contradict each other. The path is closed:
    /// it starts and ends at the same entry, and each step follows one
    /// constraint edge.
    #[error("placement cycle: {}", .path.join(" -> "))]
    CycleDetected {
        /// Closed walk through the cycle, first name repeated at the end.
        path: Vec<String>,
    },

    /// The registry exceeds the configured entry budget.
    #[error("registry holds {count} entries, budget allows {max}")]
    TooManyEntries { count: usize, max: usize },

    /// The registry exceeds the configured placement-reference budget.
    #[error("registry holds {count} placement references, budget allows {max}")]
    TooManyReferences { count: usize, max: usize },
}

fn format_references(references: &[UnknownReference]) -> String {
    references
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
