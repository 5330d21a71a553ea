//! # Entry Ordering
//!
//! Deterministic ordering of uniquely-named entries under `after`/`before`
//! placement constraints. Callers register entries in any order, constraints
//! may reference entries that arrive later, and resolution produces either
//! the single canonical total order or an error naming exactly what prevents
//! one: every dangling reference, or a constraint cycle as a closed path.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (Entry, Registry, ResolvedOrder), placement
//!   value objects, errors, and invariant checkers
//! - **Algorithms**: Constraint graph building, cycle detection, Kahn's sort
//!   with lexicographic tie-breaking
//! - **Application**: Resolution pipeline and service orchestration
//! - **Ports**: Inbound API trait (EntryOrdering)
//!
//! ## Example
//!
//! ```
//! use entry_ordering::{Entry, Registry};
//!
//! let mut registry = Registry::new();
//! registry.insert(Entry::anywhere("init", "set -e"))?;
//! registry.insert(Entry::before("load-env", "source .env", ["set-prompt"]))?;
//! registry.insert(Entry::after("set-prompt", "PS1='$ '", ["load-env"]))?;
//! registry.insert(Entry::anywhere("aliases", "alias ll='ls -l'"))?;
//!
//! let order = registry.resolve()?;
//! let names: Vec<&str> = order.names().collect();
//! assert_eq!(names, ["aliases", "init", "load-env", "set-prompt"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::OrderingService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::errors::{OrderingError, RegistryError, UnknownReference};
pub use domain::value_objects::*;
pub use ports::inbound::EntryOrdering;
