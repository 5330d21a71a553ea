//! # Entry-Ordering Test Suite
//!
//! Unified test crate for the engine.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # End-to-end scenarios through the public API
//! │   └── scenarios.rs
//! │
//! └── properties/       # Ordering laws checked with proptest
//!     └── ordering_laws.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ordering-tests
//!
//! # By category
//! cargo test -p ordering-tests integration::
//! cargo test -p ordering-tests properties::
//!
//! # Benchmarks
//! cargo bench -p ordering-tests
//! ```

#![allow(dead_code)]

pub mod properties;

/// Route engine tracing to the test harness:
/// `RUST_LOG=entry_ordering=debug cargo test -p ordering-tests`.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
