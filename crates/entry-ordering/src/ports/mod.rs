//! Ports module for entry ordering.
//!
//! Defines the inbound (API) port trait. The engine is self-contained, so
//! there is no outbound side.

pub mod inbound;

pub use inbound::EntryOrdering;
