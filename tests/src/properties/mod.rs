//! Ordering laws checked against randomly generated registries.

pub mod ordering_laws;
