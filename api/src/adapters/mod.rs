//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod meeus;

pub use meeus::MeeusEphemeris;
