//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the ephemeris.

pub mod astrology_service;
pub mod timestamp;

pub use astrology_service::{AstrologyService, Placement};
