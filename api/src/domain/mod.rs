//! Domain layer
//!
//! Contains pure calculation logic with no external dependencies.
//! - `entities`: Longitudes, placements, dasha periods and match scoring
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
