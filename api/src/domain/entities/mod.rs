//! Domain entities
//!
//! Pure value types and calculations for Vedic placements.
//! Nothing here performs I/O; positions arrive as plain degrees.

pub mod compatibility;
pub mod dasha;
pub mod longitude;
pub mod position;

pub use compatibility::{compute_compatibility, CompatibilityResult, CompatibilityStatus};
#[allow(unused_imports)]
pub use dasha::{compute_dasha, BirthBalance, DashaLord, DashaState, DASHA_LORDS};
#[allow(unused_imports)]
pub use longitude::{normalize_degrees, to_sidereal, Ayanamsa};
pub use position::{resolve_position, MansionPosition};
