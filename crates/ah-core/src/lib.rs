//! ah-core: stable foundation for acidhydrochem.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers + uniform grids)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AhError, AhResult};
pub use numeric::*;
pub use units::*;
