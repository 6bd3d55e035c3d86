//! oz-core: stable foundation for the ozone contactor engine.
//!
//! Contains:
//! - units (uom SI types + constructors for basin hydraulics)
//! - numeric (Real, input guards, output saturation and rounding)
//! - params (operator and influent input records)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod params;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{OzError, OzResult};
pub use numeric::*;
pub use params::{CompoundRates, KineticParams, SystemParams, WaterQualityParams};
pub use units::*;
