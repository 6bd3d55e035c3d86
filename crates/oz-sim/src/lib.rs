//! oz-sim: the treatment simulation pipeline.
//!
//! `simulate` runs the seven sub-models from `oz-models` in dependency order
//! and returns a rounded, immutable `TreatmentResult`. The pipeline is a pure
//! function of its inputs: no shared state, no I/O, no failure mode. Sweeps
//! and compliance checks are built on top of it.
//!
//! # Example
//!
//! ```
//! use oz_core::{SystemParams, WaterQualityParams};
//!
//! let result = oz_sim::simulate(&SystemParams::default(), &WaterQualityParams::default(), None);
//! assert_eq!(result.t10_min, 10.8);
//! assert!(result.bromate_ug_l < 10.0);
//! ```

pub mod compliance;
pub mod error;
pub mod hash;
pub mod result;
pub mod simulator;
pub mod sweep;

pub use compliance::{ComplianceFinding, ComplianceLimits, Severity, assess_compliance};
pub use error::SweepError;
pub use hash::fingerprint;
pub use result::TreatmentResult;
pub use simulator::{SimulationTrace, TreatmentSimulator, simulate};
pub use sweep::{SweepDefinition, SweepParameter, SweepPoint, SweepResult, SweepType, execute_sweep};
