//! oz-models: the sub-models of an ozone / peroxone contactor.
//!
//! Each stage is a deterministic function of its inputs:
//! - hydraulics: basin geometry to retention time and baffled T10
//! - residual: ozone demand and peroxide consumption to net residual
//! - ct: residual times T10
//! - kinetics: competitive O₃ / •OH removal of MIB and geosmin
//! - bromate: bromide oxidation with peroxide and ammonia suppression
//! - mineralization: bulk DOC removal and the resulting pH shift
//! - disinfection: temperature-adjusted CT credit per pathogen class
//!
//! None of them hold state, so they are safe to call from any thread.
//!
//! # Example
//!
//! ```
//! use oz_core::SystemParams;
//! use oz_models::{Basin, ct_value};
//!
//! let system = SystemParams::default();
//! let contact = Basin::from_system(&system).contact_time(system.flow_rate_m3_h);
//! let ct = ct_value(0.2, contact.t10);
//! assert!((ct - 2.16).abs() < 1e-9);
//! ```

pub mod bromate;
pub mod common;
pub mod ct;
pub mod disinfection;
pub mod hydraulics;
pub mod kinetics;
pub mod mineralization;
pub mod residual;

// Re-exports
pub use bromate::{BromateFormation, form_bromate};
pub use ct::ct_value;
pub use disinfection::{DisinfectionCredit, MAX_LOG_CREDIT, Pathogen, credit};
pub use hydraulics::{Basin, ContactTime};
pub use kinetics::{OxidationConditions, RemovalOutcome, TraceOrganicRemoval, oxidize_trace_organics};
pub use mineralization::{Mineralization, final_ph, mineralize};
pub use residual::{ResidualBreakdown, net_residual};
