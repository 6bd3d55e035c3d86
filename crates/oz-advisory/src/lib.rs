//! oz-advisory: narrative advice on a simulation result.
//!
//! The advisory text itself comes from an external service (typically a
//! language model behind an HTTP API). This crate only defines the narrow
//! seam to it:
//! - `AdvisoryRequest`: the structured input, and the prompt built from it
//! - `AdvisoryReport`: the structured `{summary, recommendations, warnings}` output
//! - `AdvisoryService`: the trait a transport implements
//! - `advise_or_fallback`: substitutes the static fallback report on any failure
//!
//! `RuleBasedAdvisor` is a deterministic local implementation built on the
//! compliance checks; it needs no network.

pub mod error;
pub mod report;
pub mod request;
pub mod rules;
pub mod service;

pub use error::{AdvisoryError, AdvisoryResult};
pub use report::{AdvisoryReport, parse_report};
pub use request::AdvisoryRequest;
pub use rules::RuleBasedAdvisor;
pub use service::{AdvisoryService, advise_or_fallback};
