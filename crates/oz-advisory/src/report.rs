//! Structured advisory output.

use crate::error::{AdvisoryError, AdvisoryResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl AdvisoryReport {
    /// Static report shown whenever the advisory service cannot answer.
    pub fn fallback() -> Self {
        Self {
            summary: "AI advisory analysis is currently unavailable. The simulation results \
                      above are computed locally and remain valid."
                .to_string(),
            recommendations: vec![
                "Review the computed CT, bromate and removal values against your site's \
                 regulatory targets."
                    .to_string(),
                "Consult a qualified process engineer before changing ozone or peroxide dosing."
                    .to_string(),
            ],
            warnings: vec![
                "Could not reach the advisory service; check network connectivity and retry."
                    .to_string(),
            ],
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// Parse a service reply into a report.
///
/// A surrounding Markdown code fence, optionally tagged `json`, is stripped
/// before the JSON is read.
pub fn parse_report(text: &str) -> AdvisoryResult<AdvisoryReport> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(AdvisoryError::EmptyResponse);
    }
    let report: AdvisoryReport = serde_json::from_str(body)?;
    if report.summary.trim().is_empty() {
        return Err(AdvisoryError::EmptyResponse);
    }
    Ok(report)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
