//! Deterministic offline advisor.

use crate::error::AdvisoryResult;
use crate::report::AdvisoryReport;
use crate::request::AdvisoryRequest;
use crate::service::AdvisoryService;
use oz_sim::{ComplianceLimits, Severity, assess_compliance};

/// Builds advice from the compliance checks alone.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAdvisor {
    pub limits: ComplianceLimits,
}

impl RuleBasedAdvisor {
    pub fn new(limits: ComplianceLimits) -> Self {
        Self { limits }
    }

    fn recommendation_for(check: &str) -> Option<&'static str> {
        match check {
            "bromate" => Some(
                "Control bromate by lowering pH, dosing ammonia or peroxide, or reducing the ozone dose.",
            ),
            "mib" | "geosmin" => Some(
                "Raise radical exposure for taste-and-odour control: increase ozone dose or add hydrogen peroxide.",
            ),
            "residual" => Some("Increase the ozone dose until it exceeds the instantaneous demand."),
            "disinfection" => Some(
                "Increase CT through a higher residual, longer contact time or better baffling.",
            ),
            _ => None,
        }
    }
}

impl AdvisoryService for RuleBasedAdvisor {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn advise(&self, request: &AdvisoryRequest) -> AdvisoryResult<AdvisoryReport> {
        let r = &request.result;
        let aop = request.system.is_aop();
        let findings = assess_compliance(r, aop, &self.limits);

        let mut summary = format!(
            "{} run: CT {:.2} mg*min/L over T10 {:.2} min, bromate {:.2} ug/L, \
             MIB removal {:.1}%, geosmin removal {:.1}%.",
            if aop { "Peroxone" } else { "Ozone-only" },
            r.ct_value,
            r.t10_min,
            r.bromate_ug_l,
            r.removal_mib_percent,
            r.removal_geosmin_percent,
        );

        let mut recommendations: Vec<String> = Vec::new();
        let mut warnings = Vec::new();
        for finding in &findings {
            match finding.severity {
                Severity::Info => {
                    summary.push(' ');
                    summary.push_str(&finding.message);
                    summary.push('.');
                }
                Severity::Warning | Severity::Violation => {
                    warnings.push(finding.message.clone());
                    if let Some(rec) = Self::recommendation_for(&finding.check)
                        && !recommendations.iter().any(|r| r == rec)
                    {
                        recommendations.push(rec.to_string());
                    }
                }
            }
        }

        if aop {
            recommendations.push(
                "Claim pathogen credit from a downstream barrier (UV or chlorine); peroxone earns none."
                    .to_string(),
            );
        }
        if recommendations.is_empty() {
            recommendations.push("All configured targets are met; hold the current dose.".to_string());
        }

        Ok(AdvisoryReport {
            summary,
            recommendations,
            warnings,
        })
    }
}
