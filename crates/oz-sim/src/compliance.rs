//! Threshold checks on a rounded result.

use crate::result::TreatmentResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceLimits {
    /// Bromate maximum contaminant level (µg/L).
    pub bromate_mcl_ug_l: f64,
    /// MIB odour threshold (ng/L).
    pub mib_odor_ng_l: f64,
    /// Geosmin odour threshold (ng/L).
    pub geosmin_odor_ng_l: f64,
    /// Cryptosporidium credit the contactor is expected to provide (log).
    pub required_protozoa_lrv: f64,
}

impl Default for ComplianceLimits {
    fn default() -> Self {
        Self {
            bromate_mcl_ug_l: 10.0,
            mib_odor_ng_l: 10.0,
            geosmin_odor_ng_l: 4.0,
            required_protozoa_lrv: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Violation,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Violation => write!(f, "violation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    pub check: String,
    pub severity: Severity,
    pub message: String,
}

impl ComplianceFinding {
    fn new(check: &str, severity: Severity, message: String) -> Self {
        Self {
            check: check.to_string(),
            severity,
            message,
        }
    }
}

/// Compare a result against `limits`. `aop` marks a peroxone run, whose
/// missing disinfection credit is expected rather than a shortfall.
pub fn assess_compliance(
    result: &TreatmentResult,
    aop: bool,
    limits: &ComplianceLimits,
) -> Vec<ComplianceFinding> {
    let mut findings = Vec::new();

    if result.bromate_ug_l > limits.bromate_mcl_ug_l {
        findings.push(ComplianceFinding::new(
            "bromate",
            Severity::Violation,
            format!(
                "Bromate {:.2} ug/L exceeds the {:.0} ug/L MCL",
                result.bromate_ug_l, limits.bromate_mcl_ug_l
            ),
        ));
    } else if result.bromate_ug_l > 0.5 * limits.bromate_mcl_ug_l {
        findings.push(ComplianceFinding::new(
            "bromate",
            Severity::Warning,
            format!(
                "Bromate {:.2} ug/L is above half the MCL",
                result.bromate_ug_l
            ),
        ));
    }

    if result.final_mib_ng_l > limits.mib_odor_ng_l {
        findings.push(ComplianceFinding::new(
            "mib",
            Severity::Warning,
            format!(
                "Finished MIB {:.2} ng/L is above the {:.0} ng/L odour threshold",
                result.final_mib_ng_l, limits.mib_odor_ng_l
            ),
        ));
    }
    if result.final_geosmin_ng_l > limits.geosmin_odor_ng_l {
        findings.push(ComplianceFinding::new(
            "geosmin",
            Severity::Warning,
            format!(
                "Finished geosmin {:.2} ng/L is above the {:.0} ng/L odour threshold",
                result.final_geosmin_ng_l, limits.geosmin_odor_ng_l
            ),
        ));
    }

    if result.calculated_residual_mg_l <= 0.0 && !aop {
        findings.push(ComplianceFinding::new(
            "residual",
            Severity::Warning,
            "No measurable ozone residual; dose does not satisfy demand".to_string(),
        ));
    }

    if aop {
        findings.push(ComplianceFinding::new(
            "disinfection",
            Severity::Info,
            "Peroxone mode: no ozone disinfection credit is claimed".to_string(),
        ));
    } else if result.lrv_protozoa < limits.required_protozoa_lrv {
        findings.push(ComplianceFinding::new(
            "disinfection",
            Severity::Warning,
            format!(
                "Cryptosporidium credit {:.2} log is below the {:.1} log target",
                result.lrv_protozoa, limits.required_protozoa_lrv
            ),
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate;
    use oz_core::{SystemParams, WaterQualityParams};

    fn checks(findings: &[ComplianceFinding]) -> Vec<&str> {
        findings.iter().map(|f| f.check.as_str()).collect()
    }

    #[test]
    fn reference_run_only_misses_crypto_target() {
        let r = simulate(&SystemParams::default(), &WaterQualityParams::default(), None);
        let findings = assess_compliance(&r, false, &ComplianceLimits::default());
        assert_eq!(checks(&findings), vec!["disinfection"]);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn high_bromide_is_a_violation() {
        let water = WaterQualityParams {
            bromide_ug_l: 800.0,
            ph: 8.5,
            ammonia_mg_l: 0.0,
            ..WaterQualityParams::default()
        };
        let system = SystemParams {
            ozone_dose_mg_l: 5.0,
            ..SystemParams::default()
        };
        let r = simulate(&system, &water, None);
        let findings = assess_compliance(&r, false, &ComplianceLimits::default());
        assert!(
            findings
                .iter()
                .any(|f| f.check == "bromate" && f.severity == Severity::Violation)
        );
    }

    #[test]
    fn aop_notes_missing_credit_without_residual_warning() {
        let system = SystemParams {
            h2o2_dose_mg_l: 1.0,
            ..SystemParams::default()
        };
        let r = simulate(&system, &WaterQualityParams::default(), None);
        let findings = assess_compliance(&r, true, &ComplianceLimits::default());
        assert!(!checks(&findings).contains(&"residual"));
        assert!(
            findings
                .iter()
                .any(|f| f.check == "disinfection" && f.severity == Severity::Info)
        );
    }
}
