//! Structured advisory input and the prompt built from it.

use oz_core::{SystemParams, WaterQualityParams};
use oz_sim::TreatmentResult;
use serde::Serialize;
use std::fmt::Write as _;

/// Everything the advisory service sees about one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvisoryRequest {
    pub system: SystemParams,
    pub water: WaterQualityParams,
    pub result: TreatmentResult,
}

impl AdvisoryRequest {
    pub fn new(system: SystemParams, water: WaterQualityParams, result: TreatmentResult) -> Self {
        Self {
            system,
            water,
            result,
        }
    }

    pub fn mode_label(&self) -> &'static str {
        if self.system.is_aop() {
            "AOP (peroxone, O3/H2O2)"
        } else {
            "ozone only"
        }
    }

    /// Natural-language description of the run plus the reply schema.
    pub fn prompt(&self) -> String {
        let s = &self.system;
        let w = &self.water;
        let r = &self.result;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "You are auditing an ozone contactor simulation for a drinking water plant."
        );
        let _ = writeln!(out, "\nOperating mode: {}", self.mode_label());
        let _ = writeln!(out, "\nContactor:");
        let _ = writeln!(out, "- flow rate: {} m3/h", s.flow_rate_m3_h);
        let _ = writeln!(out, "- ozone dose: {} mg/L", s.ozone_dose_mg_l);
        let _ = writeln!(out, "- hydrogen peroxide dose: {} mg/L", s.h2o2_dose_mg_l);
        let _ = writeln!(
            out,
            "- basin: {} x {} x {} m, baffling factor {}",
            s.basin_length_m, s.basin_width_m, s.basin_depth_m, s.baffling_factor
        );
        let _ = writeln!(out, "\nInfluent water:");
        let _ = writeln!(out, "- pH {}, temperature {} C", w.ph, w.temperature_c);
        let _ = writeln!(
            out,
            "- bromide {} ug/L, ammonia {} mg/L, DOC {} mg/L",
            w.bromide_ug_l, w.ammonia_mg_l, w.doc_mg_l
        );
        let _ = writeln!(out, "- MIB {} ng/L, geosmin {} ng/L", w.mib_ng_l, w.geosmin_ng_l);
        let _ = writeln!(out, "\nComputed results:");
        for (name, value) in r.fields() {
            let _ = writeln!(out, "- {name}: {value}");
        }
        let _ = writeln!(
            out,
            "\nReply with JSON only, shaped as \
             {{\"summary\": string, \"recommendations\": [string], \"warnings\": [string]}}."
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(h2o2: f64) -> AdvisoryRequest {
        let system = SystemParams {
            h2o2_dose_mg_l: h2o2,
            ..SystemParams::default()
        };
        let water = WaterQualityParams::default();
        AdvisoryRequest::new(system, water, oz_sim::simulate(&system, &water, None))
    }

    #[test]
    fn prompt_mentions_mode_and_results() {
        let prompt = request(0.0).prompt();
        assert!(prompt.contains("ozone only"));
        assert!(prompt.contains("bromate_ug_l: 2.86"));
        assert!(prompt.contains("t10_min: 10.8"));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn aop_label() {
        assert!(request(1.0).prompt().contains("peroxone"));
    }

    #[test]
    fn request_serializes() {
        let json = serde_json::to_string(&request(0.0)).unwrap();
        assert!(json.contains("\"ozone_dose_mg_l\":2.5"));
        assert!(json.contains("\"lrv_protozoa\":0.28"));
    }
}
