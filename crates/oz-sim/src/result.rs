//! Rounded simulation output.

use crate::simulator::SimulationTrace;
use oz_core::numeric::round_to;
use serde::{Deserialize, Serialize};

/// Decimal places for concentrations, CT, residual, times, pH and credits.
pub const VALUE_DECIMALS: i32 = 2;
/// Decimal places for percent removals.
pub const PERCENT_DECIMALS: i32 = 1;

/// Effluent quality, disinfection credit and byproduct risk for one run.
///
/// Every field is rounded at construction. The rounding is part of the
/// contract: threshold comparisons downstream must be reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreatmentResult {
    pub calculated_residual_mg_l: f64,
    pub hydraulic_retention_time_min: f64,
    pub t10_min: f64,
    /// mg·min/L
    pub ct_value: f64,
    pub final_ph: f64,
    pub final_mib_ng_l: f64,
    pub final_geosmin_ng_l: f64,
    pub final_doc_mg_l: f64,
    pub removal_mib_percent: f64,
    pub removal_geosmin_percent: f64,
    pub removal_doc_percent: f64,
    pub bromate_ug_l: f64,
    pub lrv_virus: f64,
    pub lrv_bacteria: f64,
    pub lrv_protozoa: f64,
}

impl TreatmentResult {
    pub fn from_trace(trace: &SimulationTrace) -> Self {
        let v = |x: f64| round_to(x, VALUE_DECIMALS);
        let pct = |x: f64| round_to(x, PERCENT_DECIMALS);
        Self {
            calculated_residual_mg_l: v(trace.residual.residual_mg_l),
            hydraulic_retention_time_min: v(trace.contact.hydraulic_retention_min()),
            t10_min: v(trace.contact.t10_min()),
            ct_value: v(trace.ct_value),
            final_ph: v(trace.final_ph),
            final_mib_ng_l: v(trace.organics.mib.final_ng_l),
            final_geosmin_ng_l: v(trace.organics.geosmin.final_ng_l),
            final_doc_mg_l: v(trace.mineralization.final_doc_mg_l),
            removal_mib_percent: pct(trace.organics.mib.removal_percent),
            removal_geosmin_percent: pct(trace.organics.geosmin.removal_percent),
            removal_doc_percent: pct(trace.mineralization.removal_percent),
            bromate_ug_l: v(trace.bromate.bromate_ug_l),
            lrv_virus: v(trace.credit.virus),
            lrv_bacteria: v(trace.credit.bacteria),
            lrv_protozoa: v(trace.credit.protozoa),
        }
    }

    /// Field names and values in a fixed order (also the CSV column order).
    pub fn fields(&self) -> [(&'static str, f64); 15] {
        [
            ("calculated_residual_mg_l", self.calculated_residual_mg_l),
            ("hydraulic_retention_time_min", self.hydraulic_retention_time_min),
            ("t10_min", self.t10_min),
            ("ct_value", self.ct_value),
            ("final_ph", self.final_ph),
            ("final_mib_ng_l", self.final_mib_ng_l),
            ("final_geosmin_ng_l", self.final_geosmin_ng_l),
            ("final_doc_mg_l", self.final_doc_mg_l),
            ("removal_mib_percent", self.removal_mib_percent),
            ("removal_geosmin_percent", self.removal_geosmin_percent),
            ("removal_doc_percent", self.removal_doc_percent),
            ("bromate_ug_l", self.bromate_ug_l),
            ("lrv_virus", self.lrv_virus),
            ("lrv_bacteria", self.lrv_bacteria),
            ("lrv_protozoa", self.lrv_protozoa),
        ]
    }

    pub fn has_disinfection_credit(&self) -> bool {
        self.lrv_virus > 0.0 || self.lrv_bacteria > 0.0 || self.lrv_protozoa > 0.0
    }
}
