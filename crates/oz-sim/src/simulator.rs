//! The seven-stage treatment pipeline.

use crate::result::TreatmentResult;
use oz_core::{KineticParams, SystemParams, WaterQualityParams};
use oz_models::{
    Basin, BromateFormation, ContactTime, DisinfectionCredit, Mineralization, ResidualBreakdown,
    TraceOrganicRemoval, credit, ct_value, final_ph, form_bromate, mineralize, net_residual,
    oxidize_trace_organics,
};
use tracing::{debug, warn};

/// Unrounded output of every stage, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationTrace {
    /// Inputs after degenerate values were mapped to safe defaults.
    pub system: SystemParams,
    pub water: WaterQualityParams,
    pub contact: ContactTime,
    pub residual: ResidualBreakdown,
    pub ct_value: f64,
    pub organics: TraceOrganicRemoval,
    pub bromate: BromateFormation,
    pub mineralization: Mineralization,
    pub final_ph: f64,
    pub credit: DisinfectionCredit,
}

/// Stateless entry point; holds nothing between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreatmentSimulator;

impl TreatmentSimulator {
    pub fn new() -> Self {
        Self
    }

    pub fn simulate(
        &self,
        system: &SystemParams,
        water: &WaterQualityParams,
        kinetics: Option<&KineticParams>,
    ) -> TreatmentResult {
        TreatmentResult::from_trace(&self.trace(system, water, kinetics))
    }

    /// Run every stage and keep the intermediate values.
    ///
    /// Stage order is fixed: contact time and residual feed CT, and T10
    /// feeds every downstream stage.
    pub fn trace(
        &self,
        system: &SystemParams,
        water: &WaterQualityParams,
        kinetics: Option<&KineticParams>,
    ) -> SimulationTrace {
        let system = system.sanitized();
        let water = water.sanitized();
        let kinetics = kinetics.copied().unwrap_or(KineticParams::LITERATURE).sanitized();

        let contact = Basin::from_system(&system).contact_time(system.flow_rate_m3_h);
        let residual = net_residual(&system, &water);
        let ct = ct_value(residual.residual_mg_l, contact.t10);
        let organics = oxidize_trace_organics(&system, &water, &kinetics, contact.t10);
        let bromate = form_bromate(&system, &water, contact.t10);
        let mineralization = mineralize(&system, &water);
        let final_ph = final_ph(&system, &water);
        let credit = credit(ct, &system, water.temperature_c);

        debug!(
            t10_min = contact.t10_min(),
            residual_mg_l = residual.residual_mg_l,
            ct,
            bromate_ug_l = bromate.bromate_ug_l,
            aop = system.is_aop(),
            "treatment pipeline evaluated"
        );

        let trace = SimulationTrace {
            system,
            water,
            contact,
            residual,
            ct_value: ct,
            organics,
            bromate,
            mineralization,
            final_ph,
            credit,
        };
        for (field, _) in trace.outputs().into_iter().filter(|(_, v)| v.is_nan()) {
            warn!(field, "stage output undefined, reported as 0");
        }
        trace
    }
}

impl SimulationTrace {
    /// Stage outputs before rounding, in `TreatmentResult::fields` order.
    pub fn outputs(&self) -> [(&'static str, f64); 15] {
        [
            ("calculated_residual_mg_l", self.residual.residual_mg_l),
            ("hydraulic_retention_time_min", self.contact.hydraulic_retention_min()),
            ("t10_min", self.contact.t10_min()),
            ("ct_value", self.ct_value),
            ("final_ph", self.final_ph),
            ("final_mib_ng_l", self.organics.mib.final_ng_l),
            ("final_geosmin_ng_l", self.organics.geosmin.final_ng_l),
            ("final_doc_mg_l", self.mineralization.final_doc_mg_l),
            ("removal_mib_percent", self.organics.mib.removal_percent),
            ("removal_geosmin_percent", self.organics.geosmin.removal_percent),
            ("removal_doc_percent", self.mineralization.removal_percent),
            ("bromate_ug_l", self.bromate.bromate_ug_l),
            ("lrv_virus", self.credit.virus),
            ("lrv_bacteria", self.credit.bacteria),
            ("lrv_protozoa", self.credit.protozoa),
        ]
    }
}

/// `TreatmentSimulator::simulate` without naming the simulator.
pub fn simulate(
    system: &SystemParams,
    water: &WaterQualityParams,
    kinetics: Option<&KineticParams>,
) -> TreatmentResult {
    TreatmentSimulator.simulate(system, water, kinetics)
}
