//! Ozone demand and net dissolved residual.

use crate::common::REFERENCE_TEMPERATURE_C;
use oz_core::numeric::non_negative;
use oz_core::{SystemParams, WaterQualityParams};

/// Instantaneous demand per mg/L of DOC.
pub const DOC_DEMAND_RATIO: f64 = 0.55;
/// Demand not attributable to DOC (nitrite, reduced metals).
pub const BACKGROUND_DEMAND_MG_L: f64 = 0.10;
/// Fractional change in demand per °C away from 20 °C.
pub const DEMAND_TEMPERATURE_SLOPE: f64 = 0.02;
/// Ozone consumed per mg/L of hydrogen peroxide.
pub const PEROXIDE_CONSUMPTION_RATIO: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualBreakdown {
    pub demand_mg_l: f64,
    pub peroxide_consumption_mg_l: f64,
    /// Floored at zero; under-dosing never yields a negative residual.
    pub residual_mg_l: f64,
}

pub fn demand_temperature_correction(temperature_c: f64) -> f64 {
    1.0 + (temperature_c - REFERENCE_TEMPERATURE_C) * DEMAND_TEMPERATURE_SLOPE
}

pub fn ozone_demand(doc_mg_l: f64, temperature_c: f64) -> f64 {
    (doc_mg_l * DOC_DEMAND_RATIO + BACKGROUND_DEMAND_MG_L)
        * demand_temperature_correction(temperature_c)
}

pub fn peroxide_consumption(h2o2_dose_mg_l: f64) -> f64 {
    h2o2_dose_mg_l * PEROXIDE_CONSUMPTION_RATIO
}

pub fn net_residual(system: &SystemParams, water: &WaterQualityParams) -> ResidualBreakdown {
    let demand_mg_l = ozone_demand(water.doc_mg_l, water.temperature_c);
    let peroxide_consumption_mg_l = peroxide_consumption(system.h2o2_dose_mg_l);
    let residual_mg_l =
        non_negative(system.ozone_dose_mg_l - demand_mg_l - peroxide_consumption_mg_l);
    ResidualBreakdown {
        demand_mg_l,
        peroxide_consumption_mg_l,
        residual_mg_l,
    }
}
