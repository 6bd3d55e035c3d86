//! Input records for one simulation run.
//!
//! Units are carried in field names: flow in m³/h, basin dimensions in m,
//! doses and bulk constituents in mg/L, bromide in µg/L, taste-and-odour
//! compounds in ng/L, temperature in °C.

use crate::error::{OzError, OzResult};
use crate::numeric::non_negative;

/// Contactor design and dosing, as set by the operator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemParams {
    pub flow_rate_m3_h: f64,
    pub ozone_dose_mg_l: f64,
    /// Any positive peroxide dose puts the run in AOP (peroxone) mode.
    pub h2o2_dose_mg_l: f64,
    pub basin_length_m: f64,
    pub basin_width_m: f64,
    pub basin_depth_m: f64,
    /// T10 / HRT, in (0, 1].
    pub baffling_factor: f64,
}

/// Influent water characterisation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterQualityParams {
    pub ph: f64,
    pub bromide_ug_l: f64,
    pub ammonia_mg_l: f64,
    pub doc_mg_l: f64,
    pub mib_ng_l: f64,
    pub geosmin_ng_l: f64,
    pub temperature_c: f64,
}

/// Second-order rate constants for one trace organic, in M⁻¹·s⁻¹.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundRates {
    /// Direct molecular ozone pathway.
    pub k_o3: f64,
    /// Hydroxyl radical pathway.
    pub k_oh: f64,
}

/// Optional override of the literature rate constants.
///
/// Only the oxidation kinetics stage reads these.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KineticParams {
    pub mib: CompoundRates,
    pub geosmin: CompoundRates,
}

impl KineticParams {
    /// Canonical literature values used whenever no override is supplied.
    pub const LITERATURE: KineticParams = KineticParams {
        mib: CompoundRates {
            k_o3: 0.35,
            k_oh: 5.1e9,
        },
        geosmin: CompoundRates {
            k_o3: 0.10,
            k_oh: 7.8e9,
        },
    };

    /// Rate constants may not be negative; NaN becomes zero and infinity
    /// the largest finite value.
    pub fn sanitized(&self) -> Self {
        let clean = |r: CompoundRates| CompoundRates {
            k_o3: finite_non_negative(r.k_o3),
            k_oh: finite_non_negative(r.k_oh),
        };
        Self {
            mib: clean(self.mib),
            geosmin: clean(self.geosmin),
        }
    }

    pub fn validate(&self) -> OzResult<()> {
        for (what, v) in [
            ("mib k_o3", self.mib.k_o3),
            ("mib k_oh", self.mib.k_oh),
            ("geosmin k_o3", self.geosmin.k_o3),
            ("geosmin k_oh", self.geosmin.k_oh),
        ] {
            check_range(what, v, 0.0, f64::MAX)?;
        }
        Ok(())
    }
}

impl Default for KineticParams {
    fn default() -> Self {
        Self::LITERATURE
    }
}

impl SystemParams {
    /// AOP mode is a pure branch on the peroxide dose, evaluated per run.
    pub fn is_aop(&self) -> bool {
        self.h2o2_dose_mg_l > 0.0
    }

    /// Map degenerate values onto the engine's safe defaults.
    ///
    /// A zero or non-finite flow rate becomes 1 m³/h. Doses and dimensions
    /// are floored at zero and the baffling factor is clamped into `[0, 1]`.
    pub fn sanitized(&self) -> Self {
        let flow = if self.flow_rate_m3_h.is_finite() && self.flow_rate_m3_h > 0.0 {
            self.flow_rate_m3_h
        } else {
            1.0
        };
        Self {
            flow_rate_m3_h: flow,
            ozone_dose_mg_l: finite_non_negative(self.ozone_dose_mg_l),
            h2o2_dose_mg_l: finite_non_negative(self.h2o2_dose_mg_l),
            basin_length_m: finite_non_negative(self.basin_length_m),
            basin_width_m: finite_non_negative(self.basin_width_m),
            basin_depth_m: finite_non_negative(self.basin_depth_m),
            baffling_factor: non_negative(self.baffling_factor).min(1.0),
        }
    }

    /// Strict range check for inputs coming from files or forms.
    pub fn validate(&self) -> OzResult<()> {
        check_positive("flow rate", self.flow_rate_m3_h)?;
        check_range("ozone dose", self.ozone_dose_mg_l, 0.0, 50.0)?;
        check_range("hydrogen peroxide dose", self.h2o2_dose_mg_l, 0.0, 50.0)?;
        check_positive("basin length", self.basin_length_m)?;
        check_positive("basin width", self.basin_width_m)?;
        check_positive("basin depth", self.basin_depth_m)?;
        check_positive("baffling factor", self.baffling_factor)?;
        check_range("baffling factor", self.baffling_factor, 0.0, 1.0)?;
        Ok(())
    }
}

impl Default for SystemParams {
    fn default() -> Self {
        Self {
            flow_rate_m3_h: 1000.0,
            ozone_dose_mg_l: 2.5,
            h2o2_dose_mg_l: 0.0,
            basin_length_m: 15.0,
            basin_width_m: 5.0,
            basin_depth_m: 4.0,
            baffling_factor: 0.6,
        }
    }
}

impl WaterQualityParams {
    /// pH is clamped into `[0, 14]` and temperature into `[0, 100]` °C;
    /// concentrations are floored at zero.
    pub fn sanitized(&self) -> Self {
        let ph = if self.ph.is_nan() { 7.0 } else { self.ph.clamp(0.0, 14.0) };
        let temperature_c = if self.temperature_c.is_nan() {
            20.0
        } else {
            self.temperature_c.clamp(0.0, 100.0)
        };
        Self {
            ph,
            bromide_ug_l: finite_non_negative(self.bromide_ug_l),
            ammonia_mg_l: finite_non_negative(self.ammonia_mg_l),
            doc_mg_l: finite_non_negative(self.doc_mg_l),
            mib_ng_l: finite_non_negative(self.mib_ng_l),
            geosmin_ng_l: finite_non_negative(self.geosmin_ng_l),
            temperature_c,
        }
    }

    pub fn validate(&self) -> OzResult<()> {
        check_range("pH", self.ph, 0.0, 14.0)?;
        check_range("bromide", self.bromide_ug_l, 0.0, 10_000.0)?;
        check_range("ammonia", self.ammonia_mg_l, 0.0, 100.0)?;
        check_positive("DOC", self.doc_mg_l)?;
        check_range("MIB", self.mib_ng_l, 0.0, 1.0e6)?;
        check_range("geosmin", self.geosmin_ng_l, 0.0, 1.0e6)?;
        check_range("temperature", self.temperature_c, 0.0, 40.0)?;
        Ok(())
    }
}

impl Default for WaterQualityParams {
    fn default() -> Self {
        Self {
            ph: 7.8,
            bromide_ug_l: 150.0,
            ammonia_mg_l: 0.05,
            doc_mg_l: 4.5,
            mib_ng_l: 40.0,
            geosmin_ng_l: 35.0,
            temperature_c: 15.0,
        }
    }
}

fn finite_non_negative(v: f64) -> f64 {
    if v.is_finite() { non_negative(v) } else if v > 0.0 { f64::MAX } else { 0.0 }
}

fn check_positive(what: &'static str, v: f64) -> OzResult<()> {
    if !v.is_finite() {
        return Err(OzError::NonFinite { what, value: v });
    }
    if v <= 0.0 {
        return Err(OzError::NotPositive { what });
    }
    Ok(())
}

fn check_range(what: &'static str, v: f64, min: f64, max: f64) -> OzResult<()> {
    if !v.is_finite() {
        return Err(OzError::NonFinite { what, value: v });
    }
    if v < min || v > max {
        return Err(OzError::OutOfRange {
            what,
            value: v,
            min,
            max,
        });
    }
    Ok(())
}
