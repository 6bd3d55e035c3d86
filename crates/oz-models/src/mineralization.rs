//! Bulk organic carbon removal.
//!
//! Ozone transforms far more organic matter than it oxidises all the way to
//! CO₂, so mineralization is capped well below complete removal.

use oz_core::numeric::non_negative;
use oz_core::{SystemParams, WaterQualityParams};

/// Fraction of DOC mineralised per mg/L ozone.
pub const MINERALIZATION_COEFF: f64 = 0.04;
pub const MAX_MINERALIZATION_FRACTION: f64 = 0.20;
pub const AOP_MINERALIZATION_BONUS: f64 = 1.25;
/// pH depression per mg/L ozone from carbonic and organic acid formation.
pub const PH_DEPRESSION_PER_MG_L: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mineralization {
    pub fraction: f64,
    pub final_doc_mg_l: f64,
    pub removal_percent: f64,
}

pub fn mineralization_fraction(system: &SystemParams) -> f64 {
    let bonus = if system.is_aop() {
        AOP_MINERALIZATION_BONUS
    } else {
        1.0
    };
    (MINERALIZATION_COEFF * system.ozone_dose_mg_l * bonus).min(MAX_MINERALIZATION_FRACTION)
}

pub fn mineralize(system: &SystemParams, water: &WaterQualityParams) -> Mineralization {
    let fraction = mineralization_fraction(system);
    Mineralization {
        fraction,
        final_doc_mg_l: non_negative(water.doc_mg_l * (1.0 - fraction)),
        removal_percent: fraction * 100.0,
    }
}

/// Effluent pH; may fall below 7 at high doses.
pub fn final_ph(system: &SystemParams, water: &WaterQualityParams) -> f64 {
    non_negative(water.ph - PH_DEPRESSION_PER_MG_L * system.ozone_dose_mg_l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_mineralization() {
        let m = mineralize(&SystemParams::default(), &WaterQualityParams::default());
        assert!((m.fraction - 0.10).abs() < 1e-12);
        assert!((m.final_doc_mg_l - 4.05).abs() < 1e-12);
    }

    #[test]
    fn fraction_is_capped() {
        let system = SystemParams {
            ozone_dose_mg_l: 30.0,
            ..SystemParams::default()
        };
        assert_eq!(mineralization_fraction(&system), MAX_MINERALIZATION_FRACTION);
    }

    #[test]
    fn aop_bonus_applies() {
        let ozone_only = SystemParams::default();
        let peroxone = SystemParams {
            h2o2_dose_mg_l: 1.0,
            ..ozone_only
        };
        let a = mineralization_fraction(&ozone_only);
        let b = mineralization_fraction(&peroxone);
        assert!((b / a - AOP_MINERALIZATION_BONUS).abs() < 1e-12);
    }

    #[test]
    fn ph_drops_with_dose() {
        let water = WaterQualityParams::default();
        let system = SystemParams::default();
        assert!((final_ph(&system, &water) - 7.675).abs() < 1e-12);
        let heavy = SystemParams {
            ozone_dose_mg_l: 20.0,
            ..system
        };
        assert!(final_ph(&heavy, &water) < 7.0);
    }
}
