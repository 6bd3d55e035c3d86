//! Property tests over the whole pipeline.

use oz_core::{SystemParams, WaterQualityParams};
use oz_sim::{TreatmentSimulator, simulate};
use proptest::prelude::*;

prop_compose! {
    fn valid_system()(
        flow in 50.0_f64..5000.0,
        dose in 0.0_f64..12.0,
        length in 2.0_f64..40.0,
        width in 1.0_f64..15.0,
        depth in 1.0_f64..8.0,
        baffling in 0.1_f64..=1.0,
    ) -> SystemParams {
        SystemParams {
            flow_rate_m3_h: flow,
            ozone_dose_mg_l: dose,
            h2o2_dose_mg_l: 0.0,
            basin_length_m: length,
            basin_width_m: width,
            basin_depth_m: depth,
            baffling_factor: baffling,
        }
    }
}

prop_compose! {
    fn valid_water()(
        ph in 5.0_f64..10.0,
        bromide in 0.0_f64..600.0,
        ammonia in 0.0_f64..1.0,
        doc in 0.5_f64..10.0,
        mib in 0.0_f64..200.0,
        geosmin in 0.0_f64..200.0,
        temperature in 1.0_f64..35.0,
    ) -> WaterQualityParams {
        WaterQualityParams {
            ph,
            bromide_ug_l: bromide,
            ammonia_mg_l: ammonia,
            doc_mg_l: doc,
            mib_ng_l: mib,
            geosmin_ng_l: geosmin,
            temperature_c: temperature,
        }
    }
}

proptest! {
    #[test]
    fn fields_finite_and_non_negative(system in valid_system(), water in valid_water(), h2o2 in 0.0_f64..5.0) {
        let system = SystemParams { h2o2_dose_mg_l: h2o2, ..system };
        let r = simulate(&system, &water, None);
        for (name, v) in r.fields() {
            prop_assert!(v.is_finite(), "{} not finite", name);
            if name != "final_ph" {
                prop_assert!(v >= 0.0, "{} negative: {}", name, v);
            }
        }
    }

    #[test]
    fn extreme_inputs_never_escape_as_non_finite(
        flow in prop::num::f64::ANY,
        dose in prop::num::f64::ANY,
        h2o2 in prop::num::f64::ANY,
        length in prop::num::f64::ANY,
        baffling in prop::num::f64::ANY,
        ph in prop::num::f64::ANY,
        bromide in prop::num::f64::ANY,
        doc in prop::num::f64::ANY,
        temperature in prop::num::f64::ANY,
    ) {
        let system = SystemParams {
            flow_rate_m3_h: flow,
            ozone_dose_mg_l: dose,
            h2o2_dose_mg_l: h2o2,
            basin_length_m: length,
            baffling_factor: baffling,
            ..SystemParams::default()
        };
        let water = WaterQualityParams {
            ph,
            bromide_ug_l: bromide,
            doc_mg_l: doc,
            temperature_c: temperature,
            ..WaterQualityParams::default()
        };
        let r = simulate(&system, &water, None);
        prop_assert!(r.fields().iter().all(|(_, v)| v.is_finite()));
    }

    #[test]
    fn more_ozone_more_ct_and_removal(water in valid_water(), dose in 0.0_f64..10.0, extra in 0.05_f64..5.0) {
        let sim = TreatmentSimulator::new();
        let low = SystemParams { ozone_dose_mg_l: dose, ..SystemParams::default() };
        let high = SystemParams { ozone_dose_mg_l: dose + extra, ..low };

        let a = sim.trace(&low, &water, None);
        let b = sim.trace(&high, &water, None);
        if a.residual.residual_mg_l > 0.0 {
            prop_assert!(b.ct_value > a.ct_value);
        } else {
            prop_assert!(b.ct_value >= a.ct_value);
        }

        let ra = sim.simulate(&low, &water, None);
        let rb = sim.simulate(&high, &water, None);
        prop_assert!(rb.ct_value >= ra.ct_value);
        prop_assert!(rb.removal_mib_percent >= ra.removal_mib_percent);
        prop_assert!(rb.removal_geosmin_percent >= ra.removal_geosmin_percent);
    }

    #[test]
    fn removal_is_concentration_independent(system in valid_system(), water in valid_water()) {
        let doubled = WaterQualityParams { mib_ng_l: water.mib_ng_l * 2.0, ..water };
        let a = simulate(&system, &water, None);
        let b = simulate(&system, &doubled, None);
        prop_assert_eq!(a.removal_mib_percent, b.removal_mib_percent);
        prop_assert!((b.final_mib_ng_l - 2.0 * a.final_mib_ng_l).abs() <= 0.0151);
    }

    #[test]
    fn peroxide_disqualifies_credit(system in valid_system(), water in valid_water(), h2o2 in 0.001_f64..10.0) {
        let system = SystemParams { h2o2_dose_mg_l: h2o2, ..system };
        let r = simulate(&system, &water, None);
        prop_assert_eq!(r.lrv_virus, 0.0);
        prop_assert_eq!(r.lrv_bacteria, 0.0);
        prop_assert_eq!(r.lrv_protozoa, 0.0);
    }

    #[test]
    fn credit_never_exceeds_cap(system in valid_system(), water in valid_water(), dose in 0.0_f64..1000.0) {
        let system = SystemParams { ozone_dose_mg_l: dose, ..system };
        let r = simulate(&system, &water, None);
        prop_assert!(r.lrv_virus <= 4.0);
        prop_assert!(r.lrv_bacteria <= 4.0);
        prop_assert!(r.lrv_protozoa <= 4.0);
    }

    #[test]
    fn peroxide_and_ammonia_suppress_bromate(
        dose in 0.5_f64..10.0,
        bromide in 10.0_f64..500.0,
        ph in 6.0_f64..9.0,
        base in 0.0_f64..3.0,
        step in 0.01_f64..3.0,
    ) {
        let sim = TreatmentSimulator::new();
        let water = WaterQualityParams { bromide_ug_l: bromide, ph, ..WaterQualityParams::default() };

        let s1 = SystemParams { ozone_dose_mg_l: dose, h2o2_dose_mg_l: base, ..SystemParams::default() };
        let s2 = SystemParams { h2o2_dose_mg_l: base + step, ..s1 };
        let a = sim.trace(&s1, &water, None).bromate.bromate_ug_l;
        let b = sim.trace(&s2, &water, None).bromate.bromate_ug_l;
        prop_assert!(b < a);

        let w1 = WaterQualityParams { ammonia_mg_l: base, ..water };
        let w2 = WaterQualityParams { ammonia_mg_l: base + step, ..water };
        let c = sim.trace(&s1, &w1, None).bromate.bromate_ug_l;
        let d = sim.trace(&s1, &w2, None).bromate.bromate_ug_l;
        prop_assert!(d < c);
        prop_assert!(d >= 0.0);
    }

    #[test]
    fn zero_dose_edge_case(system in valid_system(), water in valid_water()) {
        let system = SystemParams { ozone_dose_mg_l: 0.0, ..system };
        let r = simulate(&system, &water, None);
        prop_assert_eq!(r.calculated_residual_mg_l, 0.0);
        prop_assert_eq!(r.ct_value, 0.0);
        prop_assert_eq!(r.lrv_virus, 0.0);
        prop_assert_eq!(r.lrv_bacteria, 0.0);
        prop_assert_eq!(r.lrv_protozoa, 0.0);
    }
}
