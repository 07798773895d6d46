//! Property tests for the pipeline stages
//!
//! Each stage has a small set of invariants that must hold for any input:
//! saturation and monotonicity of the resistance estimate, boundary and
//! monotonicity of the AQI interpolation, convergence of the blender and
//! determinism of the classifier.

use proptest::prelude::*;

use oaq_core::concentration::update_baseline;
use oaq_core::{
    estimate_resistance, interpolate_aqi, AqiTable, Blender, ConcentrationEstimator, Gas,
    GasClass, GasClassifier, GasDetection, RcdaStrategy, TrimData,
};

proptest! {
    #[test]
    fn resistance_below_lower_bound_is_floor(
        lr in 1u16..=u16::MAX,
        er in any::<u16>(),
        gain in any::<u8>(),
        code_frac in 0.0f64..1.0,
    ) {
        let code = (code_frac * lr as f64) as u16;
        prop_assume!(code < lr);
        prop_assert_eq!(estimate_resistance(code, lr, er, gain), 1e-3);
    }

    #[test]
    fn resistance_at_or_above_upper_bound_is_ceiling(
        lr in 0u16..1000,
        er in 1000u16..=u16::MAX,
        gain in any::<u8>(),
        extra in any::<u16>(),
    ) {
        let code = er.saturating_add(extra);
        prop_assert_eq!(estimate_resistance(code, lr, er, gain), 1e12);
    }

    #[test]
    fn resistance_is_increasing_inside_bounds(
        lr in 0u16..10_000,
        span in 10u16..50_000,
        gain in 1u8..=u8::MAX,
        a_frac in 0.0f64..1.0,
        b_frac in 0.0f64..1.0,
    ) {
        let er = lr + span;
        let a = lr + 1 + (a_frac * (span - 2) as f64) as u16;
        let b = lr + 1 + (b_frac * (span - 2) as f64) as u16;
        prop_assume!(a < b);
        prop_assert!(estimate_resistance(a, lr, er, gain) < estimate_resistance(b, lr, er, gain));
    }

    #[test]
    fn aqi_is_monotonic(c1 in 0.0f32..2049.0, c2 in 0.0f32..2049.0) {
        let (lo, hi) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        prop_assert!(AqiTable::NO2.aqi(lo) <= AqiTable::NO2.aqi(hi));
        prop_assert!(AqiTable::O3.aqi(lo.min(604.0)) <= AqiTable::O3.aqi(hi.min(604.0)));
    }

    #[test]
    fn aqi_saturates_above_table(excess in 0.001f32..1e9) {
        prop_assert_eq!(AqiTable::NO2.aqi(2049.0 + excess), 500.0);
        prop_assert_eq!(interpolate_aqi(604.0 + excess, AqiTable::O3.breakpoints()), 500.0);
    }

    #[test]
    fn blender_converges_without_overshoot(
        initial in 0.0f32..=1.0,
        force_no2 in any::<bool>(),
    ) {
        let mut blender = Blender::new(initial);
        let (strategy, target) = if force_no2 {
            (GasDetection::ForceNo2, 1.0)
        } else {
            (GasDetection::ForceO3, 0.0)
        };

        let mut distance = (target - blender.probability()).abs();
        for _ in 0..200 {
            blender.blend(100.0, 50.0, GasClass::O3Dominant, strategy, 0.0);
            let p = blender.probability();
            prop_assert!((0.0..=1.0).contains(&p));
            let next = (target - p).abs();
            prop_assert!(next <= distance);
            distance = next;
        }
    }

    #[test]
    fn classifier_is_deterministic(steps in prop::array::uniform15(100.0f32..1e8)) {
        let classifier = GasClassifier::default();
        let a = classifier.classify(&steps);
        let b = classifier.classify(&steps);
        prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
    }

    #[test]
    fn set_strategy_returns_zero(
        baseline in 1e3f32..1e9,
        sample in 1e3f32..1e9,
    ) {
        let mut est = ConcentrationEstimator::new(Gas::No2, &TrimData::nominal());
        est.seed_baseline(baseline);
        let conc = est.estimate(sample, RcdaStrategy::Set);
        prop_assert!(conc.abs() <= f32::EPSILON);
    }

    #[test]
    fn adj_baseline_moves_towards_sample(
        baseline in 1e3f32..1e9,
        sample in 1e3f32..1e9,
    ) {
        let next = update_baseline(Some(baseline), sample, RcdaStrategy::Adj);
        let (lo, hi) = if baseline <= sample { (baseline, sample) } else { (sample, baseline) };
        prop_assert!(next >= lo * 0.999_99 && next <= hi * 1.000_01);
    }
}
