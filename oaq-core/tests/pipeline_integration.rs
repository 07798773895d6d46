//! Integration tests for the full air quality pipeline
//!
//! Covers:
//! - Golden values for a fixed synthetic exposure scenario
//! - Baseline strategies across many cycles
//! - Saturated and railed sensor behaviour
//! - Independence of sensor instances

mod common;

use oaq_core::{
    estimate_resistance, GasClass, GasDetection, OaqAlgorithm, OaqConfig, OaqStatus,
    RcdaStrategy, SensorConfig, TrimData,
};

use common::{adc_block, algorithm, clean_air_codes, exposure_codes, TestRng, BOUNDS, CONFIG_BLOCK};

/// Five clean cycles followed by twenty exposure cycles
fn run_scenario(config: OaqConfig) -> oaq_core::OaqResults {
    let mut algo = algorithm(config);
    let clean = adc_block(&clean_air_codes());
    let exposed = adc_block(&exposure_codes());

    let mut last = algo.calculate(&clean);
    for _ in 1..5 {
        last = algo.calculate(&clean);
    }
    for _ in 0..20 {
        last = algo.calculate(&exposed);
    }
    last
}

#[test]
fn golden_exposure_scenario_adj() {
    let results = run_scenario(OaqConfig::default());

    assert_eq!(results.rmox[0], 76_134.016);
    assert_within_tolerance!(results.classification.score, -0.646_267_6, 1e-4);
    assert_eq!(results.classification.class, GasClass::No2Dominant);

    assert_relative!(results.no2_ppb, 35.811_775, 1e-3);
    assert_relative!(results.o3_ppb, 18.972_649, 1e-3);
    assert_relative!(results.aqi_no2, 33.784_695, 1e-3);
    assert_relative!(results.aqi_o3, 17.567_268, 1e-3);
    assert_relative!(results.no2_probability, 0.732_369_4, 1e-4);
    assert_relative!(results.aqi, 29.444_414, 1e-3);
    assert_eq!(results.status, OaqStatus::Stabilizing);
}

#[test]
fn golden_exposure_scenario_fix() {
    let config = OaqConfig::default().with_rcda_strategy(RcdaStrategy::Fix);
    let results = run_scenario(config);

    assert_relative!(results.no2_ppb, 36.180_824, 1e-3);
    assert_relative!(results.o3_ppb, 19.169_647, 1e-3);
    assert_relative!(results.aqi, 29.748_215, 1e-3);
}

#[test]
fn clean_air_classifier_score() {
    let mut algo = algorithm(OaqConfig::default());
    let results = algo.calculate(&adc_block(&clean_air_codes()));
    assert_within_tolerance!(results.classification.score, -0.574_121_5, 1e-4);
    assert_eq!(results.rmox[0], 69_650.0);
}

#[test]
fn adj_baseline_drifts_towards_exposure() {
    let mut algo = algorithm(OaqConfig::default().with_stabilization_samples(0));
    let clean = adc_block(&clean_air_codes());
    let exposed = adc_block(&exposure_codes());

    algo.calculate(&clean);
    let (no2_start, _) = algo.baselines();

    let mut first = None;
    let mut last = None;
    for _ in 0..2_000 {
        let results = algo.calculate(&exposed);
        first.get_or_insert(results.no2_ppb);
        last = Some(results.no2_ppb);
    }

    let (no2_end, _) = algo.baselines();
    assert!(no2_end.unwrap() > no2_start.unwrap());
    // concentration decays as the baseline adapts to the new level
    assert!(last.unwrap() < 36.0);
    assert!(first.unwrap() > 0.0);
}

#[test]
fn set_strategy_reports_no_gas() {
    let mut algo = algorithm(OaqConfig::default().with_rcda_strategy(RcdaStrategy::Set));
    algo.calculate(&adc_block(&clean_air_codes()));
    let results = algo.calculate(&adc_block(&exposure_codes()));
    assert_eq!(results.no2_ppb, 0.0);
    assert_eq!(results.o3_ppb, 0.0);
    assert_eq!(results.aqi, 0.0);
}

#[test]
fn forced_detection_overrides_classifier() {
    let config = OaqConfig::default().with_gas_detection(GasDetection::ForceO3);
    let results = run_scenario(config);
    assert_eq!(results.classification.class, GasClass::No2Dominant);
    assert!(results.no2_probability < 0.5);
    assert!(results.aqi < results.aqi_no2);
}

#[test]
fn saturated_rmox_stays_finite() {
    let mut algo = algorithm(OaqConfig::default());
    let mut rmox = [1e-3; 15];
    rmox[13] = 1e12;
    rmox[14] = 1e12;
    for _ in 0..10 {
        let results = algo.calculate_rmox(&rmox);
        assert!(results.aqi.is_finite());
        assert!(results.classification.score.is_finite());
    }
}

#[test]
fn railed_cycle_with_steep_trim_recovers() {
    // beta2 = 0.2: the NO2 exponent is 5
    let trim = TrimData::parse(&[0x03, 0xE8, 0x00, 0xC8, 0x01, 0, 0, 0, 0]).unwrap();
    let config = OaqConfig::default().with_rcda_strategy(RcdaStrategy::Fix);
    let mut algo = OaqAlgorithm::new(config, SensorConfig::parse(&CONFIG_BLOCK), trim, BOUNDS);

    algo.calculate_rmox(&[100.0; 15]);
    for _ in 0..2 {
        let railed = algo.calculate_rmox(&[1e12; 15]);
        assert!(railed.no2_ppb.is_finite());
        assert!(railed.no2_ppb >= 10_000.0);
        assert!(railed.aqi.is_finite());
    }

    let mut last = algo.calculate_rmox(&[100.0; 15]);
    for _ in 0..200 {
        last = algo.calculate_rmox(&[100.0; 15]);
    }
    assert!(last.no2_ppb.is_finite());
    assert!(last.aqi_no2 < 1.0);
    assert!(last.aqi < 1.0);
}

#[test]
fn instances_do_not_share_state() {
    let mut a = algorithm(OaqConfig::default());
    let mut b = algorithm(OaqConfig::default());

    a.calculate(&adc_block(&clean_air_codes()));
    for _ in 0..10 {
        a.calculate(&adc_block(&exposure_codes()));
    }

    let fresh = b.calculate(&adc_block(&exposure_codes()));
    assert_eq!(fresh.no2_ppb, 0.0);
    assert_ne!(a.baselines(), b.baselines());
}

#[test]
fn random_profiles_never_produce_nan() {
    let mut rng = TestRng::new(42);
    let mut algo = algorithm(OaqConfig::default());

    for _ in 0..500 {
        let mut codes = [0u16; 15];
        for code in codes.iter_mut() {
            *code = rng.gen_range(0.0, 65_535.0) as u16;
        }
        let results = algo.calculate(&adc_block(&codes));
        assert!(results.aqi.is_finite());
        assert!(results.aqi >= 0.0 && results.aqi <= 500.001);
        assert!(results.no2_ppb >= 0.0 && results.o3_ppb >= 0.0);
    }
}

#[test]
fn resistance_matches_pipeline_decode() {
    let codes = exposure_codes();
    let mut algo = algorithm(OaqConfig::default());
    let results = algo.calculate(&adc_block(&codes));
    for (step, &code) in codes.iter().enumerate() {
        assert_eq!(results.rmox[step], estimate_resistance(code, 100, 60000, 0x8C));
    }
}
