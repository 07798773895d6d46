//! Common test utilities for integration tests
//!
//! This module provides:
//! - ADC block builders for synthetic sequencer profiles
//! - A deterministic random number generator
//! - Tolerance assertions for floating point results

#![allow(dead_code)]

use oaq_core::constants::sensor::{ADC_RESULT_LEN, SEQUENCER_STEPS};
use oaq_core::{MoxBounds, OaqAlgorithm, OaqConfig, SensorConfig, TrimData};

/// Calibration bounds used by every fixture
pub const BOUNDS: MoxBounds = MoxBounds::new(100, 60000);

/// Configuration block with a 140 kOhm gain
pub const CONFIG_BLOCK: [u8; 6] = [0x8C, 0x00, 0x02, 0x00, 0x00, 0x00];

/// Encode 15 ADC codes as a big-endian result block
pub fn adc_block(codes: &[u16; SEQUENCER_STEPS]) -> [u8; ADC_RESULT_LEN] {
    let mut block = [0u8; ADC_RESULT_LEN];
    for (step, code) in codes.iter().enumerate() {
        block[2 * step..2 * step + 2].copy_from_slice(&code.to_be_bytes());
    }
    block
}

/// Monotonic clean-air profile: 20000, 21500, ..., 41000
pub fn clean_air_codes() -> [u16; SEQUENCER_STEPS] {
    let mut codes = [0u16; SEQUENCER_STEPS];
    for (i, code) in codes.iter_mut().enumerate() {
        *code = 20_000 + 1_500 * i as u16;
    }
    codes
}

/// Clean-air profile with an oxidising gas on the sensing steps
pub fn exposure_codes() -> [u16; SEQUENCER_STEPS] {
    let mut codes = clean_air_codes();
    for (i, code) in codes.iter_mut().enumerate() {
        *code += if i >= 13 { 4_000 } else { 1_200 };
    }
    codes
}

/// Pipeline built from the standard fixtures
pub fn algorithm(config: OaqConfig) -> OaqAlgorithm {
    OaqAlgorithm::new(
        config,
        SensorConfig::parse(&CONFIG_BLOCK),
        TrimData::nominal(),
        BOUNDS,
    )
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16777216.0
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_relative {
    ($actual:expr, $expected:expr, $relative:expr) => {
        let expected: f32 = $expected;
        $crate::assert_within_tolerance!($actual, expected, expected.abs() * $relative);
    };
}
