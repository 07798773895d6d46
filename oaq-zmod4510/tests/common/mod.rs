//! Common fixtures for driver tests
//!
//! Provides a [`MockBus`] preloaded with the register contents of a healthy
//! ZMOD4510 and helpers to place result blocks on it.

#![allow(dead_code)]

use oaq_core::constants::sensor::{ADC_RESULT_LEN, SEQUENCER_STEPS};
use oaq_zmod4510::registers::{ADDR_CONF, ADDR_DEV_ERR, ADDR_PID, ADDR_PROD_DATA, ADDR_RESULT};
use oaq_zmod4510::MockBus;

/// Configuration block with a 140 kOhm gain and heater scale 0x0200
pub const CONFIG_BLOCK: [u8; 6] = [0x8C, 0x00, 0x02, 0x00, 0x00, 0x00];

/// Uncalibrated trim block
pub const BLANK_TRIM: [u8; 9] = [0; 9];

/// mox_lr = 100, mox_er = 60000
pub const BOUNDS_BLOCK: [u8; 4] = [0x00, 0x64, 0xEA, 0x60];

/// Bus that looks like a freshly powered ZMOD4510
pub fn healthy_bus() -> MockBus {
    let mut bus = MockBus::new();
    bus.preload(ADDR_PID, &[0x63, 0x20]);
    bus.preload(ADDR_CONF, &CONFIG_BLOCK);
    bus.preload(ADDR_PROD_DATA, &BLANK_TRIM);
    bus.preload(ADDR_RESULT, &BOUNDS_BLOCK);
    bus.preload(ADDR_DEV_ERR, &[0x00]);
    bus.busy_polls = 3;
    bus
}

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
