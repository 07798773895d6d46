//! Heater setpoint calculation
//!
//! Converts target hotplate temperatures into the register values of the
//! heater sequencer, using the coefficients of the configuration block:
//!
//! ```text
//! hspf = -(cfg[2] * 256 + cfg[3]) * ((cfg[4] + 640) * (cfg[5] + T) - 512000) / 12288000
//! ```
//!
//! A setpoint outside `[0, 1024]` means the configuration block does not
//! fit the requested temperature. Bring-up stops with
//! [`OaqError::InitOutOfRange`] before any measurement is started.

use heapless::Vec;

use crate::constants::sensor::{HEATER_SETPOINT_MAX, HEATER_SETPOINT_MIN, MAX_HEATER_STEPS};
use crate::errors::{OaqError, OaqResult};
use crate::trim::SensorConfig;

/// Encoded heater block, two bytes per step
pub type HeaterBlock = Vec<u8, { MAX_HEATER_STEPS * 2 }>;

/// Setpoint register value for one target temperature
pub fn heater_setpoint(config: &SensorConfig, temperature_c: f32) -> OaqResult<u16> {
    let scale = config.heater_scale() as f32;
    let (offset_a, offset_b) = config.heater_offsets();

    let hspf = -scale
        * ((offset_a as f32 + 640.0) * (offset_b as f32 + temperature_c) - 512_000.0)
        / 12_288_000.0;

    if !(HEATER_SETPOINT_MIN..=HEATER_SETPOINT_MAX).contains(&hspf) {
        log_warn!("heater setpoint {} for {} C out of range", hspf, temperature_c);
        return Err(OaqError::InitOutOfRange { value: hspf });
    }

    Ok(hspf as u16)
}

/// Encode the setpoints of a whole heater profile, big-endian
///
/// Profiles longer than the sequencer holds have no valid configuration and
/// are rejected as [`OaqError::MissingConfiguration`].
pub fn heater_block(config: &SensorConfig, temperatures_c: &[f32]) -> OaqResult<HeaterBlock> {
    let mut block = HeaterBlock::new();
    for &temperature in temperatures_c {
        let setpoint = heater_setpoint(config, temperature)?;
        block
            .extend_from_slice(&setpoint.to_be_bytes())
            .map_err(|_| OaqError::MissingConfiguration)?;
    }
    Ok(block)
}
