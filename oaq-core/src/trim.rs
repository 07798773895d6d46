//! Factory calibration blocks
//!
//! Two blocks are read from the device once at bring-up:
//! - the 6-byte configuration block (resistance gain and heater coefficients)
//! - the 9-byte trim block (gas sensitivities)
//!
//! Both are treated as opaque numbers here. The driver layer owns the
//! register addresses.

use crate::constants::algorithm::{NOMINAL_BETA, TRIM_FIELD_SCALE};
use crate::constants::sensor::{CONFIG_LEN, TRIM_LEN};
use crate::errors::{OaqError, OaqResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Device configuration block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    raw: [u8; CONFIG_LEN],
}

impl SensorConfig {
    /// Wrap the configuration block as read from the device
    pub fn parse(raw: &[u8; CONFIG_LEN]) -> Self {
        Self { raw: *raw }
    }

    /// Resistance gain in kOhm
    pub fn gain(&self) -> u8 {
        self.raw[0]
    }

    /// Heater scale coefficient (bytes 2..4, big-endian)
    pub fn heater_scale(&self) -> u16 {
        u16::from_be_bytes([self.raw[2], self.raw[3]])
    }

    /// Heater offset coefficients (bytes 4 and 5)
    pub fn heater_offsets(&self) -> (u8, u8) {
        (self.raw[4], self.raw[5])
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; CONFIG_LEN] {
        &self.raw
    }
}

/// Factory gas sensitivity trim
///
/// Layout of the 9-byte block:
/// ```text
/// [0..2]  beta1, big-endian, milli-units (O3 sensitivity)
/// [2..4]  beta2, big-endian, milli-units (NO2 response exponent)
/// [4]     calibration flag (nonzero = programmed)
/// [5..9]  reserved
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrimData {
    /// O3 sensitivity
    pub beta1: f32,
    /// NO2 response exponent denominator
    pub beta2: f32,
    /// Whether the part carries factory trim
    pub calibrated: bool,
}

impl Default for TrimData {
    fn default() -> Self {
        Self::nominal()
    }
}

impl TrimData {
    /// Nominal sensitivities for parts without programmed trim
    pub const fn nominal() -> Self {
        Self {
            beta1: NOMINAL_BETA,
            beta2: NOMINAL_BETA,
            calibrated: false,
        }
    }

    /// Decode the trim block
    ///
    /// A part that claims to be calibrated but carries a zero sensitivity
    /// field is reported as [`OaqError::MissingConfiguration`]; the exponent
    /// `1 / beta2` would otherwise be undefined.
    pub fn parse(raw: &[u8; TRIM_LEN]) -> OaqResult<Self> {
        let calibrated = raw[4] != 0;
        if !calibrated {
            return Ok(Self::nominal());
        }

        let beta1 = u16::from_be_bytes([raw[0], raw[1]]);
        let beta2 = u16::from_be_bytes([raw[2], raw[3]]);
        if beta1 == 0 || beta2 == 0 {
            return Err(OaqError::MissingConfiguration);
        }

        Ok(Self {
            beta1: beta1 as f32 / TRIM_FIELD_SCALE,
            beta2: beta2 as f32 / TRIM_FIELD_SCALE,
            calibrated,
        })
    }
}
