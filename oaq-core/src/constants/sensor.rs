//! Sequencer Geometry and Resistance Limits
//!
//! The ZMOD4510 runs a fixed 15-step heater sequence per measurement cycle.
//! Each step produces one 16-bit ADC code. Step order is defined by the
//! hardware sequencer and specific indices carry specific meaning for the
//! classifier and the concentration estimators.

// ===== SEQUENCER =====

/// Number of sequencer steps per measurement cycle.
pub const SEQUENCER_STEPS: usize = 15;

/// Size of the ADC result block in bytes (two bytes per step, big-endian).
pub const ADC_RESULT_LEN: usize = SEQUENCER_STEPS * 2;

/// Step whose resistance tracks NO2.
pub const NO2_SENSING_STEP: usize = 13;

/// Step whose resistance tracks O3.
pub const O3_SENSING_STEP: usize = 14;

/// First step used as a classifier feature (inclusive).
pub const FEATURE_FIRST_STEP: usize = 1;

/// Number of classifier features (steps 1..=11).
pub const FEATURE_COUNT: usize = 11;

/// First step averaged into the feature normaliser (inclusive).
pub const NORMALIZER_FIRST_STEP: usize = 3;

/// Number of steps averaged into the feature normaliser (steps 3..=14).
pub const NORMALIZER_COUNT: usize = 12;

// ===== RESISTANCE =====

/// Resistance reported when the ADC code is below the lower calibration bound.
pub const RMOX_FLOOR_OHM: f32 = 1e-3;

/// Resistance reported when the ADC code reaches the upper calibration bound.
pub const RMOX_CEILING_OHM: f32 = 1e12;

/// Resistance gain unit: the gain byte is expressed in kOhm.
pub const RMOX_GAIN_UNIT_OHM: f32 = 1e3;

/// Lower clamp applied before classification and concentration estimation.
pub const RMOX_CLASSIFIER_MIN_OHM: f32 = 100.0;

/// Upper clamp applied before classification and concentration estimation.
pub const RMOX_CLASSIFIER_MAX_OHM: f32 = 1e12;

// ===== DEVICE =====

/// Product id of the ZMOD4510.
pub const ZMOD4510_PRODUCT_ID: u16 = 0x6320;

/// Size of the configuration block.
pub const CONFIG_LEN: usize = 6;

/// Size of the factory trim block.
pub const TRIM_LEN: usize = 9;

/// Size of the init result block holding `mox_lr` and `mox_er`.
pub const MOX_BOUNDS_LEN: usize = 4;

/// Maximum heater steps a sequence can program.
pub const MAX_HEATER_STEPS: usize = 16;

/// Lowest valid heater setpoint.
pub const HEATER_SETPOINT_MIN: f32 = 0.0;

/// Highest valid heater setpoint.
pub const HEATER_SETPOINT_MAX: f32 = 1024.0;
