//! Algorithm Parameters
//!
//! Smoothing factors and scales used by the concentration estimators and
//! the blender. All smoothing is first-order exponential with the factor
//! applied once per measurement cycle.

// ===== BASELINE (RCDA) TRACKING =====

/// Drift exponent used when the sample is above the baseline.
///
/// Gas exposure raises the resistance, so the baseline follows upward
/// movement slowly (tau = 1800 cycles).
pub const RCDA_RISING_EXPONENT: f32 = 0.000_555_401_26;

/// Drift exponent used when the sample is at or below the baseline.
///
/// Cleaner air pulls the reference down quickly (tau = 60 cycles).
pub const RCDA_FALLING_EXPONENT: f32 = 0.016_528_546;

// ===== CONCENTRATION =====

/// Smoothing factor of the concentration output (1 - e^-0.2).
pub const CONCENTRATION_SMOOTHING: f32 = 0.181_269_24;

/// NO2 scale in ppb per unit of normalised resistance change.
pub const NO2_SCALE_PPB: f32 = 100.0;

/// O3 scale in ppb per unit of normalised resistance change.
pub const O3_SCALE_PPB: f32 = 50.0;

/// Upper limit of a single-cycle concentration (ppb).
///
/// Steep trim exponents can push a railed step past `f32::MAX`; clamping
/// keeps the smoothed output finite and above [`NO2_SATURATION_PPB`].
pub const CONCENTRATION_CEILING_PPB: f32 = 1.0e6;

/// Nominal sensitivity used by parts without programmed trim.
pub const NOMINAL_BETA: f32 = 1.0;

/// Trim fields are stored in milli-units.
pub const TRIM_FIELD_SCALE: f32 = 1000.0;

// ===== BLENDING =====

/// Smoothing factor of the NO2 probability (1 - e^-0.025).
pub const PROBABILITY_SMOOTHING: f32 = 0.024_690_088;

/// Initial NO2 probability before any classification has been seen.
pub const INITIAL_NO2_PROBABILITY: f32 = 0.5;

/// NO2 concentration at which the sensor is considered saturated (ppb).
pub const NO2_SATURATION_PPB: f32 = 10_000.0;

/// Classifier scores below this value are NO2-dominant.
pub const CLASSIFIER_THRESHOLD: f32 = 0.0;

// ===== STARTUP =====

/// Cycles reported as stabilising after construction.
pub const DEFAULT_STABILIZATION_SAMPLES: u32 = 60;
