//! Constants for the OAQ pipeline
//!
//! All numeric values used by the pipeline live here, grouped by concern:
//! - **Sensor**: sequencer geometry and resistance limits of the MOx element
//! - **Algorithm**: smoothing factors, drift exponents and concentration scales
//!
//! Time constants are expressed as per-cycle smoothing factors
//! `alpha = 1 - exp(-1 / tau)` where `tau` is measured in measurement cycles.

/// Sequencer geometry and MOx resistance limits.
pub mod sensor;

/// Smoothing, drift tracking and concentration scaling parameters.
pub mod algorithm;

pub use sensor::{
    SEQUENCER_STEPS, ADC_RESULT_LEN,
    RMOX_FLOOR_OHM, RMOX_CEILING_OHM,
    RMOX_CLASSIFIER_MIN_OHM, RMOX_CLASSIFIER_MAX_OHM,
};

pub use algorithm::{
    CONCENTRATION_SMOOTHING, PROBABILITY_SMOOTHING,
    NO2_SATURATION_PPB, DEFAULT_STABILIZATION_SAMPLES,
};
