//! Blending of per-gas AQI values
//!
//! The NO2 and O3 AQI values are combined with a smoothed probability that
//! the air is NO2-dominant:
//!
//! ```text
//! target = 0                 ForceO3, or NO2 >= 10000 ppb (saturated)
//!        = 1                 ForceNo2
//!        = classifier        Auto (1 if NO2-dominant, else 0)
//!
//! p     += 0.0247 * (target - p)
//! aqi    = (aqi_no2 - aqi_o3) * p + aqi_o3
//! ```
//!
//! The smoothing factor is small, so the blend changes over tens of cycles
//! and a single misclassified cycle barely moves the output.
//!
//! [`Blender::blend`] mutates the stored probability on every call. It is
//! not a pure function.

use crate::classifier::GasClass;
use crate::constants::algorithm::{
    INITIAL_NO2_PROBABILITY, NO2_SATURATION_PPB, PROBABILITY_SMOOTHING,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the dominant gas is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GasDetection {
    /// Follow the classifier
    #[default]
    Auto,
    /// Always report O3
    ForceO3,
    /// Always report NO2
    ForceNo2,
}

/// Target NO2 probability for one cycle
pub fn target_probability(strategy: GasDetection, class: GasClass, conc_no2: f32) -> f32 {
    if strategy == GasDetection::ForceO3 || conc_no2 >= NO2_SATURATION_PPB {
        return 0.0;
    }
    match (strategy, class) {
        (GasDetection::ForceNo2, _) => 1.0,
        (_, GasClass::No2Dominant) => 1.0,
        (_, GasClass::O3Dominant) => 0.0,
    }
}

/// Exponentially smoothed gas blender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blender {
    probability: f32,
}

impl Default for Blender {
    fn default() -> Self {
        Self::new(INITIAL_NO2_PROBABILITY)
    }
}

impl Blender {
    /// Blender starting at `probability`, clamped to `[0, 1]`
    pub fn new(probability: f32) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// Current NO2 probability
    pub fn probability(&self) -> f32 {
        self.probability
    }

    /// Update the probability and return the blended AQI
    pub fn blend(
        &mut self,
        aqi_no2: f32,
        aqi_o3: f32,
        class: GasClass,
        strategy: GasDetection,
        conc_no2: f32,
    ) -> f32 {
        if conc_no2 >= NO2_SATURATION_PPB {
            log_warn!("NO2 concentration {} ppb saturated, blending towards O3", conc_no2);
        }

        let target = target_probability(strategy, class, conc_no2);
        self.probability += PROBABILITY_SMOOTHING * (target - self.probability);

        (aqi_no2 - aqi_o3) * self.probability + aqi_o3
    }
}
