//! Gas concentration estimation with baseline drift tracking
//!
//! MOx resistance drifts over days, so concentrations are computed against a
//! reference resistance (the RCDA baseline) rather than an absolute
//! calibration. Each gas keeps its own baseline and its own smoothed output.
//!
//! ## Baseline strategies
//!
//! ```text
//! Fix   baseline unchanged
//! Set   baseline = sample                        (output ~0 right after)
//! Adj   baseline *= (sample / baseline)^m        m = rising or falling exponent
//! ```
//!
//! `Adj` is an exponential moving reference with asymmetric rates: it drops
//! quickly towards cleaner air and follows gas exposure only slowly.
//!
//! An estimator that has never seen a sample has no baseline. The first
//! sample seeds it, whatever strategy is selected.
//!
//! ## Concentration
//!
//! ```text
//! raw   = max(0, (sample - baseline) / divisor)
//! NO2   = 100 ppb * raw^(1 / beta2)              divisor = baseline
//! O3    =  50 ppb * raw                          divisor = baseline * beta1
//! conc  = min(conc, 1e6 ppb)
//! out  += 0.18126924 * (conc - out)
//! ```

use crate::constants::algorithm::{
    CONCENTRATION_CEILING_PPB, CONCENTRATION_SMOOTHING, NO2_SCALE_PPB, O3_SCALE_PPB, RCDA_FALLING_EXPONENT,
    RCDA_RISING_EXPONENT,
};
use crate::trim::TrimData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Oxidising gas tracked by an estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gas {
    /// Nitrogen dioxide
    No2,
    /// Ozone
    O3,
}

/// Baseline (RCDA) update policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RcdaStrategy {
    /// Keep the stored baseline
    Fix,
    /// Overwrite the baseline with the current sample
    Set,
    /// Track the sample with asymmetric exponential drift
    #[default]
    Adj,
}

/// Apply one baseline update step
///
/// Returns the new baseline. `None` is seeded from the sample.
pub fn update_baseline(baseline: Option<f32>, sample: f32, strategy: RcdaStrategy) -> f32 {
    let Some(current) = baseline else {
        return sample;
    };

    match strategy {
        RcdaStrategy::Fix => current,
        RcdaStrategy::Set => sample,
        RcdaStrategy::Adj => {
            let exponent = if sample > current {
                RCDA_RISING_EXPONENT
            } else {
                RCDA_FALLING_EXPONENT
            };
            current * libm::powf(sample / current, exponent)
        }
    }
}

/// Per-gas concentration estimator
///
/// Holds persistent state (baseline and smoothed output). One instance
/// belongs to exactly one sensor; it is not synchronised.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationEstimator {
    gas: Gas,
    divisor_scale: f32,
    exponent: f32,
    scale: f32,
    baseline: Option<f32>,
    smoothed: f32,
}

impl ConcentrationEstimator {
    /// Estimator for `gas` using the part's trim
    pub fn new(gas: Gas, trim: &TrimData) -> Self {
        let (divisor_scale, exponent, scale) = match gas {
            Gas::No2 => (1.0, 1.0 / trim.beta2, NO2_SCALE_PPB),
            Gas::O3 => (trim.beta1, 1.0, O3_SCALE_PPB),
        };

        Self {
            gas,
            divisor_scale,
            exponent,
            scale,
            baseline: None,
            smoothed: 0.0,
        }
    }

    /// Gas this estimator tracks
    pub fn gas(&self) -> Gas {
        self.gas
    }

    /// Current baseline, if seeded
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    /// Restore a baseline saved from an earlier run
    pub fn seed_baseline(&mut self, baseline: f32) {
        self.baseline = Some(baseline);
    }

    /// Smoothed concentration from the last call, in ppb
    pub fn smoothed(&self) -> f32 {
        self.smoothed
    }

    /// Unsmoothed concentration of `sample` against `baseline`, in ppb
    ///
    /// Saturates at [`CONCENTRATION_CEILING_PPB`], so an overflowing
    /// exponent never reaches the smoothed state.
    pub fn instantaneous(&self, sample: f32, baseline: f32) -> f32 {
        let raw = ((sample - baseline) / (baseline * self.divisor_scale)).max(0.0);
        let shaped = if self.exponent == 1.0 {
            raw
        } else {
            libm::powf(raw, self.exponent)
        };
        (shaped * self.scale).min(CONCENTRATION_CEILING_PPB)
    }

    /// Update the baseline with `sample` and return the smoothed concentration
    pub fn estimate(&mut self, sample: f32, strategy: RcdaStrategy) -> f32 {
        if self.baseline.is_none() {
            log_debug!("seeding {} baseline at {} ohm", self.gas_name(), sample);
        }
        let baseline = update_baseline(self.baseline, sample, strategy);
        self.baseline = Some(baseline);

        let concentration = self.instantaneous(sample, baseline);
        self.smoothed += CONCENTRATION_SMOOTHING * (concentration - self.smoothed);
        self.smoothed
    }

    fn gas_name(&self) -> &'static str {
        match self.gas {
            Gas::No2 => "NO2",
            Gas::O3 => "O3",
        }
    }
}
