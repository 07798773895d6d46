//! Outdoor Air Quality Pipeline
//!
//! ## Overview
//!
//! One call runs the five stages once, top to bottom, for one measurement
//! cycle:
//!
//! ```text
//! ADC block (30 B)
//!   -> resistance   15 x Rmox                    (resistance.rs)
//!   -> classifier   NO2- or O3-dominant          (classifier/)
//!   -> estimators   NO2 ppb, O3 ppb              (concentration.rs)
//!   -> lookup       AQI(NO2), AQI(O3)            (lookup.rs)
//!   -> blender      single AQI                   (blend.rs)
//! ```
//!
//! ## State
//!
//! All state that survives between cycles lives in [`OaqAlgorithm`]:
//! the two baselines, the two smoothed concentrations, the NO2 probability
//! and a cycle counter. Construct one instance per physical sensor and keep
//! it for the life of that sensor.
//!
//! ## Concurrency
//!
//! The pipeline never blocks and takes `&mut self`. It is `Send`, but there
//! is no internal locking: a caller sharing one instance between threads
//! must serialise access itself.
//!
//! ## Example
//!
//! ```rust
//! use oaq_core::{OaqAlgorithm, OaqConfig, MoxBounds, SensorConfig, TrimData};
//!
//! let sensor = SensorConfig::parse(&[0x8C, 0x00, 0x02, 0x00, 0x00, 0x00]);
//! let mut algo = OaqAlgorithm::new(
//!     OaqConfig::default(),
//!     sensor,
//!     TrimData::nominal(),
//!     MoxBounds::new(100, 60000),
//! );
//!
//! let adc = [0x40; 30];
//! let results = algo.calculate(&adc);
//! assert!(results.aqi >= 0.0);
//! ```

use crate::blend::{Blender, GasDetection};
use crate::classifier::{Classification, ClassifierModel, GasClassifier};
use crate::concentration::{ConcentrationEstimator, Gas, RcdaStrategy};
use crate::constants::algorithm::DEFAULT_STABILIZATION_SAMPLES;
use crate::constants::sensor::{ADC_RESULT_LEN, NO2_SENSING_STEP, O3_SENSING_STEP, SEQUENCER_STEPS};
use crate::lookup::{AqiCategory, AqiTable};
use crate::resistance::{clamp_rmox, rmox_from_adc, MoxBounds};
use crate::trim::{SensorConfig, TrimData};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OaqConfig {
    /// Baseline update policy
    pub rcda_strategy: RcdaStrategy,
    /// Dominant gas selection
    pub gas_detection: GasDetection,
    /// Cycles reported as [`OaqStatus::Stabilizing`] after start
    pub stabilization_samples: u32,
}

impl Default for OaqConfig {
    fn default() -> Self {
        Self {
            rcda_strategy: RcdaStrategy::Adj,
            gas_detection: GasDetection::Auto,
            stabilization_samples: DEFAULT_STABILIZATION_SAMPLES,
        }
    }
}

impl OaqConfig {
    /// Set the baseline policy
    pub fn with_rcda_strategy(mut self, strategy: RcdaStrategy) -> Self {
        self.rcda_strategy = strategy;
        self
    }

    /// Set the gas detection policy
    pub fn with_gas_detection(mut self, detection: GasDetection) -> Self {
        self.gas_detection = detection;
        self
    }

    /// Set the warm-up length in cycles
    pub fn with_stabilization_samples(mut self, samples: u32) -> Self {
        self.stabilization_samples = samples;
        self
    }
}

/// Readiness of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OaqStatus {
    /// Baselines are still settling; values are indicative only
    Stabilizing,
    /// Warm-up finished
    Ready,
}

/// Output of one pipeline cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OaqResults {
    /// Per-step resistance, unclamped, in ohms
    pub rmox: [f32; SEQUENCER_STEPS],
    /// Classifier output
    pub classification: Classification,
    /// Smoothed NO2 concentration in ppb
    pub no2_ppb: f32,
    /// Smoothed O3 concentration in ppb
    pub o3_ppb: f32,
    /// AQI of the NO2 concentration
    pub aqi_no2: f32,
    /// AQI of the O3 concentration
    pub aqi_o3: f32,
    /// Smoothed probability that the air is NO2-dominant
    pub no2_probability: f32,
    /// Blended AQI
    pub aqi: f32,
    /// Warm-up state
    pub status: OaqStatus,
}

impl OaqResults {
    /// EPA band of the blended AQI
    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }
}

/// Per-sensor air quality pipeline
#[derive(Debug, Clone)]
pub struct OaqAlgorithm {
    config: OaqConfig,
    gain: u8,
    bounds: MoxBounds,
    classifier: GasClassifier,
    no2: ConcentrationEstimator,
    o3: ConcentrationEstimator,
    blender: Blender,
    samples: u32,
}

impl OaqAlgorithm {
    /// Pipeline for one sensor using the bundled classifier model
    ///
    /// The bundled tables are placeholders and do not separate NO2 from O3
    /// (see [`ClassifierModel::default`]). Use [`Self::with_model`] with
    /// the vendor tables in production.
    pub fn new(config: OaqConfig, sensor: SensorConfig, trim: TrimData, bounds: MoxBounds) -> Self {
        Self::with_model(config, sensor, trim, bounds, ClassifierModel::default())
    }

    /// Pipeline for one sensor with explicit classifier tables
    pub fn with_model(
        config: OaqConfig,
        sensor: SensorConfig,
        trim: TrimData,
        bounds: MoxBounds,
        model: ClassifierModel,
    ) -> Self {
        Self {
            config,
            gain: sensor.gain(),
            bounds,
            classifier: GasClassifier::new(model),
            no2: ConcentrationEstimator::new(Gas::No2, &trim),
            o3: ConcentrationEstimator::new(Gas::O3, &trim),
            blender: Blender::default(),
            samples: 0,
        }
    }

    /// Classifier tables in use
    pub fn model(&self) -> &ClassifierModel {
        self.classifier.model()
    }

    /// Active configuration
    pub fn config(&self) -> &OaqConfig {
        &self.config
    }

    /// Change the baseline policy between cycles
    pub fn set_rcda_strategy(&mut self, strategy: RcdaStrategy) {
        self.config.rcda_strategy = strategy;
    }

    /// Change the gas detection policy between cycles
    pub fn set_gas_detection(&mut self, detection: GasDetection) {
        self.config.gas_detection = detection;
    }

    /// Current `(NO2, O3)` baselines in ohms
    pub fn baselines(&self) -> (Option<f32>, Option<f32>) {
        (self.no2.baseline(), self.o3.baseline())
    }

    /// Restore baselines saved from an earlier run
    pub fn seed_baselines(&mut self, no2: f32, o3: f32) {
        self.no2.seed_baseline(no2);
        self.o3.seed_baseline(o3);
    }

    /// Cycles processed so far
    pub fn sample_count(&self) -> u32 {
        self.samples
    }

    /// Run one cycle on the raw ADC result block
    pub fn calculate(&mut self, adc: &[u8; ADC_RESULT_LEN]) -> OaqResults {
        let rmox = rmox_from_adc(adc, self.bounds, self.gain);
        self.calculate_rmox(&rmox)
    }

    /// Run one cycle on already decoded resistances
    pub fn calculate_rmox(&mut self, rmox: &[f32; SEQUENCER_STEPS]) -> OaqResults {
        let clamped = clamp_rmox(rmox);
        let classification = self.classifier.classify_clamped(&clamped);

        let strategy = self.config.rcda_strategy;
        let no2_ppb = self.no2.estimate(clamped[NO2_SENSING_STEP], strategy);
        let o3_ppb = self.o3.estimate(clamped[O3_SENSING_STEP], strategy);

        let aqi_no2 = AqiTable::NO2.aqi(no2_ppb);
        let aqi_o3 = AqiTable::O3.aqi(o3_ppb);

        let aqi = self.blender.blend(
            aqi_no2,
            aqi_o3,
            classification.class,
            self.config.gas_detection,
            no2_ppb,
        );

        self.samples = self.samples.saturating_add(1);
        let status = if self.samples > self.config.stabilization_samples {
            OaqStatus::Ready
        } else {
            OaqStatus::Stabilizing
        };

        OaqResults {
            rmox: *rmox,
            classification,
            no2_ppb,
            o3_ppb,
            aqi_no2,
            aqi_o3,
            no2_probability: self.blender.probability(),
            aqi,
            status,
        }
    }
}
