//! NO2 / O3 Gas Classifier
//!
//! ## Overview
//!
//! Oxidising gases raise the resistance of the MOx element on most heater
//! steps, so NO2 and O3 cannot be told apart from a single step. The shape
//! of the resistance profile across the sequence does differ, which is what
//! this classifier looks at:
//!
//! ```text
//! rmox[0..15]  --clamp-->  ratios[j] = rmox[1 + j] / mean(rmox[3..=14])
//!              --project-->  p[i] = offset[i] + sum_j ratios[j] * R[j + 11 i]
//!              --polynomial-->  score = sum c_n * x_i * x_j * x_k,  x = [1, p]
//! ```
//!
//! A negative score means NO2-dominant air, anything else O3-dominant.
//!
//! ## Properties
//!
//! - Pure function of the resistance sequence: no state, no allocation
//! - The model tables are fixed at construction (see [`ClassifierModel`])
//! - The projection writes into its own buffer; offsets are never mutated

mod model;

pub use model::{
    ClassifierModel, COMPONENT_COUNT, POLY_TABLE_LEN, POLY_TERMS, POLY_VARIABLES, ROTATION_LEN,
};

use crate::constants::algorithm::CLASSIFIER_THRESHOLD;
use crate::constants::sensor::{
    FEATURE_COUNT, FEATURE_FIRST_STEP, NORMALIZER_COUNT, NORMALIZER_FIRST_STEP, SEQUENCER_STEPS,
};
use crate::resistance::clamp_rmox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dominant oxidising gas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GasClass {
    /// NO2 drives the resistance change
    No2Dominant,
    /// O3 drives the resistance change
    O3Dominant,
}

impl GasClass {
    /// Decide the class from a raw polynomial score
    pub fn from_score(score: f32) -> Self {
        if score < CLASSIFIER_THRESHOLD {
            Self::No2Dominant
        } else {
            Self::O3Dominant
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Classification {
    /// Raw polynomial score
    pub score: f32,
    /// Decision derived from the score
    pub class: GasClass,
}

/// Mean of the normaliser window (steps 3..=14) of a clamped sequence
pub fn feature_mean(rmox: &[f32; SEQUENCER_STEPS]) -> f32 {
    let window = &rmox[NORMALIZER_FIRST_STEP..NORMALIZER_FIRST_STEP + NORMALIZER_COUNT];
    window.iter().sum::<f32>() / NORMALIZER_COUNT as f32
}

/// Polynomial gas classifier over a fixed model
#[derive(Debug, Clone, Default)]
pub struct GasClassifier {
    model: ClassifierModel,
}

impl GasClassifier {
    /// Classifier with the given model tables
    pub fn new(model: ClassifierModel) -> Self {
        Self { model }
    }

    /// Model in use
    pub fn model(&self) -> &ClassifierModel {
        &self.model
    }

    /// Classify a raw resistance sequence
    ///
    /// The sequence is clamped to the classifier range first, so saturated
    /// steps from the resistance stage are accepted as-is.
    pub fn classify(&self, rmox: &[f32; SEQUENCER_STEPS]) -> Classification {
        self.classify_clamped(&clamp_rmox(rmox))
    }

    /// Classify a sequence that is already inside the classifier range
    pub fn classify_clamped(&self, clamped: &[f32; SEQUENCER_STEPS]) -> Classification {
        let score = self.score(clamped, feature_mean(clamped));
        Classification {
            score,
            class: GasClass::from_score(score),
        }
    }

    /// Polynomial score of an already clamped sequence
    pub fn score(&self, rmox: &[f32; SEQUENCER_STEPS], mean: f32) -> f32 {
        let mut ratios = [0.0; FEATURE_COUNT];
        for (ratio, r) in ratios
            .iter_mut()
            .zip(&rmox[FEATURE_FIRST_STEP..FEATURE_FIRST_STEP + FEATURE_COUNT])
        {
            *ratio = r / mean;
        }

        let projected = self.project(&ratios);
        self.evaluate(&projected)
    }

    /// Project the normalised features onto the model components
    pub fn project(&self, ratios: &[f32; FEATURE_COUNT]) -> [f32; COMPONENT_COUNT] {
        let mut projected = [0.0; COMPONENT_COUNT];
        for (i, out) in projected.iter_mut().enumerate() {
            let mut acc = self.model.offsets[i];
            for (j, ratio) in ratios.iter().enumerate() {
                acc += ratio * self.model.rotation[j + FEATURE_COUNT * i];
            }
            *out = acc;
        }
        projected
    }

    /// Evaluate the cubic polynomial in enumeration order
    pub fn evaluate(&self, projected: &[f32; COMPONENT_COUNT]) -> f32 {
        let mut x = [1.0; POLY_VARIABLES];
        x[1..].copy_from_slice(projected);

        let mut score = 0.0;
        let mut n = 0;
        for i in 0..POLY_VARIABLES {
            for j in 0..=i {
                let xij = x[i] * x[j];
                for k in 0..=j {
                    score += self.model.coefficients[n] * xij * x[k];
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, POLY_TERMS);

        score
    }
}
