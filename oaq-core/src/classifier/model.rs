//! Classifier model tables
//!
//! Three read-only tables define the NO2/O3 discrimination model:
//!
//! - `offsets`: 8 values added to each projected component
//! - `rotation`: 8 x 11 projection matrix, row-major by component, so the
//!   weight of feature `j` in component `i` is `rotation[j + 11 * i]`
//! - `coefficients`: cubic polynomial weights in enumeration order
//!
//! ## Coefficient Enumeration
//!
//! The polynomial runs over `x = [1.0, p0, .., p7]`. Coefficients are
//! consumed one per monomial in this exact nested order:
//!
//! ```text
//! for i in 0..9 {
//!     for j in 0..=i {
//!         for k in 0..=j {
//!             score += coefficients[n] * x[i] * x[j] * x[k];
//!             n += 1;
//!         }
//!     }
//! }
//! ```
//!
//! That is 165 monomials. The table holds 168 slots; the last three are
//! reserved and never read. Reordering the loops changes the meaning of
//! every stored coefficient, so this order is part of the table format.
//!
//! ## Bundled tables
//!
//! The tables behind [`ClassifierModel::default`] are placeholders: values
//! of the right shape from a fixed-seed generator, not the vendor model.
//! They keep the pipeline deterministic for tests and benchmarks but carry
//! no NO2/O3 discrimination. Production code must load the vendor tables
//! with [`ClassifierModel::new`] and pass them to
//! [`OaqAlgorithm::with_model`](crate::OaqAlgorithm::with_model).

use crate::constants::sensor::FEATURE_COUNT;

/// Number of projected components
pub const COMPONENT_COUNT: usize = 8;

/// Number of polynomial variables (constant plus components)
pub const POLY_VARIABLES: usize = COMPONENT_COUNT + 1;

/// Monomials consumed by the enumeration: C(9 + 2, 3)
pub const POLY_TERMS: usize = POLY_VARIABLES * (POLY_VARIABLES + 1) * (POLY_VARIABLES + 2) / 6;

/// Slots in the stored coefficient table
pub const POLY_TABLE_LEN: usize = 168;

/// Entries in the projection matrix
pub const ROTATION_LEN: usize = COMPONENT_COUNT * FEATURE_COUNT;

/// Fixed inference tables for the gas classifier
///
/// The [`Default`] tables are placeholders; see [`ClassifierModel::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierModel {
    /// Per-component offsets
    pub offsets: [f32; COMPONENT_COUNT],
    /// Projection matrix, `rotation[j + 11 * i]`
    pub rotation: [f32; ROTATION_LEN],
    /// Polynomial weights in enumeration order
    pub coefficients: [f32; POLY_TABLE_LEN],
}

impl Default for ClassifierModel {
    /// Placeholder tables from a fixed-seed generator, not the vendor model
    ///
    /// Deterministic but without NO2/O3 discrimination. Load the vendor
    /// tables with [`ClassifierModel::new`] for real measurements.
    fn default() -> Self {
        Self::new(OFFSETS, ROTATION, COEFFICIENTS)
    }
}

impl ClassifierModel {
    /// Build a model from externally supplied tables
    pub const fn new(
        offsets: [f32; COMPONENT_COUNT],
        rotation: [f32; ROTATION_LEN],
        coefficients: [f32; POLY_TABLE_LEN],
    ) -> Self {
        Self {
            offsets,
            rotation,
            coefficients,
        }
    }

    /// Projection weights of one component, `None` past the last one
    pub fn component_weights(&self, component: usize) -> Option<&[f32]> {
        let start = component.checked_mul(FEATURE_COUNT)?;
        self.rotation.get(start..start.checked_add(FEATURE_COUNT)?)
    }
}

const OFFSETS: [f32; COMPONENT_COUNT] = [
    -1.146208, 0.734334, -0.799345, 0.448552,
    -1.387569, -0.272767, -0.985678, -0.279370,
];

const ROTATION: [f32; ROTATION_LEN] = [
    // component 0
    -0.165066, 0.338136, -0.015030, -0.444676, 0.359300, 0.427283,
    0.204417, 0.439397, 0.143343, 0.187569, -0.356717,
    // component 1
    0.425729, -0.064084, -0.199741, -0.407477, -0.211359, -0.399121,
    -0.034748, -0.397999, 0.414504, 0.016978, 0.130832,
    // component 2
    -0.022197, -0.439756, 0.182057, -0.275774, 0.285497, -0.167654,
    0.426575, 0.433886, 0.157070, 0.013415, 0.215672,
    // component 3
    0.367883, 0.440364, -0.194579, -0.349588, -0.149206, 0.183555,
    0.068109, -0.353994, -0.088836, -0.343226, -0.015986,
    // component 4
    0.248408, 0.357681, 0.379030, 0.444042, -0.009158, 0.293920,
    0.107216, -0.119558, -0.377963, -0.192493, 0.230920,
    // component 5
    -0.017308, 0.394336, -0.074210, -0.376951, 0.082379, -0.075865,
    0.109843, 0.068013, 0.205658, -0.256386, 0.203513,
    // component 6
    0.033409, 0.177611, -0.177081, 0.197236, 0.182462, 0.394128,
    0.019780, -0.084058, 0.390540, -0.302902, 0.149985,
    // component 7
    0.150288, -0.005702, 0.180733, 0.029290, -0.181110, -0.045575,
    -0.116171, 0.178656, 0.405858, -0.227011, -0.136722,
];

const COEFFICIENTS: [f32; POLY_TABLE_LEN] = [
    // constant
    -0.012500,
    // x1 block
    -0.788737, 0.154070, 0.011713,
    // x2 block
    -0.204961, -0.212288, -0.015738, -0.171067, 0.027521, -0.042565,
    // x3 block
    0.514948, -0.190246, 0.059758, 0.140486, -0.000271, 0.036079,
    -0.001230, -0.047137, -0.042130, 0.019755,
    // x4 block
    -0.246277, 0.097393, -0.051942, 0.205064, 0.011490, 0.009773,
    -0.220937, 0.032728, 0.015204, 0.048956, -0.226284, 0.040185,
    0.029445, -0.031803, 0.024517,
    // x5 block
    0.748857, 0.005479, -0.002135, 0.084354, -0.019124, -0.037232,
    -0.154917, -0.015430, 0.048796, -0.052234, 0.231224, 0.009268,
    -0.028901, 0.017428, 0.003320, -0.226895, -0.043203, -0.002416,
    0.021617, -0.001238, 0.034565,
    // x6 block
    -0.463614, -0.092370, 0.011564, 0.013210, 0.043872, 0.024572,
    -0.017017, 0.005213, 0.007036, -0.021137, -0.224524, -0.053029,
    -0.001806, -0.052247, 0.014794, -0.027960, 0.026035, 0.002636,
    0.022470, 0.033482, -0.030516, 0.185560, -0.046663, 0.026569,
    -0.025769, -0.043635, 0.049446, 0.031927,
    // x7 block
    0.158990, -0.065010, -0.009241, -0.199923, 0.053747, 0.002612,
    0.080478, 0.006685, 0.026564, 0.057654, -0.052690, -0.037235,
    0.056955, 0.058094, -0.014907, -0.127506, -0.001030, -0.031350,
    0.011219, -0.031082, -0.046737, -0.126211, 0.035764, 0.029099,
    -0.058418, -0.004472, 0.023700, 0.019885, -0.216912, 0.038832,
    -0.028237, 0.009491, -0.044844, 0.024232, 0.033933, 0.045949,
    // x8 block
    0.787716, -0.122666, 0.014506, 0.012613, -0.032151, -0.003783,
    0.218543, 0.045323, 0.044590, -0.031435, -0.160218, 0.039407,
    -0.034276, 0.006682, 0.048989, 0.117592, -0.028471, -0.006961,
    -0.036505, -0.052670, -0.007145, -0.081534, 0.033220, -0.021075,
    0.050285, -0.033533, 0.045193, -0.022405, 0.172353, -0.009319,
    -0.048310, -0.021061, -0.050768, 0.021978, -0.047191, 0.010923,
    0.105015, 0.008708, -0.005705, -0.056956, 0.052193, -0.049641,
    -0.046020, 0.045750, -0.003604,
    // reserved
    0.000000, 0.000000, 0.000000,
];
