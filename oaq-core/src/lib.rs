//! Outdoor air quality inference for MOx gas sensors
//!
//! Turns the raw ADC sequence of a ZMOD4510-class sensor into an EPA Air
//! Quality Index, once per measurement cycle.
//!
//! Key constraints:
//! - `no_std`, no heap allocation
//! - Never fails at runtime: out-of-range readings saturate instead
//! - All cross-cycle state is owned by one [`OaqAlgorithm`] per sensor
//!
//! ```no_run
//! use oaq_core::{OaqAlgorithm, OaqConfig, MoxBounds, SensorConfig, TrimData};
//!
//! // Blocks read from the device at bring-up
//! let config = SensorConfig::parse(&[0x8C, 0x00, 0x02, 0x00, 0x00, 0x00]);
//! let trim = TrimData::parse(&[0; 9])?;
//! let bounds = MoxBounds::parse(&[0x00, 0x64, 0xEA, 0x60]);
//!
//! let mut algo = OaqAlgorithm::new(OaqConfig::default(), config, trim, bounds);
//!
//! // Every cycle
//! # let adc = [0u8; 30];
//! let results = algo.calculate(&adc);
//! println!("AQI {:.0} ({:?})", results.aqi, results.category());
//! # Ok::<(), oaq_core::OaqError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod algorithm;
pub mod blend;
pub mod classifier;
pub mod concentration;
pub mod constants;
pub mod errors;
pub mod heater;
pub mod lookup;
pub mod resistance;
pub mod trim;

// Public API
pub use algorithm::{OaqAlgorithm, OaqConfig, OaqResults, OaqStatus};
pub use blend::{Blender, GasDetection};
pub use classifier::{Classification, ClassifierModel, GasClass, GasClassifier};
pub use concentration::{ConcentrationEstimator, Gas, RcdaStrategy};
pub use errors::{OaqError, OaqResult};
pub use lookup::{interpolate_aqi, AqiCategory, AqiTable};
pub use resistance::{estimate_resistance, MoxBounds};
pub use trim::{SensorConfig, TrimData};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
