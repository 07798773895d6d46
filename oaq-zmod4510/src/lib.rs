//! ZMOD4510 driver for the `oaq-core` pipeline
//!
//! Handles the register side of the sensor: identification, calibration
//! readout, heater programming and result polling. Bus access goes through
//! the [`RegisterBus`] trait so the same code runs on a microcontroller and
//! against [`MockBus`] on the host.
//!
//! ```no_run
//! # #[cfg(feature = "std")]
//! # fn main() -> Result<(), oaq_core::OaqError> {
//! use oaq_core::OaqConfig;
//! use oaq_zmod4510::{MockBus, SequenceConfig, Zmod4510};
//!
//! let mut sensor = Zmod4510::new(MockBus::new());
//! let sequence = SequenceConfig::oaq();
//!
//! sensor.read_sensor_info()?;
//! sensor.init_sensor(&sequence)?;
//! sensor.init_measurement(&sequence)?;
//! let mut algo = sensor.algorithm(OaqConfig::default())?;
//!
//! loop {
//!     sensor.start_measurement()?;
//!     let adc = sensor.wait_for_results(2000)?;
//!     let results = algo.calculate(&adc);
//!     println!("AQI {:.0}", results.aqi);
//! }
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod bus;
pub mod device;
pub mod registers;
pub mod sequence;
pub mod status;

pub use bus::RegisterBus;
#[cfg(feature = "std")]
pub use bus::{MockBus, MockBusError};
pub use device::{SensorInfo, Zmod4510};
pub use sequence::SequenceConfig;
pub use status::Status;
