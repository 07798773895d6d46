//! Error Types for Sensor Bring-Up and Register Access
//!
//! ## Design Philosophy
//!
//! The inference pipeline itself never fails. Out-of-range readings degrade
//! numerically instead: resistance saturates at `1e-3` / `1e12` ohms and
//! concentrations are clamped at zero. Errors only come from the steps around
//! the pipeline:
//!
//! 1. **Bring-up**: heater setpoints that fall outside the valid range abort
//!    initialisation before the pipeline is ever constructed.
//! 2. **Register access**: bus faults, sequencer timeouts and device status
//!    events are reported by the driver layer.
//!
//! Like the rest of the crate, errors are small `Copy` values with no heap
//! data, so they can be returned from hot paths and stored in queues.
//!
//! ## Error Categories
//!
//! ### Initialisation
//! - `InitOutOfRange`: heater setpoint outside `[0, 1024]`
//! - `UnsupportedFirmware`: product id does not match the ZMOD4510
//! - `MissingConfiguration`: configuration or trim not read / not programmed
//!
//! ### Runtime
//! - `Timeout`: sequencer never reported completion
//! - `Bus`: the register bus reported a failure
//! - `SensorMalfunction`: results are not trustworthy
//! - `AccessConflict`: registers were accessed while the sequencer ran
//! - `PowerOnReset`: the device reset unexpectedly and must be re-initialised
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use oaq_core::OaqError;
//!
//! fn on_error(err: OaqError) {
//!     match err {
//!         OaqError::PowerOnReset => {
//!             // re-run sensor bring-up
//!         }
//!         OaqError::AccessConflict | OaqError::Timeout => {
//!             // drop this cycle, try again on the next trigger
//!         }
//!         _ => {
//!             // report to the user
//!         }
//!     }
//! }
//! # on_error(OaqError::Timeout);
//! ```

use thiserror_no_std::Error;

/// Result type for sensor operations
pub type OaqResult<T> = Result<T, OaqError>;

/// Sensor and bring-up errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum OaqError {
    /// Heater setpoint computed from the configuration block is out of range
    #[error("Heater setpoint {value} outside [0, 1024]")]
    InitOutOfRange {
        /// The computed setpoint before conversion to a register value
        value: f32,
    },

    /// The sequencer did not finish within the polling budget
    #[error("Timeout waiting for sequencer")]
    Timeout,

    /// The underlying register bus failed
    #[error("Bus communication error")]
    Bus,

    /// Product id read from the device is not supported
    #[error("Unsupported device: product id {product_id:#06x}")]
    UnsupportedFirmware {
        /// The product id that was read
        product_id: u16,
    },

    /// Configuration, trim or calibration data has not been read or is blank
    #[error("Sensor configuration missing")]
    MissingConfiguration,

    /// Sensor reported results that cannot be used
    #[error("Sensor malfunction")]
    SensorMalfunction,

    /// Registers were accessed while the sequencer was running
    #[error("Access conflict")]
    AccessConflict,

    /// The device went through an unexpected power-on reset
    #[error("Unexpected power-on reset")]
    PowerOnReset,
}

#[cfg(feature = "defmt")]
impl defmt::Format for OaqError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InitOutOfRange { value } =>
                defmt::write!(fmt, "Heater setpoint {} out of range", value),
            Self::Timeout =>
                defmt::write!(fmt, "Sequencer timeout"),
            Self::Bus =>
                defmt::write!(fmt, "Bus error"),
            Self::UnsupportedFirmware { product_id } =>
                defmt::write!(fmt, "Unsupported product id {=u16:#x}", product_id),
            Self::MissingConfiguration =>
                defmt::write!(fmt, "Configuration missing"),
            Self::SensorMalfunction =>
                defmt::write!(fmt, "Sensor malfunction"),
            Self::AccessConflict =>
                defmt::write!(fmt, "Access conflict"),
            Self::PowerOnReset =>
                defmt::write!(fmt, "Power-on reset"),
        }
    }
}
