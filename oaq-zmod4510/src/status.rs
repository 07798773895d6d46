//! Status and error-event decoding

use oaq_core::{OaqError, OaqResult};

use crate::registers::{
    DEV_ERR_ACCESS_CONFLICT, DEV_ERR_POR_EVENT, STATUS_ALARM, STATUS_LAST_SEQ_STEP_MASK,
    STATUS_SEQUENCER_RUNNING, STATUS_SLEEP_TIMER_ENABLED,
};

/// Decoded status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// A sequencer run is in progress
    pub sequencer_running: bool,
    /// The sleep timer is armed
    pub sleep_timer_enabled: bool,
    /// The device raised an alarm
    pub alarm: bool,
    /// Last completed sequencer step
    pub last_step: u8,
}

impl Status {
    /// Decode the raw status byte
    pub fn from_byte(raw: u8) -> Self {
        Self {
            sequencer_running: raw & STATUS_SEQUENCER_RUNNING != 0,
            sleep_timer_enabled: raw & STATUS_SLEEP_TIMER_ENABLED != 0,
            alarm: raw & STATUS_ALARM != 0,
            last_step: raw & STATUS_LAST_SEQ_STEP_MASK,
        }
    }
}

/// Map the error-event register to an error, power-on reset first
pub fn check_error_event(raw: u8) -> OaqResult<()> {
    if raw & DEV_ERR_POR_EVENT != 0 {
        return Err(OaqError::PowerOnReset);
    }
    if raw & DEV_ERR_ACCESS_CONFLICT != 0 {
        return Err(OaqError::AccessConflict);
    }
    Ok(())
}
