//! ZMOD4510 register map

/// Product id (2 bytes, big-endian)
pub const ADDR_PID: u8 = 0x00;
/// Configuration block (6 bytes)
pub const ADDR_CONF: u8 = 0x20;
/// Production data / factory trim (9 bytes)
pub const ADDR_PROD_DATA: u8 = 0x26;
/// Heater setpoints
pub const ADDR_HEATER: u8 = 0x40;
/// Step delays
pub const ADDR_DELAY: u8 = 0x50;
/// Measurement selection
pub const ADDR_MEASUREMENT: u8 = 0x60;
/// Sequencer program
pub const ADDR_SEQUENCER: u8 = 0x68;
/// Command register
pub const ADDR_CMD: u8 = 0x93;
/// Status register
pub const ADDR_STATUS: u8 = 0x94;
/// Result block (init bounds or ADC results)
pub const ADDR_RESULT: u8 = 0x97;
/// Device error event register
pub const ADDR_DEV_ERR: u8 = 0xB7;

/// Start a sequencer run
pub const CMD_START: u8 = 0x80;
/// Stop the sequencer
pub const CMD_STOP: u8 = 0x00;

/// Status: sequencer running
pub const STATUS_SEQUENCER_RUNNING: u8 = 0x80;
/// Status: sleep timer enabled
pub const STATUS_SLEEP_TIMER_ENABLED: u8 = 0x40;
/// Status: alarm raised by the device
pub const STATUS_ALARM: u8 = 0x20;
/// Status: index of the last completed sequencer step
pub const STATUS_LAST_SEQ_STEP_MASK: u8 = 0x1F;

/// Error event: unexpected power-on reset
pub const DEV_ERR_POR_EVENT: u8 = 0x80;
/// Error event: register access while the sequencer ran
pub const DEV_ERR_ACCESS_CONFLICT: u8 = 0x40;
