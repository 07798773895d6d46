//! Register bus abstraction
//!
//! The driver does not own pins or peripherals. It talks to the device
//! through a blocking register interface supplied by the board support
//! code, usually a thin wrapper around an I2C peripheral:
//!
//! ```text
//! read_registers(0x94, &mut [status])    write_registers(0x93, &[0x80])
//! ```
//!
//! Any bus failure is reported to callers as `OaqError::Bus`.

/// Blocking register access to one device
pub trait RegisterBus {
    /// Bus-specific failure
    type Error;

    /// Read `buf.len()` consecutive registers starting at `reg`
    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data` to consecutive registers starting at `reg`
    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// In-memory register file for tests and host simulation
///
/// Writing the command register makes the status register report a running
/// sequencer for `busy_polls` subsequent status reads.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct MockBus {
    /// Register contents
    pub registers: [u8; 256],
    /// Every write in order: `(register, data)`
    pub writes: std::vec::Vec<(u8, std::vec::Vec<u8>)>,
    /// Status reads that report busy after each command
    pub busy_polls: u32,
    /// Fail every transfer while set
    pub fail: bool,
    /// Total requested delay
    pub elapsed_ms: u32,
    pending_busy: u32,
}

/// Failure injected by [`MockBus`]
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

#[cfg(feature = "std")]
impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MockBus {
    /// Blank register file
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            writes: std::vec::Vec::new(),
            busy_polls: 0,
            fail: false,
            elapsed_ms: 0,
            pending_busy: 0,
        }
    }

    /// Preload consecutive registers
    ///
    /// # Panics
    ///
    /// If the block runs past register `0xFF`.
    pub fn preload(&mut self, reg: u8, data: &[u8]) {
        let span = Self::span(reg, data.len()).unwrap_or_else(|| {
            panic!("preload of {} bytes at {:#04x} runs past 0xff", data.len(), reg)
        });
        self.registers[span].copy_from_slice(data);
    }

    fn span(reg: u8, len: usize) -> Option<core::ops::Range<usize>> {
        let start = reg as usize;
        let end = start + len;
        (end <= 256).then_some(start..end)
    }

    /// Data written to `reg`, most recent first
    pub fn last_write(&self, reg: u8) -> Option<&[u8]> {
        self.writes
            .iter()
            .rev()
            .find(|(r, _)| *r == reg)
            .map(|(_, data)| data.as_slice())
    }
}

#[cfg(feature = "std")]
impl RegisterBus for MockBus {
    type Error = MockBusError;

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockBusError);
        }
        let span = Self::span(reg, buf.len()).ok_or(MockBusError)?;
        buf.copy_from_slice(&self.registers[span]);

        if reg == crate::registers::ADDR_STATUS && !buf.is_empty() {
            if self.pending_busy > 0 {
                self.pending_busy -= 1;
                buf[0] |= crate::registers::STATUS_SEQUENCER_RUNNING;
            } else {
                buf[0] &= !crate::registers::STATUS_SEQUENCER_RUNNING;
            }
        }
        Ok(())
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockBusError);
        }
        let span = Self::span(reg, data.len()).ok_or(MockBusError)?;
        self.writes.push((reg, data.to_vec()));
        self.registers[span].copy_from_slice(data);

        if reg == crate::registers::ADDR_CMD && data.first() == Some(&crate::registers::CMD_START) {
            self.pending_busy = self.busy_polls;
        }
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += ms;
    }
}
