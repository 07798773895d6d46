//! Sequencer programs
//!
//! A sequence is written once during bring-up. The heater block is derived
//! from target temperatures through the device configuration block; the
//! remaining blocks are copied to the device verbatim.

/// Sequencer program for one operating mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceConfig<'a> {
    /// Heater temperature used by the init run, in degrees C
    pub init_heater_c: &'a [f32],
    /// Heater temperatures of the measurement run, in degrees C
    pub heater_c: &'a [f32],
    /// Delay block (written to 0x50)
    pub delays: &'a [u8],
    /// Measurement selection block (written to 0x60)
    pub measurement: &'a [u8],
    /// Sequencer program (written to 0x68), two bytes per step
    pub sequencer: &'a [u8],
}

impl SequenceConfig<'static> {
    /// Outdoor air quality program: 15 steps cycling through six heater levels
    pub const fn oaq() -> Self {
        Self {
            init_heater_c: &OAQ_INIT_HEATER_C,
            heater_c: &OAQ_HEATER_C,
            delays: &OAQ_DELAYS,
            measurement: &OAQ_MEASUREMENT,
            sequencer: &OAQ_SEQUENCER,
        }
    }
}

impl Default for SequenceConfig<'static> {
    fn default() -> Self {
        Self::oaq()
    }
}

const OAQ_INIT_HEATER_C: [f32; 1] = [80.0];

const OAQ_HEATER_C: [f32; 6] = [80.0, 150.0, 200.0, 250.0, 300.0, 350.0];

const OAQ_DELAYS: [u8; 6] = [0x00, 0x00, 0x00, 0x08, 0x00, 0x10];

const OAQ_MEASUREMENT: [u8; 2] = [0x00, 0x28];

// Each step: [heater index | measure flag, delay index]
const OAQ_SEQUENCER: [u8; 30] = [
    0x00, 0x00, 0x81, 0x00, 0x82, 0x00, 0x83, 0x01, 0x84, 0x01,
    0x85, 0x01, 0x84, 0x01, 0x83, 0x01, 0x82, 0x01, 0x81, 0x01,
    0x80, 0x01, 0x85, 0x02, 0x84, 0x02, 0x81, 0x02, 0x80, 0x02,
];
