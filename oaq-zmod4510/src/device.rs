//! ZMOD4510 register client
//!
//! Bring-up order:
//!
//! ```text
//! read_sensor_info()      product id, configuration block, trim block
//! init_sensor(seq)        init heater run -> mox_lr / mox_er
//! init_measurement(seq)   write the measurement program
//! algorithm(config)       pipeline seeded with everything read above
//! ```
//!
//! Per cycle: `start_measurement()`, then `poll_results()` until it stops
//! returning `WouldBlock`, then feed the block to the pipeline.

use oaq_core::constants::sensor::{
    ADC_RESULT_LEN, CONFIG_LEN, MOX_BOUNDS_LEN, TRIM_LEN, ZMOD4510_PRODUCT_ID,
};
use oaq_core::heater::heater_block;
use oaq_core::{
    ClassifierModel, MoxBounds, OaqAlgorithm, OaqConfig, OaqError, OaqResult, SensorConfig,
    TrimData,
};

use crate::bus::RegisterBus;
use crate::registers::{
    ADDR_CMD, ADDR_CONF, ADDR_DELAY, ADDR_DEV_ERR, ADDR_HEATER, ADDR_MEASUREMENT, ADDR_PID,
    ADDR_PROD_DATA, ADDR_RESULT, ADDR_SEQUENCER, ADDR_STATUS, CMD_START, CMD_STOP,
};
use crate::sequence::SequenceConfig;
use crate::status::{self, Status};

/// Status polls allowed for the init run
pub const INIT_MAX_POLLS: u32 = 1000;

/// Delay between status polls
pub const POLL_INTERVAL_MS: u32 = 1;

/// Identification and calibration data read at bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorInfo {
    /// Product id
    pub product_id: u16,
    /// Configuration block
    pub config: SensorConfig,
    /// Raw factory trim block
    pub trim: [u8; TRIM_LEN],
}

/// ZMOD4510 on a register bus
pub struct Zmod4510<B> {
    bus: B,
    info: Option<SensorInfo>,
    bounds: Option<MoxBounds>,
}

impl<B: RegisterBus> Zmod4510<B> {
    /// Wrap a bus; nothing is read until [`Self::read_sensor_info`]
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            info: None,
            bounds: None,
        }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    /// Data read by [`Self::read_sensor_info`]
    pub fn info(&self) -> Option<&SensorInfo> {
        self.info.as_ref()
    }

    /// Calibration bounds read by [`Self::init_sensor`]
    pub fn bounds(&self) -> Option<MoxBounds> {
        self.bounds
    }

    fn read(&mut self, reg: u8, buf: &mut [u8]) -> OaqResult<()> {
        self.bus.read_registers(reg, buf).map_err(|_| {
            log_warn!("read of register {:#x} failed", reg);
            OaqError::Bus
        })
    }

    fn write(&mut self, reg: u8, data: &[u8]) -> OaqResult<()> {
        self.bus.write_registers(reg, data).map_err(|_| {
            log_warn!("write of register {:#x} failed", reg);
            OaqError::Bus
        })
    }

    fn require_info(&self) -> OaqResult<SensorInfo> {
        self.info.ok_or(OaqError::MissingConfiguration)
    }

    /// Read product id, configuration and trim
    pub fn read_sensor_info(&mut self) -> OaqResult<SensorInfo> {
        let mut pid = [0u8; 2];
        self.read(ADDR_PID, &mut pid)?;
        let product_id = u16::from_be_bytes(pid);
        if product_id != ZMOD4510_PRODUCT_ID {
            return Err(OaqError::UnsupportedFirmware { product_id });
        }

        let mut config = [0u8; CONFIG_LEN];
        self.read(ADDR_CONF, &mut config)?;
        let mut trim = [0u8; TRIM_LEN];
        self.read(ADDR_PROD_DATA, &mut trim)?;

        let info = SensorInfo {
            product_id,
            config: SensorConfig::parse(&config),
            trim,
        };
        self.info = Some(info);
        Ok(info)
    }

    /// Run the init sequence and read the resistance calibration bounds
    pub fn init_sensor(&mut self, sequence: &SequenceConfig<'_>) -> OaqResult<MoxBounds> {
        let info = self.require_info()?;

        let heater = heater_block(&info.config, sequence.init_heater_c)?;
        self.write(ADDR_HEATER, &heater)?;
        self.write(ADDR_CMD, &[CMD_START])?;
        self.wait_idle(INIT_MAX_POLLS)?;

        let mut raw = [0u8; MOX_BOUNDS_LEN];
        self.read(ADDR_RESULT, &mut raw)?;
        let bounds = MoxBounds::parse(&raw);
        if bounds.lr >= bounds.er {
            log_warn!("invalid resistance bounds lr={} er={}", bounds.lr, bounds.er);
            return Err(OaqError::SensorMalfunction);
        }

        self.bounds = Some(bounds);
        Ok(bounds)
    }

    /// Write the measurement program
    pub fn init_measurement(&mut self, sequence: &SequenceConfig<'_>) -> OaqResult<()> {
        let info = self.require_info()?;

        let heater = heater_block(&info.config, sequence.heater_c)?;
        self.write(ADDR_HEATER, &heater)?;
        self.write(ADDR_DELAY, sequence.delays)?;
        self.write(ADDR_MEASUREMENT, sequence.measurement)?;
        self.write(ADDR_SEQUENCER, sequence.sequencer)
    }

    /// Trigger one measurement run
    pub fn start_measurement(&mut self) -> OaqResult<()> {
        self.write(ADDR_CMD, &[CMD_START])
    }

    /// Abort a running sequence
    pub fn stop_measurement(&mut self) -> OaqResult<()> {
        self.write(ADDR_CMD, &[CMD_STOP])
    }

    /// Read and decode the status register
    pub fn read_status(&mut self) -> OaqResult<Status> {
        let mut raw = [0u8; 1];
        self.read(ADDR_STATUS, &mut raw)?;
        Ok(Status::from_byte(raw[0]))
    }

    /// Read the error-event register
    pub fn check_error_event(&mut self) -> OaqResult<()> {
        let mut raw = [0u8; 1];
        self.read(ADDR_DEV_ERR, &mut raw)?;
        status::check_error_event(raw[0]).map_err(|err| {
            log_warn!("device error event {:#x}", raw[0]);
            err
        })
    }

    /// Read the ADC result block of the last run
    pub fn read_adc_results(&mut self) -> OaqResult<[u8; ADC_RESULT_LEN]> {
        let mut adc = [0u8; ADC_RESULT_LEN];
        self.read(ADDR_RESULT, &mut adc)?;
        Ok(adc)
    }

    /// Non-blocking fetch of the result block
    ///
    /// `WouldBlock` while the sequencer is running. Once it stops, the
    /// error-event register is checked before the results are read.
    pub fn poll_results(&mut self) -> nb::Result<[u8; ADC_RESULT_LEN], OaqError> {
        let status = self.read_status()?;
        if status.sequencer_running {
            return Err(nb::Error::WouldBlock);
        }
        if status.alarm {
            return Err(nb::Error::Other(OaqError::SensorMalfunction));
        }
        self.check_error_event()?;
        Ok(self.read_adc_results()?)
    }

    /// Poll until results are available or `max_polls` is exhausted
    pub fn wait_for_results(&mut self, max_polls: u32) -> OaqResult<[u8; ADC_RESULT_LEN]> {
        for _ in 0..max_polls {
            match self.poll_results() {
                Ok(adc) => return Ok(adc),
                Err(nb::Error::Other(err)) => return Err(err),
                Err(nb::Error::WouldBlock) => self.bus.delay_ms(POLL_INTERVAL_MS),
            }
        }
        Err(OaqError::Timeout)
    }

    fn wait_idle(&mut self, max_polls: u32) -> OaqResult<()> {
        for _ in 0..max_polls {
            if !self.read_status()?.sequencer_running {
                return Ok(());
            }
            self.bus.delay_ms(POLL_INTERVAL_MS);
        }
        Err(OaqError::Timeout)
    }

    /// Build the pipeline from the data read during bring-up
    ///
    /// Uses the placeholder classifier tables of [`ClassifierModel::default`],
    /// which do not separate NO2 from O3. Use [`Self::algorithm_with_model`]
    /// with the vendor tables for real measurements.
    pub fn algorithm(&self, config: OaqConfig) -> OaqResult<OaqAlgorithm> {
        self.algorithm_with_model(config, ClassifierModel::default())
    }

    /// Build the pipeline with explicit classifier tables
    pub fn algorithm_with_model(
        &self,
        config: OaqConfig,
        model: ClassifierModel,
    ) -> OaqResult<OaqAlgorithm> {
        let info = self.require_info()?;
        let bounds = self.bounds.ok_or(OaqError::MissingConfiguration)?;
        let trim = TrimData::parse(&info.trim)?;
        Ok(OaqAlgorithm::with_model(config, info.config, trim, bounds, model))
    }
}
