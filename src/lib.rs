//! Driver for the ADS1x1x family of I2C analog-to-digital converters.
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.
//!
//! # Description
//! Supports the ADS1013/14/15 and ADS1113/14/15. All six devices share a
//! single register layout and differ in which configuration fields are wired
//! up (input multiplexer, programmable gain amplifier, comparator) and in
//! their conversion rates, so one driver type is generic over a
//! [`variant::Variant`] capability description.
//!
//! Measurements are taken either on demand (single-shot mode) or by sampling
//! a free-running conversion (continuous mode), and are returned as raw
//! conversion codes or in microvolts scaled by the active gain setting.
#![cfg_attr(not(test), no_std)]
#![deny(warnings)]

use core::marker::PhantomData;

use bit_field::BitField;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, warn};

pub mod conversion;
pub mod variant;

mod config;
mod settings;

pub use config::Config;
pub use conversion::{RangeError, Unit};
pub use settings::{Clat, Cmod, Cpol, Cque, Dom, Drs, Mux, Pga, Ssc};

use variant::Variant;

// The I2C bus address is hardwired and identical for every device in the
// family. (The address-select pin of the real hardware is not modeled.)
const DEVICE_ADDRESS: u8 = 0x48;

// Power-on defaults of the writable registers.
const DEFAULT_CONFIG: u16 = 0x8583;
const DEFAULT_LO_THRESH: u16 = 0x8000;
const DEFAULT_HI_THRESH: u16 = 0x7FFF;

#[doc(hidden)]
enum Register {
    Conversion = 0x00,
    Config = 0x01,
    LoThresh = 0x02,
    HiThresh = 0x03,
}

/// Indicates errors that the ADC may encounter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Error<E> {
    /// The underlying I2C bus transaction failed.
    Interface(E),
    /// A value was outside its representable range.
    Range,
    /// The requested measurement is incompatible with the operation mode the
    /// device is configured for.
    ModeConflict,
    /// The conversion did not complete within the polling budget.
    Timeout,
    /// The gain bits read back from the device do not match any known
    /// setting. This indicates a transport or register layout defect and is
    /// not recoverable by retrying.
    UnidentifiedGain,
}

impl<E> From<RangeError> for Error<E> {
    fn from(_: RangeError) -> Self {
        Error::Range
    }
}

/// A driver for one of the ADS1x1x analog-to-digital converters.
///
/// The second type parameter selects the device variant, e.g.
/// `Ads1x1x<I2C, variant::Ads1115>`.
pub struct Ads1x1x<I2C, V> {
    i2c: I2C,
    address: u8,
    _variant: PhantomData<V>,
}

impl<I2C, V> Ads1x1x<I2C, V>
where
    I2C: I2c,
    V: Variant,
{
    /// Construct a new ADC driver.
    ///
    /// # Args
    /// * `i2c` - The I2C bus to use for communication with the device.
    pub fn new(i2c: I2C) -> Self {
        Ads1x1x {
            i2c,
            address: DEVICE_ADDRESS,
            _variant: PhantomData,
        }
    }

    /// Write the device configuration.
    ///
    /// # Note
    /// The config register and both alert threshold registers are written
    /// unconditionally. Use this to switch the device into continuous
    /// conversion mode or to change the comparator settings.
    ///
    /// # Args
    /// * `config` - The configuration to apply.
    pub fn configure(&mut self, config: &Config<V>) -> Result<(), Error<I2C::Error>> {
        debug!("applying configuration 0x{:04X}", config.as_u16());

        self.write_register(Register::Config, config.as_u16())?;
        self.write_register(Register::LoThresh, config.atlo_step())?;
        self.write_register(Register::HiThresh, config.athi_step())?;

        Ok(())
    }

    /// Revert all writable registers to their power-on defaults.
    ///
    /// # Note
    /// The conversion register is read-only and is skipped. The device also
    /// honors the I2C general-call reset command (0x06), but that would
    /// reset every device on the bus.
    pub fn reset_device_registers(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!("resetting device registers to power-on defaults");

        self.write_register(Register::Config, DEFAULT_CONFIG)?;
        self.write_register(Register::LoThresh, DEFAULT_LO_THRESH)?;
        self.write_register(Register::HiThresh, DEFAULT_HI_THRESH)?;

        Ok(())
    }

    /// Take a single-shot measurement.
    ///
    /// # Note
    /// With a configuration provided, it is written to the device along with
    /// its alert thresholds. Without one, the device keeps the configuration
    /// and thresholds of the previous call, so repeated measurements need
    /// not re-specify unchanged settings.
    ///
    /// This call blocks for the duration of the conversion, up to tens of
    /// milliseconds at the lowest data rates.
    ///
    /// # Args
    /// * `config` - An optional configuration to apply for this measurement.
    ///   Must have [`Dom::Ssm`] selected.
    /// * `unit` - The unit of the returned value.
    /// * `delay` - A means of delaying while the conversion is in progress.
    ///
    /// # Returns
    /// The conversion result in the requested unit.
    pub fn get_ssc_measurement(
        &mut self,
        config: Option<&Config<V>>,
        unit: Unit,
        delay: &mut impl DelayNs,
    ) -> Result<i32, Error<I2C::Error>> {
        let (config_word, thresholds) = match config {
            Some(config) => (
                config.as_u16(),
                Some((config.atlo_step(), config.athi_step())),
            ),
            None => (self.read_register(Register::Config)?, None),
        };

        if !config_word.get_bit(8) {
            // The device free-runs in continuous mode; triggering a
            // conversion would be meaningless.
            return Err(Error::ModeConflict);
        }

        self.write_register(Register::Config, config_word | Ssc::Start as u16)?;
        if let Some((atlo, athi)) = thresholds {
            self.write_register(Register::LoThresh, atlo)?;
            self.write_register(Register::HiThresh, athi)?;
        }

        self.wait_conversion_ready(config_word, delay)?;

        let step = self.read_register(Register::Conversion)?;
        Self::decode(step, unit, config_word)
    }

    /// Read the most recent result of a free-running conversion.
    ///
    /// # Args
    /// * `unit` - The unit of the returned value.
    ///
    /// # Returns
    /// The conversion result in the requested unit.
    pub fn get_ccm_measurement(&mut self, unit: Unit) -> Result<i32, Error<I2C::Error>> {
        let config_word = self.read_register(Register::Config)?;

        if config_word.get_bit(8) {
            return Err(Error::ModeConflict);
        }

        let step = self.read_register(Register::Conversion)?;
        Self::decode(step, unit, config_word)
    }

    /// Wait until the device reports the triggered conversion as complete.
    ///
    /// The status bit of the config register reads 0 while a conversion is
    /// in progress. One full conversion period is expected to elapse before
    /// the first poll; up to five quarter-period polls are allowed on top
    /// before the wait is abandoned.
    fn wait_conversion_ready(
        &mut self,
        config_word: u16,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I2C::Error>> {
        let rate = V::DATA_RATES[config_word.get_bits(5..8) as usize];
        let period_us = 1_000_000 / rate;

        delay.delay_us(period_us);
        for _ in 0..5 {
            if self.read_register(Register::Config)?.get_bit(15) {
                return Ok(());
            }

            delay.delay_us(period_us / 4);
        }

        warn!(
            "conversion was not ready after 9/4 conversion periods ({}µs each)",
            period_us
        );
        Err(Error::Timeout)
    }

    /// Decode a raw conversion result into the requested unit.
    fn decode(step: u16, unit: Unit, config_word: u16) -> Result<i32, Error<I2C::Error>> {
        match unit {
            Unit::Steps => Ok(step as i32),
            Unit::Micro => {
                let pga = if V::HAS_PGA {
                    enum_iterator::all::<Pga>()
                        .find(|&mode| config_word & Pga::MASK == mode as u16)
                        .ok_or(Error::UnidentifiedGain)?
                } else {
                    // Without a PGA the input range is fixed at ±2.048V.
                    Pga::Mode2
                };

                Ok(conversion::step_to_microvolts(step, pga))
            }
        }
    }

    fn read_register(&mut self, register: Register) -> Result<u16, Error<I2C::Error>> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[register as u8], &mut data)
            .map_err(Error::Interface)?;

        Ok(u16::from_be_bytes(data))
    }

    fn write_register(&mut self, register: Register, value: u16) -> Result<(), Error<I2C::Error>> {
        let data = value.to_be_bytes();
        self.i2c
            .write(self.address, &[register as u8, data[0], data[1]])
            .map_err(Error::Interface)?;

        Ok(())
    }
}
