//! Device configuration model.

use core::marker::PhantomData;

use crate::conversion::{self, RangeError, Unit};
use crate::settings::{Clat, Cmod, Cpol, Cque, Dom, Drs, Mux, Pga, Ssc};
use crate::variant::Variant;

/// The configuration of an ADS1x1x device.
///
/// This is a plain value object; it holds one setting per config register
/// field plus the two alert thresholds, and serializes itself into the 16-bit
/// register word the device expects. Fields the variant does not have wired
/// up may be assigned but are replaced by their fixed defaults during
/// serialization.
///
/// The default configuration matches the power-on state of the device.
/// Individual settings are overridden by assignment:
///
/// ```
/// use ads1x1x::{variant::Ads1115, Config, Dom, Drs};
///
/// let mut config = Config::<Ads1115>::default();
/// config.dom = Dom::Ccm;
/// config.drs = Drs::Mode2;
/// assert_eq!(config.as_u16(), 0x0443);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config<V> {
    /// Single-shot conversion trigger.
    pub ssc: Ssc,
    /// Input multiplexer selection.
    pub mux: Mux,
    /// Programmable gain amplifier setting.
    pub pga: Pga,
    /// Device operation mode.
    pub dom: Dom,
    /// Data rate setting.
    pub drs: Drs,
    /// Comparator mode.
    pub cmod: Cmod,
    /// Comparator polarity.
    pub cpol: Cpol,
    /// Comparator latch.
    pub clat: Clat,
    /// Comparator queue.
    pub cque: Cque,
    atlo: u16,
    athi: u16,
    _variant: PhantomData<V>,
}

impl<V> Default for Config<V> {
    fn default() -> Self {
        Config {
            ssc: Ssc::NoOp,
            mux: Mux::Mode0,
            pga: Pga::Mode2,
            dom: Dom::Ssm,
            drs: Drs::Mode4,
            cmod: Cmod::Traditional,
            cpol: Cpol::ActiveLow,
            clat: Clat::NonLatching,
            cque: Cque::Disable,
            atlo: 0x8000,
            athi: 0x7FFF,
            _variant: PhantomData,
        }
    }
}

impl<V> Config<V>
where
    V: Variant,
{
    /// Serialize the configuration into the 16-bit config register word.
    ///
    /// # Note
    /// Fields the variant does not support are forced to their defaults, so
    /// the resulting word is always well-formed for the full register layout.
    pub fn as_u16(&self) -> u16 {
        let mux = if V::HAS_MUX { self.mux } else { Mux::Mode0 };
        let pga = if V::HAS_PGA { self.pga } else { Pga::Mode2 };

        let mut value = self.ssc as u16;
        value |= mux as u16;
        value |= pga as u16;
        value |= self.dom as u16;
        value |= self.drs as u16;

        if V::HAS_COMPARATOR {
            value |= self.cmod as u16;
            value |= self.cpol as u16;
            value |= self.clat as u16;
            value |= self.cque as u16;
        } else {
            value |= Cmod::Traditional as u16;
            value |= Cpol::ActiveLow as u16;
            value |= Clat::NonLatching as u16;
            value |= Cque::Disable as u16;
        }

        value
    }

    /// Get the low alert threshold in the requested unit.
    pub fn get_atlo(&self, unit: Unit) -> i32 {
        conversion::step_to_value(self.atlo, unit, self.effective_pga())
    }

    /// Set the low alert threshold.
    ///
    /// # Args
    /// * `value` - The new threshold, expressed in `unit`.
    ///
    /// # Returns
    /// True on success. If the value is not representable with the current
    /// gain setting, the stored threshold is left unchanged and false is
    /// returned.
    pub fn set_atlo(&mut self, value: i32, unit: Unit) -> bool {
        match conversion::value_to_step(value, unit, self.effective_pga()) {
            Ok(step) => {
                self.atlo = step;
                true
            }
            Err(RangeError) => false,
        }
    }

    /// Get the high alert threshold in the requested unit.
    pub fn get_athi(&self, unit: Unit) -> i32 {
        conversion::step_to_value(self.athi, unit, self.effective_pga())
    }

    /// Set the high alert threshold.
    ///
    /// # Args
    /// * `value` - The new threshold, expressed in `unit`.
    ///
    /// # Returns
    /// True on success. If the value is not representable with the current
    /// gain setting, the stored threshold is left unchanged and false is
    /// returned.
    pub fn set_athi(&mut self, value: i32, unit: Unit) -> bool {
        match conversion::value_to_step(value, unit, self.effective_pga()) {
            Ok(step) => {
                self.athi = step;
                true
            }
            Err(RangeError) => false,
        }
    }

    pub(crate) fn atlo_step(&self) -> u16 {
        self.atlo
    }

    pub(crate) fn athi_step(&self) -> u16 {
        self.athi
    }

    /// The gain the thresholds and measurements are scaled with. Variants
    /// without a PGA have a fixed ±2.048V input range.
    fn effective_pga(&self) -> Pga {
        if V::HAS_PGA {
            self.pga
        } else {
            Pga::Mode2
        }
    }
}
