//! Configuration register field definitions for the ADS1x1x family.
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.
//!
//! # Description
//! The 16-bit config register controls the conversion trigger, input
//! selection, gain, operating mode, data rate and comparator. Every value
//! below is pre-shifted into its bit position, so a full register word is the
//! bitwise OR of one variant per field.

use enum_iterator::Sequence;

/// Single-shot conversion trigger / conversion status (config\[15\]).
///
/// When written, `Start` begins a conversion in single-shot mode. When read,
/// the bit indicates whether a conversion is currently in progress (0) or the
/// device is idle (1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Ssc {
    NoOp = 0x0000,
    Start = 0x8000,
}

impl Ssc {
    pub const MASK: u16 = 0b1000_0000_0000_0000;
}

/// Input multiplexer configuration (config\[14:12\]).
///
/// ```text
/// Mux::Mode0 -> AIN0»AIN1 (default)
/// Mux::Mode1 -> AIN0»AIN3
/// Mux::Mode2 -> AIN1»AIN3
/// Mux::Mode3 -> AIN2»AIN3
/// Mux::Mode4 -> AIN0»GND
/// Mux::Mode5 -> AIN1»GND
/// Mux::Mode6 -> AIN2»GND
/// Mux::Mode7 -> AIN3»GND
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Mux {
    Mode0 = 0x0000,
    Mode1 = 0x1000,
    Mode2 = 0x2000,
    Mode3 = 0x3000,
    Mode4 = 0x4000,
    Mode5 = 0x5000,
    Mode6 = 0x6000,
    Mode7 = 0x7000,
}

impl Mux {
    pub const MASK: u16 = 0b0111_0000_0000_0000;
}

/// Programmable gain amplifier (config\[11:9\]).
///
/// ```text
/// Pga::Mode0 -> FSR: ±6.144 V @   3mV (Vdd: 5.9 ≤ x ≤ 7.0)
/// Pga::Mode1 -> FSR: ±4.096 V @   2mV (Vdd: 3.8 ≤ x ≤ 7.0)
/// Pga::Mode2 -> FSR: ±2.048 V @   1mV (default)
/// Pga::Mode3 -> FSR: ±1.024 V @ 500µV
/// Pga::Mode4 -> FSR: ±0.512 V @ 250µV
/// Pga::Mode5 -> FSR: ±0.256 V @ 125µV
/// Pga::Mode6 -> FSR: ±0.256 V @ 125µV
/// Pga::Mode7 -> FSR: ±0.256 V @ 125µV
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Pga {
    Mode0 = 0x0000,
    Mode1 = 0x0200,
    Mode2 = 0x0400,
    Mode3 = 0x0600,
    Mode4 = 0x0800,
    Mode5 = 0x0A00,
    Mode6 = 0x0C00,
    Mode7 = 0x0E00,
}

impl Pga {
    pub const MASK: u16 = 0b0000_1110_0000_0000;

    /// Get the full-scale input range of this gain setting in microvolts.
    pub fn full_scale_microvolts(self) -> i32 {
        match self {
            Pga::Mode0 => 6_144_000,
            Pga::Mode1 => 4_096_000,
            Pga::Mode2 => 2_048_000,
            Pga::Mode3 => 1_024_000,
            Pga::Mode4 => 512_000,
            Pga::Mode5 | Pga::Mode6 | Pga::Mode7 => 256_000,
        }
    }
}

/// Device operation mode (config\[8\]).
///
/// ```text
/// Dom::Ccm -> continuous conversion mode
/// Dom::Ssm -> single-shot mode (default)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Dom {
    Ccm = 0x0000,
    Ssm = 0x0100,
}

impl Dom {
    pub const MASK: u16 = 0b0000_0001_0000_0000;
}

/// Data rate setting (config\[7:5\]).
///
/// The resulting sample rate depends on the device family:
///
/// ```text
///              ADS101x ADS111x
/// Drs::Mode0 ->    128       8 samples per second
/// Drs::Mode1 ->    250      16
/// Drs::Mode2 ->    490      32
/// Drs::Mode3 ->    920      64
/// Drs::Mode4 ->   1600     128 (default)
/// Drs::Mode5 ->   2400     250
/// Drs::Mode6 ->   3300     475
/// Drs::Mode7 ->   3300     860
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Drs {
    Mode0 = 0x0000,
    Mode1 = 0x0020,
    Mode2 = 0x0040,
    Mode3 = 0x0060,
    Mode4 = 0x0080,
    Mode5 = 0x00A0,
    Mode6 = 0x00C0,
    Mode7 = 0x00E0,
}

impl Drs {
    pub const MASK: u16 = 0b0000_0000_1110_0000;
}

/// Comparator mode (config\[4\]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Cmod {
    Traditional = 0x0000,
    Window = 0x0010,
}

impl Cmod {
    pub const MASK: u16 = 0b0000_0000_0001_0000;
}

/// Comparator polarity of the ALERT/RDY pin (config\[3\]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Cpol {
    ActiveLow = 0x0000,
    ActiveHigh = 0x0008,
}

impl Cpol {
    pub const MASK: u16 = 0b0000_0000_0000_1000;
}

/// Comparator latch (config\[2\]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Clat {
    NonLatching = 0x0000,
    Latching = 0x0004,
}

impl Clat {
    pub const MASK: u16 = 0b0000_0000_0000_0100;
}

/// Comparator queue and disable (config\[1:0\]).
///
/// ```text
/// Cque::AssertAfterOne  -> assert after one conversion
/// Cque::AssertAfterTwo  -> assert after two conversions
/// Cque::AssertAfterFour -> assert after four conversions
/// Cque::Disable         -> disable comparator, ALERT/RDY is high-impedance (default)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u16)]
pub enum Cque {
    AssertAfterOne = 0x0000,
    AssertAfterTwo = 0x0001,
    AssertAfterFour = 0x0002,
    Disable = 0x0003,
}

impl Cque {
    pub const MASK: u16 = 0b0000_0000_0000_0011;
}
