//! Capability descriptions for the individual devices of the family.

/// Describes which configuration fields a device variant has wired up.
///
/// All six devices share one register layout. The variants differ in whether
/// the input multiplexer, the programmable gain amplifier and the comparator
/// are present, and in the sample rates behind the data rate setting. Fields
/// a variant lacks are forced to their defaults when serializing a
/// configuration.
pub trait Variant {
    /// The variant has an input multiplexer. Without one, the device always
    /// measures AIN0 against AIN1.
    const HAS_MUX: bool;

    /// The variant has a programmable gain amplifier. Without one, the input
    /// range is fixed at ±2.048V.
    const HAS_PGA: bool;

    /// The variant has an alert comparator and threshold registers.
    const HAS_COMPARATOR: bool;

    /// Samples per second for each data rate setting, indexed by the mode
    /// number of [`crate::Drs`].
    const DATA_RATES: [u32; 8];
}

// 12-bit and 16-bit family sample rates.
const ADS101X_DATA_RATES: [u32; 8] = [128, 250, 490, 920, 1600, 2400, 3300, 3300];
const ADS111X_DATA_RATES: [u32; 8] = [8, 16, 32, 64, 128, 250, 475, 860];

/// 12-bit, single differential input, fixed ±2.048V range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ads1013;

/// 12-bit, single differential input, PGA and comparator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ads1014;

/// 12-bit, 4-channel input multiplexer, PGA and comparator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ads1015;

/// 16-bit, single differential input, fixed ±2.048V range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ads1113;

/// 16-bit, single differential input, PGA and comparator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ads1114;

/// 16-bit, 4-channel input multiplexer, PGA and comparator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ads1115;

impl Variant for Ads1013 {
    const HAS_MUX: bool = false;
    const HAS_PGA: bool = false;
    const HAS_COMPARATOR: bool = false;
    const DATA_RATES: [u32; 8] = ADS101X_DATA_RATES;
}

impl Variant for Ads1014 {
    const HAS_MUX: bool = false;
    const HAS_PGA: bool = true;
    const HAS_COMPARATOR: bool = true;
    const DATA_RATES: [u32; 8] = ADS101X_DATA_RATES;
}

impl Variant for Ads1015 {
    const HAS_MUX: bool = true;
    const HAS_PGA: bool = true;
    const HAS_COMPARATOR: bool = true;
    const DATA_RATES: [u32; 8] = ADS101X_DATA_RATES;
}

impl Variant for Ads1113 {
    const HAS_MUX: bool = false;
    const HAS_PGA: bool = false;
    const HAS_COMPARATOR: bool = false;
    const DATA_RATES: [u32; 8] = ADS111X_DATA_RATES;
}

impl Variant for Ads1114 {
    const HAS_MUX: bool = false;
    const HAS_PGA: bool = true;
    const HAS_COMPARATOR: bool = true;
    const DATA_RATES: [u32; 8] = ADS111X_DATA_RATES;
}

impl Variant for Ads1115 {
    const HAS_MUX: bool = true;
    const HAS_PGA: bool = true;
    const HAS_COMPARATOR: bool = true;
    const DATA_RATES: [u32; 8] = ADS111X_DATA_RATES;
}
