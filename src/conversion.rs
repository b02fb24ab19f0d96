//! Conversion routines between raw ADC codes and physical units.
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.
//!
//! # Description
//! An ADC result exists in three representations: the raw 16-bit
//! two's-complement register code ("step"), a signed number in
//! -32768 ≤ x ≤ 32767, and a physical value in microvolts whose scale depends
//! on the active gain setting. The routines in this module map between all
//! three without touching the bus, so they can be verified directly against
//! the tabulated per-gain resolutions of the datasheet.

use crate::settings::Pga;

/// Indicates that a value is not representable in the requested domain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RangeError;

/// The unit of a measurement or threshold value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Raw 16-bit two's-complement register codes.
    Steps,
    /// Microvolts.
    Micro,
}

/// Convert a signed number into its 16-bit two's-complement register code.
///
/// ```text
/// -32768 -> 0x8000
///     -1 -> 0xFFFF
///      0 -> 0x0000
///  32767 -> 0x7FFF
/// ```
pub fn number_to_code(number: i32) -> Result<u16, RangeError> {
    match number {
        0..=32767 => Ok(number as u16),
        -32768..=-1 => Ok((65536 + number) as u16),
        _ => Err(RangeError),
    }
}

/// Convert a 16-bit two's-complement register code into a signed number.
pub fn code_to_number(code: u16) -> i32 {
    if code <= 32767 {
        code as i32
    } else {
        code as i32 - 65536
    }
}

/// Convert a raw code to microvolts.
///
/// Returning an integer loses nothing: one step at the highest gain setting
/// ([`Pga::Mode5`]) is still 7.8µV wide.
///
/// # Args
/// * `step` - The raw conversion result.
/// * `pga` - The gain setting the conversion was taken with.
pub fn step_to_microvolts(step: u16, pga: Pga) -> i32 {
    let number = code_to_number(step) as i64;
    div_round(number * pga.full_scale_microvolts() as i64, 32767) as i32
}

/// Convert microvolts to the nearest raw code.
///
/// # Args
/// * `microvolts` - The physical value to convert.
/// * `pga` - The active gain setting.
///
/// # Returns
/// The raw code, or [`RangeError`] if the value exceeds the 16-bit
/// conversion range.
pub fn microvolts_to_step(microvolts: i32, pga: Pga) -> Result<u16, RangeError> {
    let number = div_round(
        microvolts as i64 * 32767,
        pga.full_scale_microvolts() as i64,
    );

    number_to_code(number as i32)
}

/// Convert a raw code into the requested unit.
pub fn step_to_value(step: u16, unit: Unit, pga: Pga) -> i32 {
    match unit {
        Unit::Steps => step as i32,
        Unit::Micro => step_to_microvolts(step, pga),
    }
}

/// Convert a value in the provided unit into a raw code.
///
/// # Returns
/// The raw code, or [`RangeError`] if the value is not representable as one.
pub fn value_to_step(value: i32, unit: Unit, pga: Pga) -> Result<u16, RangeError> {
    match unit {
        Unit::Steps => {
            if (0..=0xFFFF).contains(&value) {
                Ok(value as u16)
            } else {
                Err(RangeError)
            }
        }
        Unit::Micro => microvolts_to_step(value, pga),
    }
}

/// Divide with rounding half away from zero. The denominator must be positive.
fn div_round(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if 2 * (numerator % denominator).abs() >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}
