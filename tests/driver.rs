//! Register-level tests of the driver protocol against a mocked I2C bus.

use ads1x1x::variant::{Ads1113, Ads1115};
use ads1x1x::{Ads1x1x, Config, Dom, Drs, Error, Pga, Unit};

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

// The family's hardwired bus address.
const ADDRESS: u8 = 0x48;

#[test]
fn configure_writes_config_and_both_thresholds() {
    let expectations = [
        I2cTransaction::write(ADDRESS, vec![0x01, 0x04, 0x43]),
        I2cTransaction::write(ADDRESS, vec![0x02, 0x80, 0x00]),
        I2cTransaction::write(ADDRESS, vec![0x03, 0x7F, 0xFF]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut config = Config::<Ads1115>::default();
    config.dom = Dom::Ccm;
    config.drs = Drs::Mode2;

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());
    adc.configure(&config).unwrap();

    i2c.done();
}

#[test]
fn reset_restores_power_on_defaults() {
    let expectations = [
        I2cTransaction::write(ADDRESS, vec![0x01, 0x85, 0x83]),
        I2cTransaction::write(ADDRESS, vec![0x02, 0x80, 0x00]),
        I2cTransaction::write(ADDRESS, vec![0x03, 0x7F, 0xFF]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());
    adc.reset_device_registers().unwrap();

    i2c.done();
}

#[test]
fn single_shot_with_explicit_config_decodes_microvolts() {
    let expectations = [
        // Config word with the conversion trigger set, then both thresholds.
        I2cTransaction::write(ADDRESS, vec![0x01, 0x85, 0x83]),
        I2cTransaction::write(ADDRESS, vec![0x02, 0x80, 0x00]),
        I2cTransaction::write(ADDRESS, vec![0x03, 0x7F, 0xFF]),
        // Conversion-ready poll followed by the result register.
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x85, 0x83]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x00, 0x01]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let config = Config::<Ads1115>::default();
    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());

    // One step at the default ±2.048V range is 63µV.
    let value = adc
        .get_ssc_measurement(Some(&config), Unit::Micro, &mut NoopDelay::new())
        .unwrap();
    assert_eq!(value, 63);

    i2c.done();
}

#[test]
fn single_shot_returns_raw_steps_unmodified() {
    let expectations = [
        I2cTransaction::write(ADDRESS, vec![0x01, 0x85, 0x83]),
        I2cTransaction::write(ADDRESS, vec![0x02, 0x80, 0x00]),
        I2cTransaction::write(ADDRESS, vec![0x03, 0x7F, 0xFF]),
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x85, 0x83]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x12, 0x34]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let config = Config::<Ads1115>::default();
    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());

    let value = adc
        .get_ssc_measurement(Some(&config), Unit::Steps, &mut NoopDelay::new())
        .unwrap();
    assert_eq!(value, 0x1234);

    i2c.done();
}

#[test]
fn single_shot_decodes_with_the_configured_gain() {
    let expectations = [
        I2cTransaction::write(ADDRESS, vec![0x01, 0x83, 0x83]),
        I2cTransaction::write(ADDRESS, vec![0x02, 0x80, 0x00]),
        I2cTransaction::write(ADDRESS, vec![0x03, 0x7F, 0xFF]),
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x83, 0x83]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x00, 0x01]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut config = Config::<Ads1115>::default();
    config.pga = Pga::Mode1;

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());

    // One step at ±4.096V is 125µV.
    let value = adc
        .get_ssc_measurement(Some(&config), Unit::Micro, &mut NoopDelay::new())
        .unwrap();
    assert_eq!(value, 125);

    i2c.done();
}

#[test]
fn single_shot_without_config_reuses_the_device_configuration() {
    let expectations = [
        // The device configuration is read back and re-written with the
        // trigger bit set. The threshold registers are left untouched.
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x05, 0x83]),
        I2cTransaction::write(ADDRESS, vec![0x01, 0x85, 0x83]),
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x85, 0x83]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0xFF, 0xFF]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());

    let value = adc
        .get_ssc_measurement(None, Unit::Micro, &mut NoopDelay::new())
        .unwrap();
    assert_eq!(value, -63);

    i2c.done();
}

#[test]
fn fixed_range_variant_decodes_at_2048_millivolts() {
    let expectations = [
        I2cTransaction::write(ADDRESS, vec![0x01, 0x85, 0x83]),
        I2cTransaction::write(ADDRESS, vec![0x02, 0x80, 0x00]),
        I2cTransaction::write(ADDRESS, vec![0x03, 0x7F, 0xFF]),
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x85, 0x83]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x00, 0x01]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let config = Config::<Ads1113>::default();
    let mut adc: Ads1x1x<_, Ads1113> = Ads1x1x::new(i2c.clone());

    let value = adc
        .get_ssc_measurement(Some(&config), Unit::Micro, &mut NoopDelay::new())
        .unwrap();
    assert_eq!(value, 63);

    i2c.done();
}

#[test]
fn single_shot_in_continuous_mode_is_rejected() {
    // With an explicit continuous-mode configuration the conflict is caught
    // before any bus traffic.
    let mut i2c = I2cMock::new(&[]);

    let mut config = Config::<Ads1115>::default();
    config.dom = Dom::Ccm;

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());
    assert_eq!(
        adc.get_ssc_measurement(Some(&config), Unit::Micro, &mut NoopDelay::new()),
        Err(Error::ModeConflict)
    );

    i2c.done();

    // Without one, the conflict is detected from the device configuration.
    let expectations = [I2cTransaction::write_read(
        ADDRESS,
        vec![0x01],
        vec![0x04, 0x83],
    )];
    let mut i2c = I2cMock::new(&expectations);

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());
    assert_eq!(
        adc.get_ssc_measurement(None, Unit::Micro, &mut NoopDelay::new()),
        Err(Error::ModeConflict)
    );

    i2c.done();
}

#[test]
fn continuous_measurement_reads_the_latest_conversion() {
    let expectations = [
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x04, 0x43]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x9F, 0xFF]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());

    let value = adc.get_ccm_measurement(Unit::Micro).unwrap();
    assert_eq!(value, -1_536_109);

    i2c.done();
}

#[test]
fn continuous_measurement_in_single_shot_mode_is_rejected() {
    let expectations = [I2cTransaction::write_read(
        ADDRESS,
        vec![0x01],
        vec![0x05, 0x83],
    )];
    let mut i2c = I2cMock::new(&expectations);

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());
    assert_eq!(
        adc.get_ccm_measurement(Unit::Steps),
        Err(Error::ModeConflict)
    );

    i2c.done();
}

#[test]
fn conversion_that_never_completes_times_out() {
    // The status bit stays low through the entire polling budget.
    let busy = I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x05, 0x83]);
    let expectations = [
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x05, 0x83]),
        I2cTransaction::write(ADDRESS, vec![0x01, 0x85, 0x83]),
        busy.clone(),
        busy.clone(),
        busy.clone(),
        busy.clone(),
        busy.clone(),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut adc: Ads1x1x<_, Ads1115> = Ads1x1x::new(i2c.clone());
    assert_eq!(
        adc.get_ssc_measurement(None, Unit::Micro, &mut NoopDelay::new()),
        Err(Error::Timeout)
    );

    i2c.done();
}
