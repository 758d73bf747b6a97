//! MAX30101 Device Interface
//!
//! This module provides the byte-level register interface for the MAX30101 over I2C,
//! along with the start-up sequence that puts the sensor into a usable state.
//! It supports both synchronous and asynchronous operations.
//!
//! Every register access is followed by a fixed delay ([`REGISTER_DELAY_MS`]) and the
//! start-up sequence adds another delay ([`SETUP_STEP_DELAY_MS`]) after each step.
//!
//! # Example
//! ```no_run
//! use embedded_hal::{delay::DelayNs, i2c::I2c};
//! use max30101::{Device, Error, registers::Led2PulseAmplitude};
//!
//! fn start<I2C: I2c, D: DelayNs>(i2c: I2C, delay: D) -> Result<Device<I2C, D>, Error> {
//!     let mut device = Device::new(i2c, delay);
//!     device.setup()?;
//!
//!     // Typed access
//!     device.write_register(Led2PulseAmplitude { current: 0x24 })?;
//!
//!     // Raw access
//!     let mode = device.read_reg8(0x09)?;
//!
//!     Ok(device)
//! }
//! ```

use core::convert::Infallible;

use regiface::{errors::Error as RegifaceError, ReadableRegister, WritableRegister};

use crate::config::{SetupConfig, REGISTER_DELAY_MS, SETUP_STEP_DELAY_MS};
use crate::registers::{encode, map, PartId, RevisionId};

/// Main device interface for the MAX30101.
///
/// Owns the I2C bus and a delay provider. A freshly created device is not
/// configured; it becomes configured once [`setup`](Device::setup) succeeds.
pub struct Device<I2C, D> {
    i2c: I2C,
    delay: D,
    configured: bool,
}

impl<I2C, D> Device<I2C, D> {
    /// Creates a new Device instance wrapping the provided I2C bus and delay.
    ///
    /// Nothing is sent on the bus until a method is called.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            configured: false,
        }
    }

    /// Releases the underlying I2C bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Returns true once the start-up sequence has completed.
    ///
    /// Cleared again by a failed setup or a [`reset`](Device::reset).
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

impl<I2C, D> Device<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    /// Writes one byte to a register.
    ///
    /// The delay is applied whether or not the bus write succeeded.
    ///
    /// # Errors
    /// * `RegifaceError::BusError` - I2C communication failed
    pub fn write_reg8(&mut self, address: u8, value: u8) -> Result<(), RegifaceError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("write {=u8:#x} <- {=u8:#x}", address, value);

        let result = self.i2c.write(map::I2C_ADDRESS, &[address, value]);
        self.delay.delay_ms(REGISTER_DELAY_MS);

        result.map_err(|_| RegifaceError::BusError)
    }

    /// Reads one byte from a register.
    ///
    /// The register address is sent in its own write, followed by a separate read.
    ///
    /// # Errors
    /// * `RegifaceError::BusError` - I2C communication failed
    pub fn read_reg8(&mut self, address: u8) -> Result<u8, RegifaceError> {
        let mut value = [0u8];

        let result = self.i2c.write(map::I2C_ADDRESS, &[address]);
        self.delay.delay_ms(REGISTER_DELAY_MS);
        result.map_err(|_| RegifaceError::BusError)?;

        let result = self.i2c.read(map::I2C_ADDRESS, &mut value);
        self.delay.delay_ms(REGISTER_DELAY_MS);
        result.map_err(|_| RegifaceError::BusError)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("read {=u8:#x} -> {=u8:#x}", address, value[0]);

        Ok(value[0])
    }

    /// Reads a register value from the device.
    ///
    /// # Errors
    /// * `RegifaceError::BusError` - I2C communication failed
    /// * `RegifaceError::DeserializationError` - Failed to parse register value
    pub fn read_register<R>(&mut self) -> Result<R, RegifaceError>
    where
        R: ReadableRegister<IdType = u8, Array = [u8; 1]>,
    {
        let value = self.read_reg8(R::id())?;
        R::from_bytes([value]).map_err(|_| RegifaceError::DeserializationError)
    }

    /// Writes a value to a device register.
    ///
    /// # Errors
    /// * `RegifaceError::BusError` - I2C communication failed
    pub fn write_register<R>(&mut self, register: R) -> Result<(), RegifaceError>
    where
        R: WritableRegister<IdType = u8, Error = Infallible, Array = [u8; 1]>,
    {
        let (address, value) = encode(register);
        self.write_reg8(address, value)
    }

    /// Runs the default start-up sequence.
    ///
    /// See [`SetupConfig`] for the values written.
    pub fn setup(&mut self) -> Result<(), RegifaceError> {
        self.setup_with(&SetupConfig::default())
    }

    /// Runs the start-up sequence with caller supplied register values.
    ///
    /// Writes FIFO configuration, mode configuration, LED1 pulse amplitude and
    /// multi-LED control 1, in that order. The first failing write aborts the
    /// sequence and the device stays unconfigured.
    pub fn setup_with(&mut self, config: &SetupConfig) -> Result<(), RegifaceError> {
        self.configured = false;

        for (address, value) in config.sequence() {
            self.write_reg8(address, value)?;
            self.delay.delay_ms(SETUP_STEP_DELAY_MS);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("max30101 configured: {}", config);

        self.configured = true;
        Ok(())
    }

    /// Returns the part ID, 0x15 on a MAX30101.
    pub fn part_id(&mut self) -> Result<u8, RegifaceError> {
        Ok(self.read_register::<PartId>()?.value)
    }

    /// Returns the silicon revision ID.
    pub fn revision_id(&mut self) -> Result<u8, RegifaceError> {
        Ok(self.read_register::<RevisionId>()?.value)
    }

    /// Verifies communication through the part ID register.
    pub fn is_reachable(&mut self) -> Result<bool, RegifaceError> {
        Ok(self.part_id()? == map::EXPECTED_PART_ID)
    }

    /// Triggers a power-on reset.
    ///
    /// All registers go back to their power-on values, so the device has to be set
    /// up again afterwards.
    pub fn reset(&mut self) -> Result<(), RegifaceError> {
        self.modify_reg8(map::MODE_CONFIG, map::RESET_MASK, map::RESET)?;
        self.configured = false;

        #[cfg(feature = "defmt")]
        defmt::debug!("max30101 reset");

        Ok(())
    }

    /// Enters power-save mode. Register contents are retained.
    pub fn shutdown(&mut self) -> Result<(), RegifaceError> {
        self.modify_reg8(map::MODE_CONFIG, map::SHUTDOWN_MASK, map::SHUTDOWN)
    }

    /// Leaves power-save mode.
    pub fn wake_up(&mut self) -> Result<(), RegifaceError> {
        self.modify_reg8(map::MODE_CONFIG, map::SHUTDOWN_MASK, map::WAKEUP)
    }

    /// Keeps the bits set in `mask` and ORs in `value`.
    fn modify_reg8(&mut self, address: u8, mask: u8, value: u8) -> Result<(), RegifaceError> {
        let current = self.read_reg8(address)?;
        self.write_reg8(address, (current & mask) | value)
    }
}

impl<I2C, D> Device<I2C, D>
where
    I2C: embedded_hal_async::i2c::I2c,
    D: embedded_hal_async::delay::DelayNs,
{
    /// Asynchronously writes one byte to a register.
    ///
    /// This is the async version of [`write_reg8`](Device::write_reg8).
    pub async fn write_reg8_async(&mut self, address: u8, value: u8) -> Result<(), RegifaceError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("write {=u8:#x} <- {=u8:#x}", address, value);

        let result = self.i2c.write(map::I2C_ADDRESS, &[address, value]).await;
        self.delay.delay_ms(REGISTER_DELAY_MS).await;

        result.map_err(|_| RegifaceError::BusError)
    }

    /// Asynchronously reads one byte from a register.
    ///
    /// This is the async version of [`read_reg8`](Device::read_reg8).
    pub async fn read_reg8_async(&mut self, address: u8) -> Result<u8, RegifaceError> {
        let mut value = [0u8];

        let result = self.i2c.write(map::I2C_ADDRESS, &[address]).await;
        self.delay.delay_ms(REGISTER_DELAY_MS).await;
        result.map_err(|_| RegifaceError::BusError)?;

        let result = self.i2c.read(map::I2C_ADDRESS, &mut value).await;
        self.delay.delay_ms(REGISTER_DELAY_MS).await;
        result.map_err(|_| RegifaceError::BusError)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("read {=u8:#x} -> {=u8:#x}", address, value[0]);

        Ok(value[0])
    }

    /// Asynchronously reads a register value from the device.
    ///
    /// This is the async version of [`read_register`](Device::read_register).
    pub async fn read_register_async<R>(&mut self) -> Result<R, RegifaceError>
    where
        R: ReadableRegister<IdType = u8, Array = [u8; 1]>,
    {
        let value = self.read_reg8_async(R::id()).await?;
        R::from_bytes([value]).map_err(|_| RegifaceError::DeserializationError)
    }

    /// Asynchronously writes a value to a device register.
    ///
    /// This is the async version of [`write_register`](Device::write_register).
    pub async fn write_register_async<R>(&mut self, register: R) -> Result<(), RegifaceError>
    where
        R: WritableRegister<IdType = u8, Error = Infallible, Array = [u8; 1]>,
    {
        let (address, value) = encode(register);
        self.write_reg8_async(address, value).await
    }

    /// Asynchronously runs the default start-up sequence.
    ///
    /// This is the async version of [`setup`](Device::setup).
    pub async fn setup_async(&mut self) -> Result<(), RegifaceError> {
        self.setup_with_async(&SetupConfig::default()).await
    }

    /// Asynchronously runs the start-up sequence with caller supplied register values.
    ///
    /// This is the async version of [`setup_with`](Device::setup_with).
    pub async fn setup_with_async(&mut self, config: &SetupConfig) -> Result<(), RegifaceError> {
        self.configured = false;

        for (address, value) in config.sequence() {
            self.write_reg8_async(address, value).await?;
            self.delay.delay_ms(SETUP_STEP_DELAY_MS).await;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("max30101 configured: {}", config);

        self.configured = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{FifoConfig, Led2PulseAmplitude, LedMode, ModeConfig, SampleAverage};
    use crate::test_support::{block_on, RecordingDelay};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec;

    const ADDR: u8 = map::I2C_ADDRESS;

    fn startup_transactions() -> [I2cTransaction; 4] {
        [
            I2cTransaction::write(ADDR, vec![0x08, 0x73]),
            I2cTransaction::write(ADDR, vec![0x09, 0x02]),
            I2cTransaction::write(ADDR, vec![0x0C, 0x1F]),
            I2cTransaction::write(ADDR, vec![0x11, 0x11]),
        ]
    }

    #[test]
    fn new_device_is_not_configured_and_silent() {
        let device = Device::new(I2cMock::new(&[]), RecordingDelay::default());
        assert!(!device.is_configured());

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert!(delay.ms.is_empty());
    }

    #[test]
    fn write_reg8_sends_address_and_value_then_waits() {
        let i2c = I2cMock::new(&[I2cTransaction::write(ADDR, vec![0x0D, 0x24])]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        device.write_reg8(0x0D, 0x24).unwrap();

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5]);
    }

    #[test]
    fn write_reg8_waits_even_when_bus_fails() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x0D, 0x24]).with_error(ErrorKind::Other)
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(matches!(
            device.write_reg8(0x0D, 0x24),
            Err(RegifaceError::BusError)
        ));

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5]);
    }

    #[test]
    fn read_reg8_writes_address_then_reads_one_byte() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0xFF]),
            I2cTransaction::read(ADDR, vec![0x15]),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert_eq!(device.read_reg8(0xFF).unwrap(), 0x15);

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5, 5]);
    }

    #[test]
    fn read_reg8_skips_read_after_failed_address_write() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0xFF]).with_error(ErrorKind::Other)
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(matches!(device.read_reg8(0xFF), Err(RegifaceError::BusError)));

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5]);
    }

    #[test]
    fn read_reg8_reports_failed_read() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0xFE]),
            I2cTransaction::read(ADDR, vec![0x00]).with_error(ErrorKind::Other),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(matches!(device.read_reg8(0xFE), Err(RegifaceError::BusError)));

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5, 5]);
    }

    #[test]
    fn setup_writes_startup_sequence_with_delays() {
        let i2c = I2cMock::new(&startup_transactions());
        let mut device = Device::new(i2c, RecordingDelay::default());

        device.setup().unwrap();
        assert!(device.is_configured());

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5; 8]);
    }

    #[test]
    fn setup_aborts_on_first_failure() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x08, 0x73]),
            I2cTransaction::write(ADDR, vec![0x09, 0x02]).with_error(ErrorKind::Other),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(matches!(device.setup(), Err(RegifaceError::BusError)));
        assert!(!device.is_configured());

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5, 5, 5]);
    }

    #[test]
    fn setup_with_uses_caller_values() {
        let config = SetupConfig {
            fifo: FifoConfig {
                sample_average: SampleAverage::One,
                rollover: false,
                almost_full: 0,
            },
            mode: ModeConfig {
                mode: LedMode::RedIr,
                ..Default::default()
            },
            ..Default::default()
        };
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x08, 0x00]),
            I2cTransaction::write(ADDR, vec![0x09, 0x03]),
            I2cTransaction::write(ADDR, vec![0x0C, 0x1F]),
            I2cTransaction::write(ADDR, vec![0x11, 0x11]),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        device.setup_with(&config).unwrap();
        assert!(device.is_configured());

        device.release().0.done();
    }

    #[test]
    fn read_register_decodes_value() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x09]),
            I2cTransaction::read(ADDR, vec![0x83]),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        let mode: ModeConfig = device.read_register().unwrap();
        assert!(mode.shutdown);
        assert_eq!(mode.mode, LedMode::RedIr);

        device.release().0.done();
    }

    #[test]
    fn read_register_reports_undecodable_value() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x09]),
            I2cTransaction::read(ADDR, vec![0x00]),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(matches!(
            device.read_register::<ModeConfig>(),
            Err(RegifaceError::DeserializationError)
        ));

        device.release().0.done();
    }

    #[test]
    fn is_reachable_checks_part_id() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0xFF]),
            I2cTransaction::read(ADDR, vec![0x15]),
            I2cTransaction::write(ADDR, vec![0xFF]),
            I2cTransaction::read(ADDR, vec![0x11]),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(device.is_reachable().unwrap());
        assert!(!device.is_reachable().unwrap());

        device.release().0.done();
    }

    #[test]
    fn reset_sets_reset_bit_and_clears_configured() {
        let mut transactions = startup_transactions().to_vec();
        transactions.extend([
            I2cTransaction::write(ADDR, vec![0x09]),
            I2cTransaction::read(ADDR, vec![0x02]),
            I2cTransaction::write(ADDR, vec![0x09, 0x42]),
        ]);
        let mut device = Device::new(I2cMock::new(&transactions), RecordingDelay::default());

        device.setup().unwrap();
        device.reset().unwrap();
        assert!(!device.is_configured());

        device.release().0.done();
    }

    #[test]
    fn shutdown_and_wake_up_preserve_mode_bits() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x09]),
            I2cTransaction::read(ADDR, vec![0x07]),
            I2cTransaction::write(ADDR, vec![0x09, 0x87]),
            I2cTransaction::write(ADDR, vec![0x09]),
            I2cTransaction::read(ADDR, vec![0x87]),
            I2cTransaction::write(ADDR, vec![0x09, 0x07]),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        device.shutdown().unwrap();
        device.wake_up().unwrap();

        device.release().0.done();
    }

    #[test]
    fn async_setup_matches_blocking_setup() {
        let i2c = I2cMock::new(&startup_transactions());
        let mut device = Device::new(i2c, RecordingDelay::default());

        block_on(device.setup_async()).unwrap();
        assert!(device.is_configured());

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5; 8]);
    }

    #[test]
    fn async_read_register_decodes_value() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0xFE]),
            I2cTransaction::read(ADDR, vec![0x03]),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        let revision: RevisionId = block_on(device.read_register_async()).unwrap();
        assert_eq!(revision.value, 0x03);

        device.release().0.done();
    }

    #[test]
    fn write_register_encodes_typed_value() {
        let i2c = I2cMock::new(&[I2cTransaction::write(ADDR, vec![0x0D, 0x24])]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        device
            .write_register(Led2PulseAmplitude { current: 0x24 })
            .unwrap();

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5]);
    }

    #[test]
    fn async_write_register_encodes_typed_value() {
        let i2c = I2cMock::new(&[I2cTransaction::write(ADDR, vec![0x0D, 0x24])]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        block_on(device.write_register_async(Led2PulseAmplitude { current: 0x24 })).unwrap();

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5]);
    }

    #[test]
    fn async_write_reg8_waits_even_when_bus_fails() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x0D, 0x24]).with_error(ErrorKind::Other)
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(matches!(
            block_on(device.write_reg8_async(0x0D, 0x24)),
            Err(RegifaceError::BusError)
        ));

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5]);
    }

    #[test]
    fn async_read_reg8_skips_read_after_failed_address_write() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0xFF]).with_error(ErrorKind::Other)
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(matches!(
            block_on(device.read_reg8_async(0xFF)),
            Err(RegifaceError::BusError)
        ));

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5]);
    }

    #[test]
    fn async_setup_aborts_on_first_failure() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x08, 0x73]),
            I2cTransaction::write(ADDR, vec![0x09, 0x02]).with_error(ErrorKind::Other),
        ]);
        let mut device = Device::new(i2c, RecordingDelay::default());

        assert!(matches!(
            block_on(device.setup_async()),
            Err(RegifaceError::BusError)
        ));
        assert!(!device.is_configured());

        let (mut i2c, delay) = device.release();
        i2c.done();
        assert_eq!(delay.ms, vec![5, 5, 5]);
    }

    #[test]
    fn failed_async_setup_clears_previous_configuration() {
        let mut transactions = startup_transactions().to_vec();
        transactions.push(
            I2cTransaction::write(ADDR, vec![0x08, 0x73]).with_error(ErrorKind::Other),
        );
        let mut device = Device::new(I2cMock::new(&transactions), RecordingDelay::default());

        device.setup().unwrap();
        assert!(device.is_configured());
        assert!(block_on(device.setup_async()).is_err());
        assert!(!device.is_configured());

        device.release().0.done();
    }
}
