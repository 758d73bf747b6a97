//! Generic register access through a caller supplied bus
//!
//! [`RawDevice`] does not own an I2C peripheral directly. Instead the caller
//! provides any [`RegisterBus`] implementation, which receives the device ID
//! (normally the I2C address) together with the register address and buffer.
//! This suits platforms where the two-wire driver is not an `embedded-hal`
//! implementation, or where several sensors share one transport.
//!
//! Every access is followed by a [`RAW_ACCESS_DELAY_MS`] delay, and every bus
//! failure is reported as [`RegifaceError::BusError`] regardless of its cause.

use regiface::errors::Error as RegifaceError;

use crate::config::RAW_ACCESS_DELAY_MS;

/// Register level transport used by [`RawDevice`].
pub trait RegisterBus {
    type Error;

    /// Reads `data.len()` bytes starting at `register`.
    fn read(&mut self, device_id: u8, register: u8, data: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `data` starting at `register`.
    fn write(&mut self, device_id: u8, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// Register access path over a caller supplied [`RegisterBus`].
pub struct RawDevice<B, D> {
    id: u8,
    bus: B,
    delay: D,
}

impl<B, D> RawDevice<B, D> {
    /// Creates a new instance addressing the device `id` on `bus`.
    pub fn new(id: u8, bus: B, delay: D) -> Self {
        Self { id, bus, delay }
    }

    /// Returns the device ID passed to every bus call.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Releases the bus and delay.
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

impl<B, D> RawDevice<B, D>
where
    B: RegisterBus,
    D: embedded_hal::delay::DelayNs,
{
    /// Reads `data.len()` bytes starting at `register`.
    ///
    /// # Errors
    /// * `RegifaceError::BusError` - the bus reported a failure
    pub fn get_regs(&mut self, register: u8, data: &mut [u8]) -> Result<(), RegifaceError> {
        let result = self.bus.read(self.id, register, data);
        self.delay.delay_ms(RAW_ACCESS_DELAY_MS);

        result.map_err(|_| RegifaceError::BusError)
    }

    /// Writes `data` starting at `register`.
    ///
    /// # Errors
    /// * `RegifaceError::BusError` - the bus reported a failure
    pub fn set_regs(&mut self, register: u8, data: &[u8]) -> Result<(), RegifaceError> {
        let result = self.bus.write(self.id, register, data);
        self.delay.delay_ms(RAW_ACCESS_DELAY_MS);

        result.map_err(|_| RegifaceError::BusError)
    }
}

/// [`RegisterBus`] on top of an `embedded-hal` I2C bus.
///
/// Reads use a write-read with repeated start. Writes send the register
/// address and the data within one transaction.
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C> I2cBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterBus for I2cBus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn read(&mut self, device_id: u8, register: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(device_id, &[register], data)
    }

    fn write(&mut self, device_id: u8, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.transaction(
            device_id,
            &mut [
                embedded_hal::i2c::Operation::Write(&[register]),
                embedded_hal::i2c::Operation::Write(data),
            ],
        )
    }
}
