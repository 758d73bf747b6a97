//! Status, die temperature and identification registers
//!
//! Interrupt status bits are cleared by reading the status register (or
//! reading the FIFO for the FIFO related flags). The driver only exposes
//! the register layout; servicing interrupts is up to the application.

use bitflags::bitflags;
use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

bitflags! {
    /// Interrupt sources reported in status/enable register 1
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Interrupts1: u8 {
        /// FIFO almost full
        const A_FULL = 1 << 7;
        /// New FIFO sample ready
        const PPG_RDY = 1 << 6;
        /// Ambient light cancellation reached its limit
        const ALC_OVF = 1 << 5;
        /// Proximity threshold crossed
        const PROX_INT = 1 << 4;
        /// Power ready after brownout (status only, cannot be enabled)
        const PWR_RDY = 1;
    }
}

bitflags! {
    /// Interrupt sources reported in status/enable register 2
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Interrupts2: u8 {
        /// Die temperature conversion finished
        const DIE_TEMP_RDY = 1 << 1;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Interrupts1 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Interrupts1({=u8:#x})", self.bits());
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Interrupts2 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Interrupts2({=u8:#x})", self.bits());
    }
}

/// Interrupt status 1 register (address: 0x00)
#[register(0x00u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus1 {
    pub flags: Interrupts1,
}

/// Interrupt status 2 register (address: 0x01)
#[register(0x01u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus2 {
    pub flags: Interrupts2,
}

/// Interrupt enable 1 register (address: 0x02)
///
/// `PWR_RDY` is read-only and is dropped on write.
#[register(0x02u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptEnable1 {
    pub flags: Interrupts1,
}

/// Interrupt enable 2 register (address: 0x03)
#[register(0x03u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptEnable2 {
    pub flags: Interrupts2,
}

/// Die temperature integer register (address: 0x1F)
///
/// Two's complement, 1°C per LSB.
#[register(0x1Fu8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DieTemperatureInteger {
    pub degrees: i8,
}

/// Die temperature fraction register (address: 0x20)
///
/// Positive offset in 0.0625°C steps added to the integer part.
#[register(0x20u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DieTemperatureFraction {
    pub sixteenths: u8,
}

/// Die temperature config register (address: 0x21)
///
/// Writing `enable` starts a single conversion; the bit self-clears when done.
#[register(0x21u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DieTemperatureConfig {
    pub enable: bool,
}

/// Proximity interrupt threshold register (address: 0x30)
///
/// Compared against the 8 MSBs of the ADC count.
#[register(0x30u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProximityThreshold {
    pub threshold: u8,
}

/// Revision ID register (address: 0xFE)
#[register(0xFEu8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RevisionId {
    pub value: u8,
}

/// Part ID register (address: 0xFF)
///
/// Always reads [`EXPECTED_PART_ID`](super::map::EXPECTED_PART_ID).
#[register(0xFFu8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PartId {
    pub value: u8,
}

impl FromByteArray for InterruptStatus1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            flags: Interrupts1::from_bits_truncate(bytes[0]),
        })
    }
}

impl FromByteArray for InterruptStatus2 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            flags: Interrupts2::from_bits_truncate(bytes[0]),
        })
    }
}

impl FromByteArray for InterruptEnable1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            flags: Interrupts1::from_bits_truncate(bytes[0]),
        })
    }
}

impl ToByteArray for InterruptEnable1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.flags.difference(Interrupts1::PWR_RDY).bits()])
    }
}

impl FromByteArray for InterruptEnable2 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            flags: Interrupts2::from_bits_truncate(bytes[0]),
        })
    }
}

impl ToByteArray for InterruptEnable2 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.flags.bits()])
    }
}

impl FromByteArray for DieTemperatureInteger {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            degrees: bytes[0] as i8,
        })
    }
}

impl FromByteArray for DieTemperatureFraction {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            sixteenths: bytes[0] & 0x0F,
        })
    }
}

impl FromByteArray for DieTemperatureConfig {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            enable: bytes[0] & 0x01 != 0,
        })
    }
}

impl ToByteArray for DieTemperatureConfig {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.enable as u8])
    }
}

impl FromByteArray for ProximityThreshold {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            threshold: bytes[0],
        })
    }
}

impl ToByteArray for ProximityThreshold {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.threshold])
    }
}

impl FromByteArray for RevisionId {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { value: bytes[0] })
    }
}

impl FromByteArray for PartId {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { value: bytes[0] })
    }
}
