//! FIFO related registers
//!
//! The MAX30101 buffers up to 32 samples in an on-chip FIFO. This module
//! covers the registers describing how samples enter that FIFO (averaging,
//! roll-over, almost-full threshold) and the raw pointer registers.
//!
//! Draining the FIFO and decoding samples is left to the application; the
//! pointer registers are exposed for completeness only.

use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

use super::map;

/// Number of on-chip samples averaged into one FIFO sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleAverage {
    /// No averaging
    One = 0,
    Two = 1,
    Four = 2,
    Eight = 3,
    Sixteen = 4,
    ThirtyTwo = 5,
}

impl SampleAverage {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Four,
            3 => Self::Eight,
            4 => Self::Sixteen,
            // 0b101, 0b110 and 0b111 all select 32
            _ => Self::ThirtyTwo,
        }
    }
}

/// FIFO configuration register (address: 0x08)
///
/// # Important Notes
/// - With roll-over disabled the FIFO stops updating once full
/// - `almost_full` is the number of *free* slots left when the
///   almost-full interrupt fires, 0 = 32 unread samples, 15 = 17
#[register(0x08u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoConfig {
    /// Sample averaging (bits 7:5)
    pub sample_average: SampleAverage,
    /// FIFO roll-over on full (bit 4)
    pub rollover: bool,
    /// FIFO almost-full value (bits 3:0)
    pub almost_full: u8,
}

impl Default for FifoConfig {
    fn default() -> Self {
        match Self::from_bytes([map::DEFAULT_FIFO_CONFIG]) {
            Ok(config) => config,
            Err(never) => match never {},
        }
    }
}

/// FIFO write pointer register (address: 0x04)
///
/// Points to the location where the next sample will be written.
#[register(0x04u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoWritePointer {
    /// Pointer value, 0-31
    pub value: u8,
}

/// Overflow counter register (address: 0x05)
///
/// Counts samples lost while the FIFO was full; saturates at 0x1F.
#[register(0x05u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverflowCounter {
    pub value: u8,
}

/// FIFO read pointer register (address: 0x06)
#[register(0x06u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoReadPointer {
    /// Pointer value, 0-31
    pub value: u8,
}

impl FromByteArray for FifoConfig {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            sample_average: SampleAverage::from_bits(bytes[0] >> 5),
            rollover: bytes[0] & map::ROLLOVER_ENABLE != 0,
            almost_full: bytes[0] & !map::A_FULL_MASK,
        })
    }
}

impl ToByteArray for FifoConfig {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([((self.sample_average as u8) << 5)
            | ((self.rollover as u8) << 4)
            | (self.almost_full & !map::A_FULL_MASK)])
    }
}

impl FromByteArray for FifoWritePointer {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            value: bytes[0] & 0x1F,
        })
    }
}

impl ToByteArray for FifoWritePointer {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.value & 0x1F])
    }
}

impl FromByteArray for OverflowCounter {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            value: bytes[0] & 0x1F,
        })
    }
}

impl ToByteArray for OverflowCounter {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.value & 0x1F])
    }
}

impl FromByteArray for FifoReadPointer {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            value: bytes[0] & 0x1F,
        })
    }
}

impl ToByteArray for FifoReadPointer {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.value & 0x1F])
    }
}
