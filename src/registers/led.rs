//! LED drive registers
//!
//! Pulse amplitude registers set the drive current of each LED in steps of
//! 0.2mA (0x00 = off, 0xFF = 51mA). The multi-LED control registers assign
//! an LED to each of the four time slots used in multi-LED mode.

use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

use super::map;

/// LED1 (red) pulse amplitude register (address: 0x0C)
#[register(0x0Cu8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Led1PulseAmplitude {
    /// Drive current in 0.2mA steps
    pub current: u8,
}

impl Default for Led1PulseAmplitude {
    fn default() -> Self {
        Self {
            current: map::DEFAULT_LED1_PULSE_AMP,
        }
    }
}

/// LED2 (IR) pulse amplitude register (address: 0x0D)
#[register(0x0Du8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Led2PulseAmplitude {
    pub current: u8,
}

/// LED3 (green) pulse amplitude register (address: 0x0E)
#[register(0x0Eu8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Led3PulseAmplitude {
    pub current: u8,
}

/// Proximity mode LED pulse amplitude register (address: 0x10)
#[register(0x10u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProximityPulseAmplitude {
    pub current: u8,
}

/// Error type for invalid slot values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidSlotDevice {
    /// The value does not select an LED
    InvalidValue(u8),
}

/// LED driven during a multi-LED time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotDevice {
    /// Slot disabled
    #[default]
    None = 0x00,
    /// LED1, driven with LED1_PA
    Red = 0x01,
    /// LED2, driven with LED2_PA
    Ir = 0x02,
    /// LED3, driven with LED3_PA
    Green = 0x03,
}

impl TryFrom<u8> for SlotDevice {
    type Error = InvalidSlotDevice;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::None),
            0x01 => Ok(Self::Red),
            0x02 => Ok(Self::Ir),
            0x03 => Ok(Self::Green),
            invalid => Err(InvalidSlotDevice::InvalidValue(invalid)),
        }
    }
}

/// Multi-LED mode control register 1 (address: 0x11)
///
/// Slots are sampled in order and sequencing stops at the first disabled slot.
#[register(0x11u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiLedControl1 {
    /// Slot 1 (bits 2:0)
    pub slot1: SlotDevice,
    /// Slot 2 (bits 6:4)
    pub slot2: SlotDevice,
}

impl Default for MultiLedControl1 {
    fn default() -> Self {
        Self {
            slot1: SlotDevice::Red,
            slot2: SlotDevice::Red,
        }
    }
}

/// Multi-LED mode control register 2 (address: 0x12)
#[register(0x12u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiLedControl2 {
    /// Slot 3 (bits 2:0)
    pub slot3: SlotDevice,
    /// Slot 4 (bits 6:4)
    pub slot4: SlotDevice,
}

fn slots_from_byte(byte: u8) -> Result<(SlotDevice, SlotDevice), InvalidSlotDevice> {
    Ok((
        SlotDevice::try_from(byte & !map::SLOT1_MASK)?,
        SlotDevice::try_from((byte & !map::SLOT2_MASK) >> 4)?,
    ))
}

fn slots_to_byte(low: SlotDevice, high: SlotDevice) -> u8 {
    (low as u8) | ((high as u8) << 4)
}

impl FromByteArray for Led1PulseAmplitude {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { current: bytes[0] })
    }
}

impl ToByteArray for Led1PulseAmplitude {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.current])
    }
}

impl FromByteArray for Led2PulseAmplitude {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { current: bytes[0] })
    }
}

impl ToByteArray for Led2PulseAmplitude {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.current])
    }
}

impl FromByteArray for Led3PulseAmplitude {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { current: bytes[0] })
    }
}

impl ToByteArray for Led3PulseAmplitude {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.current])
    }
}

impl FromByteArray for ProximityPulseAmplitude {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { current: bytes[0] })
    }
}

impl ToByteArray for ProximityPulseAmplitude {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.current])
    }
}

impl FromByteArray for MultiLedControl1 {
    type Error = InvalidSlotDevice;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        let (slot1, slot2) = slots_from_byte(bytes[0])?;
        Ok(Self { slot1, slot2 })
    }
}

impl ToByteArray for MultiLedControl1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([slots_to_byte(self.slot1, self.slot2)])
    }
}

impl FromByteArray for MultiLedControl2 {
    type Error = InvalidSlotDevice;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        let (slot3, slot4) = slots_from_byte(bytes[0])?;
        Ok(Self { slot3, slot4 })
    }
}

impl ToByteArray for MultiLedControl2 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([slots_to_byte(self.slot3, self.slot4)])
    }
}
