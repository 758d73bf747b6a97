//! Operating mode and particle-sensing registers
//!
//! - Mode configuration: shutdown, reset and which LED channels are active
//! - SpO2 configuration: ADC full-scale range, sample rate and LED pulse width
//!
//! Sample rate and pulse width are not independent: long pulses limit the
//! maximum sample rate (see table 11 and 12 of the datasheet). The driver
//! does not enforce those limits.

use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

use super::map;

/// Error type for invalid LED mode values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidLedMode {
    /// The value is one of the "do not use" codes
    InvalidValue(u8),
}

/// Active LED channels (mode control bits 2:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    /// Heart-rate mode, red LED only
    RedOnly = 0x02,
    /// SpO2 mode, red and IR
    RedIr = 0x03,
    /// Multi-LED mode, slots configured through the multi-LED control registers
    MultiLed = 0x07,
}

impl TryFrom<u8> for LedMode {
    type Error = InvalidLedMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x02 => Ok(Self::RedOnly),
            0x03 => Ok(Self::RedIr),
            0x07 => Ok(Self::MultiLed),
            invalid => Err(InvalidLedMode::InvalidValue(invalid)),
        }
    }
}

/// Mode configuration register (address: 0x09)
///
/// # Important Notes
/// - In shutdown all registers keep their values; reads and writes still work
/// - The reset bit clears itself once the power-on-reset sequence is done
/// - Every register, including this one, returns to its power-on value on reset
#[register(0x09u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeConfig {
    /// Power-save shutdown (bit 7)
    pub shutdown: bool,
    /// Software reset (bit 6)
    pub reset: bool,
    /// LED mode (bits 2:0)
    pub mode: LedMode,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            shutdown: false,
            reset: false,
            mode: LedMode::RedOnly,
        }
    }
}

/// SpO2 ADC full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcRange {
    /// 2048nA full scale
    #[default]
    Na2048 = 0,
    Na4096 = 1,
    Na8192 = 2,
    Na16384 = 3,
}

/// Effective sample rate in samples per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleRate {
    #[default]
    Sps50 = 0,
    Sps100 = 1,
    Sps200 = 2,
    Sps400 = 3,
    Sps800 = 4,
    Sps1000 = 5,
    Sps1600 = 6,
    Sps3200 = 7,
}

/// LED pulse width, which also sets the ADC resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseWidth {
    /// 69us, 15 bit
    #[default]
    Us69 = 0,
    /// 118us, 16 bit
    Us118 = 1,
    /// 215us, 17 bit
    Us215 = 2,
    /// 411us, 18 bit
    Us411 = 3,
}

impl PulseWidth {
    /// ADC resolution in bits for this pulse width
    pub fn resolution_bits(self) -> u8 {
        15 + self as u8
    }
}

/// SpO2 configuration register (address: 0x0A)
#[register(0x0Au8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpO2Config {
    /// ADC range (bits 6:5)
    pub adc_range: AdcRange,
    /// Sample rate (bits 4:2)
    pub sample_rate: SampleRate,
    /// Pulse width (bits 1:0)
    pub pulse_width: PulseWidth,
}

impl FromByteArray for ModeConfig {
    type Error = InvalidLedMode;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            shutdown: bytes[0] & map::SHUTDOWN != 0,
            reset: bytes[0] & map::RESET != 0,
            mode: LedMode::try_from(bytes[0] & !map::MODE_MASK)?,
        })
    }
}

impl ToByteArray for ModeConfig {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([((self.shutdown as u8) << 7) | ((self.reset as u8) << 6) | self.mode as u8])
    }
}

impl FromByteArray for SpO2Config {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        let adc_range = match (bytes[0] >> 5) & 0x03 {
            0 => AdcRange::Na2048,
            1 => AdcRange::Na4096,
            2 => AdcRange::Na8192,
            _ => AdcRange::Na16384,
        };
        let sample_rate = match (bytes[0] >> 2) & 0x07 {
            0 => SampleRate::Sps50,
            1 => SampleRate::Sps100,
            2 => SampleRate::Sps200,
            3 => SampleRate::Sps400,
            4 => SampleRate::Sps800,
            5 => SampleRate::Sps1000,
            6 => SampleRate::Sps1600,
            _ => SampleRate::Sps3200,
        };
        let pulse_width = match bytes[0] & 0x03 {
            0 => PulseWidth::Us69,
            1 => PulseWidth::Us118,
            2 => PulseWidth::Us215,
            _ => PulseWidth::Us411,
        };

        Ok(Self {
            adc_range,
            sample_rate,
            pulse_width,
        })
    }
}

impl ToByteArray for SpO2Config {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([((self.adc_range as u8) << 5)
            | ((self.sample_rate as u8) << 2)
            | self.pulse_width as u8])
    }
}
