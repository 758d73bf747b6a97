//! Register address and bit-field table
//!
//! Raw addresses and masks as listed in the MAX30101 datasheet register map.
//! The typed registers in the sibling modules are built on top of these values;
//! they are exported for callers that prefer [`Device::write_reg8`](crate::Device::write_reg8)
//! and friends.
//!
//! Masks follow the read-modify-write convention: a `*_MASK` keeps every bit
//! *except* the field it names, so `(old & MASK) | VALUE` replaces the field.

/// 7-bit I2C address of the sensor
pub const I2C_ADDRESS: u8 = 0x57;
/// 8-bit write address (`I2C_ADDRESS << 1`)
pub const WRITE_ADDRESS: u8 = 0xAE;
/// 8-bit read address (`I2C_ADDRESS << 1 | 1`)
pub const READ_ADDRESS: u8 = 0xAF;

// Status
pub const INT_STATUS_1: u8 = 0x00;
pub const INT_STATUS_2: u8 = 0x01;
pub const INT_ENABLE_1: u8 = 0x02;
pub const INT_ENABLE_2: u8 = 0x03;

// FIFO
pub const FIFO_WRITE_PTR: u8 = 0x04;
pub const FIFO_OVERFLOW: u8 = 0x05;
pub const FIFO_READ_PTR: u8 = 0x06;
pub const FIFO_DATA: u8 = 0x07;

// Configuration
pub const FIFO_CONFIG: u8 = 0x08;
pub const MODE_CONFIG: u8 = 0x09;
/// Particle-sensing configuration, listed as "SpO2 configuration" in the datasheet
pub const SPO2_CONFIG: u8 = 0x0A;
pub const LED1_PULSE_AMP: u8 = 0x0C;
pub const LED2_PULSE_AMP: u8 = 0x0D;
pub const LED3_PULSE_AMP: u8 = 0x0E;
pub const LED_PROX_AMP: u8 = 0x10;
pub const MULTI_LED_CONFIG_1: u8 = 0x11;
pub const MULTI_LED_CONFIG_2: u8 = 0x12;

// Die temperature
pub const DIE_TEMP_INT: u8 = 0x1F;
pub const DIE_TEMP_FRAC: u8 = 0x20;
pub const DIE_TEMP_CONFIG: u8 = 0x21;

// Proximity
pub const PROX_INT_THRESH: u8 = 0x30;

// Part ID
pub const REVISION_ID: u8 = 0xFE;
pub const PART_ID: u8 = 0xFF;
/// Value of [`PART_ID`] on every MAX30101 (shared with the MAX30102)
pub const EXPECTED_PART_ID: u8 = 0x15;

// Interrupt enables (datasheet pg. 13-14)
pub const INT_A_FULL_MASK: u8 = 0x7F;
pub const INT_A_FULL_ENABLE: u8 = 0x80;
pub const INT_A_FULL_DISABLE: u8 = 0x00;

pub const INT_DATA_RDY_MASK: u8 = 0xBF;
pub const INT_DATA_RDY_ENABLE: u8 = 0x40;
pub const INT_DATA_RDY_DISABLE: u8 = 0x00;

pub const INT_ALC_OVF_MASK: u8 = 0xDF;
pub const INT_ALC_OVF_ENABLE: u8 = 0x20;
pub const INT_ALC_OVF_DISABLE: u8 = 0x00;

pub const INT_PROX_INT_MASK: u8 = 0xEF;
pub const INT_PROX_INT_ENABLE: u8 = 0x10;
pub const INT_PROX_INT_DISABLE: u8 = 0x00;

pub const INT_DIE_TEMP_RDY_MASK: u8 = 0xFD;
pub const INT_DIE_TEMP_RDY_ENABLE: u8 = 0x02;
pub const INT_DIE_TEMP_RDY_DISABLE: u8 = 0x00;

// FIFO configuration (pg. 18)
pub const SAMPLE_AVG_MASK: u8 = 0x1F;
pub const SAMPLE_AVG_1: u8 = 0x00;
pub const SAMPLE_AVG_2: u8 = 0x20;
pub const SAMPLE_AVG_4: u8 = 0x40;
pub const SAMPLE_AVG_8: u8 = 0x60;
pub const SAMPLE_AVG_16: u8 = 0x80;
pub const SAMPLE_AVG_32: u8 = 0xA0;

pub const ROLLOVER_MASK: u8 = 0xEF;
pub const ROLLOVER_ENABLE: u8 = 0x10;
pub const ROLLOVER_DISABLE: u8 = 0x00;

pub const A_FULL_MASK: u8 = 0xF0;
/// Interrupt fires with 29 unread samples left in the FIFO (32 - 3)
pub const A_FULL_29: u8 = 0x03;

// Mode configuration (pg. 19)
pub const SHUTDOWN_MASK: u8 = 0x7F;
pub const SHUTDOWN: u8 = 0x80;
pub const WAKEUP: u8 = 0x00;

pub const RESET_MASK: u8 = 0xBF;
pub const RESET: u8 = 0x40;

pub const MODE_MASK: u8 = 0xF8;
pub const MODE_RED_ONLY: u8 = 0x02;
pub const MODE_RED_IR: u8 = 0x03;
pub const MODE_MULTI_LED: u8 = 0x07;

// Particle sensing configuration (pg. 19-20)
pub const ADC_RANGE_MASK: u8 = 0x9F;
pub const ADC_RANGE_2048: u8 = 0x00;
pub const ADC_RANGE_4096: u8 = 0x20;
pub const ADC_RANGE_8192: u8 = 0x40;
pub const ADC_RANGE_16384: u8 = 0x60;

pub const SAMPLE_RATE_MASK: u8 = 0xE3;
pub const SAMPLE_RATE_50: u8 = 0x00;
pub const SAMPLE_RATE_100: u8 = 0x04;
pub const SAMPLE_RATE_200: u8 = 0x08;
pub const SAMPLE_RATE_400: u8 = 0x0C;
pub const SAMPLE_RATE_800: u8 = 0x10;
pub const SAMPLE_RATE_1000: u8 = 0x14;
pub const SAMPLE_RATE_1600: u8 = 0x18;
pub const SAMPLE_RATE_3200: u8 = 0x1C;

pub const PULSE_WIDTH_MASK: u8 = 0xFC;
pub const PULSE_WIDTH_69: u8 = 0x00;
pub const PULSE_WIDTH_118: u8 = 0x01;
pub const PULSE_WIDTH_215: u8 = 0x02;
pub const PULSE_WIDTH_411: u8 = 0x03;

// Multi-LED mode control (pg. 22)
pub const SLOT1_MASK: u8 = 0xF8;
pub const SLOT2_MASK: u8 = 0x8F;
pub const SLOT3_MASK: u8 = 0xF8;
pub const SLOT4_MASK: u8 = 0x8F;

pub const SLOT_NONE: u8 = 0x00;
pub const SLOT_RED_LED: u8 = 0x01;
pub const SLOT_IR_LED: u8 = 0x02;
pub const SLOT_GREEN_LED: u8 = 0x03;
pub const SLOT_NONE_PILOT: u8 = 0x04;
pub const SLOT_RED_PILOT: u8 = 0x05;
pub const SLOT_IR_PILOT: u8 = 0x06;
pub const SLOT_GREEN_PILOT: u8 = 0x07;

// Start-up values written by `Device::setup`, as raw bytes for callers going
// through `Device::write_reg8` or `RawDevice::set_regs`. The typed defaults
// (`FifoConfig`, `ModeConfig`, `Led1PulseAmplitude`, `MultiLedControl1`) encode
// to these bytes.
/// Average 8, roll-over enabled, almost-full at 29 unread samples
pub const DEFAULT_FIFO_CONFIG: u8 = SAMPLE_AVG_8 | ROLLOVER_ENABLE | A_FULL_29;
/// Heart-rate mode, red LED only
pub const DEFAULT_MODE_CONFIG: u8 = MODE_RED_ONLY;
/// LED1 drive current, ~6.2mA
pub const DEFAULT_LED1_PULSE_AMP: u8 = 0x1F;
/// Slot 1 and slot 2 both drive the red LED
pub const DEFAULT_MULTI_LED_CONFIG_1: u8 = SLOT_RED_LED | (SLOT_RED_LED << 4);
