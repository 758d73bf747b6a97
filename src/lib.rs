#![cfg_attr(not(test), no_std)]
//! MAX30101 Sensor Driver
//!
//! This crate provides a small, type-safe interface for the Maxim MAX30101 pulse oximetry
//! and heart-rate sensor. The MAX30101 integrates red, IR and green LEDs, a photodetector,
//! an 18-bit ADC and a 32-sample FIFO behind an I2C interface.
//!
//! # Features
//! - I2C address: 0x57 (7-bit)
//! - Modes: heart-rate (red only), SpO2 (red + IR), multi-LED (up to 4 slots)
//! - LED drive current: 0-51mA in 0.2mA steps
//! - Sample rate: 50-3200 samples per second
//! - On-chip sample averaging up to 32 samples
//!
//! # Architecture
//! The driver is organized into several modules:
//!
//! - [`device`]: Main device interface for hardware interaction
//!   - Byte-level register reads and writes with fixed settling delays
//!   - Typed register access and the start-up sequence
//!
//! - [`registers`]: Register definitions for direct hardware access
//!   - [`registers::map`]: Raw register addresses and bit masks
//!   - FIFO, mode, LED and status registers as typed structs
//!
//! - [`config`]: Values and delays used during start-up
//!
//! - [`raw`]: Alternate access path over a caller supplied transport
//!
//! # Usage
//! The driver uses the `regiface` crate to provide a type-safe interface for register
//! access. The main entry point is the [`Device`] struct which wraps an I2C bus and a
//! delay provider.
//!
//! Start-up follows a fixed sequence, each write followed by a delay:
//!
//! 1. FIFO configuration: average 8 samples, roll-over, almost-full at 29 samples
//! 2. Mode configuration: heart-rate mode, red LED only
//! 3. LED1 pulse amplitude: 0x1F
//! 4. Multi-LED control 1: slots 1 and 2 on the red LED
//!
//! # Important Notes
//! - Reading samples out of the FIFO and computing heart-rate or SpO2 is left to the
//!   application
//! - Every register access blocks for at least 5ms
//! - A reset returns all registers to power-on values; run the setup again afterwards
//!
//! # Example
//! ```no_run
//! use embedded_hal::{delay::DelayNs, i2c::I2c};
//! use max30101::{Device, Error};
//!
//! fn configure_sensor<I2C: I2c, D: DelayNs>(i2c: I2C, delay: D) -> Result<Device<I2C, D>, Error> {
//!     let mut device = Device::new(i2c, delay);
//!
//!     if device.is_reachable()? {
//!         device.setup()?;
//!     }
//!
//!     Ok(device)
//! }
//! ```

pub use regiface::errors::Error;

pub mod config;
pub mod device;
pub mod raw;
pub mod registers;

#[cfg(test)]
mod test_support;

pub use config::SetupConfig;
pub use device::Device;
pub use raw::{I2cBus, RawDevice, RegisterBus};
pub use registers::*;
