//! Start-up configuration
//!
//! [`SetupConfig`] holds the four register values written by
//! [`Device::setup_with`](crate::Device::setup_with). Its `Default` is the
//! sequence used by [`Device::setup`](crate::Device::setup):
//!
//! | Step | Register | Value |
//! |---|---|---|
//! | 1 | FIFO configuration (0x08) | 0x73: average 8, roll-over, almost-full 3 |
//! | 2 | Mode configuration (0x09) | 0x02: red only |
//! | 3 | LED1 pulse amplitude (0x0C) | 0x1F |
//! | 4 | Multi-LED control 1 (0x11) | 0x11: slot 1 and 2 red |

use crate::registers::{encode, FifoConfig, Led1PulseAmplitude, ModeConfig, MultiLedControl1};

/// Delay after every byte-level register access, in milliseconds
pub const REGISTER_DELAY_MS: u32 = 5;

/// Extra delay between two steps of the start-up sequence, in milliseconds
pub const SETUP_STEP_DELAY_MS: u32 = 5;

/// Delay after every access through [`RawDevice`](crate::raw::RawDevice), in milliseconds
pub const RAW_ACCESS_DELAY_MS: u32 = 1;

/// Register values written during start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SetupConfig {
    pub fifo: FifoConfig,
    pub mode: ModeConfig,
    pub led1: Led1PulseAmplitude,
    pub slots: MultiLedControl1,
}

impl SetupConfig {
    /// Returns the `(address, value)` writes in the order they are issued.
    pub fn sequence(&self) -> [(u8, u8); 4] {
        [
            encode(self.fifo),
            encode(self.mode),
            encode(self.led1),
            encode(self.slots),
        ]
    }
}
