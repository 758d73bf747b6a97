//! Register definitions for the MAX30101
//! Transcribed from the MAX30101 datasheet register map

use core::convert::Infallible;

use regiface::WritableRegister;

mod fifo;
mod led;
pub mod map;
mod mode;
mod status;

pub use fifo::*;
pub use led::*;
pub use mode::*;
pub use status::*;

/// Splits a single byte register into its `(address, value)` pair.
pub(crate) fn encode<R>(register: R) -> (u8, u8)
where
    R: WritableRegister<IdType = u8, Error = Infallible, Array = [u8; 1]>,
{
    match register.to_bytes() {
        Ok([value]) => (R::id(), value),
        Err(never) => match never {},
    }
}
