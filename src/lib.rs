//! A `no_std` driver for Trellis 4x4 LED keypads built around the HT16K33.
//!
//! Up to eight boards chained on one I2C bus are driven as a single grid of
//! 16 LEDs and 16 buttons per board. Index 0 is the top left key of the first
//! board, index 16 the top left key of the second board and so on.
//!
//! ```ignore
//! use core::cell::RefCell;
//! use embedded_hal_bus::i2c::RefCellDevice;
//! use ht16k33_trellis::Trellis;
//!
//! let bus = RefCell::new(i2c);
//! let mut trellis = Trellis::new_with_i2c([
//!     (RefCellDevice::new(&bus), 0x70),
//!     (RefCellDevice::new(&bus), 0x71),
//! ])?;
//!
//! loop {
//!     let events = trellis.read_buttons()?;
//!     for &key in &events.pressed {
//!         trellis.set_led(key, true)?;
//!     }
//!     for &key in &events.released {
//!         trellis.set_led(key, false)?;
//!     }
//!     delay.delay_ms(100);
//! }
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod device;
pub mod i2c;
pub mod led;
pub mod state;
pub mod trellis;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use device::BoardDevice;
pub use i2c::I2cAdapter;
pub use led::Leds;
pub use trellis::{ButtonEvents, Trellis};

use embedded_hal::i2c::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Blink rate, brightness or configuration out of range.
    InvalidArgument,
    /// LED or button index past the last board.
    IndexOutOfRange,
    /// No boards, or more than the bus can address.
    ConfigurationError,
    /// The transport failed, carrying its error unchanged.
    Bus(E),
}

impl<E> embedded_hal::i2c::Error for Error<E>
where
    E: embedded_hal::i2c::Error,
{
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Bus(error) => error.kind(),
            _ => ErrorKind::Other,
        }
    }
}
