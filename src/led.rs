//! Per LED access to the display buffers of a [`Trellis`].

use crate::device::BoardDevice;
use crate::trellis::Trellis;
use crate::Error;

/// Borrowed view of the LEDs of every board.
///
/// With auto show enabled every `set` refreshes all boards. Disable it with
/// [`Trellis::set_auto_show`] and call [`Leds::show`] once to batch updates.
pub struct Leds<'a, DEV: BoardDevice> {
    trellis: &'a mut Trellis<DEV>,
}

impl<DEV: BoardDevice> Leds<'_, DEV> {
    pub fn len(&self) -> usize {
        self.trellis.num_leds()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the LED at `index` is lit in the buffer.
    ///
    /// # Returns
    /// * Err(Error::IndexOutOfRange) if `index` is past the last board
    pub fn get(&self, index: usize) -> Result<bool, Error<DEV::Error>> {
        self.trellis.is_led_on(index)
    }

    /// Turn the LED at `index` on or off, leaving every other bit of the
    /// display RAM untouched.
    ///
    /// # Returns
    /// * Err(Error::IndexOutOfRange) if `index` is past the last board
    /// * Err(Error::Bus) if auto show is on and a refresh failed
    pub fn set(&mut self, index: usize, on: bool) -> Result<(), Error<DEV::Error>> {
        let (board, local) = self.trellis.locate(index)?;
        self.trellis.bank_mut(board).set_led(local, on);

        if self.trellis.auto_show() {
            self.trellis.show()?;
        }
        Ok(())
    }

    pub fn fill(&mut self, on: bool) -> Result<(), Error<DEV::Error>> {
        self.trellis.fill(on)
    }

    pub fn show(&mut self) -> Result<(), Error<DEV::Error>> {
        self.trellis.show()
    }
}

impl<DEV: BoardDevice> Trellis<DEV> {
    pub fn led(&mut self) -> Leds<'_, DEV> {
        Leds { trellis: self }
    }

    pub fn is_led_on(&self, index: usize) -> Result<bool, Error<DEV::Error>> {
        let (board, local) = self.locate(index)?;
        Ok(self.bank(board).led(local))
    }

    pub fn set_led(&mut self, index: usize, on: bool) -> Result<(), Error<DEV::Error>> {
        self.led().set(index, on)
    }
}
