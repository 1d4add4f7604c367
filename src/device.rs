use crate::config::*;

/// One board on the bus. Every call is a single transaction addressed to that
/// board, holding the bus only for its duration.
pub trait BoardDevice {
    type Error: core::fmt::Debug;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    fn read_into(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error>;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.write(&[command])?;

        Ok(())
    }

    fn write_display(&mut self, leds: &[u8; LED_BUFFER_LEN]) -> Result<(), Self::Error> {
        let mut frame = [0; LED_BUFFER_LEN + 1];
        frame[0] = DISPLAY_RAM_START;
        frame[1..].copy_from_slice(leds);

        self.write(&frame)
    }
}

impl<T> BoardDevice for &mut T
where
    T: BoardDevice,
{
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, data)
    }

    fn read_into(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        T::read_into(self, buffer)
    }
}
