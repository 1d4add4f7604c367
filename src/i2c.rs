use crate::device::BoardDevice;
use crate::trellis::Trellis;
use crate::Error;

use embedded_hal::i2c::I2c;

impl<BUS: I2c> Trellis<I2cAdapter<BUS>> {
    /// Create a new Trellis driver over I2C
    /// # Arguments
    /// * `buses` - One I2C handle and board address per board, in grid order.
    ///   Boards sharing a bus need one handle each, e.g. from
    ///   `embedded_hal_bus::i2c::RefCellDevice`.
    ///
    /// # Returns
    /// A Trellis driver with all boards initialized
    pub fn new_with_i2c<I>(buses: I) -> Result<Self, Error<BUS::Error>>
    where
        I: IntoIterator<Item = (BUS, u8)>,
    {
        Self::new(
            buses
                .into_iter()
                .map(|(bus, address)| I2cAdapter::new(bus, address)),
        )
    }
}

/// A board reached through an `embedded-hal` I2C bus.
pub struct I2cAdapter<BUS: I2c> {
    i2c: BUS,
    address: u8,
}

impl<BUS: I2c> I2cAdapter<BUS> {
    pub fn new(i2c: BUS, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn into_inner(self) -> BUS {
        self.i2c
    }
}

impl<BUS: I2c> BoardDevice for I2cAdapter<BUS> {
    type Error = BUS::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), BUS::Error> {
        self.i2c.write(self.address, data)
    }

    fn read_into(&mut self, buffer: &mut [u8]) -> Result<(), BUS::Error> {
        self.i2c.read(self.address, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeI2cBus;

    #[test]
    fn adapter_addresses_every_transaction() {
        let mut bus = FakeI2cBus::new();
        bus.set_keys(0x72, [1, 2, 3, 4, 5, 6]);

        let mut adapter = I2cAdapter::new(&mut bus, 0x72);
        adapter.write_command(0x40).unwrap();
        let mut keys = [0; 6];
        adapter.read_into(&mut keys).unwrap();
        assert_eq!(adapter.address(), 0x72);

        assert_eq!(keys, [1, 2, 3, 4, 5, 6]);
        assert_eq!(bus.writes_to(0x72).count(), 1);
        assert_eq!(bus.writes_to(0x72).next().unwrap(), &[0x40]);
    }
}
