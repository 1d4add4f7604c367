use embedded_hal::i2c::{Error, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

use crate::config::{KEY_BUFFER_LEN, LED_BUFFER_LEN, MAX_BOARDS};

const MAX_FRAME: usize = LED_BUFFER_LEN + 1;
const MAX_RECORDS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeI2cError {
    Nack,
    Overflow,
}

impl Error for FakeI2cError {
    fn kind(&self) -> ErrorKind {
        match self {
            FakeI2cError::Nack => ErrorKind::NoAcknowledge(
                embedded_hal::i2c::NoAcknowledgeSource::Address,
            ),
            FakeI2cError::Overflow => ErrorKind::Overrun,
        }
    }
}

#[derive(Debug)]
pub enum Record {
    Write(u8, heapless::Vec<u8, MAX_FRAME>),
    Read(u8, usize),
}

/// In-memory bus with a fixed set of boards. Writes are logged per address and
/// reads are served from the programmed key scan of the addressed board.
pub struct FakeI2cBus {
    pub records: heapless::Vec<Record, MAX_RECORDS>,
    keys: heapless::Vec<(u8, [u8; KEY_BUFFER_LEN]), MAX_BOARDS>,
    failing: Option<u8>,
}

impl ErrorType for FakeI2cBus {
    type Error = FakeI2cError;
}

impl FakeI2cBus {
    pub fn new() -> Self {
        Self {
            records: heapless::Vec::new(),
            keys: heapless::Vec::new(),
            failing: None,
        }
    }

    pub fn set_keys(&mut self, address: u8, keys: [u8; KEY_BUFFER_LEN]) {
        if let Some(entry) = self.keys.iter_mut().find(|(a, _)| *a == address) {
            entry.1 = keys;
        } else {
            self.keys.push((address, keys)).unwrap();
        }
    }

    /// Every transaction to `address` fails until cleared with `None`.
    pub fn fail_on(&mut self, address: Option<u8>) {
        self.failing = address;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn writes_to(&self, address: u8) -> impl Iterator<Item = &[u8]> + '_ {
        self.records.iter().filter_map(move |record| match record {
            Record::Write(a, data) if *a == address => Some(data.as_slice()),
            _ => None,
        })
    }

    pub fn reads_from(&self, address: u8) -> usize {
        self.records
            .iter()
            .filter(|record| matches!(record, Record::Read(a, _) if *a == address))
            .count()
    }

    /// Display frames (writes led by the RAM pointer reset) sent to `address`.
    pub fn frames_to(&self, address: u8) -> impl Iterator<Item = &[u8]> + '_ {
        self.writes_to(address)
            .filter(|data| data.len() == MAX_FRAME && data[0] == 0x00)
    }
}

impl I2c for FakeI2cBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.failing == Some(address) {
            return Err(FakeI2cError::Nack);
        }

        for operation in operations {
            match operation {
                Operation::Write(data) => {
                    let data =
                        heapless::Vec::from_slice(data).map_err(|_| FakeI2cError::Overflow)?;
                    self.records
                        .push(Record::Write(address, data))
                        .map_err(|_| FakeI2cError::Overflow)?;
                }
                Operation::Read(buffer) => {
                    let keys = self
                        .keys
                        .iter()
                        .find(|(a, _)| *a == address)
                        .map(|(_, keys)| *keys)
                        .unwrap_or_default();
                    let len = buffer.len().min(KEY_BUFFER_LEN);
                    buffer[..len].copy_from_slice(&keys[..len]);
                    self.records
                        .push(Record::Read(address, buffer.len()))
                        .map_err(|_| FakeI2cError::Overflow)?;
                }
            }
        }
        Ok(())
    }
}
