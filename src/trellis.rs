use crate::config::*;
use crate::device::BoardDevice;
use crate::state::BoardBank;
use crate::Error;

struct Board<DEV> {
    device: DEV,
    bank: BoardBank,
}

/// Keys whose state changed between the last two scans, in ascending order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ButtonEvents {
    pub pressed: heapless::Vec<usize, TOTAL_KEY_COUNT>,
    pub released: heapless::Vec<usize, TOTAL_KEY_COUNT>,
}

impl ButtonEvents {
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty()
    }
}

/// A grid of chained Trellis boards.
pub struct Trellis<DEV: BoardDevice> {
    boards: heapless::Vec<Board<DEV>, MAX_BOARDS>,
    blink_rate: u8,
    brightness: u8,
    auto_show: bool,
}

impl<DEV: BoardDevice> Trellis<DEV> {
    /// Create a new Trellis driver with the default configuration
    /// # Arguments
    /// * `devices` - One device per board, in grid order
    ///
    /// # Returns
    /// * Ok(Trellis) with the oscillators running, blinking off, full
    ///   brightness and every LED off
    /// * Err(Error::ConfigurationError) if no device or more than
    ///   `MAX_BOARDS` devices were given
    pub fn new<I>(devices: I) -> Result<Self, Error<DEV::Error>>
    where
        I: IntoIterator<Item = DEV>,
    {
        Self::new_with_config(devices, Config::default())
    }

    /// Same as `new`, applying `config` instead of the defaults.
    ///
    /// The configuration is validated before anything is sent.
    pub fn new_with_config<I>(devices: I, config: Config) -> Result<Self, Error<DEV::Error>>
    where
        I: IntoIterator<Item = DEV>,
    {
        if !config.is_valid() {
            return Err(Error::InvalidArgument);
        }

        let mut boards = heapless::Vec::new();
        for device in devices {
            boards
                .push(Board {
                    device,
                    bank: BoardBank::default(),
                })
                .map_err(|_| Error::ConfigurationError)?;
        }
        if boards.is_empty() {
            return Err(Error::ConfigurationError);
        }

        let mut trellis = Self {
            boards,
            blink_rate: config.blink_rate,
            brightness: config.brightness,
            auto_show: config.auto_show,
        };

        trellis.write_command(OSCILLATOR_ON)?;
        trellis.set_blink_rate(config.blink_rate)?;
        trellis.set_brightness(config.brightness)?;
        trellis.clear_leds();
        trellis.show()?;

        log::debug!("Trellis initialized with {} board(s)", trellis.num_boards());

        Ok(trellis)
    }

    /// Hands the board devices back, in grid order.
    pub fn release(self) -> heapless::Vec<DEV, MAX_BOARDS> {
        self.boards.into_iter().map(|board| board.device).collect()
    }

    pub fn num_boards(&self) -> usize {
        self.boards.len()
    }

    /// Number of LEDs, which is also the number of buttons.
    pub fn num_leds(&self) -> usize {
        self.boards.len() * KEYS_PER_BOARD
    }

    pub fn blink_rate(&self) -> u8 {
        self.blink_rate
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn auto_show(&self) -> bool {
        self.auto_show
    }

    /// Set the blink rate of every board
    ///
    /// # Arguments
    /// * `rate` - 0 for steady, 1 to 3 for 2 Hz, 1 Hz and 0.5 Hz
    ///
    /// # Returns
    /// * Ok(()) if every board accepted the command
    /// * Err(Error::InvalidArgument) if `rate` is above 3
    pub fn set_blink_rate(&mut self, rate: u8) -> Result<(), Error<DEV::Error>> {
        if rate > MAX_BLINK_RATE {
            return Err(Error::InvalidArgument);
        }
        let rate = rate & 0x03;
        self.blink_rate = rate;

        log::debug!("Blink rate {rate}");
        self.write_command(blink_command(rate))
    }

    /// Set the brightness of every board
    ///
    /// # Arguments
    /// * `level` - 0 (dimmest, not off) to 15
    ///
    /// # Returns
    /// * Ok(()) if every board accepted the command
    /// * Err(Error::InvalidArgument) if `level` is above 15
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error<DEV::Error>> {
        if level > MAX_BRIGHTNESS {
            return Err(Error::InvalidArgument);
        }
        self.brightness = level;

        log::debug!("Brightness {level}");
        self.write_command(brightness_command(level))
    }

    /// Only affects LED changes made afterwards, nothing is sent.
    pub fn set_auto_show(&mut self, auto_show: bool) {
        self.auto_show = auto_show;
    }

    /// Turn every LED on or off.
    pub fn fill(&mut self, on: bool) -> Result<(), Error<DEV::Error>> {
        for board in self.boards.iter_mut() {
            board.bank.fill(on);
        }

        if self.auto_show {
            self.show()?;
        }
        Ok(())
    }

    /// Send the LED buffers to the boards, one transaction per board.
    ///
    /// A failing board stops the refresh, boards before it keep their new
    /// state.
    pub fn show(&mut self) -> Result<(), Error<DEV::Error>> {
        for (index, board) in self.boards.iter_mut().enumerate() {
            log::trace!("Display frame to board {index}: {:02x?}", board.bank.leds);
            board
                .device
                .write_display(&board.bank.leds)
                .map_err(|error| bus_error(index, error))?;
        }
        Ok(())
    }

    /// Scan the keys of every board and report the edges since the last scan.
    ///
    /// Keys held down across both scans are reported in neither list.
    pub fn read_buttons(&mut self) -> Result<ButtonEvents, Error<DEV::Error>> {
        for (index, board) in self.boards.iter_mut().enumerate() {
            board.bank.rotate_keys();
            board
                .device
                .write_command(KEY_READ_COMMAND)
                .map_err(|error| bus_error(index, error))?;
            board
                .device
                .read_into(&mut board.bank.current_keys)
                .map_err(|error| bus_error(index, error))?;
            log::trace!("Key scan of board {index}: {:02x?}", board.bank.current_keys);
        }

        let mut events = ButtonEvents::default();
        for index in 0..self.num_leds() {
            let bank = &self.boards[index / KEYS_PER_BOARD].bank;
            let local = index % KEYS_PER_BOARD;

            // Capacity covers every key of MAX_BOARDS boards
            if bank.just_pressed(local) {
                let _ = events.pressed.push(index);
            } else if bank.just_released(local) {
                let _ = events.released.push(index);
            }
        }

        Ok(events)
    }

    /// Whether a key was down at the last scan.
    pub fn is_pressed(&self, index: usize) -> Result<bool, Error<DEV::Error>> {
        let (board, local) = self.locate(index)?;
        Ok(self.boards[board].bank.is_pressed(local))
    }

    /// Splits a grid index into `(board, local)`.
    pub(crate) fn locate(&self, index: usize) -> Result<(usize, usize), Error<DEV::Error>> {
        if index >= self.num_leds() {
            return Err(Error::IndexOutOfRange);
        }
        Ok((index / KEYS_PER_BOARD, index % KEYS_PER_BOARD))
    }

    pub(crate) fn bank(&self, board: usize) -> &BoardBank {
        &self.boards[board].bank
    }

    pub(crate) fn bank_mut(&mut self, board: usize) -> &mut BoardBank {
        &mut self.boards[board].bank
    }

    fn clear_leds(&mut self) {
        for board in self.boards.iter_mut() {
            board.bank.fill(false);
        }
    }

    fn write_command(&mut self, command: u8) -> Result<(), Error<DEV::Error>> {
        for (index, board) in self.boards.iter_mut().enumerate() {
            board
                .device
                .write_command(command)
                .map_err(|error| bus_error(index, error))?;
        }
        Ok(())
    }
}

fn bus_error<E: core::fmt::Debug>(board: usize, error: E) -> Error<E> {
    log::warn!("Error communicating with board {board}: {error:?}");
    Error::Bus(error)
}
