pub const OSCILLATOR_ON: u8 = 0x21;
pub const BLINK_COMMAND: u8 = 0x80;
pub const BLINK_DISPLAY_ON: u8 = 0x01;
pub const BRIGHTNESS_COMMAND: u8 = 0xe0;
pub const KEY_READ_COMMAND: u8 = 0x40;
pub const DISPLAY_RAM_START: u8 = 0x00;

pub const MAX_BLINK_RATE: u8 = 3;
pub const MAX_BRIGHTNESS: u8 = 15;

/// Address of a board with no address jumpers bridged.
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// The chip has three address pins, 0x70 through 0x77.
pub const MAX_BOARDS: usize = 8;

pub const KEYS_PER_BOARD: usize = 16;
pub const TOTAL_KEY_COUNT: usize = KEYS_PER_BOARD * MAX_BOARDS;

pub const LED_BUFFER_LEN: usize = 16;
pub const KEY_BUFFER_LEN: usize = 6;

/// Display RAM position of each LED, high nibble is the row, low nibble the
/// bit inside the 16 bit row mask.
pub const LED_LUT: [u8; KEYS_PER_BOARD] = [
    0x3a, 0x37, 0x35, 0x34, 0x28, 0x29, 0x23, 0x24, 0x16, 0x1b, 0x11, 0x10, 0x0e, 0x0d,
    0x0c, 0x02,
];

/// Key scan position of each button, high nibble is the byte, low nibble the
/// bit inside that byte.
pub const BUTTON_LUT: [u8; KEYS_PER_BOARD] = [
    0x07, 0x04, 0x02, 0x22, 0x05, 0x06, 0x00, 0x01, 0x03, 0x10, 0x30, 0x21, 0x13, 0x12,
    0x11, 0x31,
];

/// Returns `(row, bit)` of a board local LED.
pub const fn led_position(local: usize) -> (usize, u8) {
    let entry = LED_LUT[local];
    ((entry >> 4) as usize, entry & 0x0f)
}

/// Returns `(byte, bit)` of a board local button.
pub const fn button_position(local: usize) -> (usize, u8) {
    let entry = BUTTON_LUT[local];
    ((entry >> 4) as usize, entry & 0x0f)
}

pub const fn blink_command(rate: u8) -> u8 {
    BLINK_COMMAND | BLINK_DISPLAY_ON | (rate << 1)
}

pub const fn brightness_command(level: u8) -> u8 {
    BRIGHTNESS_COMMAND | level
}

/// Settings applied while bringing the boards up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// 0 is steady, 1 to 3 blink at 2 Hz, 1 Hz and 0.5 Hz.
    pub blink_rate: u8,
    /// Duty cycle step, 0 to 15.
    pub brightness: u8,
    /// Flush to the boards after every LED change.
    pub auto_show: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blink_rate: 0,
            brightness: MAX_BRIGHTNESS,
            auto_show: true,
        }
    }
}

impl Config {
    pub fn is_valid(&self) -> bool {
        self.blink_rate <= MAX_BLINK_RATE && self.brightness <= MAX_BRIGHTNESS
    }
}
