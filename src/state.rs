use crate::config::*;

/// Shadow of one board's display RAM and its last two key scans.
pub struct BoardBank {
    pub leds: [u8; LED_BUFFER_LEN],
    pub previous_keys: [u8; KEY_BUFFER_LEN],
    pub current_keys: [u8; KEY_BUFFER_LEN],
}

impl Default for BoardBank {
    // Matches the display RAM after power up
    fn default() -> Self {
        Self {
            leds: [0; LED_BUFFER_LEN],
            previous_keys: [0; KEY_BUFFER_LEN],
            current_keys: [0; KEY_BUFFER_LEN],
        }
    }
}

impl BoardBank {
    pub fn led(&self, local: usize) -> bool {
        let (row, bit) = led_position(local);
        let mask = 1u16 << bit;
        let value = u16::from(self.leds[row * 2]) | (u16::from(self.leds[row * 2 + 1]) << 8);

        value & mask != 0
    }

    pub fn set_led(&mut self, local: usize, on: bool) {
        let (row, bit) = led_position(local);
        let mask = 1u16 << bit;
        let low = mask as u8;
        let high = (mask >> 8) as u8;

        if on {
            self.leds[row * 2] |= low;
            self.leds[row * 2 + 1] |= high;
        } else {
            self.leds[row * 2] &= !low;
            self.leds[row * 2 + 1] &= !high;
        }
    }

    pub fn fill(&mut self, on: bool) {
        self.leds = [if on { 0xff } else { 0x00 }; LED_BUFFER_LEN];
    }

    /// Keeps the last scan around so the next one can be compared against it.
    pub fn rotate_keys(&mut self) {
        self.previous_keys = self.current_keys;
    }

    pub fn is_pressed(&self, local: usize) -> bool {
        Self::key_bit(&self.current_keys, local)
    }

    pub fn was_pressed(&self, local: usize) -> bool {
        Self::key_bit(&self.previous_keys, local)
    }

    pub fn just_pressed(&self, local: usize) -> bool {
        self.is_pressed(local) && !self.was_pressed(local)
    }

    pub fn just_released(&self, local: usize) -> bool {
        !self.is_pressed(local) && self.was_pressed(local)
    }

    fn key_bit(keys: &[u8; KEY_BUFFER_LEN], local: usize) -> bool {
        let (byte, bit) = button_position(local);
        keys[byte] & (1 << bit) != 0
    }
}
