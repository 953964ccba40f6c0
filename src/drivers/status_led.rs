//! RGB status LED driver.
//!
//! Three LEDC PWM channels drive discrete R/G/B LEDs (or a
//! common-cathode RGB LED).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives three LEDC PWM channels via hw_init.
//! On host/test: tracks state in-memory only.

use crate::control::StatusColour;
use crate::control::colour::Rgb;
use crate::drivers::hw_init;

pub struct StatusLed {
    current: Rgb,
}

impl StatusLed {
    pub fn new() -> Self {
        Self { current: (0, 0, 0) }
    }

    pub fn set_colour(&mut self, colour: StatusColour) {
        self.set_rgb(colour.rgb());
    }

    fn set_rgb(&mut self, (r, g, b): Rgb) {
        hw_init::ledc_set(hw_init::LEDC_CH_LED_R, r);
        hw_init::ledc_set(hw_init::LEDC_CH_LED_G, g);
        hw_init::ledc_set(hw_init::LEDC_CH_LED_B, b);
        self.current = (r, g, b);
    }

    pub fn current_colour(&self) -> Rgb {
        self.current
    }
}

impl Default for StatusLed {
    fn default() -> Self {
        Self::new()
    }
}
