//! Heater relay driver.
//!
//! A single digital output switches the heater.  The driver is generic
//! over an `embedded-hal` [`OutputPin`]: on ESP-IDF that is an
//! `esp_idf_hal::gpio::PinDriver`, on host tests any in-memory pin.
//!
//! The pin is driven low (heater off) at construction.  A failed pin
//! write is logged, the tracked state is left unchanged and the caller
//! is told, so it can keep its own view in step with the pin.

use embedded_hal::digital::OutputPin;
use log::warn;

pub struct RelayDriver<P: OutputPin> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> RelayDriver<P> {
    pub fn new(mut pin: P) -> Self {
        if let Err(e) = pin.set_low() {
            warn!("relay: initial set_low failed: {:?}", e);
        }
        Self { pin, on: false }
    }

    /// Returns `true` if the pin now holds the requested state.
    #[must_use]
    pub fn set_state(&mut self, on: bool) -> bool {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match res {
            Ok(()) => {
                self.on = on;
                true
            }
            Err(e) => {
                warn!("relay: pin write failed: {:?}", e);
                false
            }
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
