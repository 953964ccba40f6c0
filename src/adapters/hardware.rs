//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the [`TemperatureSensor`], the heater relay and the status LED,
//! exposing them through [`SensorPort`] and [`ActuatorPort`].  This is
//! the only module in the system that touches actual hardware.  On
//! non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use embedded_hal::digital::OutputPin;

use crate::app::ports::{ActuatorPort, AnalogReader, SensorPort};
use crate::control::StatusColour;
use crate::drivers::relay::RelayDriver;
use crate::drivers::status_led::StatusLed;
use crate::sensors::TemperatureSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<R: AnalogReader, P: OutputPin> {
    sensor: TemperatureSensor<R>,
    relay: RelayDriver<P>,
    led: StatusLed,
}

impl<R: AnalogReader, P: OutputPin> HardwareAdapter<R, P> {
    pub fn new(sensor: TemperatureSensor<R>, relay: RelayDriver<P>, led: StatusLed) -> Self {
        Self { sensor, relay, led }
    }

    pub fn is_heater_on(&self) -> bool {
        self.relay.is_on()
    }

    pub fn led_colour(&self) -> (u8, u8, u8) {
        self.led.current_colour()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<R: AnalogReader, P: OutputPin> SensorPort for HardwareAdapter<R, P> {
    fn sample_temperature(&mut self) -> f32 {
        self.sensor.sample()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<R: AnalogReader, P: OutputPin> ActuatorPort for HardwareAdapter<R, P> {
    fn set_heater(&mut self, on: bool) -> bool {
        self.relay.set_state(on)
    }

    fn set_status(&mut self, colour: StatusColour) {
        self.led.set_colour(colour);
    }
}
