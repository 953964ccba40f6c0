//! Actuator drivers and hardware initialisation.

pub mod hw_init;
pub mod relay;
pub mod status_led;
