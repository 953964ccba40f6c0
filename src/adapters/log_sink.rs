//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | mode={:?} | target={:.1} heat={:.1} cool={:.1} | \
                     est={:.2}\u{00b0}C reported={:.1}\u{00b0}C | heater={:?} | led={}",
                    t.mode,
                    t.target_c,
                    t.heating_threshold_c,
                    t.cooling_threshold_c,
                    t.estimate_c,
                    t.reported_c,
                    t.heater,
                    t.colour.name(),
                );
            }
            AppEvent::HeaterChanged { from, to } => {
                info!("HEATER | {:?} -> {:?}", from, to);
            }
            AppEvent::TemperaturePublished { current_c } => {
                debug!("TEMP | {:.1}\u{00b0}C", current_c);
            }
            AppEvent::ReadingRejected { reading_c } => {
                debug!("TEMP | rejected {:.1}\u{00b0}C", reading_c);
            }
            AppEvent::SetpointsChanged => {
                info!("SETPOINTS | changed");
            }
            AppEvent::Started { seed_c } => {
                info!("START | seed={:.1}\u{00b0}C", seed_c);
            }
        }
    }
}
