//! Thermostat firmware: main entry point.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                    │
//! │                                                           │
//! │  HardwareAdapter   LogEventSink   NvsAdapter   Esp32Time  │
//! │  (Sensor+Actuator) (EventSink)    (Config)     (Clock)    │
//! │                                                           │
//! │  ──────────────── Port Trait Boundary ─────────────────   │
//! │                                                           │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │          ThermostatService (pure logic)             │  │
//! │  │  Filter · Hysteresis · Timers                       │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::PinDriver;
use esp_idf_hal::peripherals::Peripherals;
use log::{error, info, warn};

use thermostat::adapters::hardware::HardwareAdapter;
use thermostat::adapters::log_sink::LogEventSink;
use thermostat::adapters::nvs::NvsAdapter;
use thermostat::adapters::time::Esp32TimeAdapter;
use thermostat::app::events::AppEvent;
use thermostat::app::ports::{ConfigError, ConfigPort, EventSink, MonotonicClock};
use thermostat::app::service::ThermostatService;
use thermostat::config::ThermostatConfig;
use thermostat::drivers::hw_init;
use thermostat::drivers::relay::RelayDriver;
use thermostat::drivers::status_led::StatusLed;
use thermostat::pins;
use thermostat::scheduler::PeriodicTimer;
use thermostat::sensors::{AdcReader, TemperatureSensor};

/// Idle time between loop passes. Well below the shortest loop period.
const LOOP_DELAY_MS: u32 = 50;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Thermostat v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Without the ADC there is no temperature to control on.
        error!("HAL init failed: {}, halting", e);
        return Err(thermostat::error::Error::from(e).into());
    }
    let peripherals = Peripherals::take()?;

    // ── 3. Load config from NVS (or defaults) ─────────────────
    let nvs = match NvsAdapter::new() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("NVS init failed ({}), running with defaults and no persistence", e);
            None
        }
    };
    let config = match nvs.as_ref().map(|n| n.load()) {
        Some(Ok(cfg)) => {
            info!("Config loaded from NVS");
            cfg
        }
        Some(Err(ConfigError::NotFound)) => {
            info!("No stored config, using defaults");
            ThermostatConfig::default()
        }
        Some(Err(e)) => {
            warn!("NVS config load failed ({}), using defaults", e);
            ThermostatConfig::default()
        }
        None => ThermostatConfig::default(),
    };

    // ── 4. Build adapters ─────────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    let sensor = TemperatureSensor::new(
        AdcReader::new(hw_init::ADC1_CH_TEMP, pins::TEMP_ADC_SAMPLES),
        config.calibration,
    );
    const _: () = assert!(pins::HEATER_RELAY_GPIO == 5, "relay pin below is gpio5");
    let relay = RelayDriver::new(PinDriver::output(peripherals.pins.gpio5)?);
    info!("Heater relay on GPIO{}", pins::HEATER_RELAY_GPIO);
    let mut hw = HardwareAdapter::new(sensor, relay, StatusLed::new());
    let mut sink = LogEventSink::new();

    // ── 5. Start the control core ─────────────────────────────
    let mut telemetry = PeriodicTimer::new(config.telemetry_period_ms, clock.now_ms());
    let mut service = ThermostatService::new(config, &clock, &mut hw, &mut sink);

    info!("Entering control loop");
    loop {
        service.tick(&clock, &mut hw, &mut sink);

        if let Some(storage) = nvs.as_ref() {
            service.auto_save_if_needed(&clock, storage);
        }

        if telemetry.poll(clock.now_ms()) {
            sink.emit(&AppEvent::Telemetry(service.build_telemetry()));
        }

        FreeRtos::delay_ms(LOOP_DELAY_MS);
    }
}
