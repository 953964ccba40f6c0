//! Fuzz target: `ThermostatService` tick loop
//!
//! Interprets the input as a script of clock steps, sensor readings and
//! setpoint commands and drives the service through it.
//!
//! Invariants checked:
//! - No panics under any script (NaN and infinite readings included)
//! - The reported heater state always equals the last relay write
//! - OFF leaves the heater off after the next decision
//!
//! cargo fuzz run fuzz_control_loop

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermostat::app::commands::AppCommand;
use thermostat::app::events::AppEvent;
use thermostat::app::ports::{ActuatorPort, EventSink, MonotonicClock, SensorPort};
use thermostat::app::service::ThermostatService;
use thermostat::config::ThermostatConfig;
use thermostat::control::{CurrentState, StatusColour, TargetMode};

struct Hw {
    reading: f32,
    relay: bool,
}

impl SensorPort for Hw {
    fn sample_temperature(&mut self) -> f32 {
        self.reading
    }
}

impl ActuatorPort for Hw {
    fn set_heater(&mut self, on: bool) -> bool {
        self.relay = on;
        true
    }

    fn set_status(&mut self, _colour: StatusColour) {}
}

struct Clock(u64);

impl MonotonicClock for Clock {
    fn now_ms(&self) -> u64 {
        self.0
    }
}

struct Sink;

impl EventSink for Sink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    let (head, script) = data.split_at(5);
    let mut config = if head[0] & 1 == 0 {
        ThermostatConfig::exponential_profile()
    } else {
        ThermostatConfig::windowed_profile()
    };
    config.decide_on_change = head[0] & 2 != 0;

    let mut hw = Hw {
        reading: f32::from_le_bytes([head[1], head[2], head[3], head[4]]),
        relay: false,
    };
    let mut clock = Clock(0);
    let mut sink = Sink;
    let mut svc = ThermostatService::new(config, &clock, &mut hw, &mut sink);

    for chunk in script.chunks_exact(5) {
        let value = f32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        match chunk[0] % 6 {
            0 => hw.reading = value,
            1 => svc.handle_command(AppCommand::SetMode(TargetMode::from_raw(chunk[1])), &mut sink),
            2 => svc.handle_command(AppCommand::SetTargetTemperature(value), &mut sink),
            3 => svc.handle_command(AppCommand::SetHeatingThreshold(value), &mut sink),
            4 => svc.handle_command(AppCommand::SetCoolingThreshold(value), &mut sink),
            _ => clock.0 = clock.0.wrapping_add(u64::from(chunk[1]) * 100),
        }
        svc.tick(&clock, &mut hw, &mut sink);
        assert_eq!(svc.status().heater, CurrentState::from_heater(hw.relay));
    }

    // Switch off and wait out one decision period.
    svc.handle_command(AppCommand::SetMode(TargetMode::Off), &mut sink);
    clock.0 = clock.0.wrapping_add(600_000);
    svc.tick(&clock, &mut hw, &mut sink);
    assert!(!hw.relay);
});
