//! The service driven over the real `HardwareAdapter` stack: simulated
//! ADC millivolts in, relay pin level and LED RGB out.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, PoisonError};

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use super::mock_hw::{ManualClock, RecordingSink};

use thermostat::adapters::hardware::HardwareAdapter;
use thermostat::app::setpoints::Setpoints;
use thermostat::app::service::ThermostatService;
use thermostat::config::ThermostatConfig;
use thermostat::control::{CurrentState, StatusColour, TargetMode};
use thermostat::drivers::relay::RelayDriver;
use thermostat::drivers::status_led::StatusLed;
use thermostat::pins;
use thermostat::sensors::analog::sim_set_millivolts;
use thermostat::sensors::{AdcReader, TemperatureSensor};

/// The simulated ADC is process-wide; tests that set it take turns.
static ADC: Mutex<()> = Mutex::new(());

fn hold_adc(millivolts: i32) -> MutexGuard<'static, ()> {
    let guard = ADC.lock().unwrap_or_else(PoisonError::into_inner);
    sim_set_millivolts(millivolts);
    guard
}

/// Output pin whose level stays visible after it moves into the relay.
/// The first `fail_high` calls to `set_high` fail.
#[derive(Clone, Default)]
struct SharedPin {
    high: Rc<Cell<bool>>,
    fail_high: Rc<Cell<u32>>,
}

impl ErrorType for SharedPin {
    type Error = ErrorKind;
}

impl OutputPin for SharedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail_high.get() > 0 {
            self.fail_high.set(self.fail_high.get() - 1);
            return Err(ErrorKind::Other);
        }
        self.high.set(true);
        Ok(())
    }
}

type Board = HardwareAdapter<AdcReader, SharedPin>;

fn board(pin: SharedPin) -> Board {
    let sensor = TemperatureSensor::new(
        AdcReader::new(0, pins::TEMP_ADC_SAMPLES),
        ThermostatConfig::default().calibration,
    );
    HardwareAdapter::new(sensor, RelayDriver::new(pin), StatusLed::new())
}

fn heat_to(target_c: f32) -> ThermostatConfig {
    let mut config = ThermostatConfig::exponential_profile();
    config.setpoints = Setpoints {
        mode: TargetMode::Heat,
        target_c,
        ..Setpoints::default()
    };
    config
}

fn run_for(
    svc: &mut ThermostatService,
    clock: &ManualClock,
    hw: &mut Board,
    sink: &mut RecordingSink,
    duration_ms: u64,
) {
    for _ in 0..duration_ms / 1_000 {
        clock.advance(1_000);
        svc.tick(clock, hw, sink);
    }
}

#[test]
fn startup_shows_white_with_relay_low() {
    let _adc = hold_adc(710);
    let pin = SharedPin::default();
    pin.high.set(true);
    let clock = ManualClock::at(0);
    let mut hw = board(pin.clone());
    let mut sink = RecordingSink::new();

    let svc = ThermostatService::new(ThermostatConfig::default(), &clock, &mut hw, &mut sink);

    assert_eq!(svc.estimate(), 21.0, "710 mV on a TMP36");
    assert!(!pin.high.get());
    assert!(!hw.is_heater_on());
    assert_eq!(hw.led_colour(), StatusColour::Startup.rgb());
}

#[test]
fn cold_room_drives_relay_until_warm() {
    let _adc = hold_adc(650);
    let pin = SharedPin::default();
    let clock = ManualClock::at(0);
    let mut hw = board(pin.clone());
    let mut sink = RecordingSink::new();
    let mut svc = ThermostatService::new(heat_to(20.0), &clock, &mut hw, &mut sink);

    run_for(&mut svc, &clock, &mut hw, &mut sink, 5_000);
    assert!(pin.high.get());
    assert!(hw.is_heater_on());
    assert_eq!(hw.led_colour(), (0, 0, 255));
    assert_eq!(svc.status().heater, CurrentState::Heating);

    sim_set_millivolts(750);
    run_for(&mut svc, &clock, &mut hw, &mut sink, 30_000);
    assert!(!pin.high.get());
    assert!(!hw.is_heater_on());
    assert_eq!(hw.led_colour(), (255, 0, 0));
    assert_eq!(sink.heater_changes(), 2);
}

#[test]
fn failed_relay_write_is_retried_on_next_decision() {
    let _adc = hold_adc(650);
    let pin = SharedPin::default();
    pin.fail_high.set(1);
    let clock = ManualClock::at(0);
    let mut hw = board(pin.clone());
    let mut sink = RecordingSink::new();
    let mut svc = ThermostatService::new(heat_to(20.0), &clock, &mut hw, &mut sink);

    run_for(&mut svc, &clock, &mut hw, &mut sink, 5_000);
    assert!(!svc.heater_on(), "write failed, service must not claim heating");
    assert!(!hw.is_heater_on());
    assert_eq!(svc.status().heater, CurrentState::Idle);
    assert_eq!(hw.led_colour(), (0, 0, 255), "indicator still shows too cold");
    assert_eq!(sink.heater_changes(), 0);

    run_for(&mut svc, &clock, &mut hw, &mut sink, 5_000);
    assert!(svc.heater_on());
    assert!(pin.high.get());
    assert_eq!(sink.heater_changes(), 1);

    for _ in 0..20 {
        run_for(&mut svc, &clock, &mut hw, &mut sink, 5_000);
        assert_eq!(svc.heater_on(), hw.is_heater_on());
    }
}
