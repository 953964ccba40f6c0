//! Integration tests for the ThermostatService tick loop and command
//! handling.

use super::mock_hw::{ActuatorCall, ManualClock, MockHardware, RecordingSink};

use thermostat::app::commands::AppCommand;
use thermostat::app::events::AppEvent;
use thermostat::app::service::ThermostatService;
use thermostat::config::ThermostatConfig;
use thermostat::control::{CurrentState, StatusColour, TargetMode};
use thermostat::filter::FilterPolicy;

fn make_app(
    config: ThermostatConfig,
    seed_c: f32,
) -> (ThermostatService, ManualClock, MockHardware, RecordingSink) {
    let clock = ManualClock::at(0);
    let mut hw = MockHardware::reading(seed_c);
    let mut sink = RecordingSink::new();
    let svc = ThermostatService::new(config, &clock, &mut hw, &mut sink);
    (svc, clock, hw, sink)
}

#[test]
fn startup_forces_heater_off_and_shows_white() {
    let (svc, _clock, hw, sink) = make_app(ThermostatConfig::default(), 21.0);

    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::SetHeater(false),
            ActuatorCall::SetStatus(StatusColour::Startup),
        ]
    );
    assert_eq!(sink.events, vec![AppEvent::Started { seed_c: 21.0 }]);
    assert_eq!(hw.samples_taken, 1, "seeded from one real sample");
    assert_eq!(svc.status().heater, CurrentState::Idle);
    assert_eq!(svc.estimate(), 21.0);
}

#[test]
fn out_of_range_seed_is_used_as_is() {
    let (svc, ..) = make_app(ThermostatConfig::windowed_profile(), 45.0);
    assert_eq!(svc.estimate(), 45.0);
}

#[test]
fn off_forces_heater_off_on_next_decision() {
    let (mut svc, clock, mut hw, mut sink) = make_app(ThermostatConfig::default(), 15.0);

    svc.handle_command(AppCommand::SetMode(TargetMode::Heat), &mut sink);
    clock.advance(1);
    svc.tick(&clock, &mut hw, &mut sink);
    assert!(hw.heater_on());

    svc.handle_command(AppCommand::SetMode(TargetMode::Off), &mut sink);
    clock.advance(1);
    svc.tick(&clock, &mut hw, &mut sink);

    assert!(!hw.heater_on());
    assert!(!svc.heater_on());
    assert_eq!(hw.last_colour(), Some(StatusColour::Off));
    assert_eq!(svc.status().heater, CurrentState::Idle);
}

#[test]
fn setpoint_change_decides_without_waiting_for_period() {
    let (mut svc, clock, mut hw, mut sink) = make_app(ThermostatConfig::default(), 15.0);

    clock.advance(100);
    svc.tick(&clock, &mut hw, &mut sink);
    assert_eq!(hw.status_writes(), 1, "decision period not elapsed");

    svc.handle_command(AppCommand::SetMode(TargetMode::Heat), &mut sink);
    clock.advance(100);
    svc.tick(&clock, &mut hw, &mut sink);

    assert!(hw.heater_on());
    assert_eq!(hw.status_writes(), 2);
}

#[test]
fn immediate_decision_restarts_decision_period() {
    let (mut svc, clock, mut hw, mut sink) = make_app(ThermostatConfig::default(), 15.0);

    clock.set(3_000);
    svc.handle_command(AppCommand::SetMode(TargetMode::Heat), &mut sink);
    svc.tick(&clock, &mut hw, &mut sink);
    assert_eq!(hw.status_writes(), 2);

    // 5000 would have been the original slot; the period now counts from 3000.
    clock.set(5_000);
    svc.tick(&clock, &mut hw, &mut sink);
    assert_eq!(hw.status_writes(), 2);

    clock.set(8_000);
    svc.tick(&clock, &mut hw, &mut sink);
    assert_eq!(hw.status_writes(), 3);
}

#[test]
fn windowed_profile_waits_for_decision_period() {
    let (mut svc, clock, mut hw, mut sink) = make_app(ThermostatConfig::windowed_profile(), 15.0);

    svc.handle_command(AppCommand::SetMode(TargetMode::Heat), &mut sink);
    clock.advance(500);
    svc.tick(&clock, &mut hw, &mut sink);
    assert!(!hw.heater_on(), "decide_on_change is off for this profile");

    clock.set(10_000);
    svc.tick(&clock, &mut hw, &mut sink);
    assert!(hw.heater_on());
}

#[test]
fn unchanged_setpoints_do_not_force_a_decision() {
    let (mut svc, clock, mut hw, mut sink) = make_app(ThermostatConfig::default(), 20.0);

    svc.handle_command(AppCommand::SetMode(TargetMode::Off), &mut sink);
    clock.advance(10);
    svc.tick(&clock, &mut hw, &mut sink);

    assert_eq!(sink.count(|e| *e == AppEvent::SetpointsChanged), 0);
    assert_eq!(hw.status_writes(), 1);
    assert!(!svc.is_config_dirty());
}

#[test]
fn each_decision_writes_status_exactly_once() {
    let (mut svc, clock, mut hw, mut sink) = make_app(ThermostatConfig::default(), 20.0);
    svc.handle_command(AppCommand::SetMode(TargetMode::Heat), &mut sink);
    hw.clear_calls();

    // Immediate decision at 1 s, then 6 s and 11 s; temperature in band.
    for _ in 0..15 {
        clock.advance(1_000);
        svc.tick(&clock, &mut hw, &mut sink);
    }

    assert_eq!(hw.status_writes(), 3);
    assert_eq!(hw.heater_writes(), 0, "in-band: no relay writes");
}

#[test]
fn missed_periods_are_not_caught_up() {
    let (mut svc, clock, mut hw, mut sink) = make_app(ThermostatConfig::default(), 20.0);

    clock.set(20_000);
    svc.tick(&clock, &mut hw, &mut sink);

    assert_eq!(hw.samples_taken, 2, "seed plus one sense, not twenty");
    assert_eq!(sink.count(|e| matches!(e, AppEvent::TemperaturePublished { .. })), 1);
    assert_eq!(hw.status_writes(), 2);
    assert_eq!(svc.tick_count(), 1);
}

#[test]
fn reported_temperature_is_rounded_to_one_decimal() {
    let (svc, ..) = make_app(ThermostatConfig::default(), 21.26);
    assert_eq!(svc.status().current_temp_c, 21.3);
}

#[test]
fn telemetry_reflects_live_state() {
    let (mut svc, clock, mut hw, mut sink) = make_app(ThermostatConfig::default(), 15.0);
    svc.handle_command(AppCommand::SetMode(TargetMode::Heat), &mut sink);
    clock.advance(1);
    svc.tick(&clock, &mut hw, &mut sink);

    let t = svc.build_telemetry();
    assert_eq!(t.mode, TargetMode::Heat);
    assert_eq!(t.target_c, 20.0);
    assert_eq!(t.heater, CurrentState::Heating);
    assert_eq!(t.colour, StatusColour::TooCold);
    assert_eq!(t.estimate_c, 15.0);
}

#[test]
fn update_config_keeps_running_filter_but_applies_tuning() {
    let (mut svc, _clock, _hw, mut sink) = make_app(ThermostatConfig::default(), 20.0);

    let mut new_cfg = ThermostatConfig::windowed_profile();
    new_cfg.hysteresis_c = 2.0;
    new_cfg.setpoints.mode = TargetMode::Heat;
    svc.handle_command(AppCommand::UpdateConfig(new_cfg), &mut sink);

    let live = svc.current_config();
    assert!(matches!(live.filter, FilterPolicy::Exponential { .. }));
    assert_eq!(live.valid_range, ThermostatConfig::default().valid_range);
    assert_eq!(live.hysteresis_c, 2.0);
    assert_eq!(live.periods, ThermostatConfig::windowed_profile().periods);
    assert_eq!(live.setpoints.mode, TargetMode::Heat);
    assert!(svc.is_config_dirty());
    assert_eq!(sink.count(|e| *e == AppEvent::SetpointsChanged), 1);
}
