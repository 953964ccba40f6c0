//! Config dirty-flag and auto-save behaviour against a mock NVS.

use super::mock_hw::{ManualClock, MockHardware, MockNvs, RecordingSink};

use thermostat::adapters::nvs::NvsAdapter;
use thermostat::app::commands::AppCommand;
use thermostat::app::ports::ConfigPort;
use thermostat::app::service::{AUTO_SAVE_DELAY_MS, ThermostatService};
use thermostat::config::ThermostatConfig;
use thermostat::control::TargetMode;

fn make_app() -> (ThermostatService, ManualClock, MockHardware, RecordingSink) {
    let clock = ManualClock::at(1_000);
    let mut hw = MockHardware::reading(20.0);
    let mut sink = RecordingSink::new();
    let svc = ThermostatService::new(ThermostatConfig::default(), &clock, &mut hw, &mut sink);
    (svc, clock, hw, sink)
}

#[test]
fn clean_config_is_never_saved() {
    let (mut svc, clock, _hw, _sink) = make_app();
    let nvs = MockNvs::new();

    clock.advance(60_000);
    assert!(!svc.auto_save_if_needed(&clock, &nvs));
    assert_eq!(nvs.saves.get(), 0);
}

#[test]
fn setpoint_change_is_saved_after_quiet_period() {
    let (mut svc, clock, _hw, mut sink) = make_app();
    let nvs = MockNvs::new();

    svc.handle_command(AppCommand::SetTargetTemperature(22.0), &mut sink);
    assert!(svc.is_config_dirty());

    clock.advance(AUTO_SAVE_DELAY_MS - 1);
    assert!(!svc.auto_save_if_needed(&clock, &nvs));

    clock.advance(1);
    assert!(svc.auto_save_if_needed(&clock, &nvs));
    assert!(!svc.is_config_dirty());
    assert_eq!(nvs.saves.get(), 1);

    let stored = nvs.stored().unwrap();
    assert_eq!(stored.setpoints.target_c, 22.0);

    // Nothing left to flush.
    clock.advance(AUTO_SAVE_DELAY_MS);
    assert!(!svc.auto_save_if_needed(&clock, &nvs));
    assert_eq!(nvs.saves.get(), 1);
}

#[test]
fn save_config_flushes_on_next_check() {
    let (mut svc, clock, _hw, mut sink) = make_app();
    let nvs = MockNvs::new();

    svc.handle_command(AppCommand::SetMode(TargetMode::Heat), &mut sink);
    svc.handle_command(AppCommand::SaveConfig, &mut sink);

    assert!(svc.auto_save_if_needed(&clock, &nvs));
    assert_eq!(nvs.stored().unwrap().setpoints.mode, TargetMode::Heat);
}

#[test]
fn failed_write_keeps_config_dirty_and_retries() {
    let (mut svc, clock, _hw, mut sink) = make_app();
    let nvs = MockNvs::new();
    nvs.fail_writes.set(true);

    svc.handle_command(AppCommand::SetHeatingThreshold(16.0), &mut sink);
    clock.advance(AUTO_SAVE_DELAY_MS);
    assert!(!svc.auto_save_if_needed(&clock, &nvs));
    assert!(svc.is_config_dirty());

    nvs.fail_writes.set(false);
    clock.advance(AUTO_SAVE_DELAY_MS);
    assert!(svc.auto_save_if_needed(&clock, &nvs));
    assert_eq!(nvs.stored().unwrap().setpoints.heating_threshold_c, 16.0);
}

#[test]
fn later_change_restarts_quiet_period() {
    let (mut svc, clock, mut hw, mut sink) = make_app();
    let nvs = MockNvs::new();

    svc.handle_command(AppCommand::SetTargetTemperature(21.0), &mut sink);
    clock.advance(4_000);
    svc.tick(&clock, &mut hw, &mut sink);
    svc.handle_command(AppCommand::SetTargetTemperature(22.0), &mut sink);

    clock.advance(AUTO_SAVE_DELAY_MS - 1);
    assert!(!svc.auto_save_if_needed(&clock, &nvs), "5 s since the first change only");

    clock.advance(1);
    assert!(svc.auto_save_if_needed(&clock, &nvs));
    assert_eq!(nvs.stored().unwrap().setpoints.target_c, 22.0);
}

#[test]
fn failing_save_backs_off_between_attempts() {
    let (mut svc, clock, _hw, mut sink) = make_app();
    let nvs = MockNvs::new();

    svc.handle_command(AppCommand::SetMode(TargetMode::Cool), &mut sink);
    svc.handle_command(AppCommand::SaveConfig, &mut sink);
    assert!(!svc.auto_save_if_needed(&clock, &nvs));

    for _ in 0..10 {
        clock.advance(50);
        assert!(!svc.auto_save_if_needed(&clock, &nvs));
    }
    assert_eq!(nvs.attempts.get(), 1, "no attempt inside the back-off window");

    clock.advance(AUTO_SAVE_DELAY_MS);
    assert!(!svc.auto_save_if_needed(&clock, &nvs));
    assert_eq!(nvs.attempts.get(), 2);
    assert_eq!(nvs.saves.get(), 0);
    assert!(svc.is_config_dirty());
}

#[test]
fn cool_mode_is_never_persisted() {
    let (mut svc, clock, _hw, mut sink) = make_app();
    let nvs = MockNvs::new();

    svc.handle_command(AppCommand::SetMode(TargetMode::Cool), &mut sink);
    svc.handle_command(AppCommand::SaveConfig, &mut sink);

    assert!(!svc.auto_save_if_needed(&clock, &nvs));
    assert!(nvs.stored().is_none());
}

#[test]
fn setpoints_survive_a_restart() {
    let nvs = NvsAdapter::new().unwrap();
    {
        let (mut svc, clock, _hw, mut sink) = make_app();
        svc.handle_command(AppCommand::SetMode(TargetMode::Auto), &mut sink);
        svc.handle_command(AppCommand::SetCoolingThreshold(26.0), &mut sink);
        svc.handle_command(AppCommand::SaveConfig, &mut sink);
        assert!(svc.auto_save_if_needed(&clock, &nvs));
    }

    let restored = nvs.load().unwrap();
    let clock = ManualClock::at(0);
    let mut hw = MockHardware::reading(20.0);
    let mut sink = RecordingSink::new();
    let svc = ThermostatService::new(restored, &clock, &mut hw, &mut sink);

    assert_eq!(svc.setpoints().mode, TargetMode::Auto);
    assert_eq!(svc.setpoints().cooling_threshold_c, 26.0);
    assert!(!svc.is_config_dirty());
}
