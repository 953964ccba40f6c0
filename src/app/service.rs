//! Application service: the hexagonal core.
//!
//! [`ThermostatService`] owns the filter, the loop timers, the setpoints
//! snapshot and the heater state.  It exposes a hardware-agnostic API;
//! all I/O flows through port traits injected at call sites, so the whole
//! loop is testable with mock adapters and a synthetic clock.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │      ThermostatService        │
//! ActuatorPort ◀──│  Filter · Hysteresis · Timers │ ◀── MonotonicClock
//!                 └──────────────────────────────┘
//! ```
//!
//! Per tick, in order: sense (if due) → publish (if due) → decide (if due,
//! or immediately after a setpoint change).  Nothing in here can fail; the
//! worst case is holding the last known state.

use log::{debug, info, warn};

use crate::config::ThermostatConfig;
use crate::control::{CurrentState, DecisionInput, StatusColour, decide};
use crate::filter::{ReadingFilter, TemperatureFilter};
use crate::scheduler::LoopTimers;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, ConfigPort, EventSink, MonotonicClock, SensorPort};
use super::setpoints::Setpoints;

/// Quiet time after the last change before the config is persisted.
pub const AUTO_SAVE_DELAY_MS: u64 = 5_000;

/// What the accessory layer reads back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermostatStatus {
    pub heater: CurrentState,
    /// Last published estimate, rounded to 0.1 °C.
    pub current_temp_c: f32,
}

// ───────────────────────────────────────────────────────────────
// ThermostatService
// ───────────────────────────────────────────────────────────────

pub struct ThermostatService {
    config: ThermostatConfig,
    filter: TemperatureFilter,
    timers: LoopTimers,
    heater_on: bool,
    colour: StatusColour,
    /// Last value handed to the reporting side.
    reported_c: f32,
    /// Setpoints changed since the last decision.
    decision_pending: bool,
    tick_count: u64,
    last_now_ms: u64,
    config_dirty: bool,
    dirty_since_ms: u64,
    save_requested: bool,
}

impl ThermostatService {
    /// Bring the core up: seed the filter from one real sample, force the
    /// heater off and show the startup colour.
    pub fn new(
        config: ThermostatConfig,
        clock: &impl MonotonicClock,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> Self {
        let now = clock.now_ms();
        let seed = hw.sample_temperature();
        if !config.valid_range.contains(seed) {
            warn!(
                "seed reading {:.1}\u{00b0}C outside [{:.1}, {:.1}], using it until valid samples arrive",
                seed, config.valid_range.min_c, config.valid_range.max_c
            );
        }

        let filter = TemperatureFilter::new(config.filter, config.valid_range, seed);
        let timers = LoopTimers::new(&config.periods, now);

        if !hw.set_heater(false) {
            warn!("heater relay did not confirm off at startup");
        }
        hw.set_status(StatusColour::Startup);

        info!(
            "ThermostatService started: filter={} seed={:.1}\u{00b0}C mode={:?}",
            filter.policy_name(),
            seed,
            config.setpoints.mode
        );
        sink.emit(&AppEvent::Started { seed_c: seed });

        Self {
            config,
            filter,
            timers,
            heater_on: false,
            colour: StatusColour::Startup,
            reported_c: seed,
            decision_pending: false,
            tick_count: 0,
            last_now_ms: now,
            config_dirty: false,
            dirty_since_ms: now,
            save_requested: false,
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one pass of the control loop.
    ///
    /// `hw` satisfies **both** [`SensorPort`] and [`ActuatorPort`] so a
    /// single adapter can be borrowed mutably once per tick.
    pub fn tick(
        &mut self,
        clock: &impl MonotonicClock,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        let now = clock.now_ms();
        self.tick_count += 1;
        self.last_now_ms = now;

        // 1. Sense
        if self.timers.sense.poll(now) {
            let reading = hw.sample_temperature();
            if !self.filter.sense(reading) {
                debug!("reading {:.1}\u{00b0}C rejected", reading);
                sink.emit(&AppEvent::ReadingRejected { reading_c: reading });
            }
        }

        // 2. Publish
        if self.timers.publish.poll(now) {
            if let Some(estimate) = self.filter.publish() {
                self.reported_c = estimate;
                sink.emit(&AppEvent::TemperaturePublished {
                    current_c: round_tenth(estimate),
                });
            }
        }

        // 3. Decide
        let due = self.timers.decide.poll(now);
        let forced = self.decision_pending && self.config.decide_on_change;
        if due || forced {
            self.run_decision(hw, sink);
            self.timers.decide.restart(now);
            self.decision_pending = false;
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply a settings change from the accessory layer.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) {
        match cmd {
            AppCommand::SetMode(mode) => {
                let sp = Setpoints {
                    mode,
                    ..self.config.setpoints
                };
                self.set_setpoints(sp, sink);
            }
            AppCommand::SetTargetTemperature(target_c) => {
                let sp = Setpoints {
                    target_c,
                    ..self.config.setpoints
                };
                self.set_setpoints(sp, sink);
            }
            AppCommand::SetHeatingThreshold(heating_threshold_c) => {
                let sp = Setpoints {
                    heating_threshold_c,
                    ..self.config.setpoints
                };
                self.set_setpoints(sp, sink);
            }
            AppCommand::SetCoolingThreshold(cooling_threshold_c) => {
                let sp = Setpoints {
                    cooling_threshold_c,
                    ..self.config.setpoints
                };
                self.set_setpoints(sp, sink);
            }
            AppCommand::UpdateSetpoints(sp) => self.set_setpoints(sp, sink),
            AppCommand::UpdateConfig(new_config) => self.update_config(new_config, sink),
            AppCommand::SaveConfig => {
                self.mark_config_dirty();
                self.save_requested = true;
                info!("Explicit config save requested (will flush on next auto-save check)");
            }
        }
    }

    /// Replace the setpoints snapshot. A change arms the immediate decision.
    pub fn set_setpoints(&mut self, setpoints: Setpoints, sink: &mut impl EventSink) {
        if setpoints == self.config.setpoints {
            return;
        }
        info!(
            "Setpoints: mode={:?} target={:.1} heat={:.1} cool={:.1}",
            setpoints.mode,
            setpoints.target_c,
            setpoints.heating_threshold_c,
            setpoints.cooling_threshold_c
        );
        self.config.setpoints = setpoints;
        self.decision_pending = true;
        self.mark_config_dirty();
        sink.emit(&AppEvent::SetpointsChanged);
    }

    fn update_config(&mut self, new_config: ThermostatConfig, sink: &mut impl EventSink) {
        if new_config.filter != self.config.filter || new_config.valid_range != self.config.valid_range {
            info!("Filter settings changed; the new filter takes effect after restart");
        }
        if new_config.periods != self.config.periods {
            self.timers = LoopTimers::new(&new_config.periods, self.last_now_ms);
        }
        let setpoints = new_config.setpoints;
        // The running filter stays authoritative until restart.
        self.config = ThermostatConfig {
            filter: self.config.filter,
            valid_range: self.config.valid_range,
            setpoints: self.config.setpoints,
            ..new_config
        };
        self.mark_config_dirty();
        info!("Configuration updated at runtime");
        self.set_setpoints(setpoints, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Heater state and reported temperature for the accessory layer.
    pub fn status(&self) -> ThermostatStatus {
        ThermostatStatus {
            heater: CurrentState::from_heater(self.heater_on),
            current_temp_c: round_tenth(self.reported_c),
        }
    }

    pub fn build_telemetry(&self) -> TelemetryData {
        let sp = &self.config.setpoints;
        TelemetryData {
            mode: sp.mode,
            target_c: sp.target_c,
            heating_threshold_c: sp.heating_threshold_c,
            cooling_threshold_c: sp.cooling_threshold_c,
            estimate_c: self.filter.estimate(),
            reported_c: round_tenth(self.reported_c),
            heater: CurrentState::from_heater(self.heater_on),
            colour: self.colour,
        }
    }

    pub fn setpoints(&self) -> Setpoints {
        self.config.setpoints
    }

    /// Filtered estimate the next decision will use.
    pub fn estimate(&self) -> f32 {
        self.filter.estimate()
    }

    pub fn heater_on(&self) -> bool {
        self.heater_on
    }

    /// Colour written by the last decision.
    pub fn colour(&self) -> StatusColour {
        self.colour
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Clone of the live configuration (for read-back or persistence).
    pub fn current_config(&self) -> ThermostatConfig {
        self.config.clone()
    }

    // ── Internal ──────────────────────────────────────────────

    fn run_decision(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let estimate = self.filter.estimate();
        let decision = decide(&DecisionInput {
            setpoints: &self.config.setpoints,
            heater_on: self.heater_on,
            current_c: estimate,
            hysteresis_c: self.config.hysteresis_c,
            policy: self.config.band_policy,
        });

        hw.set_status(decision.colour);
        self.colour = decision.colour;

        if decision.toggle {
            let from = CurrentState::from_heater(self.heater_on);
            let wanted = !self.heater_on;
            if hw.set_heater(wanted) {
                self.heater_on = wanted;
                let to = CurrentState::from_heater(wanted);
                info!("Heater {:?} -> {:?} at {:.1}\u{00b0}C", from, to, estimate);
                sink.emit(&AppEvent::HeaterChanged { from, to });
            } else {
                // State unchanged, so the next decision asks again.
                warn!("Heater switch to {} failed, still {:?}", wanted, from);
            }
        }

        debug!(
            "decide: mode={:?} est={:.2} heater={} colour={}",
            self.config.setpoints.mode,
            estimate,
            self.heater_on,
            decision.colour.name()
        );
    }

    // ── Config dirty-flag management ──────────────────────────

    /// Every change restarts the quiet period.
    fn mark_config_dirty(&mut self) {
        self.config_dirty = true;
        self.dirty_since_ms = self.last_now_ms;
    }

    /// Persist the config once it has been quiet for [`AUTO_SAVE_DELAY_MS`]
    /// (or immediately after [`AppCommand::SaveConfig`]).  A failed save
    /// waits another full delay before the next attempt.
    /// Returns `true` if the config was saved.
    pub fn auto_save_if_needed(
        &mut self,
        clock: &impl MonotonicClock,
        storage: &impl ConfigPort,
    ) -> bool {
        if !self.config_dirty {
            return false;
        }
        let now = clock.now_ms();
        let quiet_ms = now.wrapping_sub(self.dirty_since_ms);
        if !self.save_requested && quiet_ms < AUTO_SAVE_DELAY_MS {
            return false;
        }
        match storage.save(&self.config) {
            Ok(()) => {
                self.config_dirty = false;
                self.save_requested = false;
                info!("Config auto-saved");
                true
            }
            Err(e) => {
                warn!("Config auto-save failed: {}, retrying in {} ms", e, AUTO_SAVE_DELAY_MS);
                self.save_requested = false;
                self.dirty_since_ms = now;
                false
            }
        }
    }

    /// Whether the config has unsaved changes.
    pub fn is_config_dirty(&self) -> bool {
        self.config_dirty
    }
}

fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
