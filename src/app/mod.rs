//! Application core: pure domain logic, zero I/O.
//!
//! The thermostat's business rules live here: the setpoints snapshot,
//! the per-tick orchestration of filter, hysteresis and timers, and the
//! config dirty-flag handling.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
pub mod setpoints;
