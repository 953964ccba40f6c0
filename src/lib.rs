//! Thermostat firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

#[cfg(all(target_os = "espidf", not(feature = "espidf")))]
compile_error!("device builds need the `espidf` feature: cargo build --features espidf");

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod filter;
pub mod pins;
pub mod scheduler;

// Hardware-facing modules compile on the host too; the actual
// implementations are guarded by cfg attributes inside.
pub mod adapters;
pub mod drivers;
pub mod sensors;
