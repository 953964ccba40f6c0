//! Fuzz target: persisted config decoding
//!
//! Feeds arbitrary bytes to the postcard decoder used by the NVS adapter
//! and checks that anything which decodes and validates also survives a
//! re-encode unchanged.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - A validated config round-trips through postcard
//!
//! cargo fuzz run fuzz_config_blob

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermostat::config::ThermostatConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(cfg) = postcard::from_bytes::<ThermostatConfig>(data) else {
        return;
    };
    if cfg.validate().is_err() {
        return;
    }

    let bytes = postcard::to_allocvec(&cfg).expect("encode validated config");
    let again: ThermostatConfig = postcard::from_bytes(&bytes).expect("decode own encoding");
    assert_eq!(cfg, again);
});
