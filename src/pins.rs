//! GPIO / peripheral pin assignments for the thermostat board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors: Analog (ADC1)
// ---------------------------------------------------------------------------

/// TMP36 analog temperature sensor output.
/// ADC1 channel 2 (GPIO 3 on ESP32-S2/S3).
pub const TEMP_ADC_GPIO: i32 = 3;

/// Number of raw conversions averaged per millivolt reading.
pub const TEMP_ADC_SAMPLES: u32 = 10;

// ---------------------------------------------------------------------------
// Heater relay
// ---------------------------------------------------------------------------

/// Digital output: HIGH = relay energised (heater on).
pub const HEATER_RELAY_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Status LED (discrete RGB, common cathode)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 11;
pub const LED_G_GPIO: i32 = 12;
pub const LED_B_GPIO: i32 = 13;

/// Power rail enable for the on-board LED (active HIGH).
pub const LED_POWER_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC frequency for the RGB status LED (1 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
