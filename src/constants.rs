// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s², standard gravity used for Isp conversions

// Sweep Parameters
pub const SWEEP_START: f64 = 100.0; // kg
pub const SWEEP_STEP: f64 = 100.0; // kg
pub const SWEEP_RANGE_FACTOR: f64 = 1.5; // upper bound as a multiple of the reference fuel mass
pub const MAX_SWEEP_SAMPLES: u64 = 100_000; // points a single sweep may materialize

// Default Inputs
pub const DEFAULT_SPECIFIC_IMPULSE: f64 = 300.0; // s
pub const DEFAULT_FUEL_MASS: f64 = 5000.0; // kg
pub const DEFAULT_DRY_MASS: f64 = 1000.0; // kg
pub const DEFAULT_MASS_FLOW_RATE: f64 = 20.0; // kg/s
