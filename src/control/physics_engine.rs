use serde::Serialize;
use tracing::debug;

use crate::constants::{GRAVITY, MAX_SWEEP_SAMPLES, SWEEP_RANGE_FACTOR, SWEEP_START, SWEEP_STEP};
use crate::errors::EstimatorError;

/// Tunable constants behind the propulsion formulas.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PhysicsConfig {
    pub standard_gravity: f64, // m/s²
    pub sweep_start: f64,      // kg
    pub sweep_step: f64,       // kg
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            standard_gravity: GRAVITY,
            sweep_start: SWEEP_START,
            sweep_step: SWEEP_STEP,
        }
    }
}

impl PhysicsConfig {
    pub fn new(
        standard_gravity: f64,
        sweep_start: f64,
        sweep_step: f64,
    ) -> Result<Self, EstimatorError> {
        for (name, value) in [
            ("standard gravity", standard_gravity),
            ("sweep start", sweep_start),
            ("sweep step", sweep_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EstimatorError::InvalidConfig(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        if sweep_start + sweep_step == sweep_start {
            return Err(EstimatorError::InvalidConfig(format!(
                "sweep step {} is too small to advance from {}",
                sweep_step, sweep_start
            )));
        }

        Ok(PhysicsConfig {
            standard_gravity,
            sweep_start,
            sweep_step,
        })
    }

    /// Ideal velocity change from the Tsiolkovsky rocket equation, in m/s.
    pub fn delta_v(&self, isp: f64, fuel_mass: f64, dry_mass: f64) -> Result<f64, EstimatorError> {
        let final_mass = dry_mass;
        let initial_mass = fuel_mass + dry_mass;

        if !(final_mass > 0.0) || !final_mass.is_finite() {
            return Err(EstimatorError::InvalidScenario(format!(
                "Dry mass must be positive, got {} kg",
                dry_mass
            )));
        }
        if !(initial_mass > final_mass) {
            return Err(EstimatorError::InvalidScenario(
                "Total mass must be greater than dry mass.".to_string(),
            ));
        }

        Ok(self.effective_exhaust_velocity(isp) * (initial_mass / final_mass).ln())
    }

    /// Steady-state thrust in newtons.
    pub fn thrust(&self, isp: f64, mass_flow_rate: f64) -> f64 {
        mass_flow_rate * self.standard_gravity * isp
    }

    pub fn effective_exhaust_velocity(&self, isp: f64) -> f64 {
        isp * self.standard_gravity
    }

    pub fn delta_v_sweep(&self, isp: f64, dry_mass: f64, max_fuel_mass: f64) -> DeltaVSweep {
        DeltaVSweep {
            config: *self,
            isp,
            dry_mass,
            max_fuel_mass,
            index: 0,
        }
    }

    /// Like `delta_v_sweep`, but refuses ranges with more than `MAX_SWEEP_SAMPLES` points.
    pub fn bounded_sweep(
        &self,
        isp: f64,
        dry_mass: f64,
        max_fuel_mass: f64,
    ) -> Result<DeltaVSweep, EstimatorError> {
        let sweep = self.delta_v_sweep(isp, dry_mass, max_fuel_mass);
        let samples = sweep.sample_count();
        if samples > MAX_SWEEP_SAMPLES {
            return Err(EstimatorError::InvalidScenario(format!(
                "Sweep up to {} kg needs {} samples, limit is {}",
                max_fuel_mass, samples, MAX_SWEEP_SAMPLES
            )));
        }
        Ok(sweep)
    }
}

pub fn compute_delta_v(isp: f64, fuel_mass: f64, dry_mass: f64) -> Result<f64, EstimatorError> {
    PhysicsConfig::default().delta_v(isp, fuel_mass, dry_mass)
}

pub fn compute_thrust(isp: f64, mass_flow_rate: f64) -> f64 {
    PhysicsConfig::default().thrust(isp, mass_flow_rate)
}

pub fn generate_delta_v_sweep(isp: f64, dry_mass: f64, max_fuel_mass: f64) -> DeltaVSweep {
    PhysicsConfig::default().delta_v_sweep(isp, dry_mass, max_fuel_mass)
}

/// Initial-to-final mass ratio m0 / mf.
pub fn mass_ratio(fuel_mass: f64, dry_mass: f64) -> f64 {
    (fuel_mass + dry_mass) / dry_mass
}

/// Seconds needed to expel `fuel_mass` at a constant flow rate.
pub fn burn_time(fuel_mass: f64, mass_flow_rate: f64) -> f64 {
    fuel_mass / mass_flow_rate
}

/// Sweep bound for a reference fuel mass, truncated to whole kilograms.
pub fn sweep_upper_bound(reference_fuel_mass: f64) -> f64 {
    (reference_fuel_mass * SWEEP_RANGE_FACTOR).floor()
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct SweepPoint {
    pub fuel_mass: f64,
    pub delta_v: f64,
}

/// Lazy (fuel mass, Δv) series sampled from `sweep_start` in `sweep_step`
/// increments, strictly below `max_fuel_mass`. Clone it to replay the series.
#[derive(Clone, Debug)]
pub struct DeltaVSweep {
    config: PhysicsConfig,
    isp: f64,
    dry_mass: f64,
    max_fuel_mass: f64,
    index: u64,
}

impl DeltaVSweep {
    /// Total number of points in the series, from the first sample.
    pub fn sample_count(&self) -> u64 {
        let span = self.max_fuel_mass - self.config.sweep_start;
        if !(span > 0.0) {
            return 0;
        }
        // saturates at u64::MAX for unbounded spans
        (span / self.config.sweep_step).ceil() as u64
    }

    fn sample_at(&self, index: u64) -> f64 {
        // multiply rather than accumulate so samples stay exact multiples of the step
        self.config.sweep_start + index as f64 * self.config.sweep_step
    }
}

impl Iterator for DeltaVSweep {
    type Item = SweepPoint;

    fn next(&mut self) -> Option<SweepPoint> {
        let fuel_mass = self.sample_at(self.index);
        if !(fuel_mass < self.max_fuel_mass) {
            return None;
        }
        self.index += 1;

        // A failed sample becomes 0 so the series length stays predictable.
        let delta_v = match self.config.delta_v(self.isp, fuel_mass, self.dry_mass) {
            Ok(delta_v) => delta_v,
            Err(e) => {
                debug!(fuel_mass, error = %e, "sweep sample failed, substituting 0");
                0.0
            }
        };

        Some(SweepPoint { fuel_mass, delta_v })
    }
}
