use serde::Serialize;
use tracing::debug;

use super::physics_engine::{self, DeltaVSweep, PhysicsConfig};
use super::validator::{PhysicalQuantity, QuantityKind};
use crate::constants::{
    DEFAULT_DRY_MASS, DEFAULT_FUEL_MASS, DEFAULT_MASS_FLOW_RATE, DEFAULT_SPECIFIC_IMPULSE,
};
use crate::errors::EstimatorError;

/// Raw text as entered by the user, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioInput {
    pub specific_impulse: String,
    pub fuel_mass: String,
    pub dry_mass: String,
    pub mass_flow_rate: String,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        ScenarioInput {
            specific_impulse: DEFAULT_SPECIFIC_IMPULSE.to_string(),
            fuel_mass: DEFAULT_FUEL_MASS.to_string(),
            dry_mass: DEFAULT_DRY_MASS.to_string(),
            mass_flow_rate: DEFAULT_MASS_FLOW_RATE.to_string(),
        }
    }
}

/// A validated single-stage burn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurnScenario {
    pub specific_impulse: PhysicalQuantity,
    pub fuel_mass: PhysicalQuantity,
    pub dry_mass: PhysicalQuantity,
    pub mass_flow_rate: PhysicalQuantity,
}

impl BurnScenario {
    pub fn new(
        specific_impulse: f64,
        fuel_mass: f64,
        dry_mass: f64,
        mass_flow_rate: f64,
    ) -> Result<Self, EstimatorError> {
        Ok(BurnScenario {
            specific_impulse: PhysicalQuantity::new(QuantityKind::SpecificImpulse, specific_impulse)?,
            fuel_mass: PhysicalQuantity::new(QuantityKind::FuelMass, fuel_mass)?,
            dry_mass: PhysicalQuantity::new(QuantityKind::DryMass, dry_mass)?,
            mass_flow_rate: PhysicalQuantity::new(QuantityKind::MassFlowRate, mass_flow_rate)?,
        })
    }

    /// Fields are checked in entry order; the first bad one is reported.
    pub fn parse(input: &ScenarioInput) -> Result<Self, EstimatorError> {
        Ok(BurnScenario {
            specific_impulse: PhysicalQuantity::parse(
                &input.specific_impulse,
                QuantityKind::SpecificImpulse,
            )?,
            fuel_mass: PhysicalQuantity::parse(&input.fuel_mass, QuantityKind::FuelMass)?,
            dry_mass: PhysicalQuantity::parse(&input.dry_mass, QuantityKind::DryMass)?,
            mass_flow_rate: PhysicalQuantity::parse(
                &input.mass_flow_rate,
                QuantityKind::MassFlowRate,
            )?,
        })
    }

    pub fn initial_mass(&self) -> f64 {
        self.fuel_mass.value() + self.dry_mass.value()
    }

    pub fn mass_ratio(&self) -> f64 {
        physics_engine::mass_ratio(self.fuel_mass.value(), self.dry_mass.value())
    }

    pub fn burn_time(&self) -> f64 {
        physics_engine::burn_time(self.fuel_mass.value(), self.mass_flow_rate.value())
    }

    pub fn evaluate(&self, config: &PhysicsConfig) -> Result<CalculationResult, EstimatorError> {
        let delta_v = config.delta_v(
            self.specific_impulse.value(),
            self.fuel_mass.value(),
            self.dry_mass.value(),
        )?;
        let thrust = config.thrust(self.specific_impulse.value(), self.mass_flow_rate.value());
        debug!(delta_v, thrust, "burn evaluated");

        Ok(CalculationResult { delta_v, thrust })
    }

    /// Δv sweep up to 1.5x this scenario's fuel mass.
    pub fn sweep(&self, config: &PhysicsConfig) -> Result<DeltaVSweep, EstimatorError> {
        sweep_for(self.specific_impulse, self.dry_mass, self.fuel_mass, config)
    }
}

/// Builds a sweep from raw input, validating only the fields a sweep reads.
pub fn parse_sweep(
    input: &ScenarioInput,
    config: &PhysicsConfig,
) -> Result<DeltaVSweep, EstimatorError> {
    let isp = PhysicalQuantity::parse(&input.specific_impulse, QuantityKind::SpecificImpulse)?;
    let dry_mass = PhysicalQuantity::parse(&input.dry_mass, QuantityKind::DryMass)?;
    let fuel_mass = PhysicalQuantity::parse(&input.fuel_mass, QuantityKind::FuelMass)?;
    sweep_for(isp, dry_mass, fuel_mass, config)
}

fn sweep_for(
    isp: PhysicalQuantity,
    dry_mass: PhysicalQuantity,
    reference_fuel: PhysicalQuantity,
    config: &PhysicsConfig,
) -> Result<DeltaVSweep, EstimatorError> {
    let max_fuel_mass = physics_engine::sweep_upper_bound(reference_fuel.value());
    config.bounded_sweep(isp.value(), dry_mass.value(), max_fuel_mass)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CalculationResult {
    pub delta_v: f64, // m/s
    pub thrust: f64,  // N
}

impl std::fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Δv: {:.2} m/s", self.delta_v)?;
        write!(f, "Thrust: {:.2} N", self.thrust)
    }
}
