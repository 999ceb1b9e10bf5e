pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;

pub use constants::*;
pub use errors::{EstimatorError, InputRejection};

// Re-export commonly used items from control
pub use control::physics_engine::{
    compute_delta_v, compute_thrust, generate_delta_v_sweep, DeltaVSweep, PhysicsConfig,
    SweepPoint,
};
pub use control::scenario::{parse_sweep, BurnScenario, CalculationResult, ScenarioInput};
pub use control::validator::{parse_positive, PhysicalQuantity, QuantityKind};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::report::SweepReport;
