use crate::errors::{EstimatorError, InputRejection};

/// Semantic role of a user-supplied physical quantity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuantityKind {
    SpecificImpulse,
    FuelMass,
    DryMass,
    MassFlowRate,
}

impl QuantityKind {
    /// Human-readable field name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            QuantityKind::SpecificImpulse => "ISP",
            QuantityKind::FuelMass => "Fuel Mass",
            QuantityKind::DryMass => "Dry Mass",
            QuantityKind::MassFlowRate => "Mass Flow Rate",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            QuantityKind::SpecificImpulse => "s",
            QuantityKind::FuelMass | QuantityKind::DryMass => "kg",
            QuantityKind::MassFlowRate => "kg/s",
        }
    }
}

/// A strictly positive, finite value tagged with its role.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PhysicalQuantity {
    kind: QuantityKind,
    value: f64,
}

impl PhysicalQuantity {
    pub fn new(kind: QuantityKind, value: f64) -> Result<Self, EstimatorError> {
        check_positive(value, kind.label())?;
        Ok(PhysicalQuantity { kind, value })
    }

    pub fn parse(raw: &str, kind: QuantityKind) -> Result<Self, EstimatorError> {
        let value = parse_positive(raw, kind.label())?;
        Ok(PhysicalQuantity { kind, value })
    }

    pub fn kind(&self) -> QuantityKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl std::fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.kind.unit())
    }
}

/// Parses decimal or scientific notation and accepts only finite values above zero.
///
/// `field` is only used to label the error.
pub fn parse_positive(raw: &str, field: &str) -> Result<f64, EstimatorError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| EstimatorError::invalid_input(field, InputRejection::NotANumber))?;
    check_positive(value, field)?;
    Ok(value)
}

fn check_positive(value: f64, field: &str) -> Result<(), EstimatorError> {
    if !value.is_finite() {
        return Err(EstimatorError::invalid_input(field, InputRejection::NotFinite));
    }
    if value <= 0.0 {
        return Err(EstimatorError::invalid_input(field, InputRejection::NotPositive));
    }
    Ok(())
}
