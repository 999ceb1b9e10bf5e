use thiserror::Error;

/// Why a raw input string was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRejection {
    NotANumber,
    NotFinite,
    NotPositive,
}

impl std::fmt::Display for InputRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            InputRejection::NotANumber => "not a number",
            InputRejection::NotFinite => "not a finite number",
            InputRejection::NotPositive => "must be greater than zero",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EstimatorError {
    #[error("Invalid input for {field} ({reason}). Please enter a positive number.")]
    InvalidInput {
        field: String,
        reason: InputRejection,
    },

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EstimatorError {
    pub fn invalid_input(field: &str, reason: InputRejection) -> Self {
        EstimatorError::InvalidInput {
            field: field.to_string(),
            reason,
        }
    }

    /// Field label for input errors, `None` for the other kinds.
    pub fn field(&self) -> Option<&str> {
        match self {
            EstimatorError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}
