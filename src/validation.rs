//! Input validation for simulation parameters.
//!
//! Checks structural integrity of the process list before simulating.
//! Detects:
//! - Duplicate process names
//! - Zero-length bursts
//! - Names that cannot round-trip through the input grammar
//!
//! The parser already guarantees the directive-level rules (counts,
//! quantum presence); this pass covers what the grammar cannot express.

use std::collections::HashSet;

use crate::models::SimulationParams;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same name.
    DuplicateName,
    /// A process requires no CPU time.
    ZeroBurst,
    /// A name is empty or contains whitespace or `#`.
    InvalidName,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the parameters of a simulation run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_params(params: &SimulationParams) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for spec in &params.processes {
        if spec.name.is_empty()
            || spec
                .name
                .chars()
                .any(|c| c.is_whitespace() || c == '#')
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidName,
                format!("Invalid process name: '{}'", spec.name),
            ));
        }

        if !names.insert(spec.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", spec.name),
            ));
        }

        if spec.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a zero burst", spec.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
