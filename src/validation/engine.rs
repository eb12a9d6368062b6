//! Validation Engine
//!
//! Input checks kept apart from the formula itself. Rules are evaluated
//! independently, so a single call can report a problem with every field.

use serde::Deserialize;

use crate::model::{Field, PartialCalculationInputs};

const PERMITTIVITY_MESSAGE: &str = "Relative permittivity must be a positive number";
const FIELD_NONZERO_MESSAGE: &str = "Electric field strength must be a non-zero number";
const FIELD_POSITIVE_MESSAGE: &str = "Electric field strength must be a positive number";

/// Which rule set the electric field is checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// εᵣ > 0 and E ≠ 0; the sign of E does not affect U
    #[default]
    Standard,
    /// εᵣ > 0 and E > 0
    StrictPositive,
}

/// A problem with one input field
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub field: Field,
    pub message: String,
}

/// Result of validating a set of inputs
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: Field, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            field,
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_error_for(&self, field: Field) -> bool {
        self.diagnostics.iter().any(|d| d.field == field)
    }

    /// Messages in the order the rules fired
    pub fn into_messages(self) -> Vec<String> {
        self.diagnostics.into_iter().map(|d| d.message).collect()
    }
}

/// Validate possibly-partial inputs with the standard rules.
///
/// Returns an empty list when the inputs can be passed to
/// [`calculate`](crate::calculator::calculate).
pub fn validate(inputs: &PartialCalculationInputs) -> Vec<String> {
    validate_with_policy(inputs, ValidationPolicy::Standard).into_messages()
}

/// Validate possibly-partial inputs against the given policy
pub fn validate_with_policy(
    inputs: &PartialCalculationInputs,
    policy: ValidationPolicy,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    // Infinities pass the sign checks, so finiteness is tested explicitly
    match inputs.relative_permittivity {
        Some(value) if value.is_finite() && value > 0.0 => {}
        _ => result.add_error(Field::RelativePermittivity, PERMITTIVITY_MESSAGE),
    }

    match (inputs.electric_field, policy) {
        (Some(value), ValidationPolicy::Standard) if value.is_finite() && value != 0.0 => {}
        (Some(value), ValidationPolicy::StrictPositive) if value.is_finite() && value > 0.0 => {}
        (_, ValidationPolicy::Standard) => {
            result.add_error(Field::ElectricField, FIELD_NONZERO_MESSAGE)
        }
        (_, ValidationPolicy::StrictPositive) => {
            result.add_error(Field::ElectricField, FIELD_POSITIVE_MESSAGE)
        }
    }

    if !result.is_valid() {
        log::debug!(
            "validation ({:?}) rejected {:?}: {} problem(s)",
            policy,
            inputs,
            result.diagnostics.len()
        );
    }

    result
}
