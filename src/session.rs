//! Calculator Session
//!
//! The small piece of state a front end keeps between edits: the inputs
//! collected so far, the latest result and the latest validation messages.
//! The engine itself stays stateless; recomputing on each change is driven
//! from here.

use crate::calculator::try_calculate;
use crate::model::{CalculationInputs, CalculationResult, Field, PartialCalculationInputs};
use crate::validation::{validate_with_policy, ValidationPolicy};

#[derive(Debug, Clone, Default)]
pub struct Session {
    policy: ValidationPolicy,
    inputs: PartialCalculationInputs,
    result: Option<CalculationResult>,
    errors: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn inputs(&self) -> &PartialCalculationInputs {
        &self.inputs
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Record a new value for `field`.
    ///
    /// Pending errors are cleared. Once both fields are filled and valid the
    /// result is recomputed, otherwise any previous result is dropped.
    pub fn update_input(&mut self, field: Field, value: f64) {
        self.inputs.set(field, value);
        self.errors.clear();

        self.result = self.try_evaluate().ok();
    }

    /// Validate and evaluate the current inputs.
    ///
    /// Returns `false` and keeps the messages when validation fails or the
    /// result does not fit in an `f64`.
    pub fn calculate(&mut self) -> bool {
        match self.try_evaluate() {
            Ok(result) => {
                self.result = Some(result);
                self.errors.clear();
                true
            }
            Err(errors) => {
                log::debug!("calculation blocked: {}", errors.join("; "));
                self.result = None;
                self.errors = errors;
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.inputs = PartialCalculationInputs::default();
        self.result = None;
        self.errors.clear();
    }

    pub fn has_valid_inputs(&self) -> bool {
        validate_with_policy(&self.inputs, self.policy).is_valid()
    }

    /// Whether any current message concerns `field`, for highlighting it
    pub fn field_has_error(&self, field: Field) -> bool {
        let label = field.label();
        self.errors
            .iter()
            .any(|error| error.to_lowercase().contains(label))
    }

    fn try_evaluate(&self) -> Result<CalculationResult, Vec<String>> {
        let validation = validate_with_policy(&self.inputs, self.policy);
        match (self.inputs.relative_permittivity, self.inputs.electric_field) {
            (Some(relative_permittivity), Some(electric_field)) if validation.is_valid() => {
                try_calculate(&CalculationInputs::new(relative_permittivity, electric_field))
                    .map_err(|err| vec![err.to_string()])
            }
            _ => Err(validation.into_messages()),
        }
    }
}
