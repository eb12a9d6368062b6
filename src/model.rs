//! Value types flowing through the engine
//!
//! Partial inputs model a form that is still being filled in; complete
//! inputs can only be obtained from them by passing validation.

use std::fmt;

use serde::Serialize;

use crate::errors::EnergyDensityError;
use crate::validation::validate;

/// The two user-supplied quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RelativePermittivity,
    ElectricField,
}

impl Field {
    /// Human-readable label, as it appears in validation messages
    pub fn label(self) -> &'static str {
        match self {
            Field::RelativePermittivity => "relative permittivity",
            Field::ElectricField => "electric field",
        }
    }

    /// Unit suffix accepted after a typed value, if the field has one
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Field::RelativePermittivity => None,
            Field::ElectricField => Some("V/m"),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs as collected so far; either field may still be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PartialCalculationInputs {
    pub relative_permittivity: Option<f64>,
    pub electric_field: Option<f64>,
}

impl PartialCalculationInputs {
    pub fn new(relative_permittivity: Option<f64>, electric_field: Option<f64>) -> Self {
        Self {
            relative_permittivity,
            electric_field,
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::RelativePermittivity => self.relative_permittivity,
            Field::ElectricField => self.electric_field,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::RelativePermittivity => self.relative_permittivity = Some(value),
            Field::ElectricField => self.electric_field = Some(value),
        }
    }

    /// True once both fields hold a value, valid or not
    pub fn is_complete(&self) -> bool {
        self.relative_permittivity.is_some() && self.electric_field.is_some()
    }
}

/// Complete inputs for one evaluation of the formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInputs {
    /// Dimensionless εᵣ
    pub relative_permittivity: f64,
    /// Field strength E in V/m
    pub electric_field: f64,
}

impl CalculationInputs {
    pub fn new(relative_permittivity: f64, electric_field: f64) -> Self {
        Self {
            relative_permittivity,
            electric_field,
        }
    }
}

impl From<CalculationInputs> for PartialCalculationInputs {
    fn from(inputs: CalculationInputs) -> Self {
        Self::new(
            Some(inputs.relative_permittivity),
            Some(inputs.electric_field),
        )
    }
}

impl TryFrom<PartialCalculationInputs> for CalculationInputs {
    type Error = EnergyDensityError;

    fn try_from(partial: PartialCalculationInputs) -> Result<Self, Self::Error> {
        let errors = validate(&partial);
        match (partial.relative_permittivity, partial.electric_field) {
            (Some(relative_permittivity), Some(electric_field)) if errors.is_empty() => {
                Ok(Self::new(relative_permittivity, electric_field))
            }
            _ => Err(EnergyDensityError::InvalidInputs(errors)),
        }
    }
}

/// One line of the derivation trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationStep {
    /// 1-based position in the trace
    pub step: usize,
    pub description: String,
    pub formula: String,
    pub substitution: String,
}

/// Outcome of one successful evaluation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Energy density U in J/m³
    pub energy_density: f64,
    /// `energy_density` in exponential notation
    pub scientific: String,
    pub steps: Vec<CalculationStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_inputs_completeness() {
        let mut partial = PartialCalculationInputs::default();
        assert!(!partial.is_complete());

        partial.set(Field::RelativePermittivity, 2.1);
        assert!(!partial.is_complete());
        assert_eq!(partial.get(Field::RelativePermittivity), Some(2.1));

        partial.set(Field::ElectricField, -3.0);
        assert!(partial.is_complete());
        assert_eq!(partial.get(Field::ElectricField), Some(-3.0));
    }

    #[test]
    fn test_try_from_valid_partial() {
        let partial = PartialCalculationInputs::new(Some(2.0), Some(5.0));
        let inputs = CalculationInputs::try_from(partial).expect("valid inputs");
        assert_eq!(inputs, CalculationInputs::new(2.0, 5.0));
    }

    #[test]
    fn test_try_from_carries_all_messages() {
        let partial = PartialCalculationInputs::new(None, Some(0.0));
        let err = CalculationInputs::try_from(partial).unwrap_err();

        match err {
            EnergyDensityError::InvalidInputs(messages) => assert_eq!(messages.len(), 2),
            other => panic!("Expected invalid inputs, got {other:?}"),
        }
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::RelativePermittivity.to_string(), "relative permittivity");
        assert_eq!(Field::ElectricField.unit(), Some("V/m"));
        assert_eq!(Field::RelativePermittivity.unit(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(CalculationInputs::new(2.1, -5.0)).expect("serialize");
        assert_eq!(value["relative_permittivity"], 2.1);
        assert_eq!(value["electric_field"], -5.0);

        let field = serde_json::to_value(Field::ElectricField).expect("serialize");
        assert_eq!(field, "electric_field");

        let partial = serde_json::to_value(PartialCalculationInputs::new(Some(1.0), None))
            .expect("serialize");
        assert!(partial["electric_field"].is_null());
    }
}
