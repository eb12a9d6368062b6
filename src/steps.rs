//! Step-by-step derivation trace
//!
//! Reproduces the working a student would write out by hand: substitute the
//! values, square the field, then multiply everything together. The trace is
//! always three steps long and carries no state beyond the formatted text.

use crate::constants::{COEFFICIENT, ENERGY_DENSITY_UNIT, VACUUM_PERMITTIVITY};
use crate::format::{format_literal, to_exponential, MANTISSA_DIGITS};
use crate::model::{CalculationInputs, CalculationStep};

/// Symbolic form of the energy density formula
pub const FORMULA: &str = "U = ½ × ε₀ × εᵣ × E²";

/// Build the derivation trace for `inputs`, ending at `energy_density`.
pub fn generate_steps(inputs: &CalculationInputs, energy_density: f64) -> Vec<CalculationStep> {
    let permittivity = format_literal(inputs.relative_permittivity);
    let field = format_literal(inputs.electric_field);
    let epsilon_zero = to_exponential(VACUUM_PERMITTIVITY, MANTISSA_DIGITS);
    let field_squared = to_exponential(inputs.electric_field.powi(2), MANTISSA_DIGITS);

    let substitute = CalculationStep {
        step: 1,
        description: "Substitute values into formula".to_string(),
        formula: FORMULA.to_string(),
        substitution: format!(
            "U = {COEFFICIENT} × {epsilon_zero} × {permittivity} × ({field})²"
        ),
    };

    let square = CalculationStep {
        step: 2,
        description: "Calculate E²".to_string(),
        formula: format!("E² = ({field})²"),
        substitution: format!("E² = {field_squared}"),
    };

    let multiply = CalculationStep {
        step: 3,
        description: "Multiply all terms".to_string(),
        formula: format!("U = {COEFFICIENT} × {epsilon_zero} × {permittivity} × {field_squared}"),
        substitution: format!(
            "U = {} {ENERGY_DENSITY_UNIT}",
            to_exponential(energy_density, MANTISSA_DIGITS)
        ),
    };

    vec![substitute, square, multiply]
}
