//! Evaluation of U = ½ × ε₀ × εᵣ × E²

use crate::constants::{COEFFICIENT, VACUUM_PERMITTIVITY};
use crate::errors::EnergyDensityError;
use crate::format::{to_exponential, MANTISSA_DIGITS};
use crate::model::{CalculationInputs, CalculationResult};
use crate::steps::generate_steps;

/// Energy density in J/m³.
///
/// Inputs are expected to have been validated already; nothing is re-checked
/// here, and non-finite inputs simply propagate through the arithmetic.
pub fn calculate_energy_density(inputs: &CalculationInputs) -> f64 {
    COEFFICIENT * VACUUM_PERMITTIVITY * inputs.relative_permittivity * inputs.electric_field.powi(2)
}

/// Evaluate the formula and build the full result, including the derivation trace.
pub fn calculate(inputs: &CalculationInputs) -> CalculationResult {
    let energy_density = calculate_energy_density(inputs);
    log::trace!("energy density for {:?}: {}", inputs, energy_density);

    CalculationResult {
        energy_density,
        scientific: to_exponential(energy_density, MANTISSA_DIGITS),
        steps: generate_steps(inputs, energy_density),
    }
}

/// Like [`calculate`], but rejects results that overflowed to infinity.
///
/// The validator only sees each input on its own; a large εᵣ together with a
/// large E can still exceed `f64::MAX` once multiplied.
pub fn try_calculate(inputs: &CalculationInputs) -> Result<CalculationResult, EnergyDensityError> {
    let result = calculate(inputs);
    if !result.energy_density.is_finite() {
        log::debug!("energy density for {:?} is not finite", inputs);
        return Err(EnergyDensityError::NonFiniteResult);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn worked_example_matches_reference() {
        let inputs = CalculationInputs::new(2.1, 1_000_000.0);
        let result = calculate(&inputs);

        assert_relative_eq!(result.energy_density, 9296.897_208_48, max_relative = 1e-12);
        assert_eq!(result.scientific, "9.2969e+3");
    }

    #[test]
    fn sign_of_field_is_irrelevant() {
        let positive = calculate_energy_density(&CalculationInputs::new(4.0, 250.0));
        let negative = calculate_energy_density(&CalculationInputs::new(4.0, -250.0));
        assert_eq!(positive.to_bits(), negative.to_bits());
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let inputs = CalculationInputs::new(80.1, 3.3e4);
        let first = calculate(&inputs);
        let second = calculate(&inputs);

        assert_eq!(first.energy_density.to_bits(), second.energy_density.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn overflowing_product_is_rejected() {
        let inputs = CalculationInputs::new(1e300, 1e10);
        assert!(calculate_energy_density(&inputs).is_infinite());
        assert_eq!(try_calculate(&inputs), Err(EnergyDensityError::NonFiniteResult));
    }

    #[test]
    fn try_calculate_matches_calculate_when_finite() {
        let inputs = CalculationInputs::new(2.1, 1_000_000.0);
        assert_eq!(try_calculate(&inputs), Ok(calculate(&inputs)));
    }

    #[test]
    fn non_finite_input_propagates() {
        let result = calculate_energy_density(&CalculationInputs::new(f64::NAN, 1.0));
        assert!(result.is_nan());
    }
}
