//! Error types shared across the crate.

use thiserror::Error;

use crate::model::Field;

/// Top-level error type for the energy density engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnergyDensityError {
    /// Inputs were rejected by the validator; carries every message in order.
    #[error("invalid inputs: {}", .0.join(". "))]
    InvalidInputs(Vec<String>),
    /// Text typed into a field could not be read as a number.
    #[error("could not parse {field} from '{text}'")]
    Parse { field: Field, text: String },
    /// Valid inputs whose energy density does not fit in an `f64`.
    #[error("Energy density is too large to represent for these inputs")]
    NonFiniteResult,
}
