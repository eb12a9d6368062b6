//! Input Parser
//!
//! Turns text typed into an input box into a field value. A value may be
//! followed by the field's own unit (`V/m` for the electric field); any
//! other suffix is rejected rather than converted.

pub mod literal;

pub use literal::{split_literal, Literal};

use crate::errors::EnergyDensityError;
use crate::model::Field;

/// Parse the text of one input field
pub fn parse_field(text: &str, field: Field) -> Result<f64, EnergyDensityError> {
    let parse_error = || EnergyDensityError::Parse {
        field,
        text: text.to_string(),
    };

    let literal = split_literal(text.trim()).ok_or_else(parse_error)?;
    if literal.unit.is_some() && literal.unit != field.unit() {
        return Err(parse_error());
    }

    literal.number.parse::<f64>().map_err(|_| parse_error())
}

/// Parse an input box that may still be empty
///
/// Blank text is an unfilled field, not an error.
pub fn parse_optional_field(text: &str, field: Field) -> Result<Option<f64>, EnergyDensityError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_field(text, field).map(Some)
}
