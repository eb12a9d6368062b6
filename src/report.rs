//! Rendering of results for the command line

use anyhow::Result;
use std::fmt::{self, Write};

use crate::constants::{self, ENERGY_DENSITY_UNIT};
use crate::format::{format_literal, format_result, should_show_scientific};
use crate::model::{CalculationInputs, CalculationResult};
use crate::steps::FORMULA;

/// Plain-text report: result, optional scientific panel, steps and constants
pub fn render_text(inputs: &CalculationInputs, result: &CalculationResult) -> Result<String> {
    let mut out = String::new();
    write_text(&mut out, inputs, result)?;
    Ok(out)
}

fn write_text(
    out: &mut String,
    inputs: &CalculationInputs,
    result: &CalculationResult,
) -> fmt::Result {
    writeln!(out, "Formula: {FORMULA}")?;
    writeln!(
        out,
        "Inputs: εᵣ = {}, E = {} V/m",
        format_literal(inputs.relative_permittivity),
        format_literal(inputs.electric_field)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Energy density: {} {ENERGY_DENSITY_UNIT}",
        format_result(result.energy_density)
    )?;
    if should_show_scientific(result.energy_density) {
        writeln!(out, "Scientific notation: {} {ENERGY_DENSITY_UNIT}", result.scientific)?;
    }

    writeln!(out)?;
    writeln!(out, "Step-by-step calculation:")?;
    for step in &result.steps {
        writeln!(out, "  {}. {}", step.step, step.description)?;
        writeln!(out, "     {}", step.formula)?;
        writeln!(out, "     {}", step.substitution)?;
    }

    writeln!(out)?;
    writeln!(out, "Physical constants:")?;
    for entry in constants::reference() {
        write!(out, "  {} ({}): {}", entry.name, entry.symbol, entry.value)?;
        match entry.unit {
            Some(unit) => writeln!(out, " {unit}")?,
            None => writeln!(out)?,
        }
    }

    Ok(())
}

/// JSON report of the inputs and the full result
pub fn render_json(inputs: &CalculationInputs, result: &CalculationResult) -> Result<String> {
    let value = serde_json::json!({
        "inputs": inputs,
        "result": result,
        "display": format_result(result.energy_density),
        "unit": ENERGY_DENSITY_UNIT,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
