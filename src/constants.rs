//! Physical constants used by the energy density formula.
//!
//! Both values are fixed for the whole process and only ever read.

use serde::Serialize;

use crate::format::to_exponential;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_817_6e-12;

/// The ½ coefficient in U = ½ × ε₀ × εᵣ × E².
pub const COEFFICIENT: f64 = 0.5;

/// Unit suffix appended to energy density values.
pub const ENERGY_DENSITY_UNIT: &str = "J/m³";

/// One row of the constants reference table shown next to a result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstantEntry {
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

/// Constants used automatically in every calculation, formatted for display.
pub fn reference() -> Vec<ConstantEntry> {
    vec![
        ConstantEntry {
            name: "Vacuum Permittivity",
            symbol: "ε₀",
            value: to_exponential(VACUUM_PERMITTIVITY, 4),
            unit: Some("F/m"),
        },
        ConstantEntry {
            name: "Coefficient",
            symbol: "½",
            value: COEFFICIENT.to_string(),
            unit: None,
        },
    ]
}
