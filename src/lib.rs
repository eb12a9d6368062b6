//! Energy Density Calculator
//!
//! A small, deterministic engine for the energy stored in an electric field,
//! U = ½ × ε₀ × εᵣ × E².
//!
//! This library provides:
//! - Input validation for partially filled forms
//! - Evaluation of the formula
//! - A step-by-step derivation trace
//! - Display formatting of the result
//! - Session state and configuration for front ends

pub mod calculator;
pub mod config;
pub mod constants;
pub mod errors;
pub mod format;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod steps;
pub mod validation;

// Re-exports for clean public API
pub use calculator::{calculate, calculate_energy_density, try_calculate};
pub use config::Config;
pub use errors::EnergyDensityError;
pub use format::{format_result, should_show_scientific};
pub use model::{
    CalculationInputs, CalculationResult, CalculationStep, Field, PartialCalculationInputs,
};
pub use session::Session;
pub use steps::generate_steps;
pub use validation::{validate, ValidationPolicy};
