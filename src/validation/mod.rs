//! Validation Engine
//!
//! Checks raw, possibly incomplete inputs before any computation happens.

pub mod engine;

pub use engine::{
    validate, validate_with_policy, Diagnostic, ValidationPolicy, ValidationResult,
};
