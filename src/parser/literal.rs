//! Numeric literal splitting
//!
//! Separates a typed value into its number and an optional trailing unit.

use std::sync::LazyLock;

use regex::Regex;

static LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)(?:\s*([A-Za-z]\S*))?$")
        .expect("literal pattern is valid")
});

/// A number as typed, plus whatever unit followed it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal<'a> {
    pub number: &'a str,
    pub unit: Option<&'a str>,
}

/// Split already-trimmed text into number and unit
pub fn split_literal(text: &str) -> Option<Literal<'_>> {
    let caps = LITERAL_RE.captures(text)?;
    Some(Literal {
        number: caps.get(1)?.as_str(),
        unit: caps.get(2).map(|m| m.as_str()),
    })
}
