//! Type definitions for the fractionalize filters
//!
//! This module defines the values handed to the filters by a template layer
//! and the shapes a converted fraction can take.

use std::fmt;

use serde::Deserialize;

/// Represents a loosely-typed value passed to a filter from a template
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value, e.g. `{{ 15 | dec2hex }}`
    Integer(i64),
    /// Floating-point value, e.g. `{{ 1.5 | fractionalize }}`
    Float(f64),
    /// Text value, usually a numeric field rendered as a string
    Text(String),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// A rational approximation produced by the continued-fraction expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convergent {
    /// Numerator of the approximant (always non-negative)
    pub numerator: i64,
    /// Denominator of the approximant (always positive)
    pub denominator: i64,
    /// Number of expansion steps taken to reach the tolerance
    pub iterations: usize,
}

impl Convergent {
    /// The approximant as a floating-point value
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Represents the result of converting a decimal into a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionOutput {
    /// The approximant is a whole number, e.g. `4`
    Whole(i64),
    /// A fraction without whole part, e.g. `1/2` or `-1/2`
    Proper {
        negative: bool,
        numerator: i64,
        denominator: i64,
    },
    /// A mixed number, e.g. `1 1/2`; the sign lives on `whole`
    Mixed {
        whole: i64,
        numerator: i64,
        denominator: i64,
    },
}

impl FractionOutput {
    /// Returns the whole number if the output has no fractional part
    pub fn as_whole(&self) -> Option<i64> {
        match self {
            FractionOutput::Whole(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FractionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionOutput::Whole(n) => write!(f, "{}", n),
            FractionOutput::Proper {
                negative,
                numerator,
                denominator,
            } => {
                if *negative {
                    f.write_str("-")?;
                }
                write!(f, "{}/{}", numerator, denominator)
            }
            FractionOutput::Mixed {
                whole,
                numerator,
                denominator,
            } => write!(f, "{} {}/{}", whole, numerator, denominator),
        }
    }
}
