//! Template value parsing module
//!
//! This module coerces the loosely-typed values a template hands to a filter
//! into the numbers the converters work with. Text is parsed with winnow.

mod tokens;
mod value;

pub use value::{decimal_from_value, integer_from_value, parse_decimal, parse_integer};
