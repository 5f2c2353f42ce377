use winnow::Parser;

use crate::error::{FractionalizeError, Result};
use crate::parser::tokens::{parse_decimal_literal, parse_integer_literal};
use crate::types::Value;

/// Parse an integer the way a template integer filter validates it
///
/// Surrounding whitespace and a single `+`/`-` sign are accepted; leading zeros,
/// fractions, exponents and trailing text are not.
///
/// # Examples
/// ```
/// use fractionalize::parser::parse_integer;
///
/// assert_eq!(parse_integer(" 255 ").unwrap(), 255);
/// assert!(parse_integer("0x1f").is_err());
/// ```
pub fn parse_integer(text: &str) -> Result<i64> {
    let (negative, digits) = parse_integer_literal
        .parse(text)
        .map_err(|_| invalid_text(text, "an integer"))?;

    // Parse the sign together with the digits so i64::MIN stays representable
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    signed
        .parse::<i64>()
        .map_err(|e| FractionalizeError::InvalidInput(format!("{:?} is out of range: {}", text, e)))
}

/// Parse a decimal number from template text, e.g. `"2.25"` or `"-1.5e1"`
pub fn parse_decimal(text: &str) -> Result<f64> {
    parse_decimal_literal
        .parse(text)
        .map_err(|_| invalid_text(text, "a decimal number"))
}

/// Coerce a template value into an integer
///
/// Floats pass only when they are finite and have no fractional part.
pub fn integer_from_value(value: &Value) -> Result<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        Value::Float(f) => {
            // i64::MAX as f64 rounds up to 2^63, which is already out of range
            if f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64
            {
                Ok(*f as i64)
            } else {
                Err(FractionalizeError::InvalidInput(format!(
                    "{} is not an integer",
                    f
                )))
            }
        }
        Value::Text(text) => parse_integer(text),
    }
}

/// Coerce a template value into a decimal
pub fn decimal_from_value(value: &Value) -> Result<f64> {
    match value {
        Value::Integer(n) => Ok(*n as f64),
        Value::Float(f) => Ok(*f),
        Value::Text(text) => parse_decimal(text),
    }
}

fn invalid_text(text: &str, expected: &str) -> FractionalizeError {
    FractionalizeError::InvalidInput(format!("{:?} is not {}", text, expected))
}
