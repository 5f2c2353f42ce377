use tracing::debug;

use super::utils::continued_fraction;
use crate::error::{FractionalizeError, Result};
use crate::settings::Settings;
use crate::types::{Convergent, FractionOutput};

/// Approximates `decimal` by a continued-fraction convergent within the configured tolerance.
///
/// The convergent always describes the magnitude of `decimal`; the sign is not part of it.
/// Zero and non-finite values are rejected with `InvalidInput`.
pub fn approximate(decimal: f64, settings: &Settings) -> Result<Convergent> {
    if decimal.is_nan() || decimal.is_infinite() {
        return Err(FractionalizeError::InvalidInput(format!(
            "cannot fractionalize non-finite value {}",
            decimal
        )));
    }
    if decimal == 0.0 {
        return Err(FractionalizeError::InvalidInput(
            "cannot fractionalize zero".to_string(),
        ));
    }

    continued_fraction(decimal.abs(), settings)
}

/// Converts a decimal into a whole number, a proper fraction or a mixed number
/// using the default settings.
///
/// # Examples
/// ```
/// use fractionalize::convert_decimal_to_fraction;
///
/// assert_eq!(convert_decimal_to_fraction(1.5).unwrap().to_string(), "1 1/2");
/// assert_eq!(convert_decimal_to_fraction(0.5).unwrap().to_string(), "1/2");
/// assert_eq!(convert_decimal_to_fraction(4.0).unwrap().as_whole(), Some(4));
/// ```
pub fn convert_decimal_to_fraction(decimal: f64) -> Result<FractionOutput> {
    convert_decimal_to_fraction_with(decimal, &Settings::default())
}

/// Same as [`convert_decimal_to_fraction`] with caller-supplied settings
pub fn convert_decimal_to_fraction_with(
    decimal: f64,
    settings: &Settings,
) -> Result<FractionOutput> {
    let convergent = approximate(decimal, settings)?;
    let output = split_whole_part(&convergent, decimal < 0.0);
    debug!(decimal, %output, iterations = convergent.iterations, "fractionalized");
    Ok(output)
}

/// Splits `h/k` into its whole part and the remaining proper fraction
fn split_whole_part(convergent: &Convergent, negative: bool) -> FractionOutput {
    let whole = convergent.numerator / convergent.denominator;
    let numerator = convergent.numerator % convergent.denominator;
    let denominator = convergent.denominator;
    let signed_whole = if negative { -whole } else { whole };

    if numerator == 0 {
        FractionOutput::Whole(signed_whole)
    } else if whole == 0 {
        FractionOutput::Proper {
            negative,
            numerator,
            denominator,
        }
    } else {
        FractionOutput::Mixed {
            whole: signed_whole,
            numerator,
            denominator,
        }
    }
}
