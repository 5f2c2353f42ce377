use tracing::debug;

use crate::error::{FractionalizeError, Result};
use crate::settings::Settings;

/// Converts a non-negative integer into lowercase hexadecimal, at least two digits wide
///
/// # Examples
/// ```
/// use fractionalize::convert_decimal_to_hex;
///
/// assert_eq!(convert_decimal_to_hex(15).unwrap(), "0f");
/// assert_eq!(convert_decimal_to_hex(255).unwrap(), "ff");
/// assert!(convert_decimal_to_hex(-1).is_err());
/// ```
pub fn convert_decimal_to_hex(value: i64) -> Result<String> {
    convert_decimal_to_hex_with(value, &Settings::default())
}

/// Same as [`convert_decimal_to_hex`]; with `clamp_hex_to_byte` set, values above 255 render as `ff`
pub fn convert_decimal_to_hex_with(value: i64, settings: &Settings) -> Result<String> {
    if value < 0 {
        return Err(FractionalizeError::InvalidInput(format!(
            "cannot convert negative value {} to hex",
            value
        )));
    }

    let value = if settings.clamp_hex_to_byte {
        value.min(0xff)
    } else {
        value
    };
    let hex = format!("{:02x}", value);
    debug!(value, %hex, "dec2hex");
    Ok(hex)
}
