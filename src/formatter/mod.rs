//! Value formatting module
//!
//! This module turns numbers into the text the template filters render:
//! continued-fraction approximations for `fractionalize` and padded
//! hexadecimal for `dec2hex`.

mod fraction;
mod hex;

pub use fraction::{approximate, convert_decimal_to_fraction, convert_decimal_to_fraction_with};
pub use hex::{convert_decimal_to_hex, convert_decimal_to_hex_with};
