pub mod error;
pub mod filters;
pub mod formatter;
pub mod parser;
pub mod settings;
pub mod types;

// Main API
pub use error::{FractionalizeError, Result};
pub use filters::Filters;
pub use formatter::{
    approximate, convert_decimal_to_fraction, convert_decimal_to_fraction_with,
    convert_decimal_to_hex, convert_decimal_to_hex_with,
};
pub use settings::Settings;
pub use types::*;
