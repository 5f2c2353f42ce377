mod formatter;
mod utils;

pub use formatter::approximate;
pub use formatter::convert_decimal_to_fraction;
pub use formatter::convert_decimal_to_fraction_with;
