//! Template filters
//!
//! `Filters` bundles the three filters a template layer registers under the
//! names in [`Filters::names`]. Each filter takes a template [`Value`] and
//! returns a typed result instead of a `false` sentinel.

use tracing::debug;

use crate::error::Result;
use crate::formatter::{convert_decimal_to_fraction_with, convert_decimal_to_hex_with};
use crate::parser::{decimal_from_value, integer_from_value};
use crate::settings::Settings;
use crate::types::{FractionOutput, Value};

/// Name of the decimal-to-fraction filter
pub const FRACTIONALIZE: &str = "fractionalize";
/// Name of the decimal-to-hex filter
pub const DEC2HEX: &str = "dec2hex";
/// Name of the dev-mode gate filter
pub const DEV_MODE: &str = "devMode";

/// The filter set, configured once and shared by every render
#[derive(Debug, Clone, Default)]
pub struct Filters {
    settings: Settings,
}

impl Filters {
    /// Builds the filter set after validating `settings`
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        debug!(?settings, "fractionalize filters ready");
        Ok(Self { settings })
    }

    /// Builds the filter set from a TOML settings document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::new(Settings::from_toml_str(toml_str)?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Names under which the filters are exposed to templates
    pub fn names() -> [&'static str; 3] {
        [FRACTIONALIZE, DEC2HEX, DEV_MODE]
    }

    /// `{{ value | fractionalize }}`
    pub fn fractionalize(&self, value: &Value) -> Result<FractionOutput> {
        let decimal = decimal_from_value(value)?;
        convert_decimal_to_fraction_with(decimal, &self.settings)
    }

    /// `{{ value | dec2hex }}`
    pub fn dec2hex(&self, value: &Value) -> Result<String> {
        let integer = integer_from_value(value)?;
        convert_decimal_to_hex_with(integer, &self.settings)
    }

    /// `{{ text | devMode }}`: the text in dev mode, nothing otherwise
    pub fn dev_mode<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.settings.dev_mode.then_some(text)
    }
}
