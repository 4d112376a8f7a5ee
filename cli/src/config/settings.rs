use crate::config::error::ConfigError;
use crate::widget::Unit;
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits shown in the field
pub const MAX_DISPLAY_DECIMALS: u32 = 6;

/// Construction-time parameters of a widget instance.
///
/// Loaded from TOML; every field falls back to its default when omitted:
///
/// ```toml
/// initial_value = 100.0
/// initial_unit = "percent"   # or "px"
/// percent_max = 100.0
/// step_increment = 0.1
/// display_decimals = 1
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WidgetConfig {
    #[serde(default = "default_initial_value")]
    pub initial_value: f64,

    #[serde(default)]
    pub initial_unit: Unit,

    // Upper bound of the percent unit
    #[serde(default = "default_percent_max")]
    pub percent_max: f64,

    // Amount added or removed by one stepper click
    #[serde(default = "default_step_increment")]
    pub step_increment: f64,

    // Fractional digits for non-whole values
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u32,
}

fn default_initial_value() -> f64 {
    100.0
}

fn default_percent_max() -> f64 {
    100.0
}

fn default_step_increment() -> f64 {
    0.1
}

fn default_display_decimals() -> u32 {
    1
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            initial_value: default_initial_value(),
            initial_unit: Unit::default(),
            percent_max: default_percent_max(),
            step_increment: default_step_increment(),
            display_decimals: default_display_decimals(),
        }
    }
}

impl WidgetConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    pub fn with_initial_unit(mut self, unit: Unit) -> Self {
        self.initial_unit = unit;
        self
    }

    /// Check that the parameters describe a usable widget
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_value.is_finite() || self.initial_value < 0.0 {
            return Err(ConfigError::invalid(
                "initial_value",
                format!("must be a finite number >= 0, got {}", self.initial_value),
            ));
        }
        if !self.percent_max.is_finite() || self.percent_max <= 0.0 {
            return Err(ConfigError::invalid(
                "percent_max",
                format!("must be a finite number > 0, got {}", self.percent_max),
            ));
        }
        if !self.step_increment.is_finite() || self.step_increment <= 0.0 {
            return Err(ConfigError::invalid(
                "step_increment",
                format!("must be a finite number > 0, got {}", self.step_increment),
            ));
        }
        let display_unit = 10f64.powi(-(self.display_decimals.min(MAX_DISPLAY_DECIMALS) as i32));
        // Smaller steps round back to the same displayed value
        if self.step_increment < display_unit * (1.0 - 1e-9) {
            return Err(ConfigError::invalid(
                "step_increment",
                format!(
                    "must be at least {} with display_decimals = {}, got {}",
                    display_unit, self.display_decimals, self.step_increment
                ),
            ));
        }
        if self.display_decimals > MAX_DISPLAY_DECIMALS {
            return Err(ConfigError::invalid(
                "display_decimals",
                format!(
                    "must be at most {}, got {}",
                    MAX_DISPLAY_DECIMALS, self.display_decimals
                ),
            ));
        }
        Ok(())
    }
}
