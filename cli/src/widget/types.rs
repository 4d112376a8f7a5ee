use crate::widget::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement unit of the widget value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Unit {
    /// Bounded to [0, percent_max]
    #[default]
    #[serde(rename = "percent", alias = "%")]
    Percent,
    /// Lower bound 0, no upper bound
    #[serde(rename = "px", alias = "pixel")]
    Pixel,
}

impl Unit {
    /// Name used by the UI layer (`data-unit` attribute)
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Percent => "percent",
            Unit::Pixel => "px",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percent" | "%" => Ok(Unit::Percent),
            "px" | "pixel" => Ok(Unit::Pixel),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

/// Stepper button direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increase => "increase",
            Direction::Decrease => "decrease",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increase" | "+" => Ok(Direction::Increase),
            "decrease" | "-" => Ok(Direction::Decrease),
            other => Err(UnitError::UnknownDirection(other.to_string())),
        }
    }
}

/// What the UI must currently display.
/// Derived from controller state on every call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    /// Text for the input field
    pub display_text: String,
    pub decrease_disabled: bool,
    pub increase_disabled: bool,
    /// Tooltip communicates the percent ceiling, hidden in pixel mode
    pub tooltip_visible: bool,
}
