use crate::config::WidgetConfig;
use crate::widget::number::{
    clamp, extract_first_number, format_value, normalize_typed, parse_leading_number,
    round_to_decimals,
};
use crate::widget::types::{Direction, RenderState, Unit};
use log::{debug, trace};

// Precision of the range checks; absorbs 0.1-step float noise (99.9 + 0.1 == 100)
const RANGE_CHECK_DECIMALS: u32 = 9;

/// Authoritative value/unit state of one widget instance.
///
/// Every operation is total: malformed input is clamped or reverted into a
/// valid value. Invariants: `value >= 0`, and `value <= percent_max` while the
/// unit is [`Unit::Percent`]. `last_valid_percent` always lies in
/// `[0, percent_max]`.
#[derive(Debug, Clone)]
pub struct ValueController {
    config: WidgetConfig,
    value: f64,
    unit: Unit,
    last_valid_percent: f64,
}

impl Default for ValueController {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl ValueController {
    /// Create a controller from its construction parameters.
    /// An initial value outside the unit's range is brought back into it.
    pub fn new(config: WidgetConfig) -> Self {
        let decimals = config.display_decimals;
        let max = config.percent_max;
        let initial = round_to_decimals(config.initial_value, decimals);
        let initial = if initial.is_finite() && initial > 0.0 {
            initial
        } else {
            0.0
        };

        let last_valid_percent = if initial <= max { initial } else { max };
        let value = match config.initial_unit {
            Unit::Percent if initial > max => last_valid_percent,
            _ => initial,
        };

        Self {
            unit: config.initial_unit,
            config,
            value,
            last_valid_percent,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn last_valid_percent(&self) -> f64 {
        self.last_valid_percent
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Switch the active unit. Entering percent mode with a value above the
    /// ceiling restores the last valid percent.
    pub fn set_unit(&mut self, new_unit: Unit) -> RenderState {
        if new_unit == self.unit {
            return self.render();
        }

        debug!("unit {} -> {} (value {})", self.unit, new_unit, self.value);
        self.unit = new_unit;

        if new_unit == Unit::Percent && self.value > self.config.percent_max {
            let restored = clamp(self.last_valid_percent, 0.0, self.config.percent_max);
            debug!(
                "value {} exceeds percent range, restoring {}",
                self.value, restored
            );
            self.value = restored;
        }

        self.render()
    }

    /// Live normalization for an input event. Does not touch controller state.
    pub fn normalize_typed(&self, raw: &str) -> String {
        let normalized = normalize_typed(raw);
        trace!("normalize_typed {:?} -> {:?}", raw, normalized);
        normalized
    }

    /// Finalize typed text into the authoritative value (focus loss)
    pub fn commit_input(&mut self, raw: &str) -> RenderState {
        let input = raw.trim();

        self.value = if input.is_empty() {
            0.0
        } else {
            let candidate = extract_first_number(&normalize_typed(input)).unwrap_or(0.0);
            self.clamp_candidate(candidate)
        };

        if self.unit == Unit::Percent && self.value <= self.config.percent_max {
            self.last_valid_percent = self.value;
        }

        debug!(
            "commit {:?} -> {} {} (last valid percent {})",
            raw, self.value, self.unit, self.last_valid_percent
        );
        self.render()
    }

    /// Stepper click using the currently rendered text as the basis
    pub fn step(&mut self, direction: Direction) -> RenderState {
        let displayed = self.render().display_text;
        self.step_from(direction, &displayed)
    }

    /// Stepper click using `displayed_text` as the basis, which may be
    /// live-typed text that has not been committed yet. Unparsable text counts
    /// as 0. Does not move the last valid percent.
    pub fn step_from(&mut self, direction: Direction, displayed_text: &str) -> RenderState {
        let basis = parse_leading_number(displayed_text).unwrap_or(0.0);
        let delta = match direction {
            Direction::Increase => self.config.step_increment,
            Direction::Decrease => -self.config.step_increment,
        };

        self.value = self.clamp_candidate(basis + delta);

        debug!(
            "step {} from {:?} -> {} {}",
            direction, displayed_text, self.value, self.unit
        );
        self.render()
    }

    /// Derive what the UI must show from the current state
    pub fn render(&self) -> RenderState {
        let in_percent = self.unit == Unit::Percent;
        RenderState {
            display_text: format_value(self.value, self.config.display_decimals),
            decrease_disabled: self.value == 0.0,
            increase_disabled: in_percent && self.value >= self.config.percent_max,
            tooltip_visible: in_percent,
        }
    }

    /// Negative -> 0; above the percent ceiling -> last valid percent; otherwise unchanged.
    /// Range decisions use the candidate as entered (float noise aside), only
    /// an accepted value is rounded to display precision for storage.
    fn clamp_candidate(&self, candidate: f64) -> f64 {
        let v = round_to_decimals(candidate, RANGE_CHECK_DECIMALS);
        if v <= 0.0 {
            return 0.0;
        }

        let max = self.config.percent_max;
        if self.unit == Unit::Percent && v > max {
            debug!(
                "rejected {} above percent range, reverting to {}",
                v, self.last_valid_percent
            );
            return self.last_valid_percent;
        }

        let stored = round_to_decimals(v, self.config.display_decimals);
        match self.unit {
            Unit::Percent => stored.min(max),
            Unit::Pixel => stored,
        }
    }
}
