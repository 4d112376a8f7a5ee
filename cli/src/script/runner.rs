use crate::config::WidgetConfig;
use crate::script::parser::{ScriptEvent, ScriptLine};
use crate::widget::{FieldSurface, InputSurface, RenderState, Unit, ValueController};
use log::info;
use serde::Serialize;
use std::fmt;

/// State of the widget after one replayed event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub line: usize,
    pub event: ScriptEvent,
    pub value: f64,
    pub unit: Unit,
    /// What the input field holds, which differs from the rendered text
    /// while typed input is not yet committed
    pub field_text: String,
    pub render: RenderState,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}  {:<20} field={:<10} value={} {}  [-]{} [+]{} tooltip={}",
            self.line,
            self.event.to_string(),
            format!("{:?}", self.field_text),
            self.value,
            self.unit,
            if self.render.decrease_disabled { "off" } else { "on" },
            if self.render.increase_disabled { "off" } else { "on" },
            if self.render.tooltip_visible { "shown" } else { "hidden" },
        )
    }
}

/// Drives a controller the way the DOM event layer does: typed text lives in
/// the field until it is committed, every transition pushes its RenderState
/// back onto the field.
#[derive(Debug)]
pub struct ScriptRunner {
    controller: ValueController,
    surface: FieldSurface,
}

impl ScriptRunner {
    pub fn new(config: WidgetConfig) -> Self {
        let controller = ValueController::new(config);
        let surface = FieldSurface::showing(&controller.render());
        Self {
            controller,
            surface,
        }
    }

    pub fn controller(&self) -> &ValueController {
        &self.controller
    }

    pub fn surface(&self) -> &FieldSurface {
        &self.surface
    }

    /// Apply one event and return the resulting frame
    pub fn apply(&mut self, line: &ScriptLine) -> Frame {
        match &line.event {
            ScriptEvent::Unit(unit) => {
                self.controller.set_unit(*unit).apply_to(&mut self.surface);
            }
            ScriptEvent::Type(text) => {
                let normalized = self.controller.normalize_typed(text);
                self.surface.set_text(&normalized);
            }
            ScriptEvent::Commit(text) => {
                let text = text.clone().unwrap_or_else(|| self.surface.text().to_string());
                self.controller.commit_input(&text).apply_to(&mut self.surface);
            }
            ScriptEvent::Step(direction) => {
                let live = self.surface.text().to_string();
                self.controller
                    .step_from(*direction, &live)
                    .apply_to(&mut self.surface);
            }
            ScriptEvent::Render => {}
        }

        Frame {
            line: line.line,
            event: line.event.clone(),
            value: self.controller.value(),
            unit: self.controller.unit(),
            field_text: self.surface.text().to_string(),
            render: self.controller.render(),
        }
    }

    /// Replay every event in order
    pub fn run(&mut self, script: &[ScriptLine]) -> Vec<Frame> {
        let frames: Vec<Frame> = script.iter().map(|line| self.apply(line)).collect();
        info!(
            "replayed {} events, final value {} {}",
            frames.len(),
            self.controller.value(),
            self.controller.unit()
        );
        frames
    }
}
