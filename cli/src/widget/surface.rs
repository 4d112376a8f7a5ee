use crate::widget::types::RenderState;

/// The concrete UI elements a [`RenderState`] is pushed onto.
/// Implemented by whatever owns the input field, stepper buttons and tooltip.
pub trait InputSurface {
    /// Text the user currently sees in the input field (possibly uncommitted)
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
    fn set_decrease_disabled(&mut self, disabled: bool);
    fn set_increase_disabled(&mut self, disabled: bool);
    fn set_tooltip_visible(&mut self, visible: bool);
}

impl RenderState {
    /// Apply every field of this state to `surface`
    pub fn apply_to<S: InputSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_text(&self.display_text);
        surface.set_decrease_disabled(self.decrease_disabled);
        surface.set_increase_disabled(self.increase_disabled);
        surface.set_tooltip_visible(self.tooltip_visible);
    }
}

/// In-memory stand-in for the DOM elements of one widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSurface {
    pub text: String,
    pub decrease_disabled: bool,
    pub increase_disabled: bool,
    pub tooltip_visible: bool,
}

impl FieldSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface already showing `state`
    pub fn showing(state: &RenderState) -> Self {
        let mut surface = Self::new();
        state.apply_to(&mut surface);
        surface
    }
}

impl InputSurface for FieldSurface {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_decrease_disabled(&mut self, disabled: bool) {
        self.decrease_disabled = disabled;
    }

    fn set_increase_disabled(&mut self, disabled: bool) {
        self.increase_disabled = disabled;
    }

    fn set_tooltip_visible(&mut self, visible: bool) {
        self.tooltip_visible = visible;
    }
}
