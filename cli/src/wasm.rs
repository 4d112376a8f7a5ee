// WebAssembly bindings for the unit value widget
// The browser side owns the DOM; it forwards events here and applies the returned state.
use crate::config::WidgetConfig;
use crate::widget::{Direction, RenderState, Unit, ValueController};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitValueWasm {
    controller: ValueController,
}

fn render_to_js(state: &RenderState) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(
        &obj,
        &"displayText".into(),
        &JsValue::from_str(&state.display_text),
    )?;
    Reflect::set(
        &obj,
        &"decreaseDisabled".into(),
        &JsValue::from_bool(state.decrease_disabled),
    )?;
    Reflect::set(
        &obj,
        &"increaseDisabled".into(),
        &JsValue::from_bool(state.increase_disabled),
    )?;
    Reflect::set(
        &obj,
        &"tooltipVisible".into(),
        &JsValue::from_bool(state.tooltip_visible),
    )?;
    Ok(obj.into())
}

#[wasm_bindgen]
impl UnitValueWasm {
    /// Create a widget controller, optionally from TOML config text
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<UnitValueWasm, JsValue> {
        let config = match config_content {
            Some(content) => WidgetConfig::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => WidgetConfig::default(),
        };

        Ok(Self {
            controller: ValueController::new(config),
        })
    }

    /// Unit button click. `unit` is the button's `data-unit` value ("percent" or "px")
    #[wasm_bindgen]
    pub fn set_unit(&mut self, unit: &str) -> Result<JsValue, JsValue> {
        let unit: Unit = unit
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        render_to_js(&self.controller.set_unit(unit))
    }

    /// Input event: returns the text the field should show while typing
    #[wasm_bindgen]
    pub fn normalize_typed(&self, text: &str) -> String {
        self.controller.normalize_typed(text)
    }

    /// Blur event
    #[wasm_bindgen]
    pub fn commit_input(&mut self, text: &str) -> Result<JsValue, JsValue> {
        render_to_js(&self.controller.commit_input(text))
    }

    /// Stepper click. `action` is the button's `data-action` value,
    /// `live_text` the field's current (possibly uncommitted) text.
    #[wasm_bindgen]
    pub fn step(&mut self, action: &str, live_text: Option<String>) -> Result<JsValue, JsValue> {
        let direction: Direction = action
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        let state = match live_text {
            Some(text) => self.controller.step_from(direction, &text),
            None => self.controller.step(direction),
        };
        render_to_js(&state)
    }

    #[wasm_bindgen]
    pub fn render(&self) -> Result<JsValue, JsValue> {
        render_to_js(&self.controller.render())
    }

    /// Render state as a JSON string
    #[wasm_bindgen]
    pub fn render_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.controller.render())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize render state: {}", e)))
    }

    #[wasm_bindgen]
    pub fn value(&self) -> f64 {
        self.controller.value()
    }

    #[wasm_bindgen]
    pub fn unit(&self) -> String {
        self.controller.unit().as_str().to_string()
    }
}
