pub mod config;
pub mod script;
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
