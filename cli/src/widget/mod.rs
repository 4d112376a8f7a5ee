// Value/unit state machine of the numeric input widget
// The controller is pure: edit events in, RenderState out.
// Applying that state to real UI elements goes through the InputSurface seam.

pub mod controller;
pub mod error;
pub mod number;
pub mod surface;
pub mod types;


pub use controller::ValueController;
pub use error::UnitError;
pub use number::{extract_first_number, format_value, normalize_typed, parse_leading_number};
pub use surface::{FieldSurface, InputSurface};
pub use types::{Direction, RenderState, Unit};
