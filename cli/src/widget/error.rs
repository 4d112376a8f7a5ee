use thiserror::Error;

/// Raised when the UI layer hands over a name the widget does not know.
/// The controller itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Unknown unit: '{0}' (expected 'percent' or 'px')")]
    UnknownUnit(String),
    #[error("Unknown stepper direction: '{0}' (expected 'increase' or 'decrease')")]
    UnknownDirection(String),
}
