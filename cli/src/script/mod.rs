// Event-script replay: a line-oriented stand-in for the DOM event layer
pub mod parser;
pub mod runner;

#[cfg(test)]
mod tests;

pub use parser::*;
pub use runner::*;
