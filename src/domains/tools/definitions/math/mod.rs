//! Arithmetic tools.

pub mod add;

pub use add::{AddTwoNumbersParams, AddTwoNumbersTool, NumericInput};
