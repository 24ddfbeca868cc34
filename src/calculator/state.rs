//! Snapshot of the calculator used for persistence.

use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// The complete calculator state as five flat fields.
///
/// Produced by [`Calculator::save_state`](super::Calculator::save_state)
/// and consumed verbatim by
/// [`Calculator::restore_state`](super::Calculator::restore_state). The
/// storage medium is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Display text: the number being typed, the last result, or an error token.
    pub current_input: String,
    /// Left operand of the pending operation.
    pub previous_input: Option<String>,
    /// Operator of the pending operation.
    pub current_operation: Option<Operation>,
    /// The next digit starts a fresh number.
    pub should_reset_input: bool,
    /// `current_input` holds an error token.
    pub is_error_state: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: super::INITIAL_DISPLAY_VALUE.to_string(),
            previous_input: None,
            current_operation: None,
            should_reset_input: false,
            is_error_state: false,
        }
    }
}
