//! The keypad state machine.
//!
//! The display is kept as a string buffer so in-progress keystrokes such as
//! a trailing decimal point survive untouched. Strings are only parsed when
//! a calculation runs and results are formatted straight back.

use super::error::CalcError;
use super::format::{MAX_INPUT_LENGTH, format_number, parse_operand};
use super::operation::Operation;
use super::state::CalculatorState;
use super::INITIAL_DISPLAY_VALUE;
use tracing::debug;

/// What the display currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Entry {
    /// A number being typed or the last result.
    Number(String),
    /// An error token. Input is suspended until it is dismissed.
    Error(String),
}

impl Entry {
    fn initial() -> Self {
        Self::Number(INITIAL_DISPLAY_VALUE.to_string())
    }

    /// The text to render.
    pub fn text(&self) -> &str {
        match self {
            Self::Number(text) | Self::Error(text) => text,
        }
    }
}

/// A captured left operand waiting for its right-hand side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending {
    pub operand: String,
    pub operation: Operation,
}

/// Sequence-input calculator.
///
/// Every input method returns whether the key was accepted. A key pressed
/// while an error is shown only dismisses the error and reports `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculator {
    entry: Entry,
    pending: Option<Pending>,
    reset_input: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            entry: Entry::initial(),
            pending: None,
            reset_input: false,
        }
    }

    /// Text for the display.
    pub fn display(&self) -> &str {
        self.entry.text()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.entry, Entry::Error(_))
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// Append a digit to the number being typed.
    pub fn input_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            debug!(%digit, "ignoring non-digit key");
            return false;
        }
        let Some(input) = self.begin_input() else {
            return false;
        };

        if input.chars().filter(char::is_ascii_digit).count() >= MAX_INPUT_LENGTH {
            debug!("digit rejected, input is full");
            return false;
        }

        if *input == INITIAL_DISPLAY_VALUE {
            // leading zeros are suppressed
            if digit != '0' {
                input.clear();
                input.push(digit);
            }
        } else {
            input.push(digit);
        }
        true
    }

    /// Add a decimal point if the number has none yet.
    pub fn input_decimal(&mut self) -> bool {
        let Some(input) = self.begin_input() else {
            return false;
        };

        if input.contains('.') {
            return false;
        }
        if input.is_empty() || *input == INITIAL_DISPLAY_VALUE {
            *input = "0.".to_string();
        } else {
            input.push('.');
        }
        true
    }

    /// Press an operator key.
    ///
    /// A pending operation is flushed first using the current input as its
    /// right operand, so chained presses keep accumulating. Pressing a second
    /// operator before any digit only swaps the pending operator.
    pub fn perform_operation(&mut self, operation: Operation) -> bool {
        if self.dismiss_error() {
            return false;
        }

        if self.reset_input
            && let Some(pending) = self.pending.as_mut()
        {
            debug!(from = %pending.operation, to = %operation, "operator replaced");
            pending.operation = operation;
            return true;
        }

        if self.pending.is_some() && !self.calculate_result() {
            return false;
        }

        self.pending = Some(Pending {
            operand: self.display().to_string(),
            operation,
        });
        self.reset_input = true;
        true
    }

    /// Compute the pending operation into the display.
    ///
    /// The pending operation itself is left in place; see [`Self::equals`]
    /// for the equals-key behaviour.
    pub fn calculate_result(&mut self) -> bool {
        let Some(pending) = self.pending.as_ref() else {
            return false;
        };
        let operation = pending.operation;
        let (Some(lhs), Some(rhs)) = (parse_operand(&pending.operand), parse_operand(self.display()))
        else {
            debug!("operands not numeric, skipping calculation");
            return false;
        };

        if operation == Operation::Divide && rhs == 0.0 {
            self.raise(CalcError::DivisionByZero);
            return false;
        }

        let value = operation.apply(lhs, rhs);
        debug!(lhs, rhs, %operation, value, "calculated");
        self.show_value(value)
    }

    /// The equals key: calculate, then forget the pending operation so the
    /// next digit starts a new number.
    pub fn equals(&mut self) -> bool {
        if self.dismiss_error() {
            return false;
        }
        if !self.calculate_result() {
            return false;
        }
        self.pending = None;
        self.reset_input = true;
        true
    }

    /// Divide the current number by one hundred.
    pub fn apply_percent(&mut self) -> bool {
        if self.dismiss_error() {
            return false;
        }
        let Some(value) = parse_operand(self.display()) else {
            return false;
        };
        self.show_value(value / 100.0)
    }

    /// Toggle the sign of the current number. Zero has no sign.
    pub fn negate(&mut self) -> bool {
        if self.dismiss_error() {
            return false;
        }
        let Entry::Number(input) = &mut self.entry else {
            return false;
        };
        if *input == INITIAL_DISPLAY_VALUE || *input == "0." {
            return false;
        }

        if input.starts_with('-') {
            input.remove(0);
        } else {
            input.insert(0, '-');
        }
        true
    }

    /// Remove the last typed character, returning it.
    ///
    /// A decimal point left dangling is removed along with the digit, and a
    /// lone sign collapses to zero.
    pub fn delete_last(&mut self) -> Option<char> {
        if self.dismiss_error() {
            return None;
        }
        let Entry::Number(input) = &mut self.entry else {
            return None;
        };

        if input.chars().count() > 1 {
            let removed = input.pop();
            if input.ends_with('.') {
                input.pop();
            }
            if input.is_empty() || *input == "-" {
                *input = INITIAL_DISPLAY_VALUE.to_string();
            }
            removed
        } else {
            let removed = input.chars().next();
            *input = INITIAL_DISPLAY_VALUE.to_string();
            removed
        }
    }

    /// Reset everything, including any error.
    pub fn clear(&mut self) {
        if self.is_error() {
            debug!("error cleared");
        }
        *self = Self::new();
    }

    pub fn save_state(&self) -> CalculatorState {
        CalculatorState {
            current_input: self.display().to_string(),
            previous_input: self.pending.as_ref().map(|p| p.operand.clone()),
            current_operation: self.pending.as_ref().map(|p| p.operation),
            should_reset_input: self.reset_input,
            is_error_state: self.is_error(),
        }
    }

    /// Overwrite every field with a saved snapshot. Values are not validated.
    ///
    /// An operand without an operator (or the reverse) cannot form a pending
    /// operation and is dropped.
    pub fn restore_state(&mut self, state: CalculatorState) {
        self.entry = if state.is_error_state {
            Entry::Error(state.current_input)
        } else {
            Entry::Number(state.current_input)
        };
        self.pending = match (state.previous_input, state.current_operation) {
            (Some(operand), Some(operation)) => Some(Pending { operand, operation }),
            _ => None,
        };
        self.reset_input = state.should_reset_input;
    }

    /// Shared preamble of the digit and decimal keys: dismiss an error or
    /// start a fresh number, then hand out the buffer to edit.
    fn begin_input(&mut self) -> Option<&mut String> {
        if self.dismiss_error() {
            return None;
        }
        if self.reset_input {
            self.entry = Entry::initial();
            self.reset_input = false;
        }
        match &mut self.entry {
            Entry::Number(input) => Some(input),
            Entry::Error(_) => None,
        }
    }

    /// Leave error state, keeping any pending operation. Returns whether an
    /// error was dismissed.
    fn dismiss_error(&mut self) -> bool {
        if self.is_error() {
            debug!("error dismissed");
            self.entry = Entry::initial();
            true
        } else {
            false
        }
    }

    fn raise(&mut self, error: CalcError) {
        debug!(%error, "entering error state");
        self.entry = Entry::Error(error.to_string());
    }

    fn show_value(&mut self, value: f64) -> bool {
        match format_number(value) {
            Ok(text) => {
                self.entry = Entry::Number(text);
                true
            }
            Err(error) => {
                self.raise(error);
                false
            }
        }
    }
}
