//! Calculator module: the keypad state machine and its helpers.
//!
//! This module provides functionality to:
//! - Accumulate digit and decimal input into a display string
//! - Track a pending binary operation and compute it on demand
//! - Format results to fit the display, raising error states
//! - Snapshot and restore the full state
//! - Copy the display to the clipboard

mod clipboard;
mod engine;
mod error;
mod format;
mod operation;
mod state;

/// What the display shows at start-up and after a clear.
pub const INITIAL_DISPLAY_VALUE: &str = "0";

pub use clipboard::{ClipboardError, ClipboardSink, SystemClipboard, copy_display};
pub use engine::{Calculator, Pending};
pub use error::CalcError;
pub use format::{MAX_INPUT_LENGTH, format_number, parse_operand};
pub use operation::Operation;
pub use state::CalculatorState;
