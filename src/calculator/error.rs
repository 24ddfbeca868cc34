//! Error conditions raised by the calculator.

use thiserror::Error;

/// Token shown on the display after a division by zero.
const ERROR_MESSAGE: &str = "Error";

/// Token shown on the display when a result no longer fits.
const OVERFLOW_MESSAGE: &str = "Overflow";

/// A recoverable arithmetic failure.
///
/// The `Display` text is exactly what the calculator puts on screen while
/// it sits in error state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The pending operation divided by exactly zero.
    #[error("{}", ERROR_MESSAGE)]
    DivisionByZero,
    /// An integral result has more digits than the display allows.
    #[error("{}", OVERFLOW_MESSAGE)]
    Overflow,
}
