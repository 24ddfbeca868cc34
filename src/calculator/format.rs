//! Formatting of arithmetic results for the display.

use super::error::CalcError;

/// Maximum number of digits in a number, not counting sign or decimal point.
pub const MAX_INPUT_LENGTH: usize = 15;

/// Number of fractional digits rendered before trimming.
const FRACTION_DIGITS: usize = 10;

/// Format a computed value for the display.
///
/// Integral values are printed without a fractional part and fail with
/// [`CalcError::Overflow`] when they have more than [`MAX_INPUT_LENGTH`]
/// digits. Other values are printed with ten fractional digits, trailing
/// zeros trimmed, then cut to [`MAX_INPUT_LENGTH`] characters.
pub fn format_number(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::Overflow);
    }

    if value.fract() == 0.0 {
        // `as` saturates, so anything beyond i64 still reports overflow below
        let integral = (value as i64).to_string();
        if integral.trim_start_matches('-').len() > MAX_INPUT_LENGTH {
            return Err(CalcError::Overflow);
        }
        return Ok(integral);
    }

    let formatted = format!("{:.*}", FRACTION_DIGITS, value);
    let mut trimmed = formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();

    if trimmed.len() > MAX_INPUT_LENGTH {
        trimmed.truncate(MAX_INPUT_LENGTH);
        while trimmed.ends_with('.') {
            trimmed.pop();
        }
    }

    Ok(trimmed)
}

/// Parse a display string into an operand.
///
/// Returns `None` for anything that is not a finite number, which covers
/// error tokens left on the display.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
