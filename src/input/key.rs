//! Keypad keys.

use crate::calculator::Operation;
use std::fmt;

/// A single keypad key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Decimal,
    Operator(Operation),
    Percent,
    Negate,
    Equals,
    Clear,
    Backspace,
}

impl Key {
    /// Map a typed character to a key.
    ///
    /// `-` is always the subtract operator; the sign is toggled with `n` or `±`.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            return Some(Self::Digit(c));
        }
        if let Some(op) = Operation::from_symbol(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' | ',' => Some(Self::Decimal),
            '%' => Some(Self::Percent),
            'n' | 'N' | '±' => Some(Self::Negate),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            'b' | 'B' | '<' => Some(Self::Backspace),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => write!(f, "."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Percent => write!(f, "%"),
            Self::Negate => write!(f, "±"),
            Self::Equals => write!(f, "="),
            Self::Clear => write!(f, "C"),
            Self::Backspace => write!(f, "⌫"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for c in '0'..='9' {
            assert_eq!(Key::from_char(c), Some(Key::Digit(c)));
        }
    }

    #[test]
    fn test_minus_is_subtract() {
        assert_eq!(Key::from_char('-'), Some(Key::Operator(Operation::Subtract)));
        assert_eq!(Key::from_char('n'), Some(Key::Negate));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(Key::from_char('q'), None);
        assert_eq!(Key::from_char('('), None);
    }
}
