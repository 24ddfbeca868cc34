//! Binary operators supported by the keypad.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operators in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The symbol printed on the key.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Map a typed character to an operator.
    ///
    /// Accepts the keypad symbols as well as the usual ASCII stand-ins
    /// (`*`, `x`, `/`).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' | 'x' | 'X' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero is not checked here; the engine rejects it before
    /// calling this.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!(Operation::from_symbol('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('x'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol('%'), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operation::Divide.apply(3.0, 2.0), 1.5);
    }
}
