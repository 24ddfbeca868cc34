//! Input handling: keys, gestures and typed command lines.

mod gesture;
mod key;
mod parse;

pub use gesture::Gesture;
pub use key::Key;
pub use parse::{InputError, parse_line};

/// Something the user asked the frontend to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A keypad key.
    Press(Key),
    /// A gesture on the display.
    Gesture(Gesture),
    /// Copy the display to the clipboard.
    Copy,
    Help,
    Quit,
}
