//! The frontend side of the calculator.
//!
//! A [`Session`] turns commands into calculator calls, performs the
//! equals-key bookkeeping, emits short notices, and owns the timer that
//! clears an error left on screen.

mod timer;

pub use timer::{DEFAULT_ERROR_DISPLAY, ErrorTimer};

use crate::calculator::{
    Calculator, CalculatorState, ClipboardError, ClipboardSink, Operation, copy_display,
};
use crate::input::{Command, Gesture, Key};
use std::fmt;
use tracing::{debug, info, warn};

/// Events consumed by the frontend loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A line typed by the user.
    Line(String),
    /// The error display timer with this generation expired.
    ErrorTimeout(u64),
    /// Input reached end of file.
    InputClosed,
}

/// Short feedback shown next to the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    DigitDeleted,
    DisplayCleared,
    Copied,
    NothingToCopy,
    CopyFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigitDeleted => write!(f, "Digit deleted"),
            Self::DisplayCleared => write!(f, "Display cleared"),
            Self::Copied => write!(f, "Result copied to clipboard"),
            Self::NothingToCopy => write!(f, "Nothing to copy"),
            Self::CopyFailed(reason) => write!(f, "Copy failed: {reason}"),
        }
    }
}

/// What to render after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub display: String,
    pub is_error: bool,
    pub pending: Option<(String, Operation)>,
    pub notice: Option<Notice>,
}

/// Route a key to the calculator. Returns whether the key was accepted.
pub fn press(calculator: &mut Calculator, key: Key) -> bool {
    match key {
        Key::Digit(d) => calculator.input_digit(d),
        Key::Decimal => calculator.input_decimal(),
        Key::Operator(op) => calculator.perform_operation(op),
        Key::Percent => calculator.apply_percent(),
        Key::Negate => calculator.negate(),
        Key::Equals => calculator.equals(),
        Key::Clear => {
            calculator.clear();
            true
        }
        Key::Backspace => calculator.delete_last().is_some(),
    }
}

pub struct Session {
    calculator: Calculator,
    clipboard: Box<dyn ClipboardSink>,
    timer: ErrorTimer,
}

impl Session {
    pub fn new(
        calculator: Calculator,
        clipboard: Box<dyn ClipboardSink>,
        timer: ErrorTimer,
    ) -> Self {
        let mut session = Self {
            calculator,
            clipboard,
            timer,
        };
        session.sync_timer(false);
        session
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Apply one command and describe the result.
    pub fn handle(&mut self, command: Command) -> Outcome {
        let was_error = self.calculator.is_error();

        let notice = match command {
            Command::Press(key) => {
                let accepted = press(&mut self.calculator, key);
                debug!(%key, accepted, display = self.calculator.display(), "key pressed");
                None
            }
            Command::Gesture(gesture) => self.gesture(gesture),
            Command::Copy => self.copy(),
            Command::Help | Command::Quit => None,
        };

        self.sync_timer(was_error);
        self.outcome(notice)
    }

    /// Handle a delivered error timeout. Returns whether the display changed.
    pub fn on_error_timeout(&mut self, generation: u64) -> bool {
        if !self.timer.fire(generation) || !self.calculator.is_error() {
            return false;
        }
        info!("clearing error after timeout");
        self.calculator.clear();
        true
    }

    /// Current display without applying a command.
    pub fn outcome(&self, notice: Option<Notice>) -> Outcome {
        Outcome {
            display: self.calculator.display().to_string(),
            is_error: self.calculator.is_error(),
            pending: self
                .calculator
                .pending()
                .map(|p| (p.operand.clone(), p.operation)),
            notice,
        }
    }

    pub fn save_state(&self) -> CalculatorState {
        self.calculator.save_state()
    }

    pub fn restore_state(&mut self, state: CalculatorState) {
        let was_error = self.calculator.is_error();
        self.calculator.restore_state(state);
        self.sync_timer(was_error);
    }

    fn gesture(&mut self, gesture: Gesture) -> Option<Notice> {
        match gesture.command() {
            Command::Press(Key::Backspace) => {
                // a single character is replaced by zero rather than deleted
                let single = self.calculator.display().chars().count() <= 1;
                self.calculator.delete_last().map(|_| {
                    if single {
                        Notice::DisplayCleared
                    } else {
                        Notice::DigitDeleted
                    }
                })
            }
            Command::Press(key) => {
                press(&mut self.calculator, key);
                Some(Notice::DisplayCleared)
            }
            _ => self.copy(),
        }
    }

    fn copy(&mut self) -> Option<Notice> {
        match copy_display(&self.calculator, self.clipboard.as_mut()) {
            Ok(()) => Some(Notice::Copied),
            Err(ClipboardError::ErrorShown) => Some(Notice::NothingToCopy),
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                Some(Notice::CopyFailed(e.to_string()))
            }
        }
    }

    /// Arm the timer on entering error state, disarm it on leaving.
    fn sync_timer(&mut self, was_error: bool) {
        match (was_error, self.calculator.is_error()) {
            (false, true) => {
                self.timer.schedule();
            }
            (true, false) => self.timer.cancel(),
            _ => {}
        }
    }
}
