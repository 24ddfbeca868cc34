//! Terminal rendering of the display.
//!
//! The pending operation is shown as a muted line above the number, and the
//! number turns red while an error is shown.

use crate::input::Gesture;
use crate::session::Outcome;

const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render an outcome as one or more lines, without a trailing newline.
    pub fn render(&self, outcome: &Outcome) -> String {
        let mut lines = Vec::new();

        if let Some((operand, operation)) = &outcome.pending {
            lines.push(self.dim(&format!("{operand} {operation}")));
        }

        let display = format!("= {}", outcome.display);
        lines.push(if outcome.is_error && self.color {
            format!("{RED}{display}{RESET}")
        } else {
            display
        });

        if let Some(notice) = &outcome.notice {
            lines.push(self.dim(&format!("({notice})")));
        }

        lines.join("\n")
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Gesture tutorial shown on first launch.
pub fn tutorial() -> String {
    let mut text = String::from("Welcome to pocketcalc!\n\nDisplay gestures (type the word):\n");
    for gesture in Gesture::ALL {
        text.push_str(&format!("  {:<12} {}\n", gesture.name(), gesture.description()));
    }
    text.push_str("\nType `help` for the key reference.");
    text
}

/// Key reference printed by `help`.
pub fn help() -> String {
    [
        "Keys:",
        "  0-9 .      digits and decimal point",
        "  + - * /    operators (also × x ÷)",
        "  %          percent",
        "  n ±        toggle sign",
        "  =          equals",
        "  c          clear",
        "  b <        backspace",
        "Commands: copy, swipe-left, swipe-right, long-press, double-tap, help, quit",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;
    use crate::session::Notice;

    fn outcome(display: &str, is_error: bool) -> Outcome {
        Outcome {
            display: display.to_string(),
            is_error,
            pending: None,
            notice: None,
        }
    }

    #[test]
    fn test_plain_render() {
        let renderer = Renderer::new(false);
        assert_eq!(renderer.render(&outcome("42", false)), "= 42");
        assert_eq!(renderer.render(&outcome("Error", true)), "= Error");
    }

    #[test]
    fn test_error_is_red() {
        let renderer = Renderer::new(true);
        assert_eq!(
            renderer.render(&outcome("Error", true)),
            format!("{RED}= Error{RESET}")
        );
        assert_eq!(renderer.render(&outcome("7", false)), "= 7");
    }

    #[test]
    fn test_pending_and_notice() {
        let renderer = Renderer::new(false);
        let mut out = outcome("3", false);
        out.pending = Some(("12".to_string(), Operation::Divide));
        out.notice = Some(Notice::DigitDeleted);
        assert_eq!(renderer.render(&out), "12 ÷\n= 3\n(Digit deleted)");
    }

    #[test]
    fn test_tutorial_lists_gestures() {
        let text = tutorial();
        for gesture in Gesture::ALL {
            assert!(text.contains(gesture.name()));
        }
    }
}
