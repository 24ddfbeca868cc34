//! Display gestures and the commands they stand for.

use super::{Command, Key};

/// A gesture performed on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    SwipeLeft,
    SwipeRight,
    LongPress,
    DoubleTap,
}

impl Gesture {
    pub const ALL: [Gesture; 4] = [
        Gesture::SwipeLeft,
        Gesture::SwipeRight,
        Gesture::LongPress,
        Gesture::DoubleTap,
    ];

    /// The word typed to perform the gesture.
    pub fn name(self) -> &'static str {
        match self {
            Self::SwipeLeft => "swipe-left",
            Self::SwipeRight => "swipe-right",
            Self::LongPress => "long-press",
            Self::DoubleTap => "double-tap",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    /// The command this gesture triggers.
    pub fn command(self) -> Command {
        match self {
            Self::SwipeLeft => Command::Press(Key::Backspace),
            Self::SwipeRight | Self::LongPress => Command::Press(Key::Clear),
            Self::DoubleTap => Command::Copy,
        }
    }

    /// One-line description for the tutorial.
    pub fn description(self) -> &'static str {
        match self {
            Self::SwipeLeft => "delete last digit",
            Self::SwipeRight => "clear all input",
            Self::LongPress => "quick clear",
            Self::DoubleTap => "copy result to clipboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for gesture in Gesture::ALL {
            assert_eq!(Gesture::from_name(gesture.name()), Some(gesture));
        }
        assert_eq!(Gesture::from_name("pinch"), None);
    }

    #[test]
    fn test_gesture_commands() {
        assert_eq!(Gesture::SwipeLeft.command(), Command::Press(Key::Backspace));
        assert_eq!(Gesture::SwipeRight.command(), Command::Press(Key::Clear));
        assert_eq!(Gesture::LongPress.command(), Command::Press(Key::Clear));
        assert_eq!(Gesture::DoubleTap.command(), Command::Copy);
    }
}
