//! Tokenising typed lines into commands.

use super::{Command, Gesture, Key};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// A whole-word command such as `copy` or `swipe-left`.
    static ref COMMAND_WORD: Regex = Regex::new(r"^[a-zA-Z]{2,}(-[a-zA-Z]+)*$").unwrap();
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown key '{0}'")]
    UnknownKey(char),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// Split a typed line into commands.
///
/// Words are matched as named commands; everything else is read one key
/// per character. Whitespace only separates tokens.
pub fn parse_line(line: &str) -> Result<Vec<Command>, InputError> {
    let mut commands = Vec::new();

    for token in line.split_whitespace() {
        if COMMAND_WORD.is_match(token) {
            commands.push(parse_word(token)?);
            continue;
        }
        for c in token.chars() {
            let key = Key::from_char(c).ok_or(InputError::UnknownKey(c))?;
            commands.push(Command::Press(key));
        }
    }

    Ok(commands)
}

fn parse_word(word: &str) -> Result<Command, InputError> {
    let lower = word.to_lowercase();
    if let Some(gesture) = Gesture::from_name(&lower) {
        return Ok(Command::Gesture(gesture));
    }
    match lower.as_str() {
        "copy" => Ok(Command::Copy),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "clear" => Ok(Command::Press(Key::Clear)),
        _ => Err(InputError::UnknownCommand(word.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn test_keys_per_character() {
        let commands = parse_line("12+3=").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Press(Key::Digit('1')),
                Command::Press(Key::Digit('2')),
                Command::Press(Key::Operator(Operation::Add)),
                Command::Press(Key::Digit('3')),
                Command::Press(Key::Equals),
            ]
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(parse_line(" 8 / 0 = ").unwrap(), parse_line("8/0=").unwrap());
        assert!(parse_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_single_letters_are_keys() {
        assert_eq!(
            parse_line("c 2x3 n").unwrap(),
            vec![
                Command::Press(Key::Clear),
                Command::Press(Key::Digit('2')),
                Command::Press(Key::Operator(Operation::Multiply)),
                Command::Press(Key::Digit('3')),
                Command::Press(Key::Negate),
            ]
        );
    }

    #[test]
    fn test_words() {
        assert_eq!(
            parse_line("7 swipe-left copy QUIT").unwrap(),
            vec![
                Command::Press(Key::Digit('7')),
                Command::Gesture(Gesture::SwipeLeft),
                Command::Copy,
                Command::Quit,
            ]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_line("2^3"), Err(InputError::UnknownKey('^')));
        assert_eq!(
            parse_line("sqrt"),
            Err(InputError::UnknownCommand("sqrt".to_string()))
        );
    }
}
