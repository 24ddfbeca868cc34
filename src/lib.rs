//! A pocket calculator.
//!
//! The [`calculator`] module holds the keypad state machine; everything
//! else is the terminal frontend built around it.

pub mod app;
pub mod calculator;
pub mod config;
pub mod input;
pub mod persist;
pub mod session;
