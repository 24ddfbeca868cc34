//! The interactive terminal frontend.
//!
//! Typed lines and timer expiries arrive on one channel and are handled
//! strictly in order, so the calculator is only ever touched by one event
//! at a time.

mod render;

pub use render::{Renderer, help, tutorial};

use crate::calculator::{Calculator, ClipboardSink, SystemClipboard, copy_display};
use crate::config::{Config, Preferences};
use crate::input::{Command, InputError, parse_line};
use crate::persist::{load_state, save_state};
use crate::session::{ErrorTimer, Event, Session, press};
use anyhow::Result;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Everything the interactive loop needs to start.
#[derive(Clone, Debug)]
pub struct AppOptions {
    pub config: Config,
    /// Where to persist the calculator. `None` disables persistence.
    pub state_path: Option<PathBuf>,
    /// Where the first-launch flag lives. `None` skips the tutorial.
    pub prefs_path: Option<PathBuf>,
}

/// Run the interactive loop until `quit` or end of input.
pub async fn run(options: AppOptions) -> Result<()> {
    let renderer = Renderer::new(options.config.color);

    if options.config.show_tutorial
        && let Some(path) = options.prefs_path.as_deref()
    {
        show_tutorial_once(path);
    }

    let (tx, rx) = flume::unbounded();
    spawn_input_reader(tx.clone());

    let timer = ErrorTimer::new(options.config.error_display(), tx);
    let mut session = Session::new(Calculator::new(), Box::new(SystemClipboard), timer);

    if let Some(path) = options.state_path.as_deref() {
        match load_state(path) {
            Ok(Some(state)) => {
                info!(path = %path.display(), "restoring saved state");
                session.restore_state(state);
            }
            Ok(None) => {}
            Err(e) => warn!(error = %format!("{e:#}"), "ignoring saved state"),
        }
    }

    println!("{}", renderer.render(&session.outcome(None)));

    'events: while let Ok(event) = rx.recv_async().await {
        match event {
            Event::Line(line) => {
                let commands = match parse_line(&line) {
                    Ok(commands) => commands,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };

                let mut last = None;
                for command in commands {
                    match command {
                        Command::Quit => break 'events,
                        Command::Help => println!("{}", help()),
                        other => last = Some(session.handle(other)),
                    }
                }
                if let Some(outcome) = last {
                    println!("{}", renderer.render(&outcome));
                }
            }
            Event::ErrorTimeout(generation) => {
                if session.on_error_timeout(generation) {
                    println!("{}", renderer.render(&session.outcome(None)));
                }
            }
            Event::InputClosed => break,
        }
    }

    if let Some(path) = options.state_path.as_deref() {
        save_state(path, &session.save_state())?;
        debug!(path = %path.display(), "state saved");
    }

    Ok(())
}

/// Evaluate a line of keys on a fresh calculator without a timer.
///
/// Gestures are applied as the commands they stand for; `quit` stops early.
pub fn evaluate(line: &str, clipboard: &mut dyn ClipboardSink) -> Result<Calculator, InputError> {
    let mut calculator = Calculator::new();

    for command in parse_line(line)? {
        let command = match command {
            Command::Gesture(gesture) => gesture.command(),
            other => other,
        };
        match command {
            Command::Press(key) => {
                press(&mut calculator, key);
            }
            Command::Copy => {
                if let Err(e) = copy_display(&calculator, clipboard) {
                    warn!(error = %e, "copy skipped");
                }
            }
            Command::Quit => break,
            Command::Gesture(_) | Command::Help => {}
        }
    }

    Ok(calculator)
}

fn show_tutorial_once(path: &Path) {
    let prefs = match Preferences::load(path) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "could not read preferences");
            return;
        }
    };
    if !prefs.first_launch {
        return;
    }

    println!("{}\n", tutorial());
    if let Err(e) = (Preferences { first_launch: false }).save(path) {
        warn!(error = %format!("{e:#}"), "could not save preferences");
    }
}

/// Forward stdin lines to the event channel from a blocking thread.
fn spawn_input_reader(events: flume::Sender<Event>) {
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if events.send(Event::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to read input");
                    break;
                }
            }
        }
        let _ = events.send(Event::InputClosed);
    });
}
