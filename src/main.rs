use anyhow::{Context, Result};
use clap::Parser;
use pocketcalc::app::{self, AppOptions, Renderer};
use pocketcalc::calculator::SystemClipboard;
use pocketcalc::config::{Config, Preferences};
use pocketcalc::persist::default_state_path;
use pocketcalc::session::Outcome;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pocketcalc", version, about = "A keyboard-driven pocket calculator")]
struct Cli {
    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the saved calculator state
    #[arg(long)]
    state: Option<PathBuf>,

    /// Do not restore or save the calculator state
    #[arg(long)]
    no_persist: bool,

    /// Evaluate a line of keys, print the display and exit
    #[arg(long, value_name = "KEYS")]
    keys: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pocketcalc={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    if let Some(keys) = cli.keys.as_deref() {
        let calculator = app::evaluate(keys, &mut SystemClipboard).context("Invalid key sequence")?;
        let outcome = Outcome {
            display: calculator.display().to_string(),
            is_error: calculator.is_error(),
            pending: None,
            notice: None,
        };
        println!("{}", Renderer::new(false).render(&outcome));
        return Ok(if calculator.is_error() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let state_path = if cli.no_persist || !config.persist_state {
        None
    } else {
        cli.state.or_else(default_state_path)
    };

    tracing::info!(?state_path, "starting pocketcalc");
    app::run(AppOptions {
        config,
        state_path,
        prefs_path: Preferences::default_path(),
    })
    .await?;

    Ok(ExitCode::SUCCESS)
}
