//! calc-tui - keypad calculator for the terminal
//!
//! Digits and operators from the keyboard (or mouse clicks on the keypad)
//! drive the calculator core; its state is rendered as a two-line display.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libcalc::logging::{LogFormat, LoggingConfig};
use libcalc::Config;
use tracing::{debug, info};

use calc_tui::{
    app::{event::EventHandler, reduce, Action, AppState, UiConfig},
    terminal::{install_panic_hook, restore_terminal, set_mouse_capture, setup_terminal, Tui},
    ui, TuiError,
};

#[derive(Parser, Debug)]
#[command(name = "calc-tui")]
#[command(version, about = "Keypad calculator for the terminal")]
struct Cli {
    /// Config file (default: $CALC_CONFIG or ~/.config/calc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Capture the mouse so keypad buttons can be clicked
    #[arg(long)]
    mouse: bool,

    /// Use ASCII operation symbols
    #[arg(long)]
    ascii: bool,

    /// Write logs to this file (logging is off without one)
    #[arg(long, env = "CALC_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Minimum log level (error, warn, info, debug, trace)
    #[arg(long, env = "CALC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (text, json, pretty)
    #[arg(long, env = "CALC_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<TuiError>()
            .map(TuiError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .map_err(TuiError::from)
    .context("loading configuration")?;

    init_logging(&cli, &config)?;

    let mut ui_config = UiConfig::from_config(&config);
    ui_config.mouse_enabled |= cli.mouse;
    if cli.ascii {
        ui_config.unicode_enabled = false;
    }

    install_panic_hook();
    let mut terminal = setup_terminal(ui_config.mouse_enabled)?;

    let result = run_app(&mut terminal, AppState::with_config(ui_config));

    restore_terminal(terminal)?;

    Ok(result?)
}

/// The terminal belongs to the UI, so logs only go to a file
fn init_logging(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let mut logging = LoggingConfig::from_settings(&config.logging);
    if let Some(path) = &cli.log_file {
        logging = logging.with_file(path);
    }
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = cli.log_format {
        logging.format = format;
    }

    match logging.file {
        Some(_) => logging.init().map_err(TuiError::from)?,
        // Still reject a bad level when logging is off
        None => {
            logging.filter().map_err(TuiError::from)?;
        }
    }
    Ok(())
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> calc_tui::Result<()> {
    let (width, height) = crossterm::terminal::size()?;
    state = reduce(state, Action::Resize(width, height));

    let event_handler = EventHandler::new(state.config.tick_rate_ms);
    info!(tick_rate_ms = state.config.tick_rate_ms, "calc-tui started");

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();
        if !matches!(action, Action::Tick) {
            debug!(?action, "dispatch");
        }

        let mouse_before = state.mouse_enabled;
        let read_back_before = state.read_back.clone();
        state = reduce(state, action);

        // Side effects the reducer asked for
        if state.mouse_enabled != mouse_before {
            set_mouse_capture(terminal, state.mouse_enabled)?;
        }
        if state.read_back != read_back_before {
            if let Some(result) = &state.read_back {
                info!(result = %result, "read back");
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!("calc-tui exiting");
    Ok(())
}
