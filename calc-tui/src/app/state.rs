//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libcalc::{Calculator, Config, SymbolStyle};
use ratatui::layout::Rect;

use crate::keypad::Button;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Mouse capture enabled?
    pub mouse_enabled: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Terminal area, for mouse hit-testing
    pub viewport: Rect,

    /// Calculator session; every keypad press goes through it
    pub calculator: Calculator,

    /// Formatted result of the last evaluation, until the next keypress
    pub read_back: Option<String>,

    /// Button to highlight until the next tick
    pub pressed: Option<Button>,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Show evaluated results in the status bar?
    pub read_back_enabled: bool,

    /// Capture the mouse at startup?
    pub mouse_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl UiConfig {
    /// Build from the config file, then apply environment overrides
    ///
    /// `NO_COLOR` / `CALC_TUI_NO_COLOR` disable colors and
    /// `CALC_TUI_TICK_MS` sets the tick rate.
    pub fn from_config(config: &Config) -> Self {
        let colors_enabled = config.display.colors
            && std::env::var("NO_COLOR").is_err()
            && std::env::var("CALC_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("CALC_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.input.tick_rate_ms);

        Self {
            colors_enabled,
            unicode_enabled: config.display.unicode,
            read_back_enabled: config.display.read_back,
            mouse_enabled: config.input.mouse,
            tick_rate_ms,
        }
    }

    pub fn symbol_style(&self) -> SymbolStyle {
        if self.unicode_enabled {
            SymbolStyle::Unicode
        } else {
            SymbolStyle::Ascii
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(UiConfig::default())
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            mouse_enabled: config.mouse_enabled,
            help_visible: false,
            viewport: Rect::default(),
            calculator: Calculator::new(),
            read_back: None,
            pressed: None,
            config,
        }
    }
}
