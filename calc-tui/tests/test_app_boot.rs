//! Test application initialization and boot sequence
//!
//! Verifies that the app initializes with correct defaults based on the
//! config file and environment variables.

use calc_tui::app::{AppState, UiConfig};
use libcalc::{Config, SymbolStyle};
use serial_test::serial;

#[test]
#[serial]
fn test_calculator_starts_empty() {
    let state = AppState::new();

    assert!(state.calculator.state().is_empty());
    assert!(!state.should_quit);
    assert!(state.read_back.is_none());
    assert!(state.pressed.is_none());
}

#[test]
#[serial]
fn test_mouse_disabled_by_default() {
    let state = AppState::new();

    assert!(!state.mouse_enabled);
}

#[test]
#[serial]
fn test_help_hidden_by_default() {
    let state = AppState::new();

    assert!(!state.help_visible);
}

#[test]
#[serial]
fn test_mouse_enabled_from_config() {
    let config = Config::from_toml("[input]\nmouse = true").unwrap();
    let state = AppState::with_config(UiConfig::from_config(&config));

    assert!(state.mouse_enabled);
}

#[test]
#[serial]
fn test_ascii_symbols_from_config() {
    let config = Config::from_toml("[display]\nunicode = false").unwrap();
    let ui_config = UiConfig::from_config(&config);

    assert_eq!(ui_config.symbol_style(), SymbolStyle::Ascii);
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_calc_tui_no_color_env() {
    std::env::set_var("CALC_TUI_NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("CALC_TUI_NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("CALC_TUI_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("CALC_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_tick_rate_env_overrides_config() {
    let config = Config::from_toml("[input]\ntick_rate_ms = 50").unwrap();

    std::env::set_var("CALC_TUI_TICK_MS", "75");
    let ui_config = UiConfig::from_config(&config);
    std::env::remove_var("CALC_TUI_TICK_MS");

    assert_eq!(ui_config.tick_rate_ms, 75);
}

#[test]
#[serial]
fn test_tick_rate_default_100ms() {
    std::env::remove_var("CALC_TUI_TICK_MS");
    let state = AppState::new();

    assert_eq!(state.config.tick_rate_ms, 100);
}
