// ============================================================================
// ffcheck-core/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Severity-coded console narration
//
// Simple terminal formatting helpers for the validation flow. All output
// goes through the `log` facade; the CLI configures the backend with a
// message-only format on stdout. Messages carry one of four severity glyphs
// (success, warning, error, info) plus section headers and a banner.
//
// Color is applied only to the glyph or header, honours the NO_COLOR
// environment variable, and can be disabled programmatically.

use log::{error, info, warn};
use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Styling constants for terminal output
pub mod styling {
    // Severity glyphs
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const WARNING_SYMBOL: &str = "⚠";
    pub const ERROR_SYMBOL: &str = "✗";
    pub const INFO_SYMBOL: &str = "ℹ";

    // Section formatting
    pub const SECTION_PREFIX: &str = "===== ";
    pub const SECTION_SUFFIX: &str = " =====";

    // Banner rule width
    pub const BANNER_WIDTH: usize = 50;
}

// Global color setting
static USE_COLOR: AtomicBool = AtomicBool::new(true);

/// Set whether to use color in terminal output
pub fn set_color(enable: bool) {
    USE_COLOR.store(enable, Ordering::Relaxed);
}

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    USE_COLOR.load(Ordering::Relaxed) && std::env::var("NO_COLOR").is_err()
}

/// Print the run banner (double rule with a centered title)
pub fn print_banner(title: &str) {
    let rule = "=".repeat(styling::BANNER_WIDTH);
    info!("");
    if should_use_color() {
        info!("{}", rule.blue().bold());
        info!("  {}", title.blue().bold());
        info!("{}", rule.blue().bold());
    } else {
        info!("{}", rule);
        info!("  {}", title);
        info!("{}", rule);
    }
    info!("");
}

/// Print a section header for major validation phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!(
            "{}{}{}",
            styling::SECTION_PREFIX,
            title.to_uppercase().cyan().bold(),
            styling::SECTION_SUFFIX
        );
    } else {
        info!(
            "{}{}{}",
            styling::SECTION_PREFIX,
            title.to_uppercase(),
            styling::SECTION_SUFFIX
        );
    }
    info!("");
}

/// Print a success message
pub fn print_success(message: &str) {
    if should_use_color() {
        info!("{} {}", styling::SUCCESS_SYMBOL.green(), message);
    } else {
        info!("{} {}", styling::SUCCESS_SYMBOL, message);
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if should_use_color() {
        warn!("{} {}", styling::WARNING_SYMBOL.yellow(), message);
    } else {
        warn!("{} {}", styling::WARNING_SYMBOL, message);
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    if should_use_color() {
        error!("{} {}", styling::ERROR_SYMBOL.red(), message);
    } else {
        error!("{} {}", styling::ERROR_SYMBOL, message);
    }
}

/// Print an info message
pub fn print_info(message: &str) {
    if should_use_color() {
        info!("{} {}", styling::INFO_SYMBOL.blue(), message);
    } else {
        info!("{} {}", styling::INFO_SYMBOL, message);
    }
}

/// Print an unprefixed line (used for installation instruction blocks)
pub fn print_plain(message: &str) {
    info!("{}", message);
}
