//! Runtime configuration for the board.
//!
//! Every tunable has a compile-time default and can be overridden through a
//! `DRAGBOARD_*` environment variable. Command-line flags, where they exist,
//! win over both.

use std::path::PathBuf;

/// Default starting position.
const DEFAULT_FEN: &str = chess::STARTING_FEN;

/// Default directory for the rolling log file.
const DEFAULT_LOG_DIR: &str = "logs";

/// Default redraw interval (in milliseconds).
const DEFAULT_TICK_MS: u64 = 33;

/// Get the notation the board starts from.
///
/// Priority:
/// 1. `DRAGBOARD_FEN` env variable if set and non-empty
/// 2. the standard starting position
pub fn get_start_fen() -> String {
    match std::env::var("DRAGBOARD_FEN") {
        Ok(fen) if !fen.trim().is_empty() => fen,
        _ => DEFAULT_FEN.to_string(),
    }
}

/// Get the directory where the interactive board writes its log.
///
/// Priority:
/// 1. `DRAGBOARD_LOG_DIR` env variable if set
/// 2. `logs` relative to the working directory
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DRAGBOARD_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Get the theme preference (`light` or `dark`), if one is set.
pub fn get_theme_preference() -> Option<String> {
    std::env::var("DRAGBOARD_THEME").ok()
}

/// Get the redraw interval in milliseconds.
///
/// Falls back to the default when `DRAGBOARD_TICK_MS` is unset, unparsable
/// or zero.
pub fn get_tick_ms() -> u64 {
    parse_tick_ms(std::env::var("DRAGBOARD_TICK_MS").ok().as_deref())
}

fn parse_tick_ms(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|&ms| ms > 0)
        .unwrap_or(DEFAULT_TICK_MS)
}
