//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::config::EditorConfig;
use canvas::consts::{MAX_DISPLAY_HEIGHT_PX, MAX_NAME_WIDTH, MIN_NAME_WIDTH, VIEWPORT_FRACTION};
use canvas::error::CanvasError;

/// Build the editor config from environment variables.
///
/// Optional:
/// - `STUDIO_MAX_DISPLAY_HEIGHT`: default 600
/// - `STUDIO_VIEWPORT_FRACTION`: default 0.5
/// - `STUDIO_MIN_NAME_WIDTH`: default 200
/// - `STUDIO_MAX_NAME_WIDTH`: default 800
///
/// Unset or unparsable values fall back to their defaults. The combined
/// result is still validated, so e.g. a minimum above the maximum fails.
pub fn from_env() -> Result<EditorConfig, CanvasError> {
    EditorConfig::new(
        env_parse_f64("STUDIO_MAX_DISPLAY_HEIGHT", MAX_DISPLAY_HEIGHT_PX),
        env_parse_f64("STUDIO_VIEWPORT_FRACTION", VIEWPORT_FRACTION),
        env_parse_f64("STUDIO_MIN_NAME_WIDTH", MIN_NAME_WIDTH),
        env_parse_f64("STUDIO_MAX_NAME_WIDTH", MAX_NAME_WIDTH),
    )
}

fn env_parse_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(default)
}
