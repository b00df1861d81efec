//! CLI-specific configuration for terminal UI.
use std::{env, path::PathBuf};

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from the cross-frontend lookup configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEDEX_FRAME_MS` - Input poll interval in milliseconds (default: 16)
    /// - `POKEDEX_SPINNER_MS` - Spinner animation step in milliseconds (default: 100)
    /// - `POKEDEX_MOUSE` - Capture mouse clicks for the search button (default: true)
    /// - `POKEDEX_LOG_DIR` - Log directory (default: platform cache directory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("POKEDEX_FRAME_MS") {
            config.ui.frame_interval_ms = ms.max(1);
        }
        if let Some(ms) = read_env::<u64>("POKEDEX_SPINNER_MS") {
            config.ui.spinner_interval_ms = ms.max(10);
        }
        if let Some(enabled) = read_env_bool("POKEDEX_MOUSE") {
            config.ui.mouse_capture = enabled;
        }
        if let Some(dir) = env::var_os("POKEDEX_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

/// UI timing and input configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub frame_interval_ms: u64,
    pub spinner_interval_ms: u64,
    pub mouse_capture: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            spinner_interval_ms: 100,
            mouse_capture: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
