//! Runtime settings for the presentation layer.
//!
//! Values come from the environment (a `.env` file is loaded by `main`) and
//! are then overridden by command line flags.

use std::path::PathBuf;

/// Env var naming the export directory.
pub const ENV_EXPORT_DIR: &str = "SUBNET_CALC_EXPORT_DIR";
/// Env var with the max number of subnets printed to the terminal.
pub const ENV_LIMIT: &str = "SUBNET_CALC_LIMIT";
/// Any value disables colors, see <https://no-color.org>.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Subnets shown on screen before the listing is cut short.
pub const DEFAULT_DISPLAY_LIMIT: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub use_color: bool,
    pub export_dir: PathBuf,
    pub display_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_color: true,
            export_dir: default_export_dir(std::env::var("HOME").ok()),
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl Config {
    /// Build from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, `HOME` included.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let export_dir = lookup(ENV_EXPORT_DIR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| default_export_dir(lookup("HOME")));

        let display_limit = match lookup(ENV_LIMIT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring {ENV_LIMIT}={raw}, not a number");
                DEFAULT_DISPLAY_LIMIT
            }),
            None => DEFAULT_DISPLAY_LIMIT,
        };

        let use_color = lookup(ENV_NO_COLOR).map_or(true, |v| v.is_empty());

        Config {
            use_color,
            export_dir,
            display_limit,
        }
    }
}

/// `$HOME/Downloads`, or `./exports` without a home directory.
fn default_export_dir(home: Option<String>) -> PathBuf {
    match home {
        Some(home) if !home.is_empty() => PathBuf::from(home).join("Downloads"),
        _ => PathBuf::from("exports"),
    }
}
