//! Runtime configuration from environment variables (optionally via `.env`).

use std::env;
use std::path::PathBuf;

use crate::core::solution::syntax;

/// Where converted JSON/SQL records are written and searched.
pub const DATA_DIR_VAR: &str = "PROBLEMDOWN_DATA_DIR";
/// syntect theme used for solution highlighting.
pub const THEME_VAR: &str = "PROBLEMDOWN_THEME";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_THEME: &str = "InspiredGitHub";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub theme: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PROBLEMDOWN_THEME: unknown theme {name:?} (available: {available})")]
    UnknownTheme { name: String, available: String },

    #[error("PROBLEMDOWN_DATA_DIR is set but empty")]
    EmptyDataDir,
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let data_dir = match lookup(DATA_DIR_VAR) {
        Some(dir) if dir.trim().is_empty() => return Err(ConfigError::EmptyDataDir),
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(DEFAULT_DATA_DIR),
    };

    let theme = lookup(THEME_VAR)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_THEME.to_string());
    if !syntax::has_theme(&theme) {
        return Err(ConfigError::UnknownTheme {
            name: theme,
            available: syntax::theme_names().join(", "),
        });
    }

    log::debug!("Config: data_dir={}, theme={}", data_dir.display(), theme);
    Ok(Config { data_dir, theme })
}
