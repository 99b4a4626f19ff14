//! # configs
//!
//! Layered settings for Overboard hosts. Sources, lowest precedence first:
//! compiled defaults, an optional TOML file, then `OVERBOARD__*`
//! environment variables (a `.env` file is loaded into the environment
//! first, if present).
//!
//! ```text
//! OVERBOARD__BOARD__NAME=Rust
//! OVERBOARD__LOG__FORMAT=json
//! ```

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ENV_PREFIX: &str = "OVERBOARD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Display name of the board to seed.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            name: "Java".to_string(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Settings {
    /// Loads settings from defaults, `path` (if given and present) and the
    /// environment.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            tracing::debug!(path = %dotenv.display(), "loaded .env");
        }

        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Parses settings from TOML text, filling gaps with defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.board.name, "Java");
        assert_eq!(settings.log.filter, "info");
        assert_eq!(settings.log.format, LogFormat::Pretty);
    }

    #[test]
    fn toml_overrides_only_what_it_names() {
        let settings = Settings::from_toml(
            r#"
            [log]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.log.filter, "info");
        assert_eq!(settings.board.name, "Java");
    }

    #[test]
    fn toml_board_name() {
        let settings = Settings::from_toml("[board]\nname = \"Rust\"\n").unwrap();
        assert_eq!(settings.board.name, "Rust");
    }

    #[test]
    fn unknown_log_format_is_an_error() {
        let err = Settings::from_toml("[log]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().starts_with("failed to load settings"));
    }
}
