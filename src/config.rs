//! Demo host configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::size::StepSize;
use crate::theme::StepTheme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown color '{0}' in [theme]")]
    Color(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds; also the animation sampling rate.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Size token applied to every step in the demo.
    #[serde(default)]
    pub size: StepSize,
}

fn default_tick_ms() -> u64 {
    33
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            size: StepSize::default(),
        }
    }
}

/// Color names (or hex values) accepted by ratatui's color parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_muted")]
    pub muted: String,
    #[serde(default = "default_text")]
    pub text: String,
}

fn default_accent() -> String {
    "cyan".to_string()
}

fn default_muted() -> String {
    "darkgray".to_string()
}

fn default_text() -> String {
    "white".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            muted: default_muted(),
            text: default_text(),
        }
    }
}

impl ThemeConfig {
    /// Resolve the configured color names into a widget theme.
    pub fn resolve(&self) -> Result<StepTheme, ConfigError> {
        Ok(StepTheme {
            accent: parse_color(&self.accent)?,
            muted: parse_color(&self.muted)?,
            text: parse_color(&self.text)?,
        })
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::Color(name.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
    /// Directory for log files, created on demand.
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

fn default_log_dir() -> String {
    ".stepline/logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
            dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn logs_path(&self) -> PathBuf {
        PathBuf::from(&self.logging.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.tick_ms, 33);
        assert_eq!(config.ui.size, StepSize::Md);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.to_file);
    }

    #[test]
    fn test_default_theme_resolves() {
        let theme = ThemeConfig::default().resolve().unwrap();
        assert_eq!(theme, StepTheme::default());
    }

    #[test]
    fn test_unknown_color_is_an_error() {
        let theme = ThemeConfig {
            accent: "chartreuse-ish".to_string(),
            ..ThemeConfig::default()
        };
        assert!(matches!(theme.resolve(), Err(ConfigError::Color(_))));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            size = "lg"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.size, StepSize::Lg);
        assert_eq!(config.ui.tick_ms, 33);
        assert_eq!(config.theme.accent, "cyan");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[theme]\naccent = \"magenta\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.theme.accent, "magenta");
        assert_eq!(
            config.theme.resolve().unwrap().accent,
            ratatui::style::Color::Magenta
        );
    }

    #[test]
    fn test_load_missing_file_is_a_read_error() {
        let missing = Path::new("/nonexistent/stepline.toml");
        assert!(matches!(
            Config::load(Some(missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.ui.tick_ms, 33);
    }
}
