// src/config/mod.rs
//! Configuration module for user settings and theme colors.
//!
//! Settings live in `config.toml` under the platform config directory;
//! a missing file means defaults.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;

/// User configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
}

/// Colors used by the widgets. Values parse from color names ("blue",
/// "dark gray") or hex ("#5c76c3").
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Checkboxes, header title, dialog border.
    pub accent: Color,
    /// Finished rows.
    pub done: Color,
    /// Selected-row marker.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x5c, 0x76, 0xc3),
            done: Color::DarkGray,
            highlight: Color::White,
        }
    }
}

/// Load the user config, falling back to defaults when the platform has no
/// config directory.
pub fn load() -> Result<Config> {
    match dirs::config_dir() {
        Some(dir) => load_from(&dir.join("doable/config.toml")),
        None => Ok(Config::default()),
    }
}

/// Load the config from an explicit path. A missing file yields the
/// defaults; an unreadable or malformed file is an error.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse config file at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme.accent, Color::Rgb(0x5c, 0x76, 0xc3));
        assert_eq!(config.theme.done, Color::DarkGray);
    }

    #[test]
    fn theme_colors_parse_from_names_and_hex() {
        let config: Config = toml::from_str(
            r##"
            [theme]
            accent = "#a0b0c0"
            done = "gray"
            "##,
        )
        .unwrap();

        assert_eq!(config.theme.accent, Color::Rgb(0xa0, 0xb0, 0xc0));
        assert_eq!(config.theme.done, Color::Gray);
        // Unset keys keep their defaults
        assert_eq!(config.theme.highlight, Color::White);
    }

    #[test]
    fn load_from_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme.highlight, Color::White);
    }

    #[test]
    fn load_from_reads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\naccent = \"green\"\n").unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.theme.accent, Color::Green);
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme\naccent = ").unwrap();

        assert!(load_from(&path).is_err());
    }
}
