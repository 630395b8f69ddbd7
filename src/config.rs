use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Default maximum label width in display columns
pub const DEFAULT_MAX_LABEL_WIDTH: u16 = 24;

/// Top-level configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strip: StripOptions,
    pub theme: ThemeConfig,
}

impl Config {
    /// Default config file location (`<config_dir>/tabstrip/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tabstrip").join("config.toml"))
    }

    /// Load the config.
    ///
    /// An explicit path must be readable. Without one, the default path is
    /// used when it exists and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate config text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.strip.validate()?;
        Ok(config)
    }
}

/// Layout and glyph options for the strip
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StripOptions {
    /// Labels wider than this are truncated with an ellipsis
    pub max_label_width: u16,
    /// Drawn after the label of a modified file
    pub modified_marker: String,
    /// Glyph of the close control
    pub close_glyph: String,
    pub show_close_button: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            max_label_width: DEFAULT_MAX_LABEL_WIDTH,
            modified_marker: "•".to_string(),
            close_glyph: "×".to_string(),
            show_close_button: true,
        }
    }
}

impl StripOptions {
    /// Reject options the strip cannot lay out
    pub fn validate(&self) -> Result<()> {
        if self.max_label_width == 0 {
            return Err(ConfigError::InvalidWidth(self.max_label_width));
        }
        Ok(())
    }
}

/// Theme colors as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub bar_bg: String,
    pub active_fg: String,
    pub active_bg: String,
    pub inactive_fg: String,
    pub inactive_bg: String,
    pub hover_bg: String,
    pub marker_fg: String,
    pub close_fg: String,
    pub divider_fg: String,
    pub drop_indicator_fg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            bar_bg: "black".into(),
            active_fg: "white".into(),
            active_bg: "blue".into(),
            inactive_fg: "gray".into(),
            inactive_bg: "black".into(),
            hover_bg: "darkgray".into(),
            marker_fg: "red".into(),
            close_fg: "gray".into(),
            divider_fg: "darkgray".into(),
            drop_indicator_fg: "yellow".into(),
        }
    }
}

impl ThemeConfig {
    /// Parse the color strings into a render-ready theme
    pub fn resolve(&self) -> Result<Theme> {
        let bar_bg = parse_color("bar_bg", &self.bar_bg)?;
        let active_fg = parse_color("active_fg", &self.active_fg)?;
        let active_bg = parse_color("active_bg", &self.active_bg)?;
        let inactive_fg = parse_color("inactive_fg", &self.inactive_fg)?;
        let inactive_bg = parse_color("inactive_bg", &self.inactive_bg)?;
        let hover_bg = parse_color("hover_bg", &self.hover_bg)?;
        let marker_fg = parse_color("marker_fg", &self.marker_fg)?;
        let close_fg = parse_color("close_fg", &self.close_fg)?;
        let divider_fg = parse_color("divider_fg", &self.divider_fg)?;
        let drop_fg = parse_color("drop_indicator_fg", &self.drop_indicator_fg)?;

        Ok(Theme {
            bar: Style::default().bg(bar_bg),
            active: Style::default()
                .fg(active_fg)
                .bg(active_bg)
                .add_modifier(Modifier::BOLD),
            inactive: Style::default().fg(inactive_fg).bg(inactive_bg),
            hover: Style::default().fg(active_fg).bg(hover_bg),
            marker: Style::default().fg(marker_fg),
            close: Style::default().fg(close_fg),
            divider: Style::default().fg(divider_fg).bg(bar_bg),
            drop_indicator: Style::default()
                .fg(drop_fg)
                .bg(bar_bg)
                .add_modifier(Modifier::BOLD),
        })
    }
}

fn parse_color(key: &'static str, value: &str) -> Result<Color> {
    Color::from_str(value).map_err(|_| ConfigError::InvalidColor {
        key,
        value: value.to_string(),
    })
}

/// Resolved styles used by the tab strip widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Background of the whole strip row
    pub bar: Style,
    pub active: Style,
    pub inactive: Style,
    /// Inactive tab under the pointer
    pub hover: Style,
    /// Patched over the tab style for the modification marker
    pub marker: Style,
    /// Patched over the tab style for the close control
    pub close: Style,
    pub divider: Style,
    pub drop_indicator: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bar: Style::default().bg(Color::Black),
            active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            inactive: Style::default().fg(Color::Gray).bg(Color::Black),
            hover: Style::default().fg(Color::White).bg(Color::DarkGray),
            marker: Style::default().fg(Color::Red),
            close: Style::default().fg(Color::Gray),
            divider: Style::default().fg(Color::DarkGray).bg(Color::Black),
            drop_indicator: Style::default()
                .fg(Color::Yellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_theme_matches_default_config() {
        let resolved = ThemeConfig::default().resolve().unwrap();
        assert_eq!(resolved, Theme::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r##"
            [strip]
            max_label_width = 12

            [theme]
            active_bg = "#336699"
            "##,
        )
        .unwrap();

        assert_eq!(config.strip.max_label_width, 12);
        assert_eq!(config.strip.modified_marker, "•");
        assert_eq!(config.theme.active_bg, "#336699");
        assert_eq!(config.theme.marker_fg, "red");

        let theme = config.theme.resolve().unwrap();
        assert_eq!(theme.active.bg, Some(Color::Rgb(0x33, 0x66, 0x99)));
    }

    #[test]
    fn test_invalid_color() {
        let theme = ThemeConfig {
            hover_bg: "not-a-color".into(),
            ..ThemeConfig::default()
        };
        match theme.resolve() {
            Err(ConfigError::InvalidColor { key, value }) => {
                assert_eq!(key, "hover_bg");
                assert_eq!(value, "not-a-color");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_label_width_rejected() {
        let result = Config::from_toml("[strip]\nmax_label_width = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidWidth(0))));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[strip]\nclose_glyph = \"x\"\nshow_close_button = false").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.strip.close_glyph, "x");
        assert!(!config.strip.show_close_button);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(missing.as_path())),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_load_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[strip\nmax_label_width = ").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Parse(_))
        ));
    }
}
