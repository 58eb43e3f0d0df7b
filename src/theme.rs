//! Dialog colors, with optional overrides from a user theme file.
//!
//! Looks for `<config dir>/daiarogu/theme.toml`; colors are `#RRGGBB` or
//! `#RGB` hex strings. Missing or unparseable entries keep their defaults.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Colors used by the dialog renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,      // Dialog borders, titles, key hints
    pub success: Color,     // Affirmative control shortcut
    pub warning: Color,     // Confirmation border and title
    pub danger: Color,      // Negative control shortcut
    pub text: Color,        // Body text and input contents
    pub text_dim: Color,    // Hint lines
    pub bg_selected: Color, // Focused button background
    pub inactive: Color,    // Unfocused controls and separators
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin Macchiato-inspired fallback palette
        Self {
            accent: Color::Rgb(138, 173, 244),
            success: Color::Rgb(166, 218, 149),
            warning: Color::Rgb(245, 169, 127),
            danger: Color::Rgb(237, 135, 150),
            text: Color::Rgb(202, 211, 245),
            text_dim: Color::Rgb(147, 154, 183),
            bg_selected: Color::Rgb(73, 77, 100),
            inactive: Color::Rgb(91, 96, 120),
        }
    }
}

/// On-disk theme overrides. Every entry is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_selected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<String>,
}

impl Theme {
    /// Load the theme, merging overrides from the user's theme file when one
    /// exists and parses.
    pub fn load() -> Self {
        let Some(path) = Self::theme_path() else {
            return Self::default();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str::<ThemeFile>(&content) {
            Ok(file) => Self::default().merged(&file),
            Err(e) => {
                tracing::warn!("ignoring theme file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn theme_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("daiarogu").join("theme.toml"))
    }

    fn merged(mut self, file: &ThemeFile) -> Self {
        override_color(&mut self.accent, file.accent.as_deref());
        override_color(&mut self.success, file.success.as_deref());
        override_color(&mut self.warning, file.warning.as_deref());
        override_color(&mut self.danger, file.danger.as_deref());
        override_color(&mut self.text, file.text.as_deref());
        override_color(&mut self.text_dim, file.text_dim.as_deref());
        override_color(&mut self.bg_selected, file.bg_selected.as_deref());
        override_color(&mut self.inactive, file.inactive.as_deref());
        self
    }

    /// Parse `#RRGGBB` or `#RGB` into a color.
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        match s.len() {
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16).ok()?;
                let g = u8::from_str_radix(&s[2..4], 16).ok()?;
                let b = u8::from_str_radix(&s[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&s[0..1], 16).ok()?;
                let g = u8::from_str_radix(&s[1..2], 16).ok()?;
                let b = u8::from_str_radix(&s[2..3], 16).ok()?;
                Some(Color::Rgb(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }
}

fn override_color(slot: &mut Color, value: Option<&str>) {
    if let Some(color) = value.and_then(Theme::parse_hex_color) {
        *slot = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(
            Theme::parse_hex_color("#1e2030"),
            Some(Color::Rgb(0x1e, 0x20, 0x30))
        );
        assert_eq!(
            Theme::parse_hex_color("ffc107"),
            Some(Color::Rgb(0xff, 0xc1, 0x07))
        );
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(Theme::parse_hex_color("#abc"), Some(Color::Rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn rejects_junk() {
        assert_eq!(Theme::parse_hex_color("red"), None);
        assert_eq!(Theme::parse_hex_color("#12345"), None);
        assert_eq!(Theme::parse_hex_color(""), None);
    }

    #[test]
    fn theme_file_round_trip() {
        let file = ThemeFile {
            accent: Some("#ffc107".into()),
            ..Default::default()
        };
        let serialized = toml::to_string_pretty(&file).unwrap();
        let parsed: ThemeFile = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.accent.as_deref(), Some("#ffc107"));
        assert!(parsed.text.is_none());
    }

    #[test]
    fn overrides_apply_and_bad_colors_fall_back() {
        let file: ThemeFile = toml::from_str("accent = \"#000000\"\ntext = \"oops\"").unwrap();
        let theme = Theme::default().merged(&file);
        assert_eq!(theme.accent, Color::Rgb(0, 0, 0));
        assert_eq!(theme.text, Theme::default().text);
    }
}
