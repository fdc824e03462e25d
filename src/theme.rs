use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{self, Color32};
use palette::{Hsl, IntoColor, Srgb};
use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Named color tokens
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThemeError {
    #[error("invalid color literal '{0}': expected #rrggbb")]
    InvalidColor(String),
}

/// The five named tokens every widget draws from. Defaults carry the
/// project's stock palette; a JSON theme file can override any subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Foreground text on dark surfaces.
    pub light: Color32,
    /// Secondary chrome: separators, inactive tabs, frames.
    pub grey: Color32,
    /// Panel and window background.
    pub dark: Color32,
    /// Accent for the selected tab and primary actions.
    pub primary: Color32,
    /// Accent for highlights and links.
    pub secondary: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            light: Color32::from_rgb(0xab, 0xab, 0xab),
            grey: Color32::from_rgb(0x54, 0x54, 0x54),
            dark: Color32::from_rgb(0x23, 0x23, 0x23),
            primary: Color32::from_rgb(0x25, 0x1e, 0xe7),
            secondary: Color32::from_rgb(0x32, 0xad, 0xe3),
        }
    }
}

/// Serde mirror of the on-disk theme file. Every field is optional so a
/// file may override a single token.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    light: Option<String>,
    grey: Option<String>,
    dark: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
}

impl Theme {
    /// Look up a token by name.
    pub fn named(&self, name: &str) -> Option<Color32> {
        self.tokens()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| c)
    }

    /// Ordered (name, color) listing for the palette view.
    pub fn tokens(&self) -> [(&'static str, Color32); 5] {
        [
            ("light", self.light),
            ("grey", self.grey),
            ("dark", self.dark),
            ("primary", self.primary),
            ("secondary", self.secondary),
        ]
    }

    /// Parse a theme from JSON text; absent tokens keep their defaults.
    pub fn from_json(text: &str) -> Result<Theme> {
        let file: ThemeFile = serde_json::from_str(text).context("parsing theme JSON")?;
        let mut theme = Theme::default();

        let overrides = [
            (&file.light, &mut theme.light),
            (&file.grey, &mut theme.grey),
            (&file.dark, &mut theme.dark),
            (&file.primary, &mut theme.primary),
            (&file.secondary, &mut theme.secondary),
        ];
        for (literal, slot) in overrides {
            if let Some(hex) = literal {
                *slot = parse_hex(hex)?;
            }
        }
        Ok(theme)
    }

    /// Load a theme file from disk.
    pub fn load(path: &Path) -> Result<Theme> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading theme file {}", path.display()))?;
        Theme::from_json(&text)
    }

    /// Install the tokens into egui's visuals.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.dark;
        visuals.window_fill = self.dark;
        visuals.override_text_color = Some(self.light);
        visuals.selection.bg_fill = self.primary;
        visuals.hyperlink_color = self.secondary;
        visuals.widgets.noninteractive.bg_stroke.color = self.grey;
        ctx.set_visuals(visuals);
    }
}

/// Parse a `#rrggbb` literal.
pub fn parse_hex(literal: &str) -> Result<Color32, ThemeError> {
    let digits = literal
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| ThemeError::InvalidColor(literal.to_string()))?;

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
    Ok(Color32::from_rgb(channel(0), channel(2), channel(4)))
}

// ---------------------------------------------------------------------------
// Derived tones
// ---------------------------------------------------------------------------

/// Slightly lighter variant for hovered chrome.
pub fn hover(color: Color32) -> Color32 {
    shift_lightness(color, 0.10)
}

/// Dimmed variant for disabled or inactive chrome.
pub fn disabled(color: Color32) -> Color32 {
    shift_lightness(color, -0.18)
}

fn shift_lightness(color: Color32, delta: f32) -> Color32 {
    let srgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = srgb.into_color();
    hsl.lightness = (hsl.lightness + delta).clamp(0.0, 1.0);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_carries_stock_values() {
        let theme = Theme::default();
        assert_eq!(theme.light, Color32::from_rgb(0xab, 0xab, 0xab));
        assert_eq!(theme.grey, Color32::from_rgb(0x54, 0x54, 0x54));
        assert_eq!(theme.dark, Color32::from_rgb(0x23, 0x23, 0x23));
        assert_eq!(theme.primary, Color32::from_rgb(0x25, 0x1e, 0xe7));
        assert_eq!(theme.secondary, Color32::from_rgb(0x32, 0xad, 0xe3));
    }

    #[test]
    fn named_lookup_matches_tokens() {
        let theme = Theme::default();
        assert_eq!(theme.named("primary"), Some(theme.primary));
        assert_eq!(theme.named("grey"), Some(theme.grey));
        assert_eq!(theme.named("mauve"), None);
    }

    #[test]
    fn parse_hex_accepts_rrggbb() {
        assert_eq!(parse_hex("#32ade3").unwrap(), Color32::from_rgb(0x32, 0xad, 0xe3));
        assert_eq!(parse_hex("#000000").unwrap(), Color32::BLACK);
    }

    #[test]
    fn parse_hex_rejects_malformed_literals() {
        for bad in ["32ade3", "#32ade", "#32ade3ff", "#gghhii", ""] {
            assert!(matches!(parse_hex(bad), Err(ThemeError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn json_overrides_a_subset_of_tokens() {
        let theme = Theme::from_json(r##"{ "primary": "#ff0000" }"##).unwrap();
        assert_eq!(theme.primary, Color32::from_rgb(0xff, 0x00, 0x00));
        // Untouched tokens keep their defaults.
        assert_eq!(theme.secondary, Theme::default().secondary);
    }

    #[test]
    fn json_with_bad_literal_fails() {
        assert!(Theme::from_json(r##"{ "dark": "not-a-color" }"##).is_err());
        assert!(Theme::from_json("{ nonsense").is_err());
    }

    #[test]
    fn hover_lightens_and_disabled_darkens() {
        let base = Theme::default().grey;
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(hover(base)) > sum(base));
        assert!(sum(disabled(base)) < sum(base));
    }
}
