mod builtin;
mod detect;
pub mod loader;

pub use builtin::{all_themes, by_name, default_for_variant};
pub use detect::detect_terminal_theme;
pub use loader::load_theme_file;

use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub meta: ThemeMeta,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeMeta {
    pub author: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub variant: ThemeVariant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(String),
    Hex(String),
    Rgb { r: u8, g: u8, b: u8 },
    Indexed(u8),
}

impl ThemeColor {
    pub fn to_color(&self) -> Color {
        match self {
            ThemeColor::Named(name) => Self::parse_named(name),
            ThemeColor::Hex(hex) => Self::parse_hex(hex),
            ThemeColor::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
            ThemeColor::Indexed(idx) => Color::Indexed(*idx),
        }
    }

    fn parse_named(name: &str) -> Color {
        if name.starts_with('#') {
            return Self::parse_hex(name);
        }
        match name.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" | "dark_gray" => Color::DarkGray,
            "lightblue" | "light_blue" => Color::LightBlue,
            "lightcyan" | "light_cyan" => Color::LightCyan,
            "white" => Color::White,
            _ => Color::Reset,
        }
    }

    fn parse_hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::Reset
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub foreground: ThemeColor,
    pub foreground_dim: ThemeColor,
    pub border: ThemeColor,
    pub row_text: ThemeColor,
    pub row_even_bg: ThemeColor,
    pub row_odd_bg: ThemeColor,
    pub row_divider: ThemeColor,
    pub scrollbar: ThemeColor,
    pub status_bar_bg: ThemeColor,
    pub status_bar_fg: ThemeColor,
    pub loading: ThemeColor,
}

#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    pub name: String,
    pub variant: ThemeVariant,
    pub foreground: Color,
    pub foreground_dim: Color,
    pub border: Color,
    pub row_text: Color,
    pub row_even_bg: Color,
    pub row_odd_bg: Color,
    pub row_divider: Color,
    pub scrollbar: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub loading: Color,
}

impl ResolvedTheme {
    /// Background style for a row, alternating on index parity.
    pub fn row_style(&self, index: i64) -> Style {
        let bg = if index.rem_euclid(2) == 0 {
            self.row_even_bg
        } else {
            self.row_odd_bg
        };
        Style::default().fg(self.row_text).bg(bg)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.foreground_dim)
    }

    pub fn loading_style(&self) -> Style {
        Style::default().fg(self.loading)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default()
            .bg(self.status_bar_bg)
            .fg(self.status_bar_fg)
    }
}

impl From<Theme> for ResolvedTheme {
    fn from(theme: Theme) -> Self {
        let c = theme.colors;
        ResolvedTheme {
            name: theme.name,
            variant: theme.meta.variant,
            foreground: c.foreground.to_color(),
            foreground_dim: c.foreground_dim.to_color(),
            border: c.border.to_color(),
            row_text: c.row_text.to_color(),
            row_even_bg: c.row_even_bg.to_color(),
            row_odd_bg: c.row_odd_bg.to_color(),
            row_divider: c.row_divider.to_color(),
            scrollbar: c.scrollbar.to_color(),
            status_bar_bg: c.status_bar_bg.to_color(),
            status_bar_fg: c.status_bar_fg.to_color(),
            loading: c.loading.to_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(
            ThemeColor::Hex("#EDF2F7".into()).to_color(),
            Color::Rgb(0xED, 0xF2, 0xF7)
        );
        assert_eq!(ThemeColor::Hex("#zzz".into()).to_color(), Color::Reset);
    }

    #[test]
    fn untagged_hex_string_parses_as_hex() {
        // Untagged strings always land in `Named`; hex strings must still work.
        let color: ThemeColor = serde_json::from_str("\"#4a5568\"").unwrap();
        assert_eq!(color.to_color(), Color::Rgb(0x4a, 0x55, 0x68));
    }

    #[test]
    fn named_colors_parse_case_insensitively() {
        assert_eq!(ThemeColor::Named("DarkGray".into()).to_color(), Color::DarkGray);
        assert_eq!(ThemeColor::Named("nope".into()).to_color(), Color::Reset);
    }

    #[test]
    fn row_style_alternates_on_parity() {
        let theme = default_for_variant(ThemeVariant::Light);
        assert_eq!(theme.row_style(0).bg, Some(theme.row_even_bg));
        assert_eq!(theme.row_style(-2).bg, Some(theme.row_even_bg));
        assert_eq!(theme.row_style(-1).bg, Some(theme.row_odd_bg));
        assert_eq!(theme.row_style(7).bg, Some(theme.row_odd_bg));
        assert_ne!(theme.row_even_bg, theme.row_odd_bg);
    }
}
