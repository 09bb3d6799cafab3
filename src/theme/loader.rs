use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Theme;

/// Load a theme from a TOML file.
pub fn load_theme_file(path: &Path) -> Result<Theme> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse theme file {}", path.display()))
}

pub fn theme_to_toml(theme: &Theme) -> Result<String> {
    toml::to_string_pretty(theme).context("Failed to serialize theme")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ResolvedTheme, by_name};
    use ratatui::style::Color;
    use tempfile::TempDir;

    #[test]
    fn builtin_theme_survives_toml_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nord.toml");
        let original = by_name("nord").unwrap();

        fs::write(&path, theme_to_toml(&original).unwrap()).unwrap();
        let loaded = load_theme_file(&path).unwrap();

        assert_eq!(loaded.name, "nord");
        let resolved: ResolvedTheme = loaded.into();
        assert_eq!(resolved.row_even_bg, Color::Rgb(0x3B, 0x42, 0x52));
    }

    #[test]
    fn hand_written_theme_loads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mine.toml");
        fs::write(
            &path,
            r##"name = "mine"

[colors]
foreground = "white"
foreground_dim = "gray"
border = "#4a5568"
row_text = "black"
row_even_bg = { r = 237, g = 242, b = 247 }
row_odd_bg = "white"
row_divider = 250
scrollbar = "cyan"
status_bar_bg = "blue"
status_bar_fg = "white"
loading = "yellow"
"##,
        )
        .unwrap();

        let resolved: ResolvedTheme = load_theme_file(&path).unwrap().into();

        assert_eq!(resolved.name, "mine");
        assert_eq!(resolved.row_even_bg, Color::Rgb(237, 242, 247));
        assert_eq!(resolved.row_divider, Color::Indexed(250));
        assert_eq!(resolved.border, Color::Rgb(0x4a, 0x55, 0x68));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_theme_file(Path::new("/nonexistent/theme.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/theme.toml"));
    }
}
