use super::{ResolvedTheme, Theme, ThemeColor, ThemeColors, ThemeMeta, ThemeVariant};

pub fn all_themes() -> Vec<Theme> {
    vec![
        default_dark(),
        default_light(),
        nord(),
        dracula(),
        gruvbox_dark(),
        solarized_light(),
    ]
}

pub fn by_name(name: &str) -> Option<Theme> {
    all_themes().into_iter().find(|t| t.name == name)
}

pub fn default_for_variant(variant: ThemeVariant) -> ResolvedTheme {
    match variant {
        ThemeVariant::Dark => default_dark().into(),
        ThemeVariant::Light => default_light().into(),
    }
}

fn named(s: &str) -> ThemeColor {
    ThemeColor::Named(s.to_string())
}

fn hex(s: &str) -> ThemeColor {
    ThemeColor::Hex(s.to_string())
}

fn meta(description: &str, variant: ThemeVariant) -> ThemeMeta {
    ThemeMeta {
        author: Some("scroller".to_string()),
        description: Some(description.to_string()),
        variant,
    }
}

pub fn default_dark() -> Theme {
    Theme {
        name: "default-dark".to_string(),
        meta: meta("Default dark theme using terminal colors", ThemeVariant::Dark),
        colors: ThemeColors {
            foreground: named("white"),
            foreground_dim: hex("#6A9A9A"),
            border: hex("#6A9A9A"),
            row_text: named("white"),
            row_even_bg: hex("#262B33"),
            row_odd_bg: hex("#1C2027"),
            row_divider: hex("#3A414C"),
            scrollbar: named("cyan"),
            status_bar_bg: named("blue"),
            status_bar_fg: named("white"),
            loading: named("yellow"),
        },
    }
}

/// Slate palette: light gray even rows, white odd rows.
pub fn default_light() -> Theme {
    Theme {
        name: "default-light".to_string(),
        meta: meta("Slate rows on a light background", ThemeVariant::Light),
        colors: ThemeColors {
            foreground: hex("#2D3748"),
            foreground_dim: hex("#718096"),
            border: hex("#4A5568"),
            row_text: hex("#2D3748"),
            row_even_bg: hex("#EDF2F7"),
            row_odd_bg: hex("#FFFFFF"),
            row_divider: hex("#E2E8F0"),
            scrollbar: hex("#4A5568"),
            status_bar_bg: hex("#4A5568"),
            status_bar_fg: hex("#F7FAFC"),
            loading: named("blue"),
        },
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        meta: meta("Arctic, bluish color palette", ThemeVariant::Dark),
        colors: ThemeColors {
            foreground: hex("#ECEFF4"),
            foreground_dim: hex("#4C566A"),
            border: hex("#4C566A"),
            row_text: hex("#ECEFF4"),
            row_even_bg: hex("#3B4252"),
            row_odd_bg: hex("#2E3440"),
            row_divider: hex("#434C5E"),
            scrollbar: hex("#88C0D0"),
            status_bar_bg: hex("#88C0D0"),
            status_bar_fg: hex("#2E3440"),
            loading: hex("#EBCB8B"),
        },
    }
}

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        meta: meta("Dracula dark theme", ThemeVariant::Dark),
        colors: ThemeColors {
            foreground: hex("#F8F8F2"),
            foreground_dim: hex("#6272A4"),
            border: hex("#6272A4"),
            row_text: hex("#F8F8F2"),
            row_even_bg: hex("#44475A"),
            row_odd_bg: hex("#282A36"),
            row_divider: hex("#6272A4"),
            scrollbar: hex("#BD93F9"),
            status_bar_bg: hex("#BD93F9"),
            status_bar_fg: hex("#282A36"),
            loading: hex("#F1FA8C"),
        },
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        name: "gruvbox-dark".to_string(),
        meta: meta("Gruvbox dark theme", ThemeVariant::Dark),
        colors: ThemeColors {
            foreground: hex("#EBDBB2"),
            foreground_dim: hex("#928374"),
            border: hex("#928374"),
            row_text: hex("#EBDBB2"),
            row_even_bg: hex("#3C3836"),
            row_odd_bg: hex("#282828"),
            row_divider: hex("#504945"),
            scrollbar: hex("#B8BB26"),
            status_bar_bg: hex("#B8BB26"),
            status_bar_fg: hex("#282828"),
            loading: hex("#FABD2F"),
        },
    }
}

pub fn solarized_light() -> Theme {
    Theme {
        name: "solarized-light".to_string(),
        meta: meta("Solarized light theme", ThemeVariant::Light),
        colors: ThemeColors {
            foreground: hex("#657B83"),
            foreground_dim: hex("#93A1A1"),
            border: hex("#93A1A1"),
            row_text: hex("#586E75"),
            row_even_bg: hex("#EEE8D5"),
            row_odd_bg: hex("#FDF6E3"),
            row_divider: hex("#93A1A1"),
            scrollbar: hex("#268BD2"),
            status_bar_bg: hex("#268BD2"),
            status_bar_fg: hex("#FDF6E3"),
            loading: hex("#B58900"),
        },
    }
}
