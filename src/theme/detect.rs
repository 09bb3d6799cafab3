use super::ThemeVariant;

/// Luma above which the terminal background counts as light.
const LIGHT_LUMA: f32 = 0.6;

/// Guess the terminal background from its reported luma, falling back to dark.
pub fn detect_terminal_theme() -> ThemeVariant {
    match terminal_light::luma() {
        Ok(luma) => variant_for_luma(luma),
        Err(e) => {
            tracing::debug!("terminal background detection failed: {e}");
            ThemeVariant::Dark
        }
    }
}

fn variant_for_luma(luma: f32) -> ThemeVariant {
    if luma > LIGHT_LUMA {
        ThemeVariant::Light
    } else {
        ThemeVariant::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_background_is_light() {
        assert_eq!(variant_for_luma(0.95), ThemeVariant::Light);
    }

    #[test]
    fn dim_background_is_dark() {
        assert_eq!(variant_for_luma(0.1), ThemeVariant::Dark);
        assert_eq!(variant_for_luma(LIGHT_LUMA), ThemeVariant::Dark);
    }
}
