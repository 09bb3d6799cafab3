//! Headless replay: drive the frame pipeline against a sequence of scroll
//! positions and record every slide it causes.

use std::fmt;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::app::{App, Message};
use crate::config::ScrollerConfig;
use crate::scroller::Direction;
use crate::theme::{ThemeVariant, default_for_variant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub direction: Direction,
    pub first: i64,
    pub last: i64,
    /// Offset after the scroll correction.
    pub offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub requested: u32,
    /// Offset actually reached once clamped.
    pub reached: u32,
    pub slides: Vec<Slide>,
}

impl fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: ", self.requested, self.reached)?;
        if self.slides.is_empty() {
            return write!(f, "no slide");
        }
        let slides = self
            .slides
            .iter()
            .map(|s| {
                format!(
                    "slide {} [{}..{}] @ {}",
                    s.direction.label(),
                    s.first,
                    s.last,
                    s.offset
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{slides}")
    }
}

pub fn replay(config: ScrollerConfig, lines: u16, offsets: &[u32]) -> Result<Vec<ReplayStep>> {
    if lines == 0 {
        bail!("replay needs at least one list line");
    }
    config.validate()?;

    let mut app = App::new(default_for_variant(ThemeVariant::Dark), config);
    app.update(Message::Resize(lines.saturating_add(App::CHROME_HEIGHT)));
    settle(&mut app);

    let mut steps = Vec::with_capacity(offsets.len());
    for &requested in offsets {
        app.update(Message::ScrollTo(requested));
        let Some(reached) = app.offset() else {
            bail!("viewport was not mounted");
        };
        steps.push(ReplayStep {
            requested,
            reached,
            slides: settle(&mut app),
        });
    }
    app.update(Message::Quit);
    Ok(steps)
}

pub fn format_text(steps: &[ReplayStep]) -> String {
    steps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run frames until one passes without a slide. The app stops chaining
/// slides after [`App::MAX_CHAINED_SLIDES`], so this always ends.
fn settle(app: &mut App) -> Vec<Slide> {
    let mut slides = Vec::new();
    for _ in 0..=App::MAX_CHAINED_SLIDES {
        let direction = app.dispatch_scroll();
        app.commit();
        app.after_paint();
        let Some(direction) = direction else {
            break;
        };
        let window = app.scroller.window();
        slides.push(Slide {
            direction,
            first: window.first(),
            last: window.last(),
            offset: app.offset().unwrap_or_default(),
        });
    }
    slides
}
