//! Builders for app-level and view tests.

use crate::app::{App, Message};
use crate::config::ScrollerConfig;
use crate::scroller::Direction;
use crate::theme::{ResolvedTheme, ThemeVariant, default_for_variant};

pub struct TestAppBuilder {
    config: ScrollerConfig,
    theme: ResolvedTheme,
    terminal_height: Option<u16>,
    debug_visible: bool,
    show_help: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: ScrollerConfig::default(),
            theme: default_for_variant(ThemeVariant::Dark),
            terminal_height: None,
            debug_visible: false,
            show_help: false,
        }
    }

    pub fn config(mut self, config: ScrollerConfig) -> Self {
        self.config = config;
        self
    }

    /// Deliver a resize before returning, which mounts the viewport.
    pub fn terminal_height(mut self, height: u16) -> Self {
        self.terminal_height = Some(height);
        self
    }

    pub fn debug_visible(mut self) -> Self {
        self.debug_visible = true;
        self
    }

    pub fn show_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn build(self) -> App {
        let mut app = App::new(self.theme, self.config);
        app.show_help = self.show_help;
        app.debug.visible = self.debug_visible;
        if let Some(height) = self.terminal_height {
            app.update(Message::Resize(height));
        }
        app
    }
}

/// Drive one frame of the pipeline with the paint step elided.
pub fn run_frame(app: &mut App) -> Option<Direction> {
    let direction = app.dispatch_scroll();
    app.commit();
    app.after_paint();
    direction
}
