use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::scroller::IndexWindow;
use crate::theme::ResolvedTheme;

/// Builder for the one-line status bar under the list.
///
/// Layout: `[Label] [Loading?] Window @ Offset | Help Text`
pub struct StatusBar<'a> {
    theme: &'a ResolvedTheme,
    label: &'a str,
    loading_text: Option<&'a str>,
    window: Option<IndexWindow>,
    offset: Option<u32>,
    help_text: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a ResolvedTheme) -> Self {
        Self {
            theme,
            label: "",
            loading_text: None,
            window: None,
            offset: None,
            help_text: "",
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn loading(mut self, text: &'a str) -> Self {
        self.loading_text = Some(text);
        self
    }

    pub fn window(mut self, window: IndexWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn help(mut self, text: &'a str) -> Self {
        self.help_text = text;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let dim = self.theme.dim_style();
        let mut spans = vec![
            Span::styled(format!(" {} ", self.label), self.theme.status_bar_style()),
            Span::raw(" "),
        ];

        if let Some(loading) = self.loading_text {
            spans.push(Span::styled(loading.to_string(), self.theme.loading_style()));
            spans.push(Span::raw(" | "));
        }

        let position = match (self.window, self.offset) {
            (Some(window), Some(offset)) => Some(format!("{window} @ {offset}px")),
            (Some(window), None) => Some(window.to_string()),
            (None, Some(offset)) => Some(format!("{offset}px")),
            (None, None) => None,
        };
        if let Some(position) = position {
            spans.push(Span::styled(position, dim));
            spans.push(Span::raw(" | "));
        }

        spans.push(Span::styled(self.help_text.to_string(), dim));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
