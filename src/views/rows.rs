use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::config::ScrollerConfig;
use crate::scroller::IndexWindow;
use crate::theme::ResolvedTheme;

/// The mounted window laid out as fixed-height rows, seen through `offset`.
///
/// Each row spans `row_height / line_height` terminal lines: the label sits on
/// the middle line and the last line carries a divider.
pub struct Rows<'a> {
    window: IndexWindow,
    offset: u32,
    config: &'a ScrollerConfig,
    theme: &'a ResolvedTheme,
}

impl<'a> Rows<'a> {
    pub fn new(
        window: IndexWindow,
        offset: u32,
        config: &'a ScrollerConfig,
        theme: &'a ResolvedTheme,
    ) -> Self {
        Self {
            window,
            offset,
            config,
            theme,
        }
    }
}

impl Widget for Rows<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let row_lines = self.config.row_lines();
        let label_line = row_lines / 2;

        for y in 0..area.height {
            let pixel = self
                .offset
                .saturating_add(u32::from(y).saturating_mul(self.config.line_height));
            let Some(index) = self.window.get((pixel / self.config.row_height) as usize) else {
                break;
            };
            let line_in_row = (pixel % self.config.row_height) / self.config.line_height;
            let line = Rect {
                y: area.y + y,
                height: 1,
                ..area
            };
            let style = self.theme.row_style(index);
            buf.set_style(line, style);

            if line_in_row == label_line {
                let label = format!("Item {index}");
                let x = area.x + area.width.saturating_sub(label.len() as u16) / 2;
                buf.set_stringn(x, line.y, &label, area.width as usize, style);
            } else if line_in_row == row_lines - 1 {
                let divider = "─".repeat(area.width as usize);
                buf.set_string(line.x, line.y, divider, style.fg(self.theme.row_divider));
            }
        }
    }
}
