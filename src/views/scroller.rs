use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::app::App;
use crate::keys;
use crate::scroller::{Direction, Overflow, ScrollContainer};
use crate::views::rows::Rows;
use crate::views::status_bar::StatusBar;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // Rows
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_list(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Infinite Scroller ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(vp) = app.viewport.as_ref() else {
        return;
    };
    frame.render_widget(
        Rows::new(
            app.scroller.window(),
            vp.offset(),
            app.scroller.config(),
            &app.theme,
        ),
        inner,
    );

    // No scrollbar while a slide is in flight.
    if vp.overflow() == Overflow::Scroll {
        let mut state = ScrollbarState::new(vp.max_offset() as usize)
            .position(vp.offset() as usize)
            .viewport_content_length(vp.viewport_extent() as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(Style::default().fg(app.theme.scrollbar)),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help = if app.show_help {
        keys::help_line()
    } else {
        "?:help  q:quit".to_string()
    };

    let mut status = StatusBar::new(&app.theme)
        .label("Scroller")
        .window(app.scroller.window())
        .help(&help);

    if let Some(correction) = app.scroller.pending_correction() {
        status = status.loading(match correction.direction {
            Direction::Up => "Sliding up",
            Direction::Down => "Sliding down",
        });
    } else if app.scroller.is_loading() {
        status = status.loading("Settling");
    }
    if let Some(offset) = app.offset() {
        status = status.offset(offset);
    }

    status.render(frame, area);
}
