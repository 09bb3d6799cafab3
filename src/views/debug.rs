use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .title(" Debug ")
        .borders(Borders::ALL)
        .border_style(theme.dim_style());

    let mut lines = Vec::new();

    let correction = match app.scroller.pending_correction() {
        Some(c) => format!("{} from {}", c.direction.label(), c.previous_offset),
        None => "none".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Frame: ", theme.dim_style()),
        Span::styled(app.frames.frame().to_string(), Style::default().fg(theme.foreground)),
        Span::styled("  Correction: ", theme.dim_style()),
        Span::styled(correction, Style::default().fg(theme.foreground)),
    ]));

    let slide_count = app.debug.running_tasks.len();
    lines.push(Line::from(vec![
        Span::styled("Slides: ", theme.dim_style()),
        Span::styled(
            slide_count.to_string(),
            if slide_count > 0 {
                theme.loading_style()
            } else {
                Style::default().fg(theme.foreground)
            },
        ),
    ]));

    for task in &app.debug.running_tasks {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", task.id), theme.dim_style()),
            Span::styled(&task.description, Style::default().fg(theme.foreground)),
            Span::styled(
                format!(" ({:.1?})", task.started_at.elapsed()),
                theme.loading_style(),
            ),
        ]));
    }

    // Newest first, whatever fits below the header lines.
    let available = area.height.saturating_sub(2) as usize;
    let log_lines = available.saturating_sub(lines.len());
    for entry in app.debug.log.iter().rev().take(log_lines) {
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.message),
            theme.dim_style(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
