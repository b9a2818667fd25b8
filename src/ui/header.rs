use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Renders the header/title block at the top of the screen
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let mut spans = vec![
        Span::styled("Movies", Style::default().fg(Color::Magenta)),
        Span::raw("  "),
        Span::styled(app.route.path(), Style::default().fg(Color::Gray)),
    ];
    if let Some(updated) = app.home.last_updated {
        spans.push(Span::styled(
            format!("  (updated {})", updated.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(title_block);

    frame.render_widget(title, area);
}
