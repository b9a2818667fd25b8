use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::router::Route;
use crate::app::{App, InputMode};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> String {
    if app.input_mode == InputMode::OpenById {
        return format!("Movie id: {}_   (Enter) open, (Esc) cancel", app.id_input);
    }
    if !app.has_api() {
        return String::from("(q) to quit");
    }

    let text = match app.route {
        Route::Home => {
            if app.home.cards.is_loading() {
                "Loading movies... (o) open by id, (q) quit"
            } else {
                "(↑↓/jk) scroll, (Enter) details, (g) reload, (o) open by id, (q) quit"
            }
        }
        Route::Movie(_) => "(Esc/b) home, (t) trailer, (↑↓/jk) scroll, (q) quit",
    };
    text.to_string()
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let instruction_text = get_instruction_text(app);
    let bottom =
        Paragraph::new(Text::styled(instruction_text, Style::default())).block(bottom_block);

    frame.render_widget(bottom, area);
}
