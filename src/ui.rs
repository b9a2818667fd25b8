mod footer;
mod header;
mod loading;
mod main_content;
mod missing_token;
mod movie_detail;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::app::router::Route;
use footer::render_footer;
use header::render_header;
use main_content::render_main_content;
use missing_token::render_missing_token;
use movie_detail::render_movie_detail;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    if !app.has_api() {
        render_missing_token(frame, chunks[1]);
    } else {
        match app.route {
            Route::Home => render_main_content(frame, app, chunks[1]),
            Route::Movie(_) => render_movie_detail(frame, app, chunks[1]),
        }
    }

    render_footer(frame, app, chunks[2]);
}
