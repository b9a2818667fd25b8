use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

use super::loading::render_loading;
use crate::app::App;
use crate::app::format::{DetailPresentation, PosterSource};

const POSTER_WIDTH: u16 = 34;

/// Renders the movie detail screen
pub fn render_movie_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.detail.movie.loaded().is_none() {
        render_loading(
            frame,
            area,
            "Movie Details",
            "Fetching movie details from TMDB...",
            &mut app.throbber_state,
        );
        return;
    }

    render_movie_info(frame, area, app);
}

/// Renders movie information
fn render_movie_info(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(movie) = app.detail.movie.loaded() else {
        return;
    };

    let outer_block = Block::default()
        .title(format!("Movie Details - {}", movie.title))
        .borders(Borders::ALL)
        .style(Style::default());

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(POSTER_WIDTH), Constraint::Min(20)])
        .split(inner_area);

    let content = Paragraph::new(detail_lines(movie))
        .wrap(Wrap { trim: true })
        .scroll((app.detail.scroll, 0));
    let poster = movie.poster.clone();

    frame.render_widget(content, columns[1]);

    // Poster section
    render_poster_section(frame, columns[0], &poster, app.detail.poster.loaded_mut());
}

/// Renders the poster section
fn render_poster_section(
    frame: &mut Frame,
    area: Rect,
    source: &PosterSource,
    protocol: Option<&mut StatefulProtocol>,
) {
    if let Some(protocol) = protocol {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));

        let poster_block = Block::default().borders(Borders::ALL).title("Poster");

        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
        return;
    }

    let message = match source {
        PosterSource::Remote(_) => "Poster not loaded",
        PosterSource::Placeholder(_) => "No poster available",
    };
    let placeholder_text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            source.label().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let placeholder_paragraph = Paragraph::new(placeholder_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Poster"));

    frame.render_widget(placeholder_paragraph, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn tags(names: &[String], bg: Color) -> Line<'static> {
    let mut spans = Vec::with_capacity(names.len() * 2);
    for name in names {
        spans.push(Span::styled(
            format!(" {name} "),
            Style::default().bg(bg).fg(Color::White),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn detail_lines(movie: &DetailPresentation) -> Vec<Line<'static>> {
    let mut content = vec![Line::from(Span::styled(
        movie.title.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(tagline) = &movie.tagline {
        content.push(Line::from(Span::styled(
            tagline.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    content.push(Line::from(""));

    content.push(Line::from(vec![
        Span::styled("Released: ", Style::default().fg(Color::Gray)),
        Span::styled(movie.release_date.clone(), Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled("Runtime: ", Style::default().fg(Color::Gray)),
        Span::styled(movie.runtime.clone(), Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled("Language: ", Style::default().fg(Color::Gray)),
        Span::styled(movie.language.clone(), Style::default().fg(Color::Blue)),
        Span::raw(" | "),
        Span::styled("★ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            movie.rating.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled("Status: ", Style::default().fg(Color::Gray)),
        Span::styled(movie.status.clone(), Style::default().fg(Color::Red)),
    ]));
    content.push(Line::from(""));

    content.push(Line::from(Span::styled(
        movie.overview.clone(),
        Style::default().fg(Color::White),
    )));
    content.push(Line::from(""));

    // Genres heading is shown even when the list is empty
    content.push(heading("Genres"));
    content.push(tags(&movie.genres, Color::Indexed(60)));
    content.push(Line::from(""));

    if movie.shows_production() {
        content.push(heading("Production"));
        content.push(tags(&movie.companies, Color::Indexed(59)));
        content.push(Line::from(""));
    }

    content.push(Line::from(vec![
        Span::styled("Budget: ", Style::default().fg(Color::Magenta)),
        Span::styled(
            movie.budget.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    content.push(Line::from(vec![
        Span::styled("Revenue: ", Style::default().fg(Color::Magenta)),
        Span::styled(
            movie.revenue.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(trailer) = &movie.trailer {
        content.push(Line::from(""));
        content.push(heading("Trailer"));
        content.push(Line::from(Span::styled(
            trailer.url.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )));
        content.push(Line::from(Span::styled(
            "Press (t) to watch in your browser",
            Style::default().fg(Color::Gray),
        )));
    }

    content
}
