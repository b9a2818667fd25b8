use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::loading::render_loading;
use crate::app::App;
use crate::app::format::{MovieCard, PosterSource};

/// Renders the home listing: movie cards on the left, the selected card on the right
pub fn render_main_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(cards) = app.home.cards.loaded() else {
        render_loading(
            frame,
            area,
            "Popular Movies",
            "Loading movies...",
            &mut app.throbber_state,
        );
        return;
    };

    if cards.is_empty() {
        let empty_block = Block::default()
            .title("No movies found - press 'g' to reload")
            .borders(Borders::ALL)
            .style(Style::default());

        frame.render_widget(empty_block, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = format!("Popular Movies ({})", cards.len());
    let items: Vec<ListItem> = cards.iter().map(card_item).collect();
    let selected = app.home.selected_card().cloned();

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, chunks[0], &mut app.home.list_state);

    if let Some(card) = selected {
        render_card_preview(frame, chunks[1], &card);
    }
}

/// One card: title, then rating • language • year
fn card_item(card: &MovieCard) -> ListItem<'static> {
    let content = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  ★ ", Style::default().fg(Color::Yellow)),
            Span::styled(card.rating.clone(), Style::default().fg(Color::Yellow)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::styled(card.language.clone(), Style::default().fg(Color::Gray)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::styled(card.year.clone(), Style::default().fg(Color::Gray)),
        ]),
    ];

    ListItem::new(content)
}

fn render_card_preview(frame: &mut Frame, area: Rect, card: &MovieCard) {
    let poster_line = match &card.poster {
        PosterSource::Remote(url) => Line::from(vec![
            Span::styled("Poster: ", Style::default().fg(Color::Cyan)),
            Span::raw(url.clone()),
        ]),
        PosterSource::Placeholder(path) => Line::from(vec![
            Span::styled("Poster: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("no poster ({path})"),
                Style::default().fg(Color::Gray),
            ),
        ]),
    };

    let text = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Rating: ", Style::default().fg(Color::Cyan)),
            Span::raw(card.rating.clone()),
        ]),
        Line::from(vec![
            Span::styled("Language: ", Style::default().fg(Color::Cyan)),
            Span::raw(card.language.clone()),
        ]),
        Line::from(vec![
            Span::styled("Year: ", Style::default().fg(Color::Cyan)),
            Span::raw(card.year.clone()),
        ]),
        poster_line,
        Line::from(""),
        Line::from(Span::styled(
            format!("(Enter) opens {}", card.target()),
            Style::default().fg(Color::Gray),
        )),
    ];

    let preview = Paragraph::new(text)
        .block(Block::default().title("Selected").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(preview, area);
}
