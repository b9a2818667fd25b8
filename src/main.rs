mod app;
mod config;
mod error;
mod logging;
mod tmdb;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;
use tracing::{error, info, warn};

use crate::app::router::Route;
use crate::app::{App, InputMode};
use crate::config::Config;
use crate::tmdb::{MovieApi, TmdbClient};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> Result<()> {
    let log_path = logging::init_tracing()?;
    info!("Logging to {}", log_path.display());

    let config = Config::from_env()?;
    let api = build_api(&config)?;

    // Must run before raw mode; it talks to the terminal itself.
    let picker = match Picker::from_query_stdio() {
        Ok(picker) => Some(picker),
        Err(e) => {
            warn!("Terminal image support unavailable, posters disabled: {}", e);
            None
        }
    };

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let mut app = App::new(&config, api);
    if let Some(picker) = picker {
        app.set_picker(picker);
    }
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Exited with error: {:#}", e);
    }
    result
}

fn build_api(config: &Config) -> Result<Option<Arc<dyn MovieApi>>> {
    let Some(token) = &config.api_token else {
        return Ok(None);
    };

    let client = TmdbClient::builder()
        .base_url(config.api_base.clone())
        .api_token(token.clone())
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .context("failed to build TMDB client")?;
    let api: Arc<dyn MovieApi> = Arc::new(client);
    Ok(Some(api))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stderr>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Apply replies from the background fetch threads
        app.poll_messages();
        app.tick();

        // Poll for events with a timeout to allow UI updates
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == event::KeyEventKind::Release {
            // Skip events that are not KeyEventKind::Press
            continue;
        }

        // Handle id input when it is active
        if app.input_mode == InputMode::OpenById {
            match key.code {
                KeyCode::Char(c) => app.id_input.push(c),
                KeyCode::Backspace => {
                    app.id_input.pop();
                }
                KeyCode::Enter => app.submit_input(),
                KeyCode::Esc => app.cancel_input(),
                _ => {}
            }
            continue;
        }

        match app.route {
            Route::Home => match key.code {
                KeyCode::Char('q') => app.exit = true,
                KeyCode::Char('o') if app.has_api() => app.start_open_by_id(),
                KeyCode::Char('g') if app.has_api() && !app.home.cards.is_loading() => {
                    app.load_listing();
                }
                KeyCode::Enter => app.open_selected(),
                KeyCode::Down | KeyCode::Char('j') => app.home.next_movie(),
                KeyCode::Up | KeyCode::Char('k') => app.home.previous_movie(),
                _ => {}
            },
            Route::Movie(_) => match key.code {
                KeyCode::Char('q') => app.exit = true,
                KeyCode::Esc | KeyCode::Char('b') => {
                    app.navigate("/");
                }
                KeyCode::Char('t') => app.open_trailer(),
                KeyCode::Down | KeyCode::Char('j') => app.detail.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.detail.scroll_up(),
                _ => {}
            },
        }

        if app.exit {
            return Ok(());
        }
    }
}
