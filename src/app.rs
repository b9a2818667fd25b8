pub mod detail;
pub mod fetch;
pub mod format;
pub mod home;
pub mod resource;
pub mod router;

use std::sync::Arc;
use std::sync::mpsc;

use ratatui_image::picker::Picker;
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::Config;
use crate::tmdb::MovieApi;
use detail::DetailView;
use fetch::{FetchMessage, Fetcher};
use format::{DetailPresentation, MovieCard, PosterSource};
use home::HomeView;
use router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a movie identifier to open.
    OpenById,
}

pub struct App {
    pub route: Route,
    pub home: HomeView,
    pub detail: DetailView,
    pub input_mode: InputMode,
    pub id_input: String,
    pub throbber_state: ThrobberState,
    pub exit: bool,
    image_base: Url,
    fetcher: Option<Fetcher>,
    receiver: mpsc::Receiver<FetchMessage>,
    picker: Option<Picker>,
}

impl App {
    /// Creates the app on the home route. With no API the screens explain
    /// that a token is required and nothing is fetched.
    pub fn new(config: &Config, api: Option<Arc<dyn MovieApi>>) -> Self {
        let (sender, receiver) = mpsc::channel();
        let fetcher = api.map(|api| Fetcher::new(api, sender));

        let mut app = Self {
            route: Route::Home,
            home: HomeView::new(),
            detail: DetailView::default(),
            input_mode: InputMode::Normal,
            id_input: String::new(),
            throbber_state: ThrobberState::default(),
            exit: false,
            image_base: config.image_base.clone(),
            fetcher,
            receiver,
            picker: None,
        };
        app.load_listing();
        app
    }

    /// Enables poster images; without a picker posters stay as text.
    pub fn set_picker(&mut self, picker: Picker) {
        self.picker = Some(picker);
    }

    pub fn has_api(&self) -> bool {
        self.fetcher.is_some()
    }

    /// Follows a path through the route table. Unknown paths are ignored.
    pub fn navigate(&mut self, path: &str) -> bool {
        match Route::parse(path) {
            Some(route) => {
                self.show(route);
                true
            }
            None => {
                warn!(path, "No route for path");
                false
            }
        }
    }

    fn show(&mut self, route: Route) {
        info!(path = %route.path(), "Navigating");
        match &route {
            Route::Home => {
                self.detail.close();
                if self.route != Route::Home {
                    self.load_listing();
                }
            }
            Route::Movie(id) => {
                if let Some(token) = self.detail.open(id) {
                    if let Some(fetcher) = &self.fetcher {
                        fetcher.detail(token, id.clone());
                    }
                }
            }
        }
        self.route = route;
    }

    /// (Re)loads the home listing.
    pub fn load_listing(&mut self) {
        let token = self.home.cards.begin();
        if let Some(fetcher) = &self.fetcher {
            fetcher.listing(token);
        }
    }

    /// Activates the selected card.
    pub fn open_selected(&mut self) {
        if let Some(path) = self.home.selected_card().map(MovieCard::target) {
            self.navigate(&path);
        }
    }

    pub fn start_open_by_id(&mut self) {
        self.input_mode = InputMode::OpenById;
        self.id_input.clear();
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.id_input.clear();
    }

    pub fn submit_input(&mut self) {
        let id = self.id_input.trim().to_string();
        self.cancel_input();
        if !id.is_empty() {
            self.navigate(&format!("/movie/{id}"));
        }
    }

    pub fn open_trailer(&self) {
        let Some(trailer) = self
            .detail
            .movie
            .loaded()
            .and_then(|movie| movie.trailer.as_ref())
        else {
            return;
        };

        info!(url = %trailer.url, "Opening trailer");
        if let Err(e) = open::that(&trailer.url) {
            warn!("Could not open trailer in browser: {}", e);
        }
    }

    pub fn tick(&mut self) {
        self.throbber_state.calc_next();
    }

    /// Applies every reply that has arrived without blocking.
    pub fn poll_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    pub fn handle_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Listing { token, result } => match result {
                Ok(movies) => {
                    let cards = movies
                        .iter()
                        .map(|movie| MovieCard::new(movie, &self.image_base))
                        .collect::<Vec<_>>();
                    let count = cards.len();
                    if self.home.resolve(token, cards) {
                        info!(count, "Loaded movie listing");
                    } else {
                        debug!("Discarding stale movie listing");
                    }
                }
                Err(e) => error!("Error fetching movie listing: {}", e),
            },
            FetchMessage::Detail { token, id, result } => match result {
                Ok(movie) => {
                    let presentation = DetailPresentation::new(&movie, &self.image_base);
                    let poster = presentation.poster.clone();
                    if self.detail.movie.resolve(token, presentation) {
                        info!(id = %id, title = %movie.title, "Loaded movie detail");
                        self.load_poster(poster);
                    } else {
                        debug!(id = %id, "Discarding stale movie detail");
                    }
                }
                Err(e) => error!(id = %id, "Error fetching movie detail: {}", e),
            },
            FetchMessage::Poster { token, result } => match result {
                Ok(image) => {
                    if !self.detail.poster.is_current(token) {
                        debug!("Discarding stale poster");
                        return;
                    }
                    if let Some(picker) = &self.picker {
                        let protocol = picker.new_resize_protocol(image);
                        self.detail.poster.resolve(token, protocol);
                    }
                }
                Err(e) => warn!("Error loading poster: {}", e),
            },
        }
    }

    fn load_poster(&mut self, poster: PosterSource) {
        let PosterSource::Remote(url) = poster else {
            return;
        };
        if self.picker.is_none() {
            return;
        }
        if let Some(fetcher) = &self.fetcher {
            let token = self.detail.poster.begin();
            fetcher.poster(token, url);
        }
    }
}
