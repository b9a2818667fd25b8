use chrono::{DateTime, Local};
use ratatui::widgets::ListState;

use crate::app::format::MovieCard;
use crate::app::resource::{RequestToken, Resource};

/// State behind the `/` screen.
pub struct HomeView {
    pub cards: Resource<Vec<MovieCard>>,
    pub selected_movie_index: usize,
    pub list_state: ListState,
    pub last_updated: Option<DateTime<Local>>,
}

impl HomeView {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            cards: Resource::default(),
            selected_movie_index: 0,
            list_state,
            last_updated: None,
        }
    }

    /// Applies a listing; the cursor survives a reload when it still fits.
    pub fn resolve(&mut self, token: RequestToken, cards: Vec<MovieCard>) -> bool {
        let count = cards.len();
        if !self.cards.resolve(token, cards) {
            return false;
        }
        self.last_updated = Some(Local::now());
        if self.selected_movie_index >= count {
            self.selected_movie_index = 0;
        }
        self.list_state.select(Some(self.selected_movie_index));
        true
    }

    pub fn movie_count(&self) -> usize {
        self.cards.loaded().map_or(0, Vec::len)
    }

    pub fn selected_card(&self) -> Option<&MovieCard> {
        self.cards
            .loaded()
            .and_then(|cards| cards.get(self.selected_movie_index))
    }

    pub fn next_movie(&mut self) {
        let movie_count = self.movie_count();
        if movie_count == 0 {
            return;
        }

        self.selected_movie_index = (self.selected_movie_index + 1) % movie_count;
        self.list_state.select(Some(self.selected_movie_index));
    }

    pub fn previous_movie(&mut self) {
        let movie_count = self.movie_count();
        if movie_count == 0 {
            return;
        }

        if self.selected_movie_index == 0 {
            self.selected_movie_index = movie_count - 1;
        } else {
            self.selected_movie_index -= 1;
        }
        self.list_state.select(Some(self.selected_movie_index));
    }
}
