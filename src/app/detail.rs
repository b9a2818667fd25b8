use ratatui_image::protocol::StatefulProtocol;

use crate::app::format::DetailPresentation;
use crate::app::resource::{LoadState, RequestToken, Resource};

/// State behind the `/movie/:id` screen.
///
/// The resources persist across identifiers so their tokens keep increasing;
/// a reply for a movie the user already left is therefore always stale.
#[derive(Default)]
pub struct DetailView {
    id: Option<String>,
    pub movie: Resource<DetailPresentation>,
    pub poster: Resource<StatefulProtocol>,
    pub scroll: u16,
}

impl DetailView {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Shows `id`. Returns the token for a new fetch, or `None` when that
    /// identifier is already displayed.
    pub fn open(&mut self, id: &str) -> Option<RequestToken> {
        let showing = self.id.as_deref() == Some(id) && !matches!(self.movie.state(), LoadState::Idle);
        if showing {
            return None;
        }

        self.id = Some(id.to_string());
        self.scroll = 0;
        self.poster.clear();
        Some(self.movie.begin())
    }

    /// Leaves the screen; outstanding replies become stale.
    pub fn close(&mut self) {
        self.id = None;
        self.scroll = 0;
        self.movie.clear();
        self.poster.clear();
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
