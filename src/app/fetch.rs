use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use image::DynamicImage;

use crate::app::resource::RequestToken;
use crate::error::FetchError;
use crate::tmdb::{MovieApi, MovieDetail, MovieSummary};

/// Results coming back from the background fetch threads.
pub enum FetchMessage {
    Listing {
        token: RequestToken,
        result: Result<Vec<MovieSummary>, FetchError>,
    },
    Detail {
        token: RequestToken,
        id: String,
        result: Result<MovieDetail, FetchError>,
    },
    Poster {
        token: RequestToken,
        result: Result<DynamicImage, FetchError>,
    },
}

/// Runs each request on its own thread and reports back over one channel.
#[derive(Clone)]
pub struct Fetcher {
    api: Arc<dyn MovieApi>,
    sender: mpsc::Sender<FetchMessage>,
}

impl Fetcher {
    pub fn new(api: Arc<dyn MovieApi>, sender: mpsc::Sender<FetchMessage>) -> Self {
        Self { api, sender }
    }

    pub fn listing(&self, token: RequestToken) {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = api.discover_movies();
            let _ = sender.send(FetchMessage::Listing { token, result });
        });
    }

    pub fn detail(&self, token: RequestToken, id: String) {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = api.movie_detail(&id);
            let _ = sender.send(FetchMessage::Detail { token, id, result });
        });
    }

    pub fn poster(&self, token: RequestToken, url: String) {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = api
                .image_bytes(&url)
                .and_then(|bytes| image::load_from_memory(&bytes).map_err(FetchError::from));
            let _ = sender.send(FetchMessage::Poster { token, result });
        });
    }
}
