//! Display strings for cards and the detail screen.
//!
//! Everything optional in the TMDB records gets its fallback here, so the
//! render code only ever reads ready-made strings.

use url::Url;

use crate::app::router::movie_path;
use crate::tmdb::{MovieDetail, MovieSummary};

pub const POSTER_SIZE: &str = "w500";
pub const PLACEHOLDER_POSTER: &str = "no-movie.png";
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

const NA: &str = "N/A";
const NOT_AVAILABLE: &str = "Not available";

/// Where a poster comes from. The placeholder is a local asset and never fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterSource {
    Remote(String),
    Placeholder(&'static str),
}

impl PosterSource {
    pub fn label(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Placeholder(path) => path,
        }
    }
}

pub fn poster_source(image_base: &Url, poster_path: Option<&str>) -> PosterSource {
    match poster_path.filter(|p| !p.is_empty()) {
        Some(path) => {
            let base = image_base.as_str().trim_end_matches('/');
            let path = path.trim_start_matches('/');
            PosterSource::Remote(format!("{base}/{POSTER_SIZE}/{path}"))
        }
        None => PosterSource::Placeholder(PLACEHOLDER_POSTER),
    }
}

/// One decimal place from the exact binary value, so 1.45 (stored just
/// below the half) gives "1.4". Exact ties such as 7.25 round away from zero.
pub fn one_decimal(value: f64) -> String {
    let scaled = value * 10.0;
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        return format!("{:.1}", (scaled + scaled.signum() * 0.5) / 10.0);
    }
    format!("{value:.1}")
}

/// Card rating: zero and missing both read as "N/A".
pub fn rating_label(vote_average: Option<f64>) -> String {
    vote_average
        .filter(|v| *v != 0.0 && !v.is_nan())
        .map_or_else(|| NA.to_string(), one_decimal)
}

pub fn release_year(release_date: Option<&str>) -> String {
    release_date
        .filter(|d| !d.is_empty())
        .and_then(|d| d.split('-').next())
        .map_or_else(|| NA.to_string(), str::to_string)
}

/// "$1,000,000" for positive amounts, "Not available" for 0.
pub fn money(amount: u64) -> String {
    if amount > 0 {
        format!("${}", group_thousands(amount))
    } else {
        NOT_AVAILABLE.to_string()
    }
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// A home-listing tile.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    pub rating: String,
    pub language: String,
    pub year: String,
    pub poster: PosterSource,
}

impl MovieCard {
    pub fn new(movie: &MovieSummary, image_base: &Url) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            rating: rating_label(movie.vote_average),
            language: movie.original_language.clone(),
            year: release_year(movie.release_date.as_deref()),
            poster: poster_source(image_base, movie.poster_path.as_deref()),
        }
    }

    /// Where activating this card navigates to.
    pub fn target(&self) -> String {
        movie_path(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailer {
    pub key: String,
    pub url: String,
}

/// Everything the detail screen shows, computed once per loaded record.
///
/// Language and rating stay blank when TMDB omits them; cards say "N/A" instead.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPresentation {
    pub title: String,
    pub tagline: Option<String>,
    pub release_date: String,
    pub runtime: String,
    pub language: String,
    pub rating: String,
    pub status: String,
    pub overview: String,
    pub genres: Vec<String>,
    pub companies: Vec<String>,
    pub budget: String,
    pub revenue: String,
    pub trailer: Option<Trailer>,
    pub poster: PosterSource,
}

impl DetailPresentation {
    pub fn new(movie: &MovieDetail, image_base: &Url) -> Self {
        Self {
            title: movie.title.clone(),
            tagline: movie.tagline.clone().filter(|t| !t.is_empty()),
            release_date: movie.release_date.clone().unwrap_or_default(),
            runtime: movie
                .runtime
                .map(|minutes| format!("{minutes} min"))
                .unwrap_or_default(),
            language: movie
                .original_language
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_default(),
            rating: movie.vote_average.map(one_decimal).unwrap_or_default(),
            status: movie.status.clone().unwrap_or_default(),
            overview: movie.overview.clone().unwrap_or_default(),
            genres: movie.genres.iter().map(|g| g.name.clone()).collect(),
            companies: movie
                .production_companies
                .iter()
                .map(|c| c.name.clone())
                .collect(),
            budget: money(movie.budget),
            revenue: money(movie.revenue),
            trailer: movie.trailer().map(|video| Trailer {
                key: video.key.clone(),
                url: format!("{YOUTUBE_EMBED_BASE}{}", video.key),
            }),
            poster: poster_source(image_base, movie.poster_path.as_deref()),
        }
    }

    pub fn shows_production(&self) -> bool {
        !self.companies.is_empty()
    }
}
